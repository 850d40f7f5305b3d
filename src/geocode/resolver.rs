use crate::app_config::AppConfig;
use crate::domain::{CITY_UNKNOWN, GeoLabel, GeoLocation, truncate};
use crate::geocode::reverse_get::ReverseGet;
use reqwest::Client;
use tracing::{info, instrument, warn};

/// Address fields that can stand in for the city, most specific first.
const CITY_FALLBACKS: [&str; 3] = ["city", "suburb", "state"];

/// Resolves the place beneath `location`. Never fails: anything that cannot be resolved degrades to the default label.
#[instrument(skip(client, config))]
pub async fn resolve(client: &Client, config: &AppConfig, location: &GeoLocation) -> GeoLabel {
    info!("🌍 Reverse geocoding...");

    match reverse_geocode(client, config, location).await {
        Ok(reverse) => {
            let label = label_from(&reverse);
            info!(country = %label.country, city = %label.city, "🌍 Reverse geocoding... OK");
            label
        }
        Err(err) => {
            warn!("⚠️ Reverse geocoding failed: {}", err);
            GeoLabel::default()
        }
    }
}

async fn reverse_geocode(client: &Client, config: &AppConfig, location: &GeoLocation) -> Result<ReverseGet, reqwest::Error> {
    client
        .get(config.geocode().url())
        .query(&[
            ("lat", location.latitude.to_string()),
            ("lon", location.longitude.to_string()),
            ("api_key", config.geocode().api_key().to_string()),
        ])
        .send()
        .await?
        .error_for_status()?
        .json::<ReverseGet>()
        .await
}

pub fn label_from(reverse: &ReverseGet) -> GeoLabel {
    let Some(country) = reverse.address_field("country") else {
        return GeoLabel::default();
    };

    let mut label = GeoLabel::new(country, CITY_UNKNOWN);

    if label.is_ocean() {
        return label;
    }

    if let Some(city) = CITY_FALLBACKS.iter().find_map(|key| reverse.address_field(key)) {
        label.city = truncate(city);
    }

    label
}
