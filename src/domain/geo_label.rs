pub const OCEAN_COUNTRY: &str = "Ocean";
pub const CITY_UNKNOWN: &str = "Unknown City";

/// Maximum number of characters kept from a country or city name.
pub const MAX_LABEL_LENGTH: usize = 13;

/// Human-readable place beneath a coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeoLabel {
    pub country: String,
    pub city: String,
}

impl GeoLabel {
    pub fn new(country: &str, city: &str) -> Self {
        GeoLabel {
            country: truncate(country),
            city: truncate(city),
        }
    }

    /// "Ocean" doubles as the marker for "no land found".
    pub fn is_ocean(&self) -> bool {
        self.country == OCEAN_COUNTRY
    }
}

impl Default for GeoLabel {
    fn default() -> Self {
        GeoLabel {
            country: OCEAN_COUNTRY.to_string(),
            city: CITY_UNKNOWN.to_string(),
        }
    }
}

pub fn truncate(value: &str) -> String {
    value.chars().take(MAX_LABEL_LENGTH).collect()
}
