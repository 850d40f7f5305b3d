use crate::app_config::AppConfig;
use crate::report::Report;
use tracing::{error, info};

mod app_config;
mod client;
mod domain;
mod geo_location_deserializer;
mod geocode;
mod geometry;
mod open_notify;
mod report;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).with_writer(std::io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().inspect_err(|e| error!("❌ Could not load configuration: {}", e))?;
    info!("✅  Loaded configuration");

    let client = client::new_client().inspect_err(|e| error!("❌ Could not create the HTTP client: {}", e))?;

    let position = open_notify::fetch_position(&client, &config)
        .await
        .inspect_err(|e| error!("❌ Could not retrieve the ISS position: {}", e))?;

    let label = geocode::resolve(&client, &config, &position.location).await;

    let report = Report::new(config.observer(), &position.location, label);
    println!("{}", report);

    Ok(())
}
