use crate::domain::GeoLocation;
use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    observer: GeoLocation,
    iss: Iss,
    geocode: Geocode,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("ISS_TRACKER").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn observer(&self) -> &GeoLocation {
        &self.observer
    }

    pub fn iss(&self) -> &Iss {
        &self.iss
    }

    pub fn geocode(&self) -> &Geocode {
        &self.geocode
    }
}

#[derive(Debug, Deserialize)]
pub struct Iss {
    url: String,
}

impl Iss {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Deserialize)]
pub struct Geocode {
    url: String,
    #[serde(default)]
    api_key: String,
}

impl Geocode {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                observer: GeoLocation {
                    latitude: 53.480970,
                    longitude: -2.237150,
                },
                iss: Iss {
                    url: "http://iss.url/iss-now.json".to_string(),
                },
                geocode: Geocode {
                    url: "https://geocode.url/reverse".to_string(),
                    api_key: "key".to_string(),
                },
            },
        }
    }

    pub fn iss_url(mut self, url: String) -> Self {
        self.config.iss.url = url;
        self
    }

    pub fn geocode_url(mut self, url: String) -> Self {
        self.config.geocode.url = url;
        self
    }

    pub fn geocode_api_key(mut self, api_key: &str) -> Self {
        self.config.geocode.api_key = api_key.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
