use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

// API: https://geocode.maps.co/docs/endpoints/#reverse-geocoding
// Only the address is used. It is absent when the point has nothing to geocode, e.g. open sea.
#[derive(Debug, Deserialize)]
pub struct ReverseGet {
    #[serde(default)]
    pub address: Option<HashMap<String, Value>>,
}

impl ReverseGet {
    /// Returns the address field when it is present and a string.
    pub fn address_field(&self, key: &str) -> Option<&str> {
        self.address.as_ref()?.get(key)?.as_str()
    }
}
