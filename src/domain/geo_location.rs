use thiserror::Error;

/// A point on the earth's surface in decimal degrees.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoLocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoLocationError::InvalidLatitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoLocationError::InvalidLongitude(longitude));
        }

        Ok(GeoLocation { latitude, longitude })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum GeoLocationError {
    #[error("invalid location latitude: {0}, must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("invalid location longitude: {0}, must be between -180 and 180")]
    InvalidLongitude(f64),
}
