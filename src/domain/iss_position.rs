use crate::domain::GeoLocation;
use chrono::{DateTime, Utc};

/// The ISS sub-point, valid only for the instant it was reported at.
#[derive(Clone, Debug, PartialEq)]
pub struct IssPosition {
    pub location: GeoLocation,
    pub timestamp: Option<DateTime<Utc>>,
}
