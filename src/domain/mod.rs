mod bearing;
mod geo_label;
mod geo_location;
mod iss_position;

pub use bearing::{Bearing, CompassPoint};
pub use geo_label::{CITY_UNKNOWN, GeoLabel, truncate};
pub use geo_location::{GeoLocation, GeoLocationError};
pub use iss_position::IssPosition;
