use crate::domain::{Bearing, GeoLabel, GeoLocation};
use crate::geometry::{bearing_between, haversine, whole_miles};
use std::fmt::{Display, Formatter};

/// Where the ISS is as seen from the observer.
#[derive(Debug, PartialEq)]
pub struct Report {
    distance_mi: i64,
    label: GeoLabel,
    bearing: Bearing,
}

impl Report {
    pub fn new(observer: &GeoLocation, iss: &GeoLocation, label: GeoLabel) -> Self {
        Report {
            distance_mi: whole_miles(haversine(observer, iss)),
            label,
            bearing: bearing_between(observer, iss),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ISS distance from your location is: {} mi", self.distance_mi)?;
        writeln!(f, "Country: {}", self.label.country)?;
        writeln!(f, "Nearest city: {}", self.label.city)?;
        write!(f, "Viewing direction: {} (Bearing: {})", self.bearing.compass_point, format_degrees(self.bearing.degrees))
    }
}

/// Shortest round-trip form with the fraction kept on whole degrees ("90.0") and at least two exponent digits ("1e-07").
fn format_degrees(degrees: f64) -> String {
    let debug = format!("{:?}", degrees);
    match debug.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => {
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            Err(_) => debug,
        },
        None => debug,
    }
}
