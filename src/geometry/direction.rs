use crate::domain::{Bearing, CompassPoint, GeoLocation};

const FULL_CIRCLE: f64 = 360.0;
const COMPASS_SECTOR: f64 = FULL_CIRCLE / 16.0;

// 17 entries: a bearing close to 360 rounds to index 16, which is north again.
const COMPASS_BRACKETS: [CompassPoint; 17] = [
    CompassPoint::North,
    CompassPoint::NorthNorthEast,
    CompassPoint::NorthEast,
    CompassPoint::EastNorthEast,
    CompassPoint::East,
    CompassPoint::EastSouthEast,
    CompassPoint::SouthEast,
    CompassPoint::SouthSouthEast,
    CompassPoint::South,
    CompassPoint::SouthSouthWest,
    CompassPoint::SouthWest,
    CompassPoint::WestSouthWest,
    CompassPoint::West,
    CompassPoint::WestNorthWest,
    CompassPoint::NorthWest,
    CompassPoint::NorthNorthWest,
    CompassPoint::North,
];

/// Bearing from `origin` towards `destination` on a flat projection of longitude (x) against latitude (y).
pub fn bearing_between(origin: &GeoLocation, destination: &GeoLocation) -> Bearing {
    direction_lookup(destination.longitude, destination.latitude, origin.longitude, origin.latitude)
}

/// Returns the compass point and the bearing in degrees, clockwise from north.
///
/// Arguments are destination before origin, and x (longitude) before y (latitude).
pub fn direction_lookup(destination_x: f64, destination_y: f64, origin_x: f64, origin_y: f64) -> Bearing {
    let delta_x = destination_x - origin_x;
    let delta_y = destination_y - origin_y;

    let theta = delta_x.atan2(delta_y).to_degrees();
    let degrees = if theta < 0.0 { theta + FULL_CIRCLE } else { theta };

    // A tiny negative angle rounds up to a full circle, and -0 must not leak out.
    let degrees = if degrees >= FULL_CIRCLE || degrees == 0.0 { 0.0 } else { degrees };

    let index = (degrees / COMPASS_SECTOR).round_ties_even() as usize;

    Bearing {
        compass_point: COMPASS_BRACKETS[index],
        degrees,
    }
}
