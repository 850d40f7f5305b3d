use crate::domain::GeoLocation;

pub const EARTH_RADIUS_MI: f64 = 3956.0;

/// Great-circle distance in miles between two points, using the haversine formula.
pub fn haversine(from: &GeoLocation, to: &GeoLocation) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lon1 = from.longitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let lon2 = to.longitude.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    c * EARTH_RADIUS_MI
}

/// Distance rounded to whole miles, ties to even.
pub fn whole_miles(miles: f64) -> i64 {
    miles.round_ties_even() as i64
}
