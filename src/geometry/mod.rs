mod direction;
mod haversine;

pub use direction::bearing_between;
pub use haversine::{haversine, whole_miles};
