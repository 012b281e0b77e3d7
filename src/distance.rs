//! Distance functions.
//!
//! Edge weights use plain Euclidean distance on raw degrees. This ignores
//! projection distortion but is what route selection has always been based
//! on, so it stays. Haversine is only used to report approximate walking
//! lengths.

use crate::model::Point;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Planar distance between two coordinates, in degrees.
pub fn euclidean(from: Point, to: Point) -> f64 {
    (to.latitude - from.latitude).hypot(to.longitude - from.longitude)
}

/// Great-circle distance between two coordinates in kilometers.
pub fn haversine_km(from: Point, to: Point) -> f64 {
    let half_dlat = (to.latitude - from.latitude).to_radians() / 2.0;
    let half_dlng = (to.longitude - from.longitude).to_radians() / 2.0;
    let h = half_dlat.sin().powi(2)
        + from.latitude.to_radians().cos() * to.latitude.to_radians().cos() * half_dlng.sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}
