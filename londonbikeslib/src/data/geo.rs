//! Great-circle distance on a spherical Earth.

use super::station::Coordinate;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Distance in metres between two coordinates along the Earth's surface.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_M`]:
///
/// ```text
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
/// d = 2·R·asin(√a)
/// ```
///
/// NaN or infinite inputs are not special-cased and yield NaN.
pub fn great_circle_distance(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for near-antipodal points.
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_M * a.sqrt().asin()
}
