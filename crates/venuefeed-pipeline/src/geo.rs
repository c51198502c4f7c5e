use venuefeed_core::{Coordinates, Position};

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between a user position and a venue
/// (haversine formula).
#[must_use]
pub fn haversine_meters(from: Position, to: Coordinates) -> f64 {
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (d_lon / 2.0).sin().powi(2);

    // Clamp: rounding can push `a` a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_METERS * a.sqrt().min(1.0).asin()
}
