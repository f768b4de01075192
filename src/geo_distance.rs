use geo::Point;

pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in whole kilometers, using the haversine formula.
///
/// A coordinate equal to exactly `0.0` means "no position", so any zero input
/// yields 0 without evaluating the formula. This also hides real distances
/// for points on the equator or the prime meridian; callers that need those
/// must avoid exact zeros.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> u32 {
    if lat1 == 0.0 || lon1 == 0.0 || lat2 == 0.0 || lon2 == 0.0 {
        return 0;
    }

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_M * c / 1000.0).round() as u32
}

pub fn distance_between(from: Point, to: Point) -> u32 {
    distance(from.y(), from.x(), to.y(), to.x())
}
