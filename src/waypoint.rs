use crate::geo_distance::distance_between;
use crate::track_reader::RawPoint;
use crate::utils::option_time_ser;

use geo::Point;
use log::debug;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    #[serde(with = "option_time_ser")]
    pub time: Option<OffsetDateTime>,
    pub point: Point,
    /// Kilometers from the track's reference point.
    pub distance: u32,
}

impl Waypoint {
    pub fn latitude(&self) -> f64 {
        self.point.y()
    }

    pub fn longitude(&self) -> f64 {
        self.point.x()
    }
}

/// `None` for a missing or unparsable timestamp.
pub fn parse_time(time: Option<&str>) -> Option<OffsetDateTime> {
    let text = time?;
    match OffsetDateTime::parse(text, &Rfc3339) {
        Ok(t) => Some(t),
        Err(e) => {
            debug!("Ignoring invalid timestamp {:?}: {}", text, e);
            None
        }
    }
}

fn is_reference(point: Point) -> bool {
    point.x() != 0.0 && point.y() != 0.0
}

/// Converts raw points into waypoints, keeping their order.
///
/// The reference point is the first point with both coordinates non-zero.
/// Every waypoint's distance is measured from that point, so it is the
/// displacement from the start of the track, not the length travelled. Points
/// before the reference get 0. With `track_distance` off every distance is 0.
pub fn build_waypoints(
    points: Vec<RawPoint>,
    track_distance: bool,
) -> Vec<Waypoint> {
    let count = points.len();
    let (_, waypoints) = points.into_iter().fold(
        (None, Vec::with_capacity(count)),
        |(reference, mut waypoints): (Option<Point>, Vec<Waypoint>), raw| {
            let reference = reference
                .or_else(|| Some(raw.point).filter(|p| is_reference(*p)));
            let distance = match reference {
                Some(r) if track_distance => distance_between(r, raw.point),
                _ => 0,
            };
            waypoints.push(Waypoint {
                time: parse_time(raw.time.as_deref()),
                point: raw.point,
                distance,
            });
            (reference, waypoints)
        },
    );
    waypoints
}

/// Most recent first. Waypoints without a timestamp go last, and the order of
/// equal timestamps is kept.
pub fn sort_by_time_descending(waypoints: &mut [Waypoint]) {
    waypoints.sort_by(|a, b| b.time.cmp(&a.time));
}
