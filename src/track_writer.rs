use crate::error::Result;
use crate::waypoint::Waypoint;

use gpx::{Gpx, GpxVersion, Track, TrackSegment};

use std::io::Write;

const CREATOR: &str = "gpx-splitter";

/// One track with a single segment holding one point per waypoint.
pub fn to_gpx(waypoints: &[Waypoint], include_time: bool) -> Gpx {
    let mut segment = TrackSegment::new();
    segment.points = waypoints
        .iter()
        .map(|wp| {
            let mut result = gpx::Waypoint::new(wp.point);
            if include_time {
                result.time = wp.time.map(|t| t.into());
            }
            result
        })
        .collect();

    let mut track = Track::new();
    track.segments = vec![segment];

    let mut result = Gpx::default();
    result.version = GpxVersion::Gpx11;
    result.creator = Some(CREATOR.to_string());
    result.tracks = vec![track];
    result
}

pub fn write_track<W: Write>(
    waypoints: &[Waypoint],
    include_time: bool,
    writer: W,
) -> Result<()> {
    gpx::write(&to_gpx(waypoints, include_time), writer)?;
    Ok(())
}

pub fn render_track(
    waypoints: &[Waypoint],
    include_time: bool,
) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    write_track(waypoints, include_time, &mut data)?;
    Ok(data)
}
