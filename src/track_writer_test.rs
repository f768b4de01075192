use super::track_reader::parse_track;
use super::track_writer::{render_track, to_gpx};
use crate::assert_eq_pretty;
use crate::error::ErrorType;
use crate::utils::test_util::{init, wp, Init};
use crate::waypoint::{build_waypoints, Waypoint};

use rstest::{fixture, rstest};
use time::macros::datetime;

#[fixture]
fn waypoints() -> Vec<Waypoint> {
    vec![
        wp(47.4979, 19.0402, Some(datetime!(2024-05-01 10:02 UTC)), 3),
        wp(47.5012, 19.0467, None, 2),
        wp(-33.8688, 151.2093, Some(datetime!(2024-05-01 10:00 UTC)), 0),
    ]
}

#[rstest]
fn single_track_and_segment(waypoints: Vec<Waypoint>) {
    let gpx = to_gpx(&waypoints, true);
    assert_eq!(gpx.tracks.len(), 1);
    assert_eq!(gpx.tracks[0].segments.len(), 1);
    let points = &gpx.tracks[0].segments[0].points;
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].point(), waypoints[0].point);
    assert!(points[0].time.is_some());
    assert!(points[1].time.is_none());
}

#[rstest]
fn without_time(waypoints: Vec<Waypoint>) {
    let gpx = to_gpx(&waypoints, false);
    assert!(gpx.tracks[0].segments[0]
        .points
        .iter()
        .all(|p| p.time.is_none()));
}

#[rstest]
fn round_trip_with_time(_init: Init, waypoints: Vec<Waypoint>) {
    let data = render_track(&waypoints, true).unwrap();
    let parsed = build_waypoints(parse_track(&data).unwrap(), false);
    let expected: Vec<Waypoint> = waypoints
        .iter()
        .map(|w| Waypoint {
            distance: 0,
            ..w.clone()
        })
        .collect();
    assert_eq_pretty!(parsed, expected);
}

#[rstest]
fn round_trip_coordinates_only(_init: Init, waypoints: Vec<Waypoint>) {
    let data = render_track(&waypoints, false).unwrap();
    let text = String::from_utf8(data.clone()).unwrap();
    assert!(!text.contains("<time>"), "{}", text);

    let parsed = parse_track(&data).unwrap();
    let actual: Vec<(f64, f64)> = parsed
        .iter()
        .map(|p| (p.latitude(), p.longitude()))
        .collect();
    let expected: Vec<(f64, f64)> = waypoints
        .iter()
        .map(|w| (w.latitude(), w.longitude()))
        .collect();
    assert_eq_pretty!(actual, expected);
    assert!(parsed.iter().all(|p| p.time.is_none()));
}

#[rstest]
fn well_formed_and_indented(waypoints: Vec<Waypoint>) {
    let text =
        String::from_utf8(render_track(&waypoints, true).unwrap()).unwrap();
    assert!(text.contains("<trkseg>"), "{}", text);
    assert!(text.contains("lat=\"47.4979\""), "{}", text);
    assert!(text.contains("lon=\"151.2093\""), "{}", text);
    assert!(text.lines().count() > waypoints.len(), "{}", text);
}

#[rstest]
fn unformattable_time_is_encoding_error(mut waypoints: Vec<Waypoint>) {
    // GPX times carry at most minute precision in their offset.
    let offset = time::UtcOffset::from_hms(1, 0, 30).unwrap();
    waypoints[1].time =
        Some(datetime!(2024-05-01 10:01 UTC).to_offset(offset));

    let err = render_track(&waypoints, true).unwrap_err();
    assert_eq!(err.get_type(), ErrorType::EncodingError, "{}", err);
    assert!(render_track(&waypoints, false).is_ok());
}
