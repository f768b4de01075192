use crate::track_reader::RawPoint;
use crate::waypoint::Waypoint;

use geo::point;
use rstest::fixture;
use simplelog::{Config, LevelFilter, SimpleLogger};
use time::OffsetDateTime;

pub fn raw(lat: f64, lon: f64, time: Option<&str>) -> RawPoint {
    RawPoint {
        point: point! { x: lon, y: lat },
        time: time.map(|t| t.to_string()),
    }
}

pub fn wp(
    lat: f64,
    lon: f64,
    time: Option<OffsetDateTime>,
    distance: u32,
) -> Waypoint {
    Waypoint {
        time,
        point: point! { x: lon, y: lat },
        distance,
    }
}

/// Builds a GPX 1.1 document with one track and one segment.
pub fn gpx_document(points: &[(f64, f64, Option<&str>)]) -> String {
    let mut result = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <gpx version=\"1.1\" creator=\"test\" \
         xmlns=\"http://www.topografix.com/GPX/1/1\">\n\
         <trk><name>test</name><trkseg>\n",
    );
    for (lat, lon, time) in points {
        match time {
            Some(t) => result.push_str(&format!(
                "<trkpt lat=\"{}\" lon=\"{}\"><ele>10.0</ele><time>{}</time></trkpt>\n",
                lat, lon, t
            )),
            None => result.push_str(&format!(
                "<trkpt lat=\"{}\" lon=\"{}\"/>\n",
                lat, lon
            )),
        }
    }
    result.push_str("</trkseg></trk>\n</gpx>\n");
    result
}

/// `count` points heading north, one minute apart, starting at 10:00 UTC.
pub fn northbound_track(count: usize) -> String {
    let start = time::macros::datetime!(2024-05-01 10:00 UTC);
    let points: Vec<(f64, f64, String)> = (0..count)
        .map(|i| {
            let t = start + time::Duration::minutes(i as i64);
            (
                45.0 + i as f64 * 0.001,
                7.5,
                t.format(&time::format_description::well_known::Rfc3339)
                    .unwrap(),
            )
        })
        .collect();
    let borrowed: Vec<(f64, f64, Option<&str>)> = points
        .iter()
        .map(|(lat, lon, t)| (*lat, *lon, Some(t.as_str())))
        .collect();
    gpx_document(&borrowed)
}

pub struct Init;

#[fixture]
pub fn init() -> Init {
    match SimpleLogger::init(LevelFilter::Trace, Config::default()) {
        Ok(()) => (),
        Err(_) => (),
    }
    Init {}
}

#[macro_export]
macro_rules! assert_eq_pretty {
    ($left:expr, $right:expr) => {
        match (&$left, &$right) {
            (left, right) => {
                assert_eq!(left, right, "\n{:#?}\n{:#?}", left, right)
            }
        }
    };
}

pub use assert_eq_pretty;

#[test]
fn assert_eq_pretty_takes_ownership_once() {
    let mut calls = 0;
    let mut build = |v: Vec<u32>| {
        calls += 1;
        v
    };
    let input = vec![1, 2];
    assert_eq_pretty!(build(input), vec![1, 2]);
    assert_eq!(calls, 1);
}
