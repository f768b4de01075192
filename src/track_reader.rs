use crate::error::{Error, ErrorType, Result};

use geo::{point, Point};
use log::warn;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// A track point as it appears in the document, before any interpretation of
/// its timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPoint {
    pub point: Point,
    pub time: Option<String>,
}

impl RawPoint {
    pub fn latitude(&self) -> f64 {
        self.point.y()
    }

    pub fn longitude(&self) -> f64 {
        self.point.x()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Position {
    Other,
    Track,
    Segment,
    Point,
    Time,
}

#[derive(Default)]
struct Skipped {
    tracks: usize,
    segments: usize,
}

#[derive(Default)]
struct TrackParser {
    stack: Vec<Position>,
    root_seen: bool,
    track_done: bool,
    segment_done: bool,
    current: Option<RawPoint>,
    time_text: String,
    skipped: Skipped,
    points: Vec<RawPoint>,
}

impl TrackParser {
    fn start(&mut self, e: &BytesStart, empty: bool) -> Result<()> {
        self.root_seen = true;
        let parent = self.stack.last().copied();
        let next = match (self.stack.len(), parent, e.local_name().as_ref()) {
            (1, _, b"trk") => {
                if self.track_done {
                    self.skipped.tracks += 1;
                    Position::Other
                } else {
                    Position::Track
                }
            }
            (_, Some(Position::Track), b"trkseg") => {
                if self.segment_done {
                    self.skipped.segments += 1;
                    Position::Other
                } else {
                    Position::Segment
                }
            }
            (_, Some(Position::Segment), b"trkpt") => {
                self.current = Some(RawPoint {
                    point: parse_coordinates(e)?,
                    time: None,
                });
                Position::Point
            }
            (_, Some(Position::Point), b"time") => {
                self.time_text.clear();
                Position::Time
            }
            _ => Position::Other,
        };

        if empty {
            self.finish(next);
        } else {
            self.stack.push(next);
        }
        Ok(())
    }

    fn end(&mut self) {
        if let Some(position) = self.stack.pop() {
            self.finish(position);
        }
    }

    fn finish(&mut self, position: Position) {
        match position {
            Position::Time => {
                if let Some(current) = self.current.as_mut() {
                    current.time = Some(self.time_text.trim().to_string());
                }
            }
            Position::Point => {
                if let Some(current) = self.current.take() {
                    self.points.push(current);
                }
            }
            Position::Segment => self.segment_done = true,
            Position::Track => self.track_done = true,
            Position::Other => (),
        }
    }

    fn text(&mut self, text: &str) {
        if self.stack.last() == Some(&Position::Time) {
            self.time_text.push_str(text);
        }
    }
}

fn parse_coordinate(name: &str, value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|e| {
        Error::convert(
            ErrorType::ParseError,
            &format!("invalid {} value {:?}", name, value),
            &e,
        )
    })
}

fn parse_coordinates(e: &BytesStart) -> Result<Point> {
    let mut lat = None;
    let mut lon = None;
    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.local_name().as_ref() {
            b"lat" => {
                lat = Some(parse_coordinate("lat", &attr.unescape_value()?)?)
            }
            b"lon" => {
                lon = Some(parse_coordinate("lon", &attr.unescape_value()?)?)
            }
            _ => (),
        }
    }

    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(point! { x: lon, y: lat }),
        (None, _) => Err(Error::new_s(
            ErrorType::ParseError,
            "trkpt without lat attribute",
        )),
        (_, None) => Err(Error::new_s(
            ErrorType::ParseError,
            "trkpt without lon attribute",
        )),
    }
}

/// Reads the points of the first segment of the first track in a GPX
/// document, in document order.
pub fn parse_track(data: &[u8]) -> Result<Vec<RawPoint>> {
    let mut reader = Reader::from_reader(data);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut parser = TrackParser::default();

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| {
            Error::convert(
                ErrorType::ParseError,
                &format!("error at position {}", reader.buffer_position()),
                &e,
            )
        })?;
        match event {
            Event::Start(ref e) => parser.start(e, false)?,
            Event::Empty(ref e) => parser.start(e, true)?,
            Event::End(_) => parser.end(),
            Event::Text(ref e) => parser.text(&e.unescape()?),
            Event::CData(ref e) => parser.text(&String::from_utf8_lossy(&**e)),
            Event::Eof => break,
            _ => (),
        }
        buf.clear();
    }

    if !parser.root_seen {
        return Err(Error::new_s(
            ErrorType::ParseError,
            "document has no root element",
        ));
    }
    if !parser.stack.is_empty() {
        return Err(Error::new(
            ErrorType::ParseError,
            format!(
                "document ends with {} unclosed elements",
                parser.stack.len()
            ),
        ));
    }

    if parser.skipped.tracks > 0 {
        warn!("Ignoring {} additional tracks", parser.skipped.tracks);
    }
    if parser.skipped.segments > 0 {
        warn!(
            "Ignoring {} additional segments of the first track",
            parser.skipped.segments
        );
    }

    Ok(parser.points)
}
