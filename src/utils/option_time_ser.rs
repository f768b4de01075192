use serde::{Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Serializes as an RFC 3339 string, or `null` when the time is unknown.
pub fn serialize<S: Serializer>(
    time: &Option<OffsetDateTime>,
    s: S,
) -> Result<S::Ok, S::Error> {
    let time_str = match time {
        Some(t) => Some(t.format(&Rfc3339).map_err(serde::ser::Error::custom)?),
        None => None,
    };
    time_str.serialize(s)
}
