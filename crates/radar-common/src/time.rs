//! Time handling for sweep headers.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::error::RadarError;

/// Length of a `YYYYMMDDHHMMSS` timestamp.
pub const TIMESTAMP_LEN: usize = 14;

/// Parse a sweep `TIMESTAMP:` value (`YYYYMMDDHHMMSS`, UTC).
///
/// Surrounding whitespace is ignored; anything other than exactly fourteen
/// digits describing a real calendar instant is a [`RadarError::Parse`].
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, RadarError> {
    let s = s.trim();

    if s.len() != TIMESTAMP_LEN || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RadarError::parse(format!(
            "timestamp '{}' is not a {}-digit YYYYMMDDHHMMSS value",
            s, TIMESTAMP_LEN
        )));
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y%m%d%H%M%S")
        .map_err(|e| RadarError::parse(format!("timestamp '{}': {}", s, e)))?;

    Ok(Utc.from_utc_datetime(&naive))
}
