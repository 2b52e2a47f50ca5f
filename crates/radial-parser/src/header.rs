//! Sweep header metadata.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use radar_common::{parse_timestamp, RadarError};
use serde::{Deserialize, Serialize};

use crate::config::DecoderConfig;
use crate::tables::{classify_key, HeaderKey};

/// Scalar metadata accumulated from the header lines of a sweep.
///
/// Fields that never appear in the file keep the defaults from
/// [`DecoderConfig`] (250 m range resolution, 4000 m start range,
/// 1° azimuth resolution, 0° elevation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepHeader {
    /// Distance between adjacent gates (meters)
    pub range_resolution_m: f64,
    /// Distance from the radar to the first gate (meters)
    pub start_range_m: f64,
    /// Angular spacing between radials (degrees)
    pub azimuth_resolution_deg: f64,
    /// Antenna elevation angle of the sweep (degrees)
    pub elevation_deg: f64,
    /// Sweep time, from `TIMESTAMP:`
    pub timestamp: Option<DateTime<Utc>>,
    /// Every other recognised header value, verbatim
    pub attributes: BTreeMap<String, String>,
}

impl Default for SweepHeader {
    fn default() -> Self {
        Self::from_config(&DecoderConfig::default())
    }
}

impl SweepHeader {
    pub fn from_config(config: &DecoderConfig) -> Self {
        Self {
            range_resolution_m: config.default_range_resolution_m,
            start_range_m: config.default_start_range_m,
            azimuth_resolution_deg: config.default_azimuth_resolution_deg,
            elevation_deg: 0.0,
            timestamp: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Station identifier (`STNID:`), if present.
    pub fn station_id(&self) -> Option<&str> {
        self.attribute("STNID")
    }

    /// Station name (`NAME:`), if present.
    pub fn station_name(&self) -> Option<&str> {
        self.attribute("NAME")
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Apply one `KEY: value` pair.
    ///
    /// Returns `Ok(false)` when the key is not part of the format, and a
    /// [`RadarError::Parse`] when a recognised key has a malformed value.
    /// On error the field keeps its previous value.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<bool, RadarError> {
        let Some(kind) = classify_key(key) else {
            return Ok(false);
        };

        match kind {
            HeaderKey::Timestamp => {
                self.timestamp = Some(parse_timestamp(value)?);
            }
            HeaderKey::RangeResolution => {
                self.range_resolution_m = parse_number(key, value)?;
            }
            HeaderKey::StartRange => {
                self.start_range_m = parse_number(key, value)?;
            }
            HeaderKey::Elevation => {
                self.elevation_deg = parse_number(key, value)?;
            }
            HeaderKey::Informational => {}
        }

        self.attributes.insert(key.to_string(), value.to_string());
        Ok(true)
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, RadarError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| RadarError::parse(format!("{} value '{}': {}", key, value, e)))
}

/// Split a header line into `(key, value)` at the first colon.
pub fn split_header_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let header = SweepHeader::default();
        assert_eq!(header.range_resolution_m, 250.0);
        assert_eq!(header.start_range_m, 4000.0);
        assert_eq!(header.azimuth_resolution_deg, 1.0);
        assert!(header.timestamp.is_none());
    }

    #[test]
    fn test_apply_behavioural_keys() {
        let mut header = SweepHeader::default();
        assert!(header.apply("RNGRES", "500").unwrap());
        assert!(header.apply("STARTRNG", "2000").unwrap());
        assert!(header.apply("ELEV", "0.5").unwrap());
        assert!(header.apply("TIMESTAMP", "19991231235959").unwrap());

        assert_eq!(header.range_resolution_m, 500.0);
        assert_eq!(header.start_range_m, 2000.0);
        assert_eq!(header.elevation_deg, 0.5);
        assert!(header.timestamp.is_some());
        assert_eq!(header.attribute("RNGRES"), Some("500"));
    }

    #[test]
    fn test_apply_informational_key() {
        let mut header = SweepHeader::default();
        assert!(header.apply("NAME", "Melbourne").unwrap());
        assert!(header.apply("STNID", "02").unwrap());
        assert_eq!(header.station_name(), Some("Melbourne"));
        assert_eq!(header.station_id(), Some("02"));
    }

    #[test]
    fn test_apply_unknown_key() {
        let mut header = SweepHeader::default();
        assert!(!header.apply("FROBNICATE", "1").unwrap());
        assert!(header.attributes.is_empty());
    }

    #[test]
    fn test_malformed_value_keeps_previous() {
        let mut header = SweepHeader::default();
        assert!(header.apply("RNGRES", "fast").is_err());
        assert_eq!(header.range_resolution_m, 250.0);
        assert!(header.apply("TIMESTAMP", "2001").is_err());
        assert!(header.timestamp.is_none());
    }

    #[test]
    fn test_split_header_line() {
        assert_eq!(split_header_line("RNGRES: 250"), Some(("RNGRES", "250")));
        assert_eq!(split_header_line("TIME: 12:30"), Some(("TIME", "12:30")));
        assert_eq!(split_header_line("no colon here"), None);
    }
}
