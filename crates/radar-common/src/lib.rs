//! Common types and utilities shared across the radar sweep crates.

pub mod error;
pub mod scale;
pub mod time;

pub use error::{RadarError, RadarResult};
pub use scale::AxisScale;
pub use time::{parse_timestamp, TIMESTAMP_LEN};
