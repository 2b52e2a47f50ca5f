//! Configuration for the radial decoder.

use serde::{Deserialize, Serialize};

/// Configuration for the radial decoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Maximum number of sample bytes kept per radial.
    pub max_radial_bytes: usize,

    /// Range resolution used when the file has no `RNGRES:` line (meters).
    pub default_range_resolution_m: f64,

    /// Start range used when the file has no `STARTRNG:` line (meters).
    pub default_start_range_m: f64,

    /// Azimuth resolution of the sweep (degrees).
    pub default_azimuth_resolution_deg: f64,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_radial_bytes: 1024,
            default_range_resolution_m: 250.0,
            default_start_range_m: 4000.0,
            default_azimuth_resolution_deg: 1.0,
        }
    }
}

impl DecoderConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("RADAR_MAX_RADIAL_BYTES") {
            if let Ok(size) = val.parse() {
                config.max_radial_bytes = size;
            }
        }

        if let Ok(val) = std::env::var("RADAR_DEFAULT_RANGE_RES_M") {
            if let Ok(res) = val.parse() {
                config.default_range_resolution_m = res;
            }
        }

        if let Ok(val) = std::env::var("RADAR_DEFAULT_START_RANGE_M") {
            if let Ok(start) = val.parse() {
                config.default_start_range_m = start;
            }
        }

        if let Ok(val) = std::env::var("RADAR_DEFAULT_AZIMUTH_RES_DEG") {
            if let Ok(res) = val.parse() {
                config.default_azimuth_resolution_deg = res;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_radial_bytes < 2 {
            return Err("max_radial_bytes must be >= 2".to_string());
        }

        if !(self.default_range_resolution_m.is_finite() && self.default_range_resolution_m > 0.0)
        {
            return Err("default_range_resolution_m must be > 0".to_string());
        }

        if !(self.default_azimuth_resolution_deg.is_finite()
            && self.default_azimuth_resolution_deg > 0.0)
        {
            return Err("default_azimuth_resolution_deg must be > 0".to_string());
        }

        Ok(())
    }
}
