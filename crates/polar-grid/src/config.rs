//! Configuration for grid building and sweep loading.

use radial_parser::DecoderConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the polar grid builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridBuilderConfig {
    /// How two radials that land in the same azimuth bin are resolved.
    pub collision_policy: CollisionPolicy,
}

impl GridBuilderConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("RADAR_COLLISION_POLICY") {
            config.collision_policy = CollisionPolicy::from_str(&val);
        }

        config
    }
}

/// Rule for radials whose azimuths fall into the same bin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionPolicy {
    /// The radial that arrived last in the file wins.
    #[default]
    LastArrival,
    /// The radial whose azimuth is closest to the bin's nominal azimuth
    /// wins; ties go to the later arrival.
    NearestBinCenter,
}

impl CollisionPolicy {
    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "last" | "last_arrival" => Self::LastArrival,
            "nearest" | "nearest_bin_center" => Self::NearestBinCenter,
            _ => Self::LastArrival,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastArrival => "last_arrival",
            Self::NearestBinCenter => "nearest_bin_center",
        }
    }
}

impl std::fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything needed to turn a sweep file into a navigated grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdapterConfig {
    pub decoder: DecoderConfig,
    pub builder: GridBuilderConfig,
}

impl AdapterConfig {
    /// Load both sections from environment variables.
    pub fn from_env() -> Self {
        Self {
            decoder: DecoderConfig::from_env(),
            builder: GridBuilderConfig::from_env(),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.decoder.validate()
    }
}
