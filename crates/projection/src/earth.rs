//! Spherical earth constants and radar site location.

use serde::{Deserialize, Serialize};

/// Length of one degree of latitude (meters).
pub const METERS_PER_DEGREE: f64 = 111_137.0;

/// Radius of the spherical earth implied by [`METERS_PER_DEGREE`]:
/// `METERS_PER_DEGREE * 180 / π` (about 6 367 681 m).
pub const EARTH_RADIUS_METERS: f64 = METERS_PER_DEGREE * 180.0 / std::f64::consts::PI;

/// Geodetic position of a radar antenna.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarSite {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Antenna altitude in meters
    pub altitude: f64,
}

impl RadarSite {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Site at sea level.
    pub fn at_sea_level(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, 0.0)
    }
}

/// Precomputed flat-earth scale factors around a site.
///
/// `lat_scale` converts degrees of latitude to meters; `lon_scale` does the
/// same for longitude at the site latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LocalScales {
    pub cos_center_lat: f64,
    pub lon_scale: f64,
    pub lat_scale: f64,
}

impl LocalScales {
    pub fn at(latitude: f64) -> Self {
        let cos_center_lat = latitude.to_radians().cos();
        Self {
            cos_center_lat,
            lon_scale: METERS_PER_DEGREE * cos_center_lat,
            lat_scale: METERS_PER_DEGREE,
        }
    }
}
