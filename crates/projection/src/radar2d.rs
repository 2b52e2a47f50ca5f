//! Flat-earth radar polar coordinates.
//!
//! Grid tuples are `(range_index, azimuth_index)`; reference tuples are
//! `(latitude, longitude)` in degrees. Azimuth 0 points north and increases
//! clockwise.

use std::fmt;

use num_traits::Float;
use radar_common::{AxisScale, RadarResult};

use crate::earth::{LocalScales, RadarSite};
use crate::transform::{check_tuples, narrow, widen, CoordinateSystem, CoordinateSystemKind};

/// 2D (range, azimuth) ⇄ (latitude, longitude) transform around a site.
#[derive(Debug, Clone, PartialEq)]
pub struct Radar2DCoordinateSystem {
    site: RadarSite,
    range: AxisScale,
    azimuth: AxisScale,
    scales: LocalScales,
}

impl Radar2DCoordinateSystem {
    /// Create a transform with explicit range (meters) and azimuth (degrees)
    /// scales.
    pub fn new(site: RadarSite, range: AxisScale, azimuth: AxisScale) -> Self {
        Self {
            site,
            range,
            azimuth,
            scales: LocalScales::at(site.latitude),
        }
    }

    /// Unit scales: grid range is meters, grid azimuth is degrees.
    pub fn centered(latitude: f64, longitude: f64) -> Self {
        Self::new(
            RadarSite::at_sea_level(latitude, longitude),
            AxisScale::unit(),
            AxisScale::unit(),
        )
    }

    pub fn center(&self) -> RadarSite {
        self.site
    }

    pub fn range_parameters(&self) -> AxisScale {
        self.range
    }

    pub fn azimuth_parameters(&self) -> AxisScale {
        self.azimuth
    }

    /// Geodetic position of a point `ground_range_m` meters from the site
    /// along `azimuth_deg`.
    #[inline]
    pub(crate) fn project(&self, ground_range_m: f64, azimuth_deg: f64) -> (f64, f64) {
        let (sin_az, cos_az) = azimuth_deg.to_radians().sin_cos();
        (
            self.site.latitude + cos_az * ground_range_m / self.scales.lat_scale,
            self.site.longitude + sin_az * ground_range_m / self.scales.lon_scale,
        )
    }

    /// North and east offsets from the site in meters.
    #[inline]
    pub(crate) fn offsets(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        (
            (latitude - self.site.latitude) * self.scales.lat_scale,
            (longitude - self.site.longitude) * self.scales.lon_scale,
        )
    }

    /// Azimuth index for the offsets, never negative.
    #[inline]
    pub(crate) fn azimuth_index(&self, north: f64, east: f64) -> f64 {
        let index = self.azimuth.index_of(east.atan2(north).to_degrees());
        if index < 0.0 {
            index.rem_euclid(360.0 / self.azimuth.resolution)
        } else {
            index
        }
    }

    fn forward<T: Float>(&self, tuples: &mut [Vec<T>]) -> RadarResult<()> {
        check_tuples(tuples, 2)?;
        let (first, rest) = tuples.split_at_mut(1);

        for (r, a) in first[0].iter_mut().zip(rest[0].iter_mut()) {
            let rad = self.range.value_at(widen(*r));
            if rad < 0.0 {
                *r = T::nan();
                *a = T::nan();
                continue;
            }
            let (lat, lon) = self.project(rad, self.azimuth.value_at(widen(*a)));
            *r = narrow(lat);
            *a = narrow(lon);
        }
        Ok(())
    }

    fn inverse<T: Float>(&self, tuples: &mut [Vec<T>]) -> RadarResult<()> {
        check_tuples(tuples, 2)?;
        let (first, rest) = tuples.split_at_mut(1);

        for (lat, lon) in first[0].iter_mut().zip(rest[0].iter_mut()) {
            let (north, east) = self.offsets(widen(*lat), widen(*lon));
            let ground = north.hypot(east);
            *lat = narrow(self.range.index_of(ground));
            *lon = narrow(self.azimuth_index(north, east));
        }
        Ok(())
    }
}

impl CoordinateSystem for Radar2DCoordinateSystem {
    fn kind(&self) -> CoordinateSystemKind {
        CoordinateSystemKind::RadarPolar2D
    }

    fn to_reference(&self, tuples: &mut [Vec<f64>]) -> RadarResult<()> {
        self.forward(tuples)
    }

    fn from_reference(&self, tuples: &mut [Vec<f64>]) -> RadarResult<()> {
        self.inverse(tuples)
    }

    fn to_reference_f32(&self, tuples: &mut [Vec<f32>]) -> RadarResult<()> {
        self.forward(tuples)
    }

    fn from_reference_f32(&self, tuples: &mut [Vec<f32>]) -> RadarResult<()> {
        self.inverse(tuples)
    }
}

impl fmt::Display for Radar2DCoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Radar2D center ({}, {}) range {} + {} * i azimuth {} + {} * j",
            self.site.latitude,
            self.site.longitude,
            self.range.low,
            self.range.resolution,
            self.azimuth.low,
            self.azimuth.resolution
        )
    }
}
