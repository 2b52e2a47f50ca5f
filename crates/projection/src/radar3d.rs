//! Radar polar coordinates with beam elevation and earth curvature.
//!
//! Grid tuples are `(range_index, azimuth_index, elevation_index)`;
//! reference tuples are `(latitude, longitude, altitude)` with altitude in
//! meters. The beam travels in a straight line over a spherical earth of
//! radius [`EARTH_RADIUS_METERS`] raised to the site altitude.

use std::fmt;

use num_traits::Float;
use radar_common::{AxisScale, RadarResult};

use crate::earth::{RadarSite, EARTH_RADIUS_METERS};
use crate::radar2d::Radar2DCoordinateSystem;
use crate::transform::{check_tuples, narrow, widen, CoordinateSystem, CoordinateSystemKind};

/// 3D (range, azimuth, elevation) ⇄ (latitude, longitude, altitude)
/// transform around a site.
#[derive(Debug, Clone, PartialEq)]
pub struct Radar3DCoordinateSystem {
    plane: Radar2DCoordinateSystem,
    elevation: AxisScale,
    /// Earth radius plus site altitude
    effective_radius: f64,
}

impl Radar3DCoordinateSystem {
    pub fn new(site: RadarSite, range: AxisScale, azimuth: AxisScale, elevation: AxisScale) -> Self {
        Self {
            plane: Radar2DCoordinateSystem::new(site, range, azimuth),
            elevation,
            effective_radius: EARTH_RADIUS_METERS + site.altitude,
        }
    }

    /// Unit scales on all three axes.
    pub fn centered(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self::new(
            RadarSite::new(latitude, longitude, altitude),
            AxisScale::unit(),
            AxisScale::unit(),
            AxisScale::unit(),
        )
    }

    pub fn center(&self) -> RadarSite {
        self.plane.center()
    }

    pub fn range_parameters(&self) -> AxisScale {
        self.plane.range_parameters()
    }

    pub fn azimuth_parameters(&self) -> AxisScale {
        self.plane.azimuth_parameters()
    }

    pub fn elevation_parameters(&self) -> AxisScale {
        self.elevation
    }

    /// Beam position for a slant range and elevation:
    /// `(ground_range_m, altitude_m)`.
    fn beam(&self, slant_range: f64, elevation_deg: f64) -> (f64, f64) {
        let er = self.effective_radius;
        let (sin_el, cos_el) = elevation_deg.to_radians().sin_cos();
        let rp = (er * er + slant_range * slant_range + 2.0 * sin_el * er * slant_range).sqrt();
        let altitude = rp - er + self.center().altitude;
        let ground_angle = (cos_el * slant_range / rp).asin();
        (er * ground_angle, altitude)
    }

    /// Slant range and elevation (degrees) that reach a point
    /// `ground_range` meters away at `altitude`.
    fn slant(&self, ground_range: f64, altitude: f64) -> (f64, f64) {
        let er = self.effective_radius;
        let angle = ground_range / er;
        let alt_over = altitude - self.center().altitude;
        let rp = er + alt_over;
        let slant_range = (er * er + rp * rp - 2.0 * rp * er * angle.cos()).sqrt();
        let elevation = (angle.sin() * rp / slant_range).acos().to_degrees();
        if alt_over < 0.0 {
            (slant_range, -elevation)
        } else {
            (slant_range, elevation)
        }
    }

    fn forward<T: Float>(&self, tuples: &mut [Vec<T>]) -> RadarResult<()> {
        check_tuples(tuples, 3)?;
        let range = self.range_parameters();
        let azimuth = self.azimuth_parameters();
        let (first, rest) = tuples.split_at_mut(1);
        let (second, third) = rest.split_at_mut(1);

        for ((r, a), e) in first[0]
            .iter_mut()
            .zip(second[0].iter_mut())
            .zip(third[0].iter_mut())
        {
            let rad = range.value_at(widen(*r));
            if rad < 0.0 {
                *r = T::nan();
                *a = T::nan();
                *e = T::nan();
                continue;
            }
            let (ground, altitude) = self.beam(rad, self.elevation.value_at(widen(*e)));
            let (lat, lon) = self.plane.project(ground, azimuth.value_at(widen(*a)));
            *r = narrow(lat);
            *a = narrow(lon);
            *e = narrow(altitude);
        }
        Ok(())
    }

    fn inverse<T: Float>(&self, tuples: &mut [Vec<T>]) -> RadarResult<()> {
        check_tuples(tuples, 3)?;
        let range = self.range_parameters();
        let (first, rest) = tuples.split_at_mut(1);
        let (second, third) = rest.split_at_mut(1);

        for ((lat, lon), alt) in first[0]
            .iter_mut()
            .zip(second[0].iter_mut())
            .zip(third[0].iter_mut())
        {
            let (north, east) = self.plane.offsets(widen(*lat), widen(*lon));
            let (slant_range, elevation) = self.slant(north.hypot(east), widen(*alt));
            *lat = narrow(range.index_of(slant_range));
            *lon = narrow(self.plane.azimuth_index(north, east));
            *alt = narrow(self.elevation.index_of(elevation));
        }
        Ok(())
    }
}

impl CoordinateSystem for Radar3DCoordinateSystem {
    fn kind(&self) -> CoordinateSystemKind {
        CoordinateSystemKind::RadarPolar3D
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

impl fmt::Display for Radar3DCoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let site = self.center();
        let range = self.range_parameters();
        let azimuth = self.azimuth_parameters();
        write!(
            f,
            "Radar3D center ({}, {}, {}) range {} + {} * i azimuth {} + {} * j elevation {} + {} * k",
            site.latitude,
            site.longitude,
            site.altitude,
            range.low,
            range.resolution,
            azimuth.low,
            azimuth.resolution,
            self.elevation.low,
            self.elevation.resolution
        )
    }
}
