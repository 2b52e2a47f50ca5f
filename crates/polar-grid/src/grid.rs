//! Dense polar grid of one radar sweep.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use projection::{Radar2DCoordinateSystem, Radar3DCoordinateSystem, RadarSite};
use radar_common::AxisScale;
use serde::{Deserialize, Serialize};

/// Reflectivity codes on a regular (gate, azimuth bin) lattice.
///
/// Values are stored radial by radial: `values[bin * num_range + gate]`.
/// Bins that no radial landed in hold NaN. A sweep that spans exactly 360
/// bins carries a 361st bin duplicating bin 0, so interpolation across
/// north needs no special case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolarGrid {
    num_range: usize,
    num_azimuth: usize,
    values: Vec<f32>,
    range: AxisScale,
    azimuth: AxisScale,
    elevation_deg: f64,
    timestamp: Option<DateTime<Utc>>,
    wraparound: bool,
}

impl PolarGrid {
    pub(crate) fn from_parts(
        num_range: usize,
        num_azimuth: usize,
        values: Vec<f32>,
        range: AxisScale,
        azimuth: AxisScale,
        elevation_deg: f64,
        timestamp: Option<DateTime<Utc>>,
        wraparound: bool,
    ) -> Self {
        debug_assert_eq!(values.len(), num_range * num_azimuth);
        Self {
            num_range,
            num_azimuth,
            values,
            range,
            azimuth,
            elevation_deg,
            timestamp,
            wraparound,
        }
    }

    /// Gates per radial.
    pub fn num_range(&self) -> usize {
        self.num_range
    }

    /// Azimuth bins, including the wraparound bin if present.
    pub fn num_azimuth(&self) -> usize {
        self.num_azimuth
    }

    /// Range axis: first gate distance and gate spacing (meters).
    pub fn range(&self) -> AxisScale {
        self.range
    }

    /// Azimuth axis: lowest azimuth and bin spacing (degrees).
    pub fn azimuth(&self) -> AxisScale {
        self.azimuth
    }

    pub fn elevation_deg(&self) -> f64 {
        self.elevation_deg
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn value(&self, gate: usize, bin: usize) -> Option<f32> {
        if gate >= self.num_range || bin >= self.num_azimuth {
            return None;
        }
        Some(self.values[bin * self.num_range + gate])
    }

    /// All gates of one azimuth bin.
    pub fn radial(&self, bin: usize) -> Option<&[f32]> {
        if bin >= self.num_azimuth {
            return None;
        }
        let start = bin * self.num_range;
        Some(&self.values[start..start + self.num_range])
    }

    pub fn azimuth_of_bin(&self, bin: usize) -> f64 {
        self.azimuth.value_at(bin as f64)
    }

    pub fn range_of_gate(&self, gate: usize) -> f64 {
        self.range.value_at(gate as f64)
    }

    /// True if the last bin is a copy of bin 0.
    pub fn has_wraparound_bin(&self) -> bool {
        self.wraparound
    }

    /// Number of bins holding data rather than the missing sentinel.
    pub fn coverage(&self) -> usize {
        (0..self.num_azimuth)
            .filter_map(|bin| self.radial(bin))
            .filter(|radial| radial.iter().any(|v| !v.is_nan()))
            .count()
    }

    /// Hash of the grid shape, axes and value bits.
    ///
    /// NaN payloads are hashed by bit pattern, so two grids built from the
    /// same input always hash equal.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.num_range.hash(&mut hasher);
        self.num_azimuth.hash(&mut hasher);
        for scalar in [
            self.range.low,
            self.range.resolution,
            self.azimuth.low,
            self.azimuth.resolution,
            self.elevation_deg,
        ] {
            scalar.to_bits().hash(&mut hasher);
        }
        for value in &self.values {
            value.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }

    /// Flat-earth navigation for this grid's indices around `site`.
    pub fn navigate_2d(&self, site: RadarSite) -> Radar2DCoordinateSystem {
        Radar2DCoordinateSystem::new(site, self.range, self.azimuth)
    }

    /// Beam navigation for this grid's indices around `site`.
    ///
    /// Elevation index 0 is the sweep elevation; each further index adds
    /// one degree.
    pub fn navigate_3d(&self, site: RadarSite) -> Radar3DCoordinateSystem {
        Radar3DCoordinateSystem::new(
            site,
            self.range,
            self.azimuth,
            AxisScale::new(self.elevation_deg, 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projection::CoordinateSystem;

    fn small_grid() -> PolarGrid {
        // 3 gates x 2 bins, bin 1 missing
        PolarGrid::from_parts(
            3,
            2,
            vec![1.0, 2.0, 3.0, f32::NAN, f32::NAN, f32::NAN],
            AxisScale::new(4000.0, 250.0),
            AxisScale::new(10.0, 1.0),
            0.5,
            None,
            false,
        )
    }

    #[test]
    fn test_value_and_radial_access() {
        let grid = small_grid();
        assert_eq!(grid.value(2, 0), Some(3.0));
        assert!(grid.value(0, 1).unwrap().is_nan());
        assert_eq!(grid.value(3, 0), None);
        assert_eq!(grid.radial(0), Some(&[1.0f32, 2.0, 3.0][..]));
        assert!(grid.radial(2).is_none());
    }

    #[test]
    fn test_axis_lookup() {
        let grid = small_grid();
        assert_eq!(grid.azimuth_of_bin(1), 11.0);
        assert_eq!(grid.range_of_gate(2), 4500.0);
        assert!(!grid.has_wraparound_bin());
    }

    #[test]
    fn test_coverage_ignores_missing_bins() {
        assert_eq!(small_grid().coverage(), 1);
    }

    #[test]
    fn test_content_hash_stable_and_sensitive() {
        let a = small_grid();
        let b = small_grid();
        assert_eq!(a.content_hash(), b.content_hash());

        let mut values = a.values().to_vec();
        values[0] = 9.0;
        let c = PolarGrid::from_parts(3, 2, values, a.range(), a.azimuth(), 0.5, None, false);
        assert_ne!(a.content_hash(), c.content_hash());
    }

    #[test]
    fn test_navigation_uses_grid_axes() {
        let grid = small_grid();
        let site = RadarSite::at_sea_level(-37.0, 145.0);
        let flat = grid.navigate_2d(site);
        assert_eq!(flat.range_parameters(), grid.range());
        assert_eq!(flat.azimuth_parameters(), grid.azimuth());

        let beam = grid.navigate_3d(site);
        assert_eq!(beam.elevation_parameters().low, 0.5);
        assert_eq!(beam.dimension(), 3);
    }
}
