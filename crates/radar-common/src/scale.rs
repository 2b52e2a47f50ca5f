//! Linear axis scaling shared by polar grids and radar coordinate systems.

use serde::{Deserialize, Serialize};

/// A linear mapping from a grid index to a physical value:
/// `value = low + resolution * index`.
///
/// Range axes are in meters, azimuth and elevation axes in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    /// Physical value at index 0
    pub low: f64,
    /// Physical spacing between adjacent indices
    pub resolution: f64,
}

impl AxisScale {
    pub fn new(low: f64, resolution: f64) -> Self {
        Self { low, resolution }
    }

    /// Identity scale: index and physical value coincide.
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Physical value at a (possibly fractional) index.
    pub fn value_at(&self, index: f64) -> f64 {
        self.low + self.resolution * index
    }

    /// Fractional index of a physical value.
    pub fn index_of(&self, value: f64) -> f64 {
        (value - self.low) / self.resolution
    }

    /// True if the resolution can be divided by.
    pub fn is_valid(&self) -> bool {
        self.low.is_finite() && self.resolution.is_finite() && self.resolution != 0.0
    }
}

impl Default for AxisScale {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_and_index_are_inverse() {
        let scale = AxisScale::new(4000.0, 250.0);
        assert_eq!(scale.value_at(0.0), 4000.0);
        assert_eq!(scale.value_at(4.0), 5000.0);
        assert_eq!(scale.index_of(5000.0), 4.0);
    }

    #[test]
    fn test_zero_resolution_is_invalid() {
        assert!(!AxisScale::new(0.0, 0.0).is_valid());
        assert!(!AxisScale::new(f64::NAN, 1.0).is_valid());
        assert!(AxisScale::unit().is_valid());
    }
}
