//! The coordinate-system abstraction shared by the radar transforms.
//!
//! A coordinate system converts between its own grid-index tuples and a
//! geodetic reference (latitude, longitude[, altitude]). Tuples are passed
//! as parallel component arrays (`tuples[component][point]`) and converted
//! in place.

use std::fmt;

use num_traits::Float;
use radar_common::{RadarError, RadarResult};

/// Capability tag used for compatibility checks.
///
/// Two coordinate systems with the same kind can share a rendering
/// pipeline regardless of their parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystemKind {
    /// (range, azimuth) → (latitude, longitude)
    RadarPolar2D,
    /// (range, azimuth, elevation) → (latitude, longitude, altitude)
    RadarPolar3D,
}

impl CoordinateSystemKind {
    /// Number of components in both the grid and reference tuples.
    pub fn dimension(&self) -> usize {
        match self {
            CoordinateSystemKind::RadarPolar2D => 2,
            CoordinateSystemKind::RadarPolar3D => 3,
        }
    }
}

/// Bidirectional, vectorized transform between grid indices and geodetic
/// coordinates.
///
/// Inputs whose component count differs from [`dimension`](Self::dimension),
/// or whose components have different lengths, fail with
/// [`RadarError::InvalidDimension`] / [`RadarError::RaggedComponents`] and
/// are left untouched. NaN inputs propagate to NaN outputs.
pub trait CoordinateSystem: fmt::Debug + fmt::Display + Send + Sync {
    fn kind(&self) -> CoordinateSystemKind;

    fn dimension(&self) -> usize {
        self.kind().dimension()
    }

    /// Grid indices → geodetic, double precision.
    fn to_reference(&self, tuples: &mut [Vec<f64>]) -> RadarResult<()>;

    /// Geodetic → grid indices, double precision.
    fn from_reference(&self, tuples: &mut [Vec<f64>]) -> RadarResult<()>;

    /// Grid indices → geodetic, single precision.
    fn to_reference_f32(&self, tuples: &mut [Vec<f32>]) -> RadarResult<()>;

    /// Geodetic → grid indices, single precision.
    fn from_reference_f32(&self, tuples: &mut [Vec<f32>]) -> RadarResult<()>;

    /// True if `other` is the same kind of coordinate system.
    fn is_compatible(&self, other: &dyn CoordinateSystem) -> bool {
        self.kind() == other.kind()
    }
}

/// Check arity and component lengths; returns the number of points.
pub(crate) fn check_tuples<T>(tuples: &[Vec<T>], expected: usize) -> RadarResult<usize> {
    if tuples.len() != expected {
        return Err(RadarError::InvalidDimension {
            expected,
            actual: tuples.len(),
        });
    }

    let len = tuples[0].len();
    for (component, values) in tuples.iter().enumerate().skip(1) {
        if values.len() != len {
            return Err(RadarError::RaggedComponents {
                component,
                expected: len,
                actual: values.len(),
            });
        }
    }

    Ok(len)
}

#[inline]
pub(crate) fn widen<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[inline]
pub(crate) fn narrow<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
