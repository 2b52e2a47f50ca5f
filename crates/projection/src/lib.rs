//! Radar polar coordinate systems.
//!
//! Converts between grid indices of a radar sweep and geodetic coordinates,
//! either on a flat-earth plane around the site ([`Radar2DCoordinateSystem`])
//! or along an elevated beam over a spherical earth
//! ([`Radar3DCoordinateSystem`]).

pub mod earth;
pub mod radar2d;
pub mod radar3d;
pub mod transform;

pub use earth::{RadarSite, EARTH_RADIUS_METERS, METERS_PER_DEGREE};
pub use radar2d::Radar2DCoordinateSystem;
pub use radar3d::Radar3DCoordinateSystem;
pub use transform::{CoordinateSystem, CoordinateSystemKind};
