//! Polar grids built from decoded radar sweeps.
//!
//! [`PolarGridBuilder`] turns the arrival-ordered radials produced by
//! `radial-parser` into a dense [`PolarGrid`]. [`RadarAdapter`] wires the
//! decoder, the builder and the coordinate systems from `projection`
//! together for a radar site. [`FrameReuseCache`] lets a consumer that
//! redraws grids skip identical frames.

pub mod adapter;
pub mod builder;
pub mod config;
pub mod frame_cache;
pub mod grid;

pub use adapter::{RadarAdapter, RadarSweep};
pub use builder::PolarGridBuilder;
pub use config::{AdapterConfig, CollisionPolicy, GridBuilderConfig};
pub use frame_cache::{FrameCacheStats, FrameDecision, FrameReuseCache, FrameSignature};
pub use grid::PolarGrid;
