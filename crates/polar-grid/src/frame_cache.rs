//! Reuse hint for consumers that redraw a sequence of grids.
//!
//! A consumer tags the geometry it built last with a [`FrameSignature`].
//! Before rebuilding for the next grid it asks the cache whether the new
//! signature is identical; if so the previous output can be reused.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::PolarGrid;

/// Inputs that determine the geometry built for one frame.
///
/// Floats compare by bit pattern, so a NaN offset matches itself and
/// `0.0` does not match `-0.0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrameSignature {
    pub shape_size: usize,
    pub spatial_offset: f32,
    pub alpha: f32,
    pub content_hash: u64,
}

impl FrameSignature {
    pub fn new(shape_size: usize, spatial_offset: f32, alpha: f32, content_hash: u64) -> Self {
        Self {
            shape_size,
            spatial_offset,
            alpha,
            content_hash,
        }
    }

    /// Signature for drawing `grid` with the given offset and alpha.
    pub fn for_grid(grid: &PolarGrid, spatial_offset: f32, alpha: f32) -> Self {
        Self::new(
            grid.values().len(),
            spatial_offset,
            alpha,
            grid.content_hash(),
        )
    }
}

impl PartialEq for FrameSignature {
    fn eq(&self, other: &Self) -> bool {
        self.shape_size == other.shape_size
            && self.spatial_offset.to_bits() == other.spatial_offset.to_bits()
            && self.alpha.to_bits() == other.alpha.to_bits()
            && self.content_hash == other.content_hash
    }
}

impl Eq for FrameSignature {}

/// What the consumer should do with a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameDecision {
    /// Identical to the previous frame: reuse the previous output.
    Reuse,
    /// Different, or nothing cached: rebuild.
    Rebuild,
}

/// Statistics for the frame reuse cache
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub invalidations: u64,
}

impl FrameCacheStats {
    /// Percentage of checks that allowed reuse.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Single-entry cache of the last drawn frame. Entries never expire; only
/// [`invalidate`](Self::invalidate) clears them.
#[derive(Debug, Default, Clone)]
pub struct FrameReuseCache {
    last: Option<FrameSignature>,
    stats: FrameCacheStats,
}

impl FrameReuseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `signature` matches the stored frame exactly.
    pub fn check(&mut self, signature: &FrameSignature) -> bool {
        let hit = self.last.as_ref() == Some(signature);
        if hit {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        hit
    }

    /// Check, and remember `signature` when a rebuild is needed.
    pub fn check_and_store(&mut self, signature: FrameSignature) -> FrameDecision {
        if self.check(&signature) {
            FrameDecision::Reuse
        } else {
            self.store(signature);
            FrameDecision::Rebuild
        }
    }

    pub fn store(&mut self, signature: FrameSignature) {
        self.last = Some(signature);
    }

    /// Forget the stored frame. Call when the consumer drops its scene.
    pub fn invalidate(&mut self) {
        if self.last.take().is_some() {
            debug!("Frame reuse cache invalidated");
        }
        self.stats.invalidations += 1;
    }

    pub fn last(&self) -> Option<&FrameSignature> {
        self.last.as_ref()
    }

    pub fn stats(&self) -> FrameCacheStats {
        self.stats.clone()
    }
}
