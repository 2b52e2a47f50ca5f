//! Reconstruction of a dense polar grid from decoded radials.

use radar_common::{AxisScale, RadarError, RadarResult};
use radial_parser::{DecodedSweep, RadialRecord};
use tracing::{debug, info};

use crate::config::{CollisionPolicy, GridBuilderConfig};
use crate::grid::PolarGrid;

/// Azimuth bin count of a full circle at one-degree spacing.
const FULL_CIRCLE_BINS: usize = 360;

/// Upper bound on the azimuth span, in bins.
const MAX_AZIMUTH_BINS: usize = 1 << 20;

/// Upper bound on grid cells (gates times bins).
const MAX_GRID_CELLS: usize = 1 << 24;

/// Builds [`PolarGrid`]s from arrival-ordered radials.
#[derive(Debug, Clone, Default)]
pub struct PolarGridBuilder {
    config: GridBuilderConfig,
}

/// Current occupant of an azimuth bin.
#[derive(Debug, Clone, Copy)]
struct Occupant {
    record: usize,
    distance: f64,
}

impl PolarGridBuilder {
    pub fn new(config: GridBuilderConfig) -> Self {
        Self { config }
    }

    pub fn collision_policy(&self) -> CollisionPolicy {
        self.config.collision_policy
    }

    /// Grid a decoded sweep.
    ///
    /// Bins are spaced at the header's azimuth resolution starting from the
    /// lowest azimuth observed. Each radial lands in bin
    /// `trunc((azimuth - low) / resolution)`; bins nobody landed in are
    /// NaN and radials shorter than the longest one are zero padded.
    pub fn build(&self, sweep: &DecodedSweep) -> RadarResult<PolarGrid> {
        let header = &sweep.header;
        let resolution = header.azimuth_resolution_deg;
        if !(AxisScale::new(0.0, resolution).is_valid() && resolution > 0.0) {
            return Err(RadarError::invalid_parameter(
                "azimuth_resolution_deg",
                format!("must be finite and > 0, got {}", resolution),
            ));
        }

        if sweep.radials.is_empty() {
            return Err(RadarError::insufficient_data("sweep has no radials"));
        }

        let num_range = sweep.max_gates();
        if num_range == 0 {
            return Err(RadarError::insufficient_data(format!(
                "all {} radials are empty",
                sweep.len()
            )));
        }

        let order = sorted_order(&sweep.radials);
        let low = sweep.radials[order[0]].azimuth;
        let high = sweep.radials[order[order.len() - 1]].azimuth;

        let span = (high - low) / resolution;
        if !span.is_finite() || span >= MAX_AZIMUTH_BINS as f64 {
            return Err(RadarError::invalid_parameter(
                "azimuth",
                format!(
                    "span {}..{} at {} degree bins is out of range",
                    low, high, resolution
                ),
            ));
        }
        let span_bins = 1 + span.floor() as usize;

        let wraparound = span_bins == FULL_CIRCLE_BINS;
        let num_azimuth = if wraparound { span_bins + 1 } else { span_bins };

        let cells = num_azimuth
            .checked_mul(num_range)
            .filter(|&cells| cells <= MAX_GRID_CELLS)
            .ok_or_else(|| {
                RadarError::invalid_parameter(
                    "grid",
                    format!(
                        "{} gates x {} bins exceeds {} cells",
                        num_range, num_azimuth, MAX_GRID_CELLS
                    ),
                )
            })?;

        let mut occupants: Vec<Option<Occupant>> = vec![None; span_bins];
        let mut collisions = 0usize;

        for (index, radial) in sweep.radials.iter().enumerate() {
            let bin = bin_index(radial.azimuth, low, resolution, span_bins);
            let candidate = Occupant {
                record: index,
                distance: (radial.azimuth - (low + bin as f64 * resolution)).abs(),
            };

            occupants[bin] = match occupants[bin] {
                None => Some(candidate),
                Some(current) => {
                    collisions += 1;
                    let winner = self.resolve(current, candidate);
                    debug!(
                        bin = bin,
                        azimuth = radial.azimuth,
                        kept = winner.record,
                        dropped = if winner.record == index { current.record } else { index },
                        "Azimuth bin collision"
                    );
                    Some(winner)
                }
            };
        }

        let mut values = vec![f32::NAN; cells];
        for (bin, occupant) in occupants.iter().enumerate() {
            let Some(occupant) = occupant else {
                continue;
            };
            let samples = &sweep.radials[occupant.record].samples;
            let row = &mut values[bin * num_range..(bin + 1) * num_range];
            for (gate, value) in row.iter_mut().enumerate() {
                *value = samples.get(gate).map_or(0.0, |&code| f32::from(code));
            }
        }

        if wraparound {
            values.copy_within(0..num_range, FULL_CIRCLE_BINS * num_range);
        }

        let grid = PolarGrid::from_parts(
            num_range,
            num_azimuth,
            values,
            AxisScale::new(header.start_range_m, header.range_resolution_m),
            AxisScale::new(low, resolution),
            header.elevation_deg,
            header.timestamp,
            wraparound,
        );

        info!(
            radials = sweep.len(),
            num_range = num_range,
            num_azimuth = num_azimuth,
            azimuth_low = low,
            coverage = grid.coverage(),
            collisions = collisions,
            policy = %self.config.collision_policy,
            "Built polar grid"
        );

        Ok(grid)
    }

    fn resolve(&self, current: Occupant, candidate: Occupant) -> Occupant {
        match self.config.collision_policy {
            CollisionPolicy::LastArrival => candidate,
            CollisionPolicy::NearestBinCenter => {
                if candidate.distance <= current.distance {
                    candidate
                } else {
                    current
                }
            }
        }
    }
}

/// Record indices in ascending azimuth order; equal azimuths keep their
/// arrival order.
fn sorted_order(radials: &[RadialRecord]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..radials.len()).collect();
    order.sort_by(|&a, &b| radials[a].azimuth.total_cmp(&radials[b].azimuth));
    order
}

/// Bin for an azimuth, truncated toward zero and clamped to the grid.
fn bin_index(azimuth: f64, low: f64, resolution: f64, bins: usize) -> usize {
    let k = ((azimuth - low) / resolution).trunc();
    if k <= 0.0 {
        0
    } else {
        (k as usize).min(bins - 1)
    }
}
