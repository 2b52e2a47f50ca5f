//! Radar coordinate transform benchmarks.
//!
//! Measures the vectorized forward and inverse transforms for a full sweep
//! worth of grid points in both precisions.
//!
//! Run with: cargo bench --package projection --bench projection_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use projection::{CoordinateSystem, Radar2DCoordinateSystem, Radar3DCoordinateSystem, RadarSite};
use radar_common::AxisScale;

const SITE: (f64, f64, f64) = (-37.855, 144.755, 45.0);

fn sweep_2d() -> Radar2DCoordinateSystem {
    Radar2DCoordinateSystem::new(
        RadarSite::new(SITE.0, SITE.1, SITE.2),
        AxisScale::new(4000.0, 250.0),
        AxisScale::new(0.0, 1.0),
    )
}

fn sweep_3d() -> Radar3DCoordinateSystem {
    Radar3DCoordinateSystem::new(
        RadarSite::new(SITE.0, SITE.1, SITE.2),
        AxisScale::new(4000.0, 250.0),
        AxisScale::new(0.0, 1.0),
        AxisScale::new(0.5, 0.5),
    )
}

/// Every (gate, azimuth) index of a `gates x 361` sweep.
fn grid_tuples(gates: usize) -> Vec<Vec<f64>> {
    let mut ranges = Vec::with_capacity(gates * 361);
    let mut azimuths = Vec::with_capacity(gates * 361);
    for a in 0..361 {
        for g in 0..gates {
            ranges.push(g as f64);
            azimuths.push(a as f64);
        }
    }
    vec![ranges, azimuths]
}

// =============================================================================
// 2D TRANSFORMS
// =============================================================================

fn bench_radar2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("radar2d");
    let cs = sweep_2d();

    for gates in [128usize, 512, 1024] {
        let grid = grid_tuples(gates);
        group.throughput(Throughput::Elements(grid[0].len() as u64));

        group.bench_with_input(BenchmarkId::new("to_reference_f64", gates), &grid, |b, grid| {
            b.iter(|| {
                let mut tuples = grid.clone();
                cs.to_reference(black_box(&mut tuples)).unwrap();
                black_box(tuples)
            });
        });

        let grid_f32: Vec<Vec<f32>> = grid
            .iter()
            .map(|c| c.iter().map(|&v| v as f32).collect())
            .collect();
        group.bench_with_input(BenchmarkId::new("to_reference_f32", gates), &grid_f32, |b, grid| {
            b.iter(|| {
                let mut tuples = grid.clone();
                cs.to_reference_f32(black_box(&mut tuples)).unwrap();
                black_box(tuples)
            });
        });

        let mut geodetic = grid.clone();
        cs.to_reference(&mut geodetic).unwrap();
        group.bench_with_input(BenchmarkId::new("from_reference_f64", gates), &geodetic, |b, geo| {
            b.iter(|| {
                let mut tuples = geo.clone();
                cs.from_reference(black_box(&mut tuples)).unwrap();
                black_box(tuples)
            });
        });
    }

    group.finish();
}

// =============================================================================
// 3D TRANSFORMS
// =============================================================================

fn bench_radar3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("radar3d");
    let cs = sweep_3d();

    for gates in [128usize, 512] {
        let mut grid = grid_tuples(gates);
        grid.push(vec![2.0; grid[0].len()]);
        group.throughput(Throughput::Elements(grid[0].len() as u64));

        group.bench_with_input(BenchmarkId::new("to_reference_f64", gates), &grid, |b, grid| {
            b.iter(|| {
                let mut tuples = grid.clone();
                cs.to_reference(black_box(&mut tuples)).unwrap();
                black_box(tuples)
            });
        });

        let mut geodetic = grid.clone();
        cs.to_reference(&mut geodetic).unwrap();
        group.bench_with_input(BenchmarkId::new("from_reference_f64", gates), &geodetic, |b, geo| {
            b.iter(|| {
                let mut tuples = geo.clone();
                cs.from_reference(black_box(&mut tuples)).unwrap();
                black_box(tuples)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_radar2d, bench_radar3d);
criterion_main!(benches);
