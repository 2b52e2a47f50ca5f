//! Integration tests for grid building, sweep loading and frame reuse.

use polar_grid::{
    AdapterConfig, CollisionPolicy, FrameDecision, FrameReuseCache, FrameSignature,
    GridBuilderConfig, PolarGridBuilder, RadarAdapter,
};
use projection::{CoordinateSystem, RadarSite};
use radar_common::RadarError;
use radial_parser::{DecodedSweep, RadialDecoder};
use test_utils::{
    create_full_circle_sweep, create_header_lines, create_sweep_lines, encode_radial,
    require_test_file, sites, temp_test_dir, write_sweep_file,
};

fn decode(lines: &[String]) -> DecodedSweep {
    RadialDecoder::default().decode_lines(lines.iter().map(String::as_str))
}

fn melbourne() -> RadarSite {
    let (lat, lon, alt) = sites::MELBOURNE;
    RadarSite::new(lat, lon, alt)
}

// ============================================================================
// Wraparound bin
// ============================================================================

#[test]
fn test_full_circle_gets_wraparound_bin() {
    let sweep = decode(&create_full_circle_sweep(1.0, 16, 3));
    let grid = PolarGridBuilder::default().build(&sweep).unwrap();

    assert_eq!(grid.num_azimuth(), 361);
    assert!(grid.has_wraparound_bin());
    assert_eq!(grid.radial(360), grid.radial(0));
    assert_eq!(grid.azimuth_of_bin(360), 360.0);
    assert_eq!(grid.coverage(), 361);
}

#[test]
fn test_half_degree_full_circle_has_no_extra_bin() {
    let mut sweep = decode(&create_full_circle_sweep(0.5, 4, 3));
    sweep.header.azimuth_resolution_deg = 0.5;

    let grid = PolarGridBuilder::default().build(&sweep).unwrap();
    assert_eq!(grid.num_azimuth(), 720);
    assert!(!grid.has_wraparound_bin());
}

#[test]
fn test_half_degree_half_circle_has_no_extra_bin() {
    // 0..=180 at half-degree spacing spans 361 bins without any copy
    let lines = vec![encode_radial(0.0, &[0]), encode_radial(180.0, &[1])];
    let mut sweep = decode(&lines);
    sweep.header.azimuth_resolution_deg = 0.5;

    let grid = PolarGridBuilder::default().build(&sweep).unwrap();
    assert_eq!(grid.num_azimuth(), 361);
    assert!(!grid.has_wraparound_bin());
    assert_eq!(grid.azimuth_of_bin(360), 180.0);
    assert_eq!(grid.radial(0), Some(&[0.0f32, 0.0][..]));
    assert_eq!(grid.radial(360), Some(&[1.0f32, 1.0][..]));
}

#[test]
fn test_partial_sector_has_no_extra_bin() {
    let azimuths: Vec<f64> = (100..190).map(f64::from).collect();
    let sweep = decode(&create_sweep_lines(&azimuths, 8, 1));
    let grid = PolarGridBuilder::default().build(&sweep).unwrap();

    assert_eq!(grid.num_azimuth(), 90);
    assert_eq!(grid.azimuth().low, 100.0);
}

// ============================================================================
// Missing bins
// ============================================================================

#[test]
fn test_gap_between_azimuths_is_nan() {
    let lines = vec![encode_radial(10.0, &[4, 4, 4]), encode_radial(12.0, &[6, 6, 6])];
    let grid = PolarGridBuilder::default().build(&decode(&lines)).unwrap();

    assert_eq!(grid.num_azimuth(), 3);
    assert_eq!(grid.num_range(), 6);
    assert!(grid.radial(0).unwrap().iter().all(|&v| v == 4.0));
    assert!(grid.radial(1).unwrap().iter().all(|v| v.is_nan()));
    assert!(grid.radial(2).unwrap().iter().all(|&v| v == 6.0));
    assert_eq!(grid.coverage(), 2);
}

#[test]
fn test_arrival_order_does_not_change_binning() {
    let forward = vec![encode_radial(10.0, &[1]), encode_radial(12.0, &[2])];
    let reversed = vec![encode_radial(12.0, &[2]), encode_radial(10.0, &[1])];
    let a = PolarGridBuilder::default().build(&decode(&forward)).unwrap();
    let b = PolarGridBuilder::default().build(&decode(&reversed)).unwrap();
    assert_eq!(a.content_hash(), b.content_hash());
}

// ============================================================================
// Header defaults and axes
// ============================================================================

#[test]
fn test_missing_rngres_gives_default_resolution() {
    let mut lines = create_header_lines(Some("20240115120000"), None, None, Some(0.5));
    lines.push(encode_radial(0.0, &[1, 2]));
    let grid = PolarGridBuilder::default().build(&decode(&lines)).unwrap();

    assert_eq!(grid.range().resolution, 250.0);
    assert_eq!(grid.range().low, 4000.0);
    assert_eq!(grid.elevation_deg(), 0.5);
    assert!(grid.timestamp().is_some());
}

#[test]
fn test_header_axes_propagate() {
    let mut lines = create_header_lines(None, Some(125.0), Some(0.0), Some(3.1));
    lines.push(encode_radial(45.5, &[1]));
    let grid = PolarGridBuilder::default().build(&decode(&lines)).unwrap();

    assert_eq!(grid.range().resolution, 125.0);
    assert_eq!(grid.range().low, 0.0);
    assert_eq!(grid.azimuth().low, 45.5);
    assert_eq!(grid.range_of_gate(4), 500.0);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_no_radials_is_insufficient_data() {
    let lines = create_header_lines(None, Some(250.0), None, None);
    let err = PolarGridBuilder::default().build(&decode(&lines)).unwrap_err();
    assert!(matches!(err, RadarError::InsufficientData(_)));
}

// ============================================================================
// Collision policies
// ============================================================================

fn colliding_lines() -> Vec<String> {
    // 10.0 and 10.9 share bin 0; 10.0 sits on its center
    vec![
        encode_radial(10.0, &[1, 1]),
        encode_radial(10.9, &[2, 2]),
        encode_radial(11.0, &[3, 3]),
    ]
}

#[test]
fn test_last_arrival_wins_by_default() {
    let grid = PolarGridBuilder::default()
        .build(&decode(&colliding_lines()))
        .unwrap();
    assert_eq!(grid.num_azimuth(), 2);
    assert_eq!(grid.value(0, 0), Some(2.0));
    assert_eq!(grid.value(0, 1), Some(3.0));
}

#[test]
fn test_nearest_bin_center_policy() {
    let builder = PolarGridBuilder::new(GridBuilderConfig {
        collision_policy: CollisionPolicy::NearestBinCenter,
    });
    let grid = builder.build(&decode(&colliding_lines())).unwrap();
    assert_eq!(grid.value(0, 0), Some(1.0));
    assert_eq!(grid.value(0, 1), Some(3.0));
}

#[test]
fn test_nearest_bin_center_tie_goes_to_later_arrival() {
    let lines = vec![encode_radial(5.0, &[7]), encode_radial(5.0, &[8])];
    let builder = PolarGridBuilder::new(GridBuilderConfig {
        collision_policy: CollisionPolicy::NearestBinCenter,
    });
    let grid = builder.build(&decode(&lines)).unwrap();
    assert_eq!(grid.value(1, 0), Some(8.0));
}

// ============================================================================
// Adapter
// ============================================================================

#[test]
fn test_adapter_loads_file() {
    let dir = temp_test_dir();
    let path = write_sweep_file(dir.path(), "sweep.txt", &create_full_circle_sweep(1.0, 20, 9));

    let adapter = RadarAdapter::new(melbourne(), AdapterConfig::default()).unwrap();
    let sweep = adapter.load_path(&path).unwrap();

    assert_eq!(sweep.grid.num_azimuth(), 361);
    assert_eq!(sweep.grid.num_range(), 40);
    assert_eq!(sweep.header.station_name(), Some("Testville"));
    assert_eq!(sweep.site(), melbourne());
}

#[test]
fn test_adapter_grid_round_trips_through_navigation() {
    let adapter = RadarAdapter::new(melbourne(), AdapterConfig::default()).unwrap();
    let lines = create_full_circle_sweep(1.0, 10, 2);
    let sweep = adapter.load_lines(lines.iter().map(String::as_str)).unwrap();

    let mut tuples = vec![vec![0.0, 19.0, 7.5], vec![0.0, 359.0, 123.0]];
    let original = tuples.clone();
    sweep.coordinate_system.to_reference(&mut tuples).unwrap();
    sweep.coordinate_system.from_reference(&mut tuples).unwrap();
    for c in 0..2 {
        for (got, want) in tuples[c].iter().zip(&original[c]) {
            assert!((got - want).abs() < 1e-6, "{} vs {}", got, want);
        }
    }

    let beam = sweep.coordinate_system_3d();
    assert!(beam.is_compatible(&sweep.grid.navigate_3d(melbourne())));
    assert!(!beam.is_compatible(sweep.coordinate_system.as_ref()));
}

#[test]
fn test_adapter_sample_file() {
    let path = require_test_file!("sample_sweep.txt");
    let adapter = RadarAdapter::new(melbourne(), AdapterConfig::default()).unwrap();
    let sweep = adapter.load_path(&path).unwrap();

    assert_eq!(sweep.grid.num_azimuth(), 361);
    assert_eq!(sweep.grid.num_range(), 80);
    assert_eq!(sweep.grid.range().resolution, 500.0);
    assert_eq!(sweep.grid.elevation_deg(), 0.5);
    assert_eq!(sweep.header.station_name(), Some("Laverton"));

    // The storm cell peaks near azimuth 200
    let peak = sweep
        .grid
        .radial(200)
        .unwrap()
        .iter()
        .cloned()
        .fold(f32::MIN, f32::max);
    assert!(peak >= 10.0);
}

// ============================================================================
// Frame reuse
// ============================================================================

#[test]
fn test_frame_cache_reuses_identical_grids() {
    let lines = create_full_circle_sweep(1.0, 6, 5);
    let grid_a = PolarGridBuilder::default().build(&decode(&lines)).unwrap();
    let grid_b = PolarGridBuilder::default().build(&decode(&lines)).unwrap();
    let other = PolarGridBuilder::default()
        .build(&decode(&create_full_circle_sweep(1.0, 6, 6)))
        .unwrap();

    let mut cache = FrameReuseCache::new();
    assert_eq!(
        cache.check_and_store(FrameSignature::for_grid(&grid_a, 0.0, 1.0)),
        FrameDecision::Rebuild
    );
    assert_eq!(
        cache.check_and_store(FrameSignature::for_grid(&grid_b, 0.0, 1.0)),
        FrameDecision::Reuse
    );
    assert_eq!(
        cache.check_and_store(FrameSignature::for_grid(&grid_b, 0.0, 0.5)),
        FrameDecision::Rebuild
    );
    assert_eq!(
        cache.check_and_store(FrameSignature::for_grid(&other, 0.0, 0.5)),
        FrameDecision::Rebuild
    );

    cache.invalidate();
    assert_eq!(
        cache.check_and_store(FrameSignature::for_grid(&other, 0.0, 0.5)),
        FrameDecision::Rebuild
    );
}
