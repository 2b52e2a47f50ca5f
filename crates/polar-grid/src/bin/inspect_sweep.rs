//! Inspect a radar sweep file.
//!
//! Decodes the file, builds the polar grid and prints its dimensions, axes,
//! coverage and the geodetic position of the grid corners.
//!
//! Usage:
//!   inspect-sweep sweep.txt --lat -37.855 --lon 144.755
//!   inspect-sweep sweep.txt --lat -37.855 --lon 144.755 --alt 45 --json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use polar_grid::{AdapterConfig, RadarAdapter, RadarSweep};
use projection::{CoordinateSystem, RadarSite};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "inspect-sweep")]
#[command(about = "Decode a radar sweep file and summarise its polar grid")]
struct Args {
    /// Sweep file to read
    file: PathBuf,

    /// Radar site latitude (degrees)
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Radar site longitude (degrees)
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Radar site altitude (meters)
    #[arg(long, default_value = "0")]
    alt: f64,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Serialize)]
struct SweepSummary {
    file: String,
    station: Option<String>,
    timestamp: Option<String>,
    elevation_deg: f64,
    num_range: usize,
    num_azimuth: usize,
    range_start_m: f64,
    range_resolution_m: f64,
    azimuth_start_deg: f64,
    azimuth_resolution_deg: f64,
    populated_bins: usize,
    wraparound_bin: bool,
    corners: Vec<Corner>,
}

#[derive(Debug, Serialize)]
struct Corner {
    gate: usize,
    bin: usize,
    latitude: f64,
    longitude: f64,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let site = RadarSite::new(args.lat, args.lon, args.alt);
    let adapter = RadarAdapter::new(site, AdapterConfig::from_env())?;

    info!(file = %args.file.display(), "Inspecting sweep");
    let sweep = adapter
        .load_path(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    let summary = summarise(&args.file, &sweep)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_text(&summary);
    }

    Ok(())
}

fn summarise(file: &std::path::Path, sweep: &RadarSweep) -> Result<SweepSummary> {
    let grid = &sweep.grid;
    let last_gate = grid.num_range() - 1;
    let last_bin = grid.num_azimuth() - 1;
    let indices = [(0, 0), (last_gate, 0), (0, last_bin), (last_gate, last_bin)];

    let mut tuples = vec![
        indices.iter().map(|&(g, _)| g as f64).collect::<Vec<_>>(),
        indices.iter().map(|&(_, b)| b as f64).collect::<Vec<_>>(),
    ];
    sweep.coordinate_system.to_reference(&mut tuples)?;

    let corners = indices
        .iter()
        .enumerate()
        .map(|(i, &(gate, bin))| Corner {
            gate,
            bin,
            latitude: tuples[0][i],
            longitude: tuples[1][i],
        })
        .collect();

    Ok(SweepSummary {
        file: file.display().to_string(),
        station: sweep.header.station_name().map(str::to_string),
        timestamp: grid.timestamp().map(|t| t.to_rfc3339()),
        elevation_deg: grid.elevation_deg(),
        num_range: grid.num_range(),
        num_azimuth: grid.num_azimuth(),
        range_start_m: grid.range().low,
        range_resolution_m: grid.range().resolution,
        azimuth_start_deg: grid.azimuth().low,
        azimuth_resolution_deg: grid.azimuth().resolution,
        populated_bins: grid.coverage(),
        wraparound_bin: grid.has_wraparound_bin(),
        corners,
    })
}

fn print_text(summary: &SweepSummary) {
    println!("File:        {}", summary.file);
    println!(
        "Station:     {}",
        summary.station.as_deref().unwrap_or("(unnamed)")
    );
    println!(
        "Time:        {}",
        summary.timestamp.as_deref().unwrap_or("(none)")
    );
    println!("Elevation:   {:.2} deg", summary.elevation_deg);
    println!(
        "Grid:        {} gates x {} bins{}",
        summary.num_range,
        summary.num_azimuth,
        if summary.wraparound_bin {
            " (incl. wraparound)"
        } else {
            ""
        }
    );
    println!(
        "Range:       {} m + {} m/gate",
        summary.range_start_m, summary.range_resolution_m
    );
    println!(
        "Azimuth:     {} deg + {} deg/bin",
        summary.azimuth_start_deg, summary.azimuth_resolution_deg
    );
    println!(
        "Coverage:    {}/{} bins",
        summary.populated_bins, summary.num_azimuth
    );
    println!("Corners:");
    for corner in &summary.corners {
        println!(
            "  gate {:>5} bin {:>4}: {:>10.5}, {:>11.5}",
            corner.gate, corner.bin, corner.latitude, corner.longitude
        );
    }
}
