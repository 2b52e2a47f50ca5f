//! Sweep file to navigated grid.
//!
//! The adapter owns the input source: it opens files, feeds their lines to
//! the decoder, grids the result and attaches a coordinate system for the
//! radar site.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use projection::{Radar2DCoordinateSystem, Radar3DCoordinateSystem, RadarSite};
use radar_common::{RadarError, RadarResult};
use radial_parser::{DecodedSweep, RadialDecoder, SweepHeader};
use tracing::{debug, info};

use crate::builder::PolarGridBuilder;
use crate::config::AdapterConfig;
use crate::grid::PolarGrid;

/// A gridded sweep with its navigation.
#[derive(Debug, Clone)]
pub struct RadarSweep {
    pub header: SweepHeader,
    pub grid: PolarGrid,
    /// Shared flat-earth navigation for `grid`
    pub coordinate_system: Arc<Radar2DCoordinateSystem>,
}

impl RadarSweep {
    pub fn site(&self) -> RadarSite {
        self.coordinate_system.center()
    }

    /// Beam navigation for the same grid and site.
    pub fn coordinate_system_3d(&self) -> Radar3DCoordinateSystem {
        self.grid.navigate_3d(self.site())
    }
}

/// Loads sweeps recorded by one radar.
#[derive(Debug, Clone)]
pub struct RadarAdapter {
    site: RadarSite,
    config: AdapterConfig,
    builder: PolarGridBuilder,
}

impl RadarAdapter {
    pub fn new(site: RadarSite, config: AdapterConfig) -> RadarResult<Self> {
        config
            .validate()
            .map_err(|message| RadarError::invalid_parameter("config", message))?;
        let builder = PolarGridBuilder::new(config.builder.clone());
        Ok(Self {
            site,
            config,
            builder,
        })
    }

    pub fn site(&self) -> RadarSite {
        self.site
    }

    /// Load a sweep file.
    pub fn load_path(&self, path: &Path) -> RadarResult<RadarSweep> {
        debug!(path = %path.display(), "Opening sweep file");
        let file = File::open(path)?;
        let sweep = self.load_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            num_range = sweep.grid.num_range(),
            num_azimuth = sweep.grid.num_azimuth(),
            "Loaded radar sweep"
        );
        Ok(sweep)
    }

    /// Load a sweep from any line source.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> RadarResult<RadarSweep> {
        let decoded = self.decoder().decode_reader(reader)?;
        self.assemble(decoded)
    }

    /// Load a sweep from lines already in memory.
    pub fn load_lines<'a, I>(&self, lines: I) -> RadarResult<RadarSweep>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let decoded = self.decoder().decode_lines(lines);
        self.assemble(decoded)
    }

    fn decoder(&self) -> RadialDecoder {
        RadialDecoder::new(self.config.decoder.clone())
    }

    fn assemble(&self, decoded: DecodedSweep) -> RadarResult<RadarSweep> {
        let grid = self.builder.build(&decoded)?;
        let coordinate_system = Arc::new(grid.navigate_2d(self.site));
        Ok(RadarSweep {
            header: decoded.header,
            grid,
            coordinate_system,
        })
    }
}
