//! Elevation request configuration handed to terrain consumers.

use std::sync::Arc;

use wcs_common::{Sector, Tile, WcsResult};

use crate::coverage::Coverage;
use crate::url_builder::TileUrlBuilder;

/// Everything a terrain consumer needs to fetch elevation tiles for one
/// coverage: its extent, native resolution and a URL generator.
#[derive(Debug, Clone)]
pub struct ElevationRequestConfig {
    builder: TileUrlBuilder,
    tile_width: u32,
    tile_height: u32,
}

impl ElevationRequestConfig {
    pub fn new(coverage: Arc<Coverage>, tile_width: u32, tile_height: u32) -> Self {
        Self {
            builder: TileUrlBuilder::new(coverage),
            tile_width,
            tile_height,
        }
    }

    pub fn coverage(&self) -> &Arc<Coverage> {
        self.builder.coverage()
    }

    pub fn coverage_id(&self) -> &str {
        self.coverage().coverage_id()
    }

    pub fn sector(&self) -> &Sector {
        self.coverage().sector()
    }

    /// Native resolution in samples per radian.
    pub fn resolution(&self) -> f64 {
        self.coverage().resolution()
    }

    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// The tile this configuration requests over `sector`.
    pub fn tile(&self, sector: Sector) -> Tile {
        Tile::new(sector, self.tile_width, self.tile_height)
    }

    /// GetCoverage URL for a tile over `sector`, in the negotiated format.
    pub fn url_for_tile(&self, sector: &Sector) -> WcsResult<String> {
        self.builder
            .url_for_tile_default_format(&self.tile(*sector))
    }
}
