//! Tile request units.

use serde::{Deserialize, Serialize};

use crate::{Sector, WcsError, WcsResult};

/// Default tile width in pixels.
pub const DEFAULT_TILE_WIDTH: u32 = 256;

/// Default tile height in pixels.
pub const DEFAULT_TILE_HEIGHT: u32 = 256;

/// A single tile request: a geographic sector rendered at a pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub sector: Sector,
    pub width: u32,
    pub height: u32,
}

impl Tile {
    pub fn new(sector: Sector, width: u32, height: u32) -> Self {
        Self {
            sector,
            width,
            height,
        }
    }

    /// A 256x256 tile over `sector`.
    pub fn with_default_size(sector: Sector) -> Self {
        Self::new(sector, DEFAULT_TILE_WIDTH, DEFAULT_TILE_HEIGHT)
    }

    /// Reject tiles that can't describe an image.
    pub fn validate(&self) -> WcsResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WcsError::Argument(format!(
                "tile dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Tile resolution in samples per radian (coarser axis).
    pub fn samples_per_radian(&self) -> f64 {
        let x_res = self.width as f64 / self.sector.delta_longitude().to_radians();
        let y_res = self.height as f64 / self.sector.delta_latitude().to_radians();
        x_res.min(y_res)
    }
}
