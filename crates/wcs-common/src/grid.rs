//! Native grid limits and sampling density.

use serde::{Deserialize, Serialize};

use crate::Sector;

/// Pixel-space bounds of a coverage's native grid (`GridEnvelope` low/high).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLimits {
    pub x_low: f64,
    pub y_low: f64,
    pub x_high: f64,
    pub y_high: f64,
}

impl GridLimits {
    pub fn new(x_low: f64, y_low: f64, x_high: f64, y_high: f64) -> Self {
        Self {
            x_low,
            y_low,
            x_high,
            y_high,
        }
    }

    /// Build limits from `low`/`high` arrays, x first.
    ///
    /// Returns `None` when either array has fewer than two entries.
    pub fn from_low_high(low: &[f64], high: &[f64]) -> Option<Self> {
        match (low, high) {
            ([x_low, y_low, ..], [x_high, y_high, ..]) => {
                Some(Self::new(*x_low, *y_low, *x_high, *y_high))
            }
            _ => None,
        }
    }

    /// Grid span along x, in pixels.
    pub fn width(&self) -> f64 {
        self.x_high - self.x_low
    }

    /// Grid span along y, in pixels.
    pub fn height(&self) -> f64 {
        self.y_high - self.y_low
    }

    /// Native resolution over `sector`, in samples per radian.
    ///
    /// x is measured against the longitude extent and y against the latitude
    /// extent. The smaller (coarser) of the two is returned so callers never
    /// ask for more detail than the worst axis provides.
    pub fn samples_per_radian(&self, sector: &Sector) -> f64 {
        let x_res = self.width() / sector.delta_longitude().to_radians();
        let y_res = self.height() / sector.delta_latitude().to_radians();

        x_res.min(y_res)
    }
}
