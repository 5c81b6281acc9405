//! Common types and utilities shared across the WCS elevation client crates.

pub mod crs;
pub mod error;
pub mod grid;
pub mod sector;
pub mod tile;

pub use crs::{AxisOrder, CrsCode};
pub use error::{WcsError, WcsResult};
pub use grid::GridLimits;
pub use sector::Sector;
pub use tile::Tile;
