//! Offline probing of stored WCS metadata.
//!
//! This crate provides tools to:
//! - Load a capabilities + DescribeCoverage bundle from JSON or YAML
//! - Resolve coverages and report why unusable ones were rejected
//! - Preview the GetCoverage URLs a tiled sector would produce

pub mod bundle;
pub mod report;
pub mod tiles;

pub use bundle::load_catalog;
pub use report::{ResolutionEntry, ResolutionReport};
pub use tiles::{plan_tile_urls, TileUrl};
