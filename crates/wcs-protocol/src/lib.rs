//! OGC Web Coverage Service client protocol layer.
//!
//! Supports:
//! - WCS 1.0.0 (BBOX/WIDTH/HEIGHT GetCoverage)
//! - WCS 2.0.0 and 2.0.1 with the scaling extension (SCALESIZE/SUBSET GetCoverage)
//!
//! Parsed capabilities and coverage descriptions go into a [`CoverageCatalog`].
//! A [`CoverageResolver`] turns a catalog entry into an immutable [`Coverage`],
//! and a [`TileUrlBuilder`] then produces one GetCoverage URL per tile.

pub mod catalog;
pub mod config;
pub mod coverage;
pub mod elevation;
pub mod format;
pub mod kvp;
pub mod metadata;
pub mod strategy;
pub mod url_builder;
pub mod version;

pub use catalog::CoverageCatalog;
pub use config::{ConfigError, RequestConfig};
pub use coverage::{Coverage, CoverageResolver};
pub use elevation::ElevationRequestConfig;
pub use format::{find_preferred_format, FormatNegotiator, PREFERRED_FORMATS};
pub use kvp::{encode_uri, prepare_base_url, KvpQuery};
pub use metadata::{DescribeCoverage, MetadataBundle, WcsCapabilities};
pub use strategy::{
    strategy_for, RequestAxes, VersionStrategy, Wcs100Strategy, Wcs20xStrategy,
    SCALING_EXTENSION_URI,
};
pub use url_builder::TileUrlBuilder;
pub use version::WcsVersion;
