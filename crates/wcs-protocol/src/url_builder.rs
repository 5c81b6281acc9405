//! GetCoverage URL synthesis.

use std::sync::Arc;

use wcs_common::{Tile, WcsError, WcsResult};

use crate::coverage::Coverage;
use crate::kvp::KvpQuery;

/// Builds GetCoverage URLs for tiles of one resolved coverage.
///
/// Holds no mutable state; one builder can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct TileUrlBuilder {
    coverage: Arc<Coverage>,
}

impl TileUrlBuilder {
    pub fn new(coverage: Arc<Coverage>) -> Self {
        Self { coverage }
    }

    pub fn coverage(&self) -> &Arc<Coverage> {
        &self.coverage
    }

    /// GetCoverage URL for `tile` in `format`.
    ///
    /// The query always opens with `SERVICE=WCS&REQUEST=GetCoverage`; the
    /// protocol version of the coverage decides the rest.
    pub fn url_for_tile(&self, tile: &Tile, format: &str) -> WcsResult<String> {
        if format.trim().is_empty() {
            return Err(WcsError::Argument("The image format is missing".to_string()));
        }
        tile.validate()?;

        let coverage = self.coverage.as_ref();
        let mut query = KvpQuery::new();
        query.push("SERVICE", "WCS").push("REQUEST", "GetCoverage");
        coverage
            .strategy()
            .append_tile_params(&mut query, coverage, tile, format)?;

        query.to_url(coverage.base_url())
    }

    /// GetCoverage URL using the coverage's negotiated format.
    pub fn url_for_tile_default_format(&self, tile: &Tile) -> WcsResult<String> {
        self.url_for_tile(tile, self.coverage.preferred_format())
    }
}
