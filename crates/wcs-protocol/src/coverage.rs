//! Coverage resolution: metadata in, immutable request-ready coverage out.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error};
use wcs_common::{AxisOrder, Sector, WcsError, WcsResult};

use crate::catalog::CoverageCatalog;
use crate::config::RequestConfig;
use crate::elevation::ElevationRequestConfig;
use crate::format::FormatNegotiator;
use crate::kvp::prepare_base_url;
use crate::strategy::{strategy_for, RequestAxes, VersionStrategy};
use crate::version::WcsVersion;

/// A fully resolved WCS coverage.
///
/// Built only by [`CoverageResolver`]; every field is fixed afterwards, so a
/// `Coverage` can sit behind an `Arc` and serve any number of threads.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    coverage_id: String,
    sector: Sector,
    resolution: f64,
    protocol_version: WcsVersion,
    base_url: String,
    preferred_format: String,
    axis_order: AxisOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_axes: Option<RequestAxes>,
    #[serde(skip)]
    strategy: Arc<dyn VersionStrategy>,
}

impl Coverage {
    pub fn coverage_id(&self) -> &str {
        &self.coverage_id
    }

    pub fn sector(&self) -> &Sector {
        &self.sector
    }

    /// Native resolution in samples per radian.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn protocol_version(&self) -> WcsVersion {
        self.protocol_version
    }

    /// GetCoverage endpoint, already terminated with `?` or `&`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn preferred_format(&self) -> &str {
        &self.preferred_format
    }

    pub fn axis_order(&self) -> AxisOrder {
        self.axis_order
    }

    pub fn request_axes(&self) -> Option<&RequestAxes> {
        self.request_axes.as_ref()
    }

    pub fn strategy(&self) -> &dyn VersionStrategy {
        self.strategy.as_ref()
    }
}

impl fmt::Debug for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coverage")
            .field("coverage_id", &self.coverage_id)
            .field("sector", &self.sector)
            .field("resolution", &self.resolution)
            .field("protocol_version", &self.protocol_version)
            .field("base_url", &self.base_url)
            .field("preferred_format", &self.preferred_format)
            .field("axis_order", &self.axis_order)
            .field("request_axes", &self.request_axes)
            .finish()
    }
}

/// Turns catalog entries into [`Coverage`] values.
pub struct CoverageResolver<'a> {
    catalog: &'a CoverageCatalog,
    config: RequestConfig,
    negotiator: FormatNegotiator,
    strategy: Arc<dyn VersionStrategy>,
}

impl<'a> CoverageResolver<'a> {
    /// Resolver with default request settings.
    pub fn new(catalog: &'a CoverageCatalog) -> Self {
        Self::with_config(catalog, RequestConfig::default())
    }

    pub fn with_config(catalog: &'a CoverageCatalog, config: RequestConfig) -> Self {
        let negotiator = config.negotiator();
        let strategy = strategy_for(catalog.version());
        debug!(version = %strategy.version(), "Selected version strategy");

        Self {
            catalog,
            config,
            negotiator,
            strategy,
        }
    }

    pub fn catalog(&self) -> &CoverageCatalog {
        self.catalog
    }

    /// Geographic extent of a coverage.
    pub fn resolve_sector(&self, coverage_id: &str) -> WcsResult<Sector> {
        self.strategy.resolve_sector(self.catalog, coverage_id)
    }

    /// Native resolution in samples per radian over the resolved sector.
    pub fn compute_resolution(&self, coverage_id: &str) -> WcsResult<f64> {
        let sector = self.resolve_sector(coverage_id)?;
        self.native_resolution(coverage_id, &sector)
    }

    fn native_resolution(&self, coverage_id: &str, sector: &Sector) -> WcsResult<f64> {
        let limits = self.strategy.grid_limits(self.catalog, coverage_id)?;
        let resolution = self.strategy.compute_resolution(sector, &limits);
        if !resolution.is_finite() {
            return Err(WcsError::invalid_metadata(
                coverage_id,
                format!("native resolution over {} is not finite", sector),
            ));
        }
        Ok(resolution)
    }

    /// Resolve everything needed to request tiles of a coverage.
    pub fn resolve(&self, coverage_id: &str) -> WcsResult<Coverage> {
        let strategy = &self.strategy;
        let catalog = self.catalog;

        let sector = strategy.resolve_sector(catalog, coverage_id)?;
        let resolution = self.native_resolution(coverage_id, &sector)?;

        strategy.check_request_support(catalog, coverage_id)?;

        let formats = strategy.available_formats(catalog, coverage_id)?;
        let preferred_format = self
            .negotiator
            .negotiate(formats)
            .ok_or_else(|| WcsError::NoCompatibleFormat(coverage_id.to_string()))?;

        let endpoint = strategy.endpoint_url(catalog, coverage_id)?;
        let base_url = prepare_base_url(endpoint)
            .map_err(|e| WcsError::invalid_metadata(coverage_id, e.to_string()))?;

        let axis_order = strategy.axis_order(catalog, coverage_id)?;
        let request_axes = strategy.request_axes(catalog, coverage_id)?;

        debug!(
            coverage = %coverage_id,
            version = %strategy.version(),
            sector = %sector,
            resolution = resolution,
            format = %preferred_format,
            "Resolved coverage"
        );

        Ok(Coverage {
            coverage_id: coverage_id.to_string(),
            sector,
            resolution,
            protocol_version: strategy.version(),
            base_url,
            preferred_format,
            axis_order,
            request_axes,
            strategy: Arc::clone(strategy),
        })
    }

    /// Resolve a coverage and wrap it in an elevation request configuration.
    pub fn build_elevation_config(&self, coverage_id: &str) -> WcsResult<ElevationRequestConfig> {
        let coverage = self.resolve(coverage_id)?;
        Ok(ElevationRequestConfig::new(
            Arc::new(coverage),
            self.config.tile_width,
            self.config.tile_height,
        ))
    }

    /// Like [`build_elevation_config`](Self::build_elevation_config), but logs
    /// the failure and returns `None` for callers that treat an unusable
    /// coverage as absent.
    pub fn try_elevation_config(&self, coverage_id: &str) -> Option<ElevationRequestConfig> {
        match self.build_elevation_config(coverage_id) {
            Ok(config) => Some(config),
            Err(e) => {
                error!(
                    coverage = %coverage_id,
                    version = %self.catalog.version(),
                    error = %e,
                    "Failed to build elevation request configuration"
                );
                None
            }
        }
    }
}
