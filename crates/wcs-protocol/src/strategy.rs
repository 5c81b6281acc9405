//! Per-version algorithms for coverage resolution and GetCoverage parameters.
//!
//! WCS 1.0.0 and 2.0.x disagree on where the extent lives, how the grid is
//! nested, which formats apply, where the endpoint is advertised and how a
//! request names its parameters. Each generation gets one [`VersionStrategy`]
//! implementation, picked once per coverage and stored in the resolved
//! [`Coverage`].

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;
use wcs_common::crs::{is_latitude_label, is_wgs84_request_crs};
use wcs_common::{AxisOrder, CrsCode, GridLimits, Sector, Tile, WcsError, WcsResult};

use crate::catalog::CoverageCatalog;
use crate::coverage::Coverage;
use crate::kvp::KvpQuery;
use crate::metadata::{CoverageDescription, Envelope, RectifiedGrid};
use crate::version::WcsVersion;

/// WCS 2.0 scaling extension conformance class (enables SCALESIZE).
pub const SCALING_EXTENSION_URI: &str =
    "http://www.opengis.net/spec/WCS_service-extension_scaling/1.0/conf/scaling";

/// Overview selection sent with every 2.0.x GetCoverage.
pub const OVERVIEW_POLICY: &str = "NEAREST";

/// Axis labels a WCS 2.0.x GetCoverage needs.
///
/// SCALESIZE names the grid axes while SUBSET names the envelope axes. The two
/// pairs come from different parts of the description and often differ
/// ("i"/"j" vs "Lat"/"Long").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestAxes {
    pub scale_x: String,
    pub scale_y: String,
    pub subset_lat: String,
    pub subset_lon: String,
}

/// Version-specific resolution and request-building behavior.
pub trait VersionStrategy: fmt::Debug + Send + Sync {
    fn version(&self) -> WcsVersion;

    /// Geographic extent of the coverage.
    fn resolve_sector(&self, catalog: &CoverageCatalog, coverage_id: &str) -> WcsResult<Sector>;

    /// Order of coordinate pairs in the coverage's metadata.
    fn axis_order(&self, catalog: &CoverageCatalog, coverage_id: &str) -> WcsResult<AxisOrder>;

    /// Native grid limits from the coverage description.
    fn grid_limits(&self, catalog: &CoverageCatalog, coverage_id: &str) -> WcsResult<GridLimits>;

    /// Native resolution in samples per radian.
    fn compute_resolution(&self, sector: &Sector, limits: &GridLimits) -> f64 {
        limits.samples_per_radian(sector)
    }

    /// Check the service can answer fixed-size GetCoverage requests in WGS84.
    fn check_request_support(&self, catalog: &CoverageCatalog, coverage_id: &str)
        -> WcsResult<()>;

    /// Formats the FormatNegotiator chooses from.
    fn available_formats<'a>(
        &self,
        catalog: &'a CoverageCatalog,
        coverage_id: &str,
    ) -> WcsResult<&'a [String]>;

    /// GetCoverage HTTP GET endpoint, as advertised.
    fn endpoint_url<'a>(
        &self,
        catalog: &'a CoverageCatalog,
        coverage_id: &str,
    ) -> WcsResult<&'a str>;

    /// Axis labels needed by the request grammar, if any.
    fn request_axes(
        &self,
        catalog: &CoverageCatalog,
        coverage_id: &str,
    ) -> WcsResult<Option<RequestAxes>>;

    /// Append the parameters that follow `SERVICE` and `REQUEST`.
    fn append_tile_params(
        &self,
        query: &mut KvpQuery,
        coverage: &Coverage,
        tile: &Tile,
        format: &str,
    ) -> WcsResult<()>;
}

/// Select the strategy for a protocol version.
pub fn strategy_for(version: WcsVersion) -> Arc<dyn VersionStrategy> {
    match version {
        WcsVersion::V1_0_0 => Arc::new(Wcs100Strategy),
        WcsVersion::V2_0_0 | WcsVersion::V2_0_1 => Arc::new(Wcs20xStrategy::new(version)),
    }
}

// ============================================================================
// WCS 1.0.0
// ============================================================================

/// WCS 1.0.0: extent from the capabilities `lonLatEnvelope`, BBOX requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wcs100Strategy;

impl Wcs100Strategy {
    fn grid<'a>(description: &'a CoverageDescription) -> Option<&'a RectifiedGrid> {
        description
            .domain_set
            .spatial_domain
            .as_ref()
            .and_then(|domain| domain.rectified_grid.as_ref())
    }
}

impl VersionStrategy for Wcs100Strategy {
    fn version(&self) -> WcsVersion {
        WcsVersion::V1_0_0
    }

    fn resolve_sector(&self, catalog: &CoverageCatalog, coverage_id: &str) -> WcsResult<Sector> {
        let summary = catalog.require_summary(coverage_id)?;
        let bbox = summary.wgs84_bounding_box.as_ref().ok_or_else(|| {
            WcsError::invalid_metadata(coverage_id, "capabilities summary has no WGS84 bounding box")
        })?;

        Sector::from_lon_lat_corners(&bbox.lower_corner, &bbox.upper_corner)
    }

    fn axis_order(&self, _catalog: &CoverageCatalog, _coverage_id: &str) -> WcsResult<AxisOrder> {
        Ok(AxisOrder::LonFirst)
    }

    fn grid_limits(&self, catalog: &CoverageCatalog, coverage_id: &str) -> WcsResult<GridLimits> {
        let description = catalog.require_description(coverage_id)?;
        let grid = Self::grid(description).ok_or_else(|| {
            WcsError::invalid_metadata(coverage_id, "no spatialDomain rectified grid")
        })?;

        GridLimits::from_low_high(&grid.limits.low, &grid.limits.high)
            .ok_or_else(|| WcsError::invalid_metadata(coverage_id, "incomplete grid limits"))
    }

    fn check_request_support(
        &self,
        catalog: &CoverageCatalog,
        coverage_id: &str,
    ) -> WcsResult<()> {
        let description = catalog.require_description(coverage_id)?;
        let requests = description
            .supported_crs
            .as_ref()
            .map(|crs| crs.requests.as_slice())
            .unwrap_or_default();

        if requests.iter().any(|crs| is_wgs84_request_crs(crs)) {
            Ok(())
        } else {
            Err(WcsError::UnsupportedCrs(format!(
                "coverage '{}' accepts no WGS84 request CRS (offered: [{}])",
                coverage_id,
                requests.join(", ")
            )))
        }
    }

    fn available_formats<'a>(
        &self,
        catalog: &'a CoverageCatalog,
        coverage_id: &str,
    ) -> WcsResult<&'a [String]> {
        let description = catalog.require_description(coverage_id)?;
        Ok(description
            .supported_formats
            .as_ref()
            .map(|formats| formats.formats.as_slice())
            .unwrap_or_default())
    }

    fn endpoint_url<'a>(
        &self,
        catalog: &'a CoverageCatalog,
        coverage_id: &str,
    ) -> WcsResult<&'a str> {
        catalog
            .capabilities()
            .capability
            .as_ref()
            .and_then(|capability| capability.request.get_coverage.as_ref())
            .and_then(|endpoints| endpoints.get.as_deref())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                WcsError::invalid_metadata(coverage_id, "no GetCoverage GET endpoint advertised")
            })
    }

    fn request_axes(
        &self,
        _catalog: &CoverageCatalog,
        _coverage_id: &str,
    ) -> WcsResult<Option<RequestAxes>> {
        Ok(None)
    }

    fn append_tile_params(
        &self,
        query: &mut KvpQuery,
        coverage: &Coverage,
        tile: &Tile,
        format: &str,
    ) -> WcsResult<()> {
        let sector = &tile.sector;

        // BBOX is lon,lat regardless of the coverage's native order
        query
            .push("VERSION", self.version())
            .push("COVERAGE", coverage.coverage_id())
            .push("CRS", CrsCode::Epsg4326)
            .push("WIDTH", tile.width)
            .push("HEIGHT", tile.height)
            .push("FORMAT", format)
            .push(
                "BBOX",
                format!(
                    "{},{},{},{}",
                    sector.min_longitude(),
                    sector.min_latitude(),
                    sector.max_longitude(),
                    sector.max_latitude()
                ),
            );

        Ok(())
    }
}

// ============================================================================
// WCS 2.0.0 / 2.0.1
// ============================================================================

/// WCS 2.0.x: extent from the GML envelope, SCALESIZE + SUBSET requests.
#[derive(Debug, Clone, Copy)]
pub struct Wcs20xStrategy {
    version: WcsVersion,
}

impl Wcs20xStrategy {
    pub fn new(version: WcsVersion) -> Self {
        Self { version }
    }

    fn envelope<'a>(description: &'a CoverageDescription) -> Option<&'a Envelope> {
        description.bounded_by.as_ref().map(|b| &b.envelope)
    }

    /// Labels decide when present, else the CRS authority order.
    fn envelope_axis_order(envelope: &Envelope) -> AxisOrder {
        AxisOrder::from_axis_labels(&envelope.axis_labels)
            .or_else(|| CrsCode::from_srs_name(&envelope.srs_name).map(|crs| crs.axis_order()))
            .unwrap_or(AxisOrder::LonFirst)
    }

    fn sector_from_envelope(envelope: &Envelope, coverage_id: &str) -> WcsResult<Sector> {
        if CrsCode::from_srs_name(&envelope.srs_name).is_none() {
            return Err(WcsError::UnsupportedCrs(format!(
                "coverage '{}' envelope is in '{}', expected EPSG:4326 or CRS84",
                coverage_id, envelope.srs_name
            )));
        }

        let (lower, upper) = match (envelope.lower.as_slice(), envelope.upper.as_slice()) {
            ([l0, l1, ..], [u0, u1, ..]) => ((*l0, *l1), (*u0, *u1)),
            _ => {
                return Err(WcsError::invalid_metadata(
                    coverage_id,
                    "envelope corners need two coordinates each",
                ))
            }
        };

        let order = Self::envelope_axis_order(envelope);
        let (min_lat, min_lon) = order.lat_lon(lower);
        let (max_lat, max_lon) = order.lat_lon(upper);

        Sector::new(min_lat, max_lat, min_lon, max_lon)
    }
}

impl VersionStrategy for Wcs20xStrategy {
    fn version(&self) -> WcsVersion {
        self.version
    }

    fn resolve_sector(&self, catalog: &CoverageCatalog, coverage_id: &str) -> WcsResult<Sector> {
        let description = catalog.require_description(coverage_id)?;

        // Optional WGS84 bounding box on the capabilities summary
        if let Some(bbox) = catalog
            .summary(coverage_id)
            .and_then(|summary| summary.wgs84_bounding_box.as_ref())
        {
            match Sector::from_lon_lat_corners(&bbox.lower_corner, &bbox.upper_corner) {
                Ok(sector) => return Ok(sector),
                Err(e) => warn!(
                    coverage = %coverage_id,
                    error = %e,
                    "WGS84 bounding box unusable, falling back to envelope"
                ),
            }
        }

        let envelope = Self::envelope(description)
            .ok_or_else(|| WcsError::invalid_metadata(coverage_id, "no boundedBy envelope"))?;

        Self::sector_from_envelope(envelope, coverage_id)
    }

    fn axis_order(&self, catalog: &CoverageCatalog, coverage_id: &str) -> WcsResult<AxisOrder> {
        let description = catalog.require_description(coverage_id)?;
        Ok(Self::envelope(description)
            .map(Self::envelope_axis_order)
            .unwrap_or(AxisOrder::LonFirst))
    }

    fn grid_limits(&self, catalog: &CoverageCatalog, coverage_id: &str) -> WcsResult<GridLimits> {
        let description = catalog.require_description(coverage_id)?;
        let grid = description
            .domain_set
            .rectified_grid
            .as_ref()
            .ok_or_else(|| WcsError::invalid_metadata(coverage_id, "no rectified grid"))?;

        GridLimits::from_low_high(&grid.limits.low, &grid.limits.high)
            .ok_or_else(|| WcsError::invalid_metadata(coverage_id, "incomplete grid limits"))
    }

    fn check_request_support(
        &self,
        catalog: &CoverageCatalog,
        _coverage_id: &str,
    ) -> WcsResult<()> {
        let advertised = catalog
            .capabilities()
            .service_identification
            .as_ref()
            .map(|ident| ident.profiles.iter().any(|p| p == SCALING_EXTENSION_URI))
            .unwrap_or(false);

        if advertised {
            Ok(())
        } else {
            Err(WcsError::UnsupportedExtension(
                SCALING_EXTENSION_URI.to_string(),
            ))
        }
    }

    fn available_formats<'a>(
        &self,
        catalog: &'a CoverageCatalog,
        _coverage_id: &str,
    ) -> WcsResult<&'a [String]> {
        Ok(catalog
            .capabilities()
            .service_metadata
            .as_ref()
            .map(|meta| meta.formats_supported.as_slice())
            .unwrap_or_default())
    }

    fn endpoint_url<'a>(
        &self,
        catalog: &'a CoverageCatalog,
        coverage_id: &str,
    ) -> WcsResult<&'a str> {
        catalog
            .capabilities()
            .operations_metadata
            .as_ref()
            .and_then(|ops| ops.operation("GetCoverage"))
            .and_then(|op| op.first_get_url())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                WcsError::invalid_metadata(coverage_id, "no GetCoverage GET endpoint advertised")
            })
    }

    fn request_axes(
        &self,
        catalog: &CoverageCatalog,
        coverage_id: &str,
    ) -> WcsResult<Option<RequestAxes>> {
        let description = catalog.require_description(coverage_id)?;

        let (scale_x, scale_y) = match description
            .domain_set
            .rectified_grid
            .as_ref()
            .map(|grid| grid.axis_labels.as_slice())
        {
            Some([x, y, ..]) => (x.clone(), y.clone()),
            _ => {
                return Err(WcsError::invalid_metadata(
                    coverage_id,
                    "grid needs two axis labels for SCALESIZE",
                ))
            }
        };

        let (subset_lat, subset_lon) = match Self::envelope(description)
            .map(|envelope| envelope.axis_labels.as_slice())
        {
            Some([first, second, ..]) if is_latitude_label(first) => {
                (first.clone(), second.clone())
            }
            Some([first, second, ..]) => (second.clone(), first.clone()),
            _ => {
                return Err(WcsError::invalid_metadata(
                    coverage_id,
                    "envelope needs two axis labels for SUBSET",
                ))
            }
        };

        Ok(Some(RequestAxes {
            scale_x,
            scale_y,
            subset_lat,
            subset_lon,
        }))
    }

    fn append_tile_params(
        &self,
        query: &mut KvpQuery,
        coverage: &Coverage,
        tile: &Tile,
        format: &str,
    ) -> WcsResult<()> {
        let axes = coverage.request_axes().ok_or_else(|| {
            WcsError::invalid_metadata(coverage.coverage_id(), "coverage has no request axes")
        })?;
        let sector = &tile.sector;

        query
            .push("VERSION", self.version)
            .push("COVERAGEID", coverage.coverage_id())
            .push("FORMAT", format)
            .push(
                "SCALESIZE",
                format!(
                    "{}({}),{}({})",
                    axes.scale_x, tile.width, axes.scale_y, tile.height
                ),
            )
            .push("OVERVIEWPOLICY", OVERVIEW_POLICY)
            .push(
                "SUBSET",
                format!(
                    "{}({},{})",
                    axes.subset_lat,
                    sector.min_latitude(),
                    sector.max_latitude()
                ),
            )
            .push(
                "SUBSET",
                format!(
                    "{}({},{})",
                    axes.subset_lon,
                    sector.min_longitude(),
                    sector.max_longitude()
                ),
            );

        Ok(())
    }
}
