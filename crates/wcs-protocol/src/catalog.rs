//! Id-keyed index over a service's metadata documents.

use std::collections::HashMap;

use wcs_common::{WcsError, WcsResult};

use crate::metadata::{
    CoverageDescription, CoverageSummary, DescribeCoverage, MetadataBundle, WcsCapabilities,
};
use crate::version::WcsVersion;

/// Capabilities and coverage descriptions of one service, indexed by coverage id.
///
/// The indexes are built once on construction; every lookup afterwards is O(1).
#[derive(Debug, Clone)]
pub struct CoverageCatalog {
    version: WcsVersion,
    capabilities: WcsCapabilities,
    describe_coverage: DescribeCoverage,
    summary_index: HashMap<String, usize>,
    description_index: HashMap<String, usize>,
}

impl CoverageCatalog {
    /// Index the documents. Fails on a protocol version this client can't speak.
    pub fn new(
        capabilities: WcsCapabilities,
        describe_coverage: DescribeCoverage,
    ) -> WcsResult<Self> {
        let version: WcsVersion = capabilities.version.parse()?;

        let summary_index = index_by_id(capabilities.coverages.iter().map(|c| &c.coverage_id));
        let description_index =
            index_by_id(describe_coverage.coverages.iter().map(|c| &c.coverage_id));

        Ok(Self {
            version,
            capabilities,
            describe_coverage,
            summary_index,
            description_index,
        })
    }

    pub fn from_bundle(bundle: MetadataBundle) -> WcsResult<Self> {
        Self::new(bundle.capabilities, bundle.describe_coverage)
    }

    pub fn version(&self) -> WcsVersion {
        self.version
    }

    pub fn capabilities(&self) -> &WcsCapabilities {
        &self.capabilities
    }

    pub fn describe_coverage(&self) -> &DescribeCoverage {
        &self.describe_coverage
    }

    /// Capabilities summary for a coverage, if advertised.
    pub fn summary(&self, coverage_id: &str) -> Option<&CoverageSummary> {
        self.summary_index
            .get(coverage_id)
            .map(|&idx| &self.capabilities.coverages[idx])
    }

    /// Capabilities summary for a coverage, or `CoverageNotFound`.
    pub fn require_summary(&self, coverage_id: &str) -> WcsResult<&CoverageSummary> {
        self.summary(coverage_id)
            .ok_or_else(|| WcsError::CoverageNotFound(coverage_id.to_string()))
    }

    /// Coverage description, if the DescribeCoverage document holds one.
    pub fn description(&self, coverage_id: &str) -> Option<&CoverageDescription> {
        self.description_index
            .get(coverage_id)
            .map(|&idx| &self.describe_coverage.coverages[idx])
    }

    /// Coverage description, or `CoverageNotFound`.
    pub fn require_description(&self, coverage_id: &str) -> WcsResult<&CoverageDescription> {
        self.description(coverage_id)
            .ok_or_else(|| WcsError::CoverageNotFound(coverage_id.to_string()))
    }

    /// All coverage ids advertised in the capabilities, in document order.
    pub fn coverage_ids(&self) -> impl Iterator<Item = &str> {
        self.capabilities
            .coverages
            .iter()
            .map(|c| c.coverage_id.as_str())
    }
}

// First occurrence wins, matching a front-to-back document scan
fn index_by_id<'a>(ids: impl Iterator<Item = &'a String>) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (i, id) in ids.enumerate() {
        index.entry(id.clone()).or_insert(i);
    }
    index
}
