//! Structured WCS metadata documents.
//!
//! These mirror the GetCapabilities and DescribeCoverage responses of WCS
//! 1.0.0 and 2.0.x after an external parser has turned them into plain values.
//! Keys are camelCase so documents can be loaded from JSON or YAML. Sections
//! that only exist in one protocol generation are optional.

use serde::{Deserialize, Serialize};

/// A GetCapabilities document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WcsCapabilities {
    /// Protocol version the service answered with (e.g. "2.0.1")
    pub version: String,

    /// Coverage summaries (`CoverageOfferingBrief` / `CoverageSummary`)
    #[serde(default)]
    pub coverages: Vec<CoverageSummary>,

    /// OWS service identification (2.0.x)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_identification: Option<ServiceIdentification>,

    /// WCS service metadata (2.0.x)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_metadata: Option<ServiceMetadata>,

    /// OWS operations metadata (2.0.x)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operations_metadata: Option<OperationsMetadata>,

    /// Capability section (1.0.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability: Option<Capability>,
}

/// A coverage summary from the capabilities contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    /// `coverageId` in 2.0.x, `name` in 1.0.0
    #[serde(alias = "name")]
    pub coverage_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wgs84_bounding_box: Option<Wgs84BoundingBox>,
}

/// An OWS `WGS84BoundingBox`; corners are "lon lat" strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wgs84BoundingBox {
    pub lower_corner: String,
    pub upper_corner: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceIdentification {
    /// Conformance class / extension URIs (`ows:Profile`)
    #[serde(default, rename = "profile")]
    pub profiles: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetadata {
    #[serde(default)]
    pub formats_supported: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationsMetadata {
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl OperationsMetadata {
    /// Find an operation by its `name` attribute.
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name == name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub dcp: Vec<Dcp>,
}

impl Operation {
    /// First HTTP GET endpoint advertised for this operation.
    pub fn first_get_url(&self) -> Option<&str> {
        self.dcp
            .first()
            .and_then(|dcp| dcp.get_methods.first())
            .map(|method| method.url.as_str())
    }
}

/// Distributed Computing Platform entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dcp {
    #[serde(default)]
    pub get_methods: Vec<OnlineResource>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineResource {
    pub url: String,
}

/// WCS 1.0.0 `Capability` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    #[serde(default)]
    pub request: RequestSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get_coverage: Option<OperationEndpoints>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationEndpoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
}

/// A DescribeCoverage document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeCoverage {
    #[serde(default)]
    pub coverages: Vec<CoverageDescription>,
}

/// One coverage description (`CoverageOffering` / `CoverageDescription`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageDescription {
    /// `coverageId` in 2.0.x, `name` in 1.0.0
    #[serde(alias = "name")]
    pub coverage_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounded_by: Option<BoundedBy>,

    #[serde(default)]
    pub domain_set: DomainSet,

    /// Request/response CRS lists (1.0.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_crs: Option<SupportedCrs>,

    /// Per-coverage formats (1.0.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_formats: Option<SupportedFormats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundedBy {
    pub envelope: Envelope,
}

/// A GML envelope in the coverage's native CRS.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(default)]
    pub srs_name: String,
    #[serde(default)]
    pub axis_labels: Vec<String>,
    #[serde(default)]
    pub lower: Vec<f64>,
    #[serde(default)]
    pub upper: Vec<f64>,
}

/// Coverage domain; 1.0.0 nests the grid under `spatialDomain`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial_domain: Option<SpatialDomain>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rectified_grid: Option<RectifiedGrid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialDomain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rectified_grid: Option<RectifiedGrid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectifiedGrid {
    #[serde(default)]
    pub axis_labels: Vec<String>,
    #[serde(default)]
    pub limits: GridEnvelope,
}

/// `GridEnvelope` low/high pixel indices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridEnvelope {
    #[serde(default)]
    pub low: Vec<f64>,
    #[serde(default)]
    pub high: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedCrs {
    #[serde(default)]
    pub requests: Vec<String>,
    #[serde(default)]
    pub responses: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedFormats {
    #[serde(default)]
    pub formats: Vec<String>,
}

/// Capabilities plus coverage descriptions, as stored side by side on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataBundle {
    pub capabilities: WcsCapabilities,
    pub describe_coverage: DescribeCoverage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_accepts_name_alias() {
        let summary: CoverageSummary =
            serde_json::from_str(r#"{"name": "dem", "wgs84BoundingBox": {"lowerCorner": "0 0", "upperCorner": "1 1"}}"#)
                .unwrap();
        assert_eq!(summary.coverage_id, "dem");
        assert!(summary.wgs84_bounding_box.is_some());
    }

    #[test]
    fn test_first_get_url() {
        let op: Operation = serde_json::from_str(
            r#"{"name": "GetCoverage", "dcp": [{"getMethods": [{"url": "http://a/wcs"}, {"url": "http://b/wcs"}]}]}"#,
        )
        .unwrap();
        assert_eq!(op.first_get_url(), Some("http://a/wcs"));

        let empty = Operation {
            name: "GetCoverage".to_string(),
            dcp: vec![],
        };
        assert_eq!(empty.first_get_url(), None);
    }

    #[test]
    fn test_profile_key() {
        let ident: ServiceIdentification =
            serde_json::from_str(r#"{"profile": ["urn:a", "urn:b"]}"#).unwrap();
        assert_eq!(ident.profiles.len(), 2);
    }
}
