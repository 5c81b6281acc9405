//! Common test fixtures for the WCS client tests.
//!
//! Metadata documents are stored as JSON in the structured shape an external
//! capabilities parser hands to the resolver.

/// Common sector definitions for testing, as (min_lat, max_lat, min_lon, max_lon).
pub mod sector {
    /// The whole globe
    pub const GLOBAL: (f64, f64, f64, f64) = (-90.0, 90.0, -180.0, 180.0);

    /// Small tile straddling the equator and prime meridian
    pub const EQUATORIAL_TILE: (f64, f64, f64, f64) = (-5.0, 5.0, -10.0, 10.0);

    /// Continental United States
    pub const CONUS: (f64, f64, f64, f64) = (20.0, 55.0, -130.0, -60.0);

    /// Square extent, equal angular span on both axes
    pub const SQUARE_90: (f64, f64, f64, f64) = (-45.0, 45.0, -45.0, 45.0);
}

/// Coverage identifiers used throughout the fixtures.
pub mod coverages {
    /// Elevation coverage advertised by every fixture service
    pub const ASTER: &str = "aster_v2";

    /// An identifier no fixture advertises
    pub const MISSING: &str = "srtm_void";
}

/// URIs advertised in service profiles.
pub mod profiles {
    pub const SCALING: &str =
        "http://www.opengis.net/spec/WCS_service-extension_scaling/1.0/conf/scaling";
    pub const CORE: &str = "http://www.opengis.net/spec/WCS/2.0/conf/core";
}

/// WCS 1.0.0 metadata documents.
pub mod wcs100 {
    pub const CAPABILITIES: &str = r#"{
        "version": "1.0.0",
        "coverages": [
            {
                "name": "aster_v2",
                "wgs84BoundingBox": { "lowerCorner": "-180 -90", "upperCorner": "180 90" }
            },
            {
                "name": "gebco",
                "wgs84BoundingBox": { "lowerCorner": "-180 -90", "upperCorner": "180 90" }
            }
        ],
        "capability": {
            "request": {
                "getCoverage": { "get": "https://elevation.example.org/wcs" }
            }
        }
    }"#;

    pub const DESCRIBE_COVERAGE: &str = r#"{
        "coverages": [
            {
                "name": "aster_v2",
                "domainSet": {
                    "spatialDomain": {
                        "rectifiedGrid": {
                            "axisLabels": ["x", "y"],
                            "limits": { "low": [0, 0], "high": [86400, 43200] }
                        }
                    }
                },
                "supportedCrs": { "requests": ["EPSG:32633", "EPSG:4326"] },
                "supportedFormats": { "formats": ["image/png", "image/tiff", "GeoTIFF"] }
            },
            {
                "name": "gebco",
                "domainSet": {
                    "spatialDomain": {
                        "rectifiedGrid": {
                            "axisLabels": ["x", "y"],
                            "limits": { "low": [0, 0], "high": [43200, 21600] }
                        }
                    }
                },
                "supportedCrs": { "requests": ["EPSG:4326"] },
                "supportedFormats": { "formats": ["image/jpeg"] }
            }
        ]
    }"#;
}

/// WCS 2.0.1 metadata documents.
pub mod wcs201 {
    pub const CAPABILITIES: &str = r#"{
        "version": "2.0.1",
        "coverages": [
            { "coverageId": "aster_v2" }
        ],
        "serviceIdentification": {
            "profile": [
                "http://www.opengis.net/spec/WCS/2.0/conf/core",
                "http://www.opengis.net/spec/WCS_service-extension_scaling/1.0/conf/scaling"
            ]
        },
        "serviceMetadata": {
            "formatsSupported": ["image/png", "image/tiff", "application/x-netcdf"]
        },
        "operationsMetadata": {
            "operations": [
                {
                    "name": "GetCapabilities",
                    "dcp": [ { "getMethods": [ { "url": "https://elevation.example.org/ows?map=dem" } ] } ]
                },
                {
                    "name": "GetCoverage",
                    "dcp": [ { "getMethods": [ { "url": "https://elevation.example.org/ows?map=dem" } ] } ]
                }
            ]
        }
    }"#;

    pub const DESCRIBE_COVERAGE: &str = r#"{
        "coverages": [
            {
                "coverageId": "aster_v2",
                "boundedBy": {
                    "envelope": {
                        "srsName": "http://www.opengis.net/def/crs/EPSG/0/4326",
                        "axisLabels": ["Lat", "Long"],
                        "lower": [-90, -180],
                        "upper": [90, 180]
                    }
                },
                "domainSet": {
                    "rectifiedGrid": {
                        "axisLabels": ["i", "j"],
                        "limits": { "low": [0, 0], "high": [86400, 43200] }
                    }
                }
            }
        ]
    }"#;
}

/// Wrap a capabilities and a describe-coverage document into one bundle.
pub fn metadata_bundle(capabilities: &str, describe_coverage: &str) -> String {
    format!(
        r#"{{ "capabilities": {}, "describeCoverage": {} }}"#,
        capabilities, describe_coverage
    )
}
