//! Coordinate Reference System identification and axis order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic CRS codes the client can request elevation data in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrsCode {
    /// WGS84 Geographic, EPSG authority axis order (lat, lon)
    Epsg4326,
    /// OGC CRS84, WGS84 with (lon, lat) axis order
    Crs84,
}

impl CrsCode {
    /// Identify a WGS84 CRS from a service `srsName` or CRS identifier.
    ///
    /// Accepts any spelling that carries the code, e.g.:
    /// - "EPSG:4326"
    /// - "urn:ogc:def:crs:EPSG::4326"
    /// - "http://www.opengis.net/def/crs/EPSG/0/4326"
    /// - "http://www.opengis.net/def/crs/OGC/1.3/CRS84"
    pub fn from_srs_name(srs_name: &str) -> Option<Self> {
        let normalized = srs_name.to_uppercase();

        if normalized.contains("CRS84") {
            Some(CrsCode::Crs84)
        } else if normalized.contains("4326") {
            Some(CrsCode::Epsg4326)
        } else {
            None
        }
    }

    /// Axis order defined by the CRS authority.
    pub fn axis_order(&self) -> AxisOrder {
        match self {
            CrsCode::Epsg4326 => AxisOrder::LatFirst,
            CrsCode::Crs84 => AxisOrder::LonFirst,
        }
    }
}

impl fmt::Display for CrsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            CrsCode::Epsg4326 => "EPSG:4326",
            CrsCode::Crs84 => "CRS:84",
        };
        write!(f, "{}", code)
    }
}

/// Check whether a WCS 1.0.0 request CRS entry denotes WGS84.
pub fn is_wgs84_request_crs(crs: &str) -> bool {
    crs.contains("WGS84") || crs.contains("4326")
}

/// Which half of a two-component coordinate pair holds latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrder {
    /// (latitude, longitude)
    LatFirst,
    /// (longitude, latitude)
    LonFirst,
}

impl AxisOrder {
    /// Derive the order from envelope axis labels.
    ///
    /// Returns `None` unless two labels are present. The pair is lat-first when
    /// the first label names latitude ("Lat", "lat", "Latitude", ...).
    pub fn from_axis_labels<S: AsRef<str>>(labels: &[S]) -> Option<Self> {
        if labels.len() < 2 {
            return None;
        }

        if is_latitude_label(labels[0].as_ref()) {
            Some(AxisOrder::LatFirst)
        } else {
            Some(AxisOrder::LonFirst)
        }
    }

    /// Split a coordinate pair into (latitude, longitude).
    pub fn lat_lon(&self, pair: (f64, f64)) -> (f64, f64) {
        match self {
            AxisOrder::LatFirst => pair,
            AxisOrder::LonFirst => (pair.1, pair.0),
        }
    }
}

/// Check if an axis label names the latitude axis.
pub fn is_latitude_label(label: &str) -> bool {
    label.to_lowercase().contains("lat")
}
