//! Supported WCS protocol versions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wcs_common::WcsError;

/// A WCS protocol version this client can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcsVersion {
    #[serde(rename = "1.0.0")]
    V1_0_0,
    #[serde(rename = "2.0.0")]
    V2_0_0,
    #[serde(rename = "2.0.1")]
    V2_0_1,
}

impl WcsVersion {
    /// Version string as it appears in the VERSION parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            WcsVersion::V1_0_0 => "1.0.0",
            WcsVersion::V2_0_0 => "2.0.0",
            WcsVersion::V2_0_1 => "2.0.1",
        }
    }

    /// True for the 2.0.x family, which shares one request grammar.
    pub fn is_2_0_x(&self) -> bool {
        matches!(self, WcsVersion::V2_0_0 | WcsVersion::V2_0_1)
    }
}

impl FromStr for WcsVersion {
    type Err = WcsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1.0.0" => Ok(WcsVersion::V1_0_0),
            "2.0.0" => Ok(WcsVersion::V2_0_0),
            "2.0.1" => Ok(WcsVersion::V2_0_1),
            other => Err(WcsError::UnsupportedVersion(other.to_string())),
        }
    }
}

impl fmt::Display for WcsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
