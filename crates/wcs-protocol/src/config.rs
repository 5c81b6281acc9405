//! Request configuration loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use wcs_common::tile::{DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH};

use crate::format::{FormatNegotiator, PREFERRED_FORMATS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tile request settings, loaded from YAML.
///
/// ```yaml
/// tile_width: 512
/// tile_height: 512
/// preferred_formats: [geotiff, tiff]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestConfig {
    #[serde(default = "default_tile_width")]
    pub tile_width: u32,
    #[serde(default = "default_tile_height")]
    pub tile_height: u32,
    /// Format substrings, most preferred first
    #[serde(default = "default_preferred_formats")]
    pub preferred_formats: Vec<String>,
}

fn default_tile_width() -> u32 {
    DEFAULT_TILE_WIDTH
}

fn default_tile_height() -> u32 {
    DEFAULT_TILE_HEIGHT
}

fn default_preferred_formats() -> Vec<String> {
    PREFERRED_FORMATS.iter().map(|f| f.to_string()).collect()
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            tile_width: default_tile_width(),
            tile_height: default_tile_height(),
            preferred_formats: default_preferred_formats(),
        }
    }
}

impl RequestConfig {
    /// Load and validate configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RequestConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(ConfigError::Invalid(
                "tile_width and tile_height must be > 0".to_string(),
            ));
        }
        if self.preferred_formats.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one preferred format must be specified".to_string(),
            ));
        }
        if self.preferred_formats.iter().any(|f| f.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "preferred formats must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    pub fn negotiator(&self) -> FormatNegotiator {
        FormatNegotiator::new(self.preferred_formats.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RequestConfig::default();
        assert_eq!(config.tile_width, 256);
        assert_eq!(config.tile_height, 256);
        assert_eq!(config.preferred_formats, vec!["geotiff", "tiff"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = RequestConfig::from_yaml_str("tile_width: 512\n").unwrap();
        assert_eq!(config.tile_width, 512);
        assert_eq!(config.tile_height, 256);
        assert_eq!(config.preferred_formats.len(), 2);
    }

    #[test]
    fn test_zero_tile_size_rejected() {
        let result = RequestConfig::from_yaml_str("tile_height: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_formats_rejected() {
        let result = RequestConfig::from_yaml_str("preferred_formats: []\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = RequestConfig::from_yaml_str("tile_width: [not a number\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }
}
