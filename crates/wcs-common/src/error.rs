//! Error types for WCS coverage resolution and request building.

use thiserror::Error;

/// Result type alias using WcsError.
pub type WcsResult<T> = Result<T, WcsError>;

/// Primary error type for WCS client operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WcsError {
    // === Caller Errors ===
    #[error("Missing or invalid argument: {0}")]
    Argument(String),

    // === Resolution Errors ===
    #[error("Coverage not found: {0}")]
    CoverageNotFound(String),

    #[error("Unsupported CRS: {0}")]
    UnsupportedCrs(String),

    #[error("Required service extension not advertised: {0}")]
    UnsupportedExtension(String),

    #[error("No compatible format for coverage: {0}")]
    NoCompatibleFormat(String),

    #[error("Unsupported WCS version: {0}")]
    UnsupportedVersion(String),

    #[error("Invalid metadata for coverage '{coverage}': {message}")]
    InvalidMetadata { coverage: String, message: String },

    #[error("Invalid sector: {0}")]
    InvalidSector(String),
}

impl WcsError {
    /// Shorthand for an `InvalidMetadata` error.
    pub fn invalid_metadata(coverage: impl Into<String>, message: impl Into<String>) -> Self {
        WcsError::InvalidMetadata {
            coverage: coverage.into(),
            message: message.into(),
        }
    }

    /// True for programmer errors; everything else means "coverage unusable".
    pub fn is_argument_error(&self) -> bool {
        matches!(self, WcsError::Argument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WcsError::invalid_metadata("aster_v2", "missing grid limits");
        let display = err.to_string();
        assert!(display.contains("aster_v2"));
        assert!(display.contains("missing grid limits"));
    }

    #[test]
    fn test_argument_classification() {
        assert!(WcsError::Argument("format".to_string()).is_argument_error());
        assert!(!WcsError::CoverageNotFound("dem".to_string()).is_argument_error());
    }
}
