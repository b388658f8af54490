//! Error types for Smart SEO
//!
//! Analysis itself never fails: malformed markup is skipped and missing
//! documents are reported as failed outcomes. The errors here cover the
//! loading boundary (corpus, config and metrics files) and invalid
//! configuration.

use thiserror::Error;

/// The main error type for Smart SEO operations
#[derive(Error, Debug)]
pub enum Error {
    /// Content extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Content store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Content extraction errors
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Keyword pattern could not be compiled
    #[error("Invalid keyword pattern: {0}")]
    InvalidPattern(String),
}

/// Content store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Two documents share the same id
    #[error("Duplicate document id: {0}")]
    DuplicateId(u64),

    /// Corpus file could not be parsed
    #[error("Corpus parsing failed: {0}")]
    ParsingFailed(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Density window is inverted or negative
    #[error("Invalid density range: min {min}, max {max}")]
    InvalidDensityRange {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Site URL is not an absolute URL
    #[error("Invalid site URL: {0}")]
    InvalidSiteUrl(String),

    /// Suggestion limit must be positive
    #[error("Suggestion limit must be at least 1")]
    ZeroSuggestionLimit,
}

/// Result type alias for Smart SEO operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config(ConfigError::InvalidSiteUrl("nope".to_string()));
        assert!(err.to_string().contains("Invalid site URL"));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_density_range_error() {
        let err = ConfigError::InvalidDensityRange { min: 3.0, max: 1.0 };
        assert_eq!(err.to_string(), "Invalid density range: min 3, max 1");
    }

    #[test]
    fn test_store_error() {
        let err = Error::from(StoreError::DuplicateId(7));
        assert_eq!(err.to_string(), "Store error: Duplicate document id: 7");
    }

    #[test]
    fn test_json_error_conversion() {
        let err = Error::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
