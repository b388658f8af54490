//! Analyzer configuration
//!
//! A single [`SeoConfig`] is built by the entry point and handed to
//! [`SeoContext`](crate::SeoContext). Nothing in the crate reads global state.

use crate::document::ContentType;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Minimum number of words for the content length check to pass
pub const MIN_WORD_COUNT: usize = 300;

/// Lower bound of the acceptable keyword density window (percent)
pub const DENSITY_MIN: f64 = 0.5;

/// Upper bound of the acceptable keyword density window (percent)
pub const DENSITY_MAX: f64 = 2.5;

/// Default number of related documents to suggest
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Reports older than this are re-analyzed (one day)
pub const REPORT_MAX_AGE_SECS: u64 = 86_400;

/// Label used when an incoming link has no visible anchor text
pub const NO_ANCHOR_TEXT: &str = "[no anchor text]";

/// Configuration for analysis and link graph queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    /// Permalink base of the site; links under it are internal
    pub site_url: String,
    /// Minimum word count for the content length check (default: 300)
    pub min_word_count: usize,
    /// Lowest passing keyword density in percent (default: 0.5)
    pub density_min: f64,
    /// Highest passing keyword density in percent (default: 2.5)
    pub density_max: f64,
    /// Related-document suggestions returned when no limit is given (default: 5)
    pub suggestion_limit: usize,
    /// Age in seconds after which a cached report is stale (default: 86400)
    pub report_max_age_secs: u64,
    /// Content types scanned for incoming links and eligible for suggestions
    pub scanned_types: Vec<ContentType>,
    /// Anchor text shown for links that carry no text
    pub no_anchor_text_label: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            site_url: String::new(),
            min_word_count: MIN_WORD_COUNT,
            density_min: DENSITY_MIN,
            density_max: DENSITY_MAX,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            report_max_age_secs: REPORT_MAX_AGE_SECS,
            scanned_types: vec![ContentType::Post, ContentType::Page],
            no_anchor_text_label: NO_ANCHOR_TEXT.to_string(),
        }
    }
}

impl SeoConfig {
    /// Create a new config builder
    pub fn builder() -> SeoConfigBuilder {
        SeoConfigBuilder::default()
    }

    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: SeoConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check thresholds and the site URL
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.density_min < 0.0 || self.density_min > self.density_max {
            return Err(ConfigError::InvalidDensityRange {
                min: self.density_min,
                max: self.density_max,
            });
        }
        if self.suggestion_limit == 0 {
            return Err(ConfigError::ZeroSuggestionLimit);
        }
        if !self.site_url.is_empty() {
            Url::parse(&self.site_url)
                .map_err(|e| ConfigError::InvalidSiteUrl(format!("{}: {}", self.site_url, e)))?;
        }
        Ok(())
    }

    /// Whether a density value falls inside the passing window
    pub fn density_in_range(&self, density: f64) -> bool {
        density >= self.density_min && density <= self.density_max
    }
}

/// Builder for SeoConfig
#[derive(Default)]
pub struct SeoConfigBuilder {
    config: SeoConfig,
}

impl SeoConfigBuilder {
    /// Set the site permalink base
    pub fn site_url<S: Into<String>>(mut self, url: S) -> Self {
        self.config.site_url = url.into();
        self
    }

    /// Set the minimum word count
    pub fn min_word_count(mut self, words: usize) -> Self {
        self.config.min_word_count = words;
        self
    }

    /// Set the passing density window
    pub fn density_range(mut self, min: f64, max: f64) -> Self {
        self.config.density_min = min;
        self.config.density_max = max;
        self
    }

    /// Set the default suggestion limit
    pub fn suggestion_limit(mut self, limit: usize) -> Self {
        self.config.suggestion_limit = limit;
        self
    }

    /// Set the report freshness window
    pub fn report_max_age_secs(mut self, secs: u64) -> Self {
        self.config.report_max_age_secs = secs;
        self
    }

    /// Replace the scanned content types
    pub fn scanned_types(mut self, types: Vec<ContentType>) -> Self {
        self.config.scanned_types = types;
        self
    }

    /// Set the label for links without anchor text
    pub fn no_anchor_text_label<S: Into<String>>(mut self, label: S) -> Self {
        self.config.no_anchor_text_label = label.into();
        self
    }

    /// Build the config, validating it
    pub fn build(self) -> std::result::Result<SeoConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = SeoConfig::default();
        assert_eq!(config.min_word_count, 300);
        assert_eq!(config.density_min, 0.5);
        assert_eq!(config.density_max, 2.5);
        assert_eq!(config.report_max_age_secs, 86_400);
        assert_eq!(config.scanned_types, vec![ContentType::Post, ContentType::Page]);
    }

    #[test]
    fn test_builder() {
        let config = SeoConfig::builder()
            .site_url("https://site.example")
            .min_word_count(500)
            .density_range(1.0, 3.0)
            .suggestion_limit(3)
            .build()
            .unwrap();

        assert_eq!(config.site_url, "https://site.example");
        assert_eq!(config.min_word_count, 500);
        assert!(config.density_in_range(1.0));
        assert!(config.density_in_range(3.0));
        assert!(!config.density_in_range(3.01));
        assert_eq!(config.suggestion_limit, 3);
    }

    #[test]
    fn test_inverted_density_rejected() {
        let result = SeoConfig::builder().density_range(3.0, 1.0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidDensityRange { .. })
        ));
    }

    #[test]
    fn test_bad_site_url_rejected() {
        let result = SeoConfig::builder().site_url("not a url").build();
        assert!(matches!(result, Err(ConfigError::InvalidSiteUrl(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SeoConfig =
            serde_json::from_str(r#"{"site_url": "https://site.example", "min_word_count": 600}"#)
                .unwrap();
        assert_eq!(config.min_word_count, 600);
        assert_eq!(config.density_max, 2.5);
        assert_eq!(config.no_anchor_text_label, NO_ANCHOR_TEXT);
    }
}
