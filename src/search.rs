//! Search performance metrics
//!
//! Metrics come from an external search console integration. The core only
//! consumes them through [`MetricsProvider`]; an unavailable provider answers
//! `None` and never blocks an analysis.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Search performance of one page
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMetrics {
    /// Clicks from search results
    pub clicks: u64,
    /// Click-through rate as a percentage (0 to 100)
    pub ctr: f64,
    /// Average ranking position
    pub position: f64,
}

impl SearchMetrics {
    /// Build metrics from a raw click-through ratio (0 to 1)
    pub fn from_ratio(clicks: u64, ctr_ratio: f64, position: f64) -> Self {
        Self {
            clicks,
            ctr: ctr_ratio * 100.0,
            position,
        }
    }
}

/// Source of search metrics keyed by page URL
pub trait MetricsProvider {
    /// Metrics for a permalink, or `None` when unavailable
    fn get_metrics(&self, permalink: &str) -> Option<SearchMetrics>;
}

/// Align a page URL's trailing slash with the search property's format.
///
/// Search properties match page URLs exactly, so a slash-terminated property
/// gets slash-terminated page URLs and vice versa.
pub fn align_to_property(property_url: &str, page_url: &str) -> String {
    let property_slash = property_url.ends_with('/');
    let page_slash = page_url.ends_with('/');
    match (property_slash, page_slash) {
        (true, false) => format!("{}/", page_url),
        (false, true) => page_url.trim_end_matches('/').to_string(),
        _ => page_url.to_string(),
    }
}

/// Metrics file layout: `{ "property_url": "...", "pages": { url: metrics } }`
#[derive(Debug, Deserialize)]
struct MetricsFile {
    #[serde(default)]
    property_url: String,
    pages: HashMap<String, SearchMetrics>,
}

/// Fixed metrics held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticMetrics {
    property_url: String,
    pages: HashMap<String, SearchMetrics>,
    zero_when_missing: bool,
}

impl StaticMetrics {
    /// Create an empty provider for a search property
    pub fn new<S: Into<String>>(property_url: S) -> Self {
        Self {
            property_url: property_url.into(),
            ..Self::default()
        }
    }

    /// Report zeros for known-empty pages instead of `None`
    pub fn zero_when_missing(mut self, zero: bool) -> Self {
        self.zero_when_missing = zero;
        self
    }

    /// Record metrics for a page URL
    pub fn insert(&mut self, page_url: &str, metrics: SearchMetrics) {
        let key = align_to_property(&self.property_url, page_url);
        self.pages.insert(key, metrics);
    }

    /// Load metrics from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading search metrics from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        let file: MetricsFile = serde_json::from_str(&raw)?;
        let mut metrics = StaticMetrics::new(file.property_url);
        for (url, page) in file.pages {
            metrics.insert(&url, page);
        }
        Ok(metrics)
    }
}

impl MetricsProvider for StaticMetrics {
    fn get_metrics(&self, permalink: &str) -> Option<SearchMetrics> {
        let key = align_to_property(&self.property_url, permalink);
        match self.pages.get(&key) {
            Some(metrics) => Some(*metrics),
            None if self.zero_when_missing => {
                debug!("No search data for {}; reporting zeros", key);
                Some(SearchMetrics::default())
            }
            None => None,
        }
    }
}

/// Provider that never has data
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetrics;

impl MetricsProvider for NoMetrics {
    fn get_metrics(&self, _permalink: &str) -> Option<SearchMetrics> {
        None
    }
}
