//! Smart SEO - On-Page Scoring & Internal Link Graph Analysis
//!
//! This crate scores a document's on-page SEO quality and maps the internal
//! links of a content corpus.
//!
//! # Features
//!
//! - **On-Page Analysis**: Keyword in title, keyword density, content length,
//!   image alt text, internal/external links and FAQ structured data, rolled
//!   into a 0-100 score with ordered improvement suggestions
//! - **Link Extraction**: Anchor parsing with internal/external classification
//! - **Link Graph**: Incoming links to a document and related content
//!   suggestions by shared categories and tags
//! - **Search Metrics**: Merging of externally fetched click/CTR/position data
//!
//! # Architecture
//!
//! ```text
//! ContentStore ──▶ SeoContext
//!                     │
//!          ┌──────────┴───────────┐
//!          ▼                      ▼
//!   ┌──────────────┐       ┌────────────┐
//!   │ OnPageAnalyzer│       │ LinkGraph  │
//!   └──────┬───────┘       └─────┬──────┘
//!          │   LinkExtractor     │
//!          ▼                     ▼
//!      SeoReport     IncomingLinkEntry / LinkSuggestion
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use smart_seo::{Document, OnPageAnalyzer, SeoConfig};
//!
//! let config = SeoConfig::builder()
//!     .site_url("https://site.example")
//!     .build()
//!     .expect("valid config");
//! let analyzer = OnPageAnalyzer::new(config);
//!
//! let doc = Document::new(
//!     1,
//!     "Best Widget Guide",
//!     r#"<p>Widgets explained.</p><a href="https://site.example/more">More</a>"#,
//!     "https://site.example/widgets",
//! );
//! let report = analyzer.analyze(&doc, "widget");
//!
//! assert!(report.keyword_in_title);
//! assert_eq!(report.internal_links, 1);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod analysis;
pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod extraction;
pub mod graph;
pub mod search;
pub mod store;

// Re-exports for convenience
pub use analysis::{AnalysisOutcome, OnPageAnalyzer, SeoReport, SeoSummary};
pub use config::SeoConfig;
pub use context::{PageInsights, SeoContext};
pub use document::{ContentType, Document, DocumentFilter, DocumentId, PublicationStatus};
pub use error::{Error, Result};
pub use extraction::{extract_links, LinkExtractor, LinkRecord, MarkupInspector};
pub use graph::{IncomingLinkEntry, LinkGraph, LinkSuggestion};
pub use search::{MetricsProvider, SearchMetrics};
pub use store::{ContentStore, InMemoryStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
