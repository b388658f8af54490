//! Content extraction module
//!
//! This module parses raw document HTML: plain text and word counts, image
//! alt text, classified links, and structured data probes.

pub mod content;
pub mod links;
pub mod markup;

pub use content::{ContentExtractor, ExtractedContent, ImageIssue};
pub use links::{extract_links, normalize_url, ExtractedLinks, LinkExtractor, LinkRecord, LinkType};
pub use markup::{MarkupInspector, StructuredDataInspector};
