//! Link extraction
//!
//! This module finds every anchor in a raw HTML body, resolves its target
//! against the site's permalink base and classifies it as internal or
//! external.

use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

/// Type of link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// Target lives under the site's permalink base
    Internal,
    /// Anything else
    External,
}

/// One anchor occurrence in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Resolved target URL
    pub url: String,
    /// Visible anchor text with inline markup stripped; may be empty
    pub anchor_text: String,
    /// Whether the target is internal to the site
    pub is_internal: bool,
}

impl LinkRecord {
    /// Classification as a [`LinkType`]
    pub fn link_type(&self) -> LinkType {
        if self.is_internal {
            LinkType::Internal
        } else {
            LinkType::External
        }
    }
}

/// Links found in one document, split by type and kept in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedLinks {
    /// Links under the site's permalink base
    pub internal: Vec<LinkRecord>,
    /// All other links
    pub external: Vec<LinkRecord>,
}

impl ExtractedLinks {
    /// Total number of links
    pub fn len(&self) -> usize {
        self.internal.len() + self.external.len()
    }

    /// Whether no links were found
    pub fn is_empty(&self) -> bool {
        self.internal.is_empty() && self.external.is_empty()
    }
}

/// Extracts and classifies anchors relative to a site's permalink base
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    /// Permalink base with trailing slashes removed
    prefix: String,
    /// Parsed base used to resolve relative hrefs
    base: Option<Url>,
}

impl LinkExtractor {
    /// Create an extractor for the given site permalink base
    pub fn new<S: Into<String>>(site_prefix: S) -> Self {
        let raw = site_prefix.into();
        let trimmed = raw.trim();
        let base = Url::parse(trimmed).ok();
        if base.is_none() && !trimmed.is_empty() {
            debug!("Site prefix {:?} is not an absolute URL; relative links will be skipped", trimmed);
        }
        // Compare against the parsed form so it matches resolved hrefs
        let prefix = match &base {
            Some(url) => url.as_str().trim_end_matches('/').to_string(),
            None => trimmed.trim_end_matches('/').to_string(),
        };
        Self { prefix, base }
    }

    /// Create an extractor whose base is the origin of `permalink`
    pub fn for_permalink(permalink: &str) -> Self {
        let origin = Url::parse(permalink.trim())
            .ok()
            .map(|url| url.origin())
            .filter(|origin| origin.is_tuple())
            .map(|origin| origin.ascii_serialization())
            .unwrap_or_default();
        Self::new(origin)
    }

    /// The normalized permalink base
    pub fn site_prefix(&self) -> &str {
        &self.prefix
    }

    /// Extract every anchor with an href from the body
    #[instrument(skip(self, html), fields(len = html.len()))]
    pub fn extract(&self, html: &str) -> ExtractedLinks {
        let fragment = Html::parse_fragment(html);
        let mut links = ExtractedLinks::default();

        for anchor in fragment
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "a")
        {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            let Some(url) = self.resolve(href) else {
                debug!("Skipping unusable href {:?}", href);
                continue;
            };

            let is_internal = self.is_internal(&url);
            let record = LinkRecord {
                url,
                anchor_text: anchor_text(&anchor),
                is_internal,
            };
            if is_internal {
                links.internal.push(record);
            } else {
                links.external.push(record);
            }
        }

        debug!(
            "Extracted {} internal and {} external links",
            links.internal.len(),
            links.external.len()
        );
        links
    }

    /// Resolve an href to an absolute http(s) URL.
    ///
    /// Absolute and relative hrefs both come back in `url`'s serialized form
    /// (see [`normalize_url`]), so the result compares exactly against a
    /// normalized permalink. Relative URLs are joined onto the site base. Empty
    /// hrefs, same-page fragments, non-web schemes (`mailto:`, `tel:`,
    /// `javascript:`) and unparseable values yield `None`.
    pub fn resolve(&self, href: &str) -> Option<String> {
        let href = href.trim();
        if href.is_empty() || href.starts_with('#') {
            return None;
        }

        match Url::parse(href) {
            Ok(url) => web_url(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .base
                .as_ref()
                .and_then(|base| base.join(href).ok())
                .map(|url| url.to_string()),
            Err(_) => None,
        }
    }

    /// Whether a resolved URL equals the site base or lies beneath it
    pub fn is_internal(&self, url: &str) -> bool {
        if self.prefix.is_empty() {
            return false;
        }
        match url.strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
            None => false,
        }
    }
}

/// Serialize an absolute http(s) URL the way resolved hrefs are serialized.
///
/// The host is lowercased and non-ASCII path characters are percent-encoded.
/// Returns `None` for relative, unparseable or non-web URLs.
pub fn normalize_url(raw: &str) -> Option<String> {
    Url::parse(raw.trim()).ok().and_then(web_url)
}

fn web_url(url: Url) -> Option<String> {
    match url.scheme() {
        "http" | "https" => Some(url.to_string()),
        _ => None,
    }
}

/// Extract links from `html`, classifying them against `site_prefix`
pub fn extract_links(html: &str, site_prefix: &str) -> ExtractedLinks {
    LinkExtractor::new(site_prefix).extract(html)
}

/// Plain text of an anchor with whitespace collapsed
fn anchor_text(anchor: &ElementRef<'_>) -> String {
    anchor
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
