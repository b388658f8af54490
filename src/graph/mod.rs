//! Internal link graph
//!
//! Incoming link discovery and related content suggestions across a corpus.
//! Every query is a read-only pass over the documents it is given, so callers
//! may split a corpus across threads freely.

pub mod incoming;
pub mod related;

pub use incoming::{find_incoming_links, IncomingLinkEntry};
pub use related::{suggest_related, suggest_related_with_rng, LinkSuggestion};

use crate::config::SeoConfig;
use crate::document::Document;
use crate::extraction::LinkExtractor;

/// Link graph queries bound to a site configuration
#[derive(Debug, Clone)]
pub struct LinkGraph {
    extractor: Option<LinkExtractor>,
    no_anchor_text_label: String,
}

impl LinkGraph {
    /// Create a link graph for the configured site
    pub fn new(config: &SeoConfig) -> Self {
        let extractor = (!config.site_url.is_empty()).then(|| LinkExtractor::new(config.site_url.clone()));
        Self {
            extractor,
            no_anchor_text_label: config.no_anchor_text_label.clone(),
        }
    }

    /// Documents in `corpus` linking to `target`
    pub fn find_incoming_links<'a, I>(&self, target: &Document, corpus: I) -> Vec<IncomingLinkEntry>
    where
        I: IntoIterator<Item = &'a Document>,
    {
        let extractor = match &self.extractor {
            Some(extractor) => extractor.clone(),
            None => LinkExtractor::for_permalink(&target.permalink),
        };
        find_incoming_links(target, corpus, &extractor, &self.no_anchor_text_label)
    }

    /// Up to `limit` related documents from `corpus`
    pub fn suggest_related<'a, I>(&self, document: &Document, corpus: I, limit: usize) -> Vec<LinkSuggestion>
    where
        I: IntoIterator<Item = &'a Document>,
    {
        suggest_related(document, corpus, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_without_site_url_uses_target_origin() {
        let graph = LinkGraph::new(&SeoConfig::default());
        let target = Document::new(2, "B", "", "https://blog.example/b");
        let source = Document::new(1, "A", r#"<a href="/b">b</a>"#, "https://blog.example/a");
        let entries = graph.find_incoming_links(&target, [&source]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].source_document_id, 1);
    }

    #[test]
    fn test_custom_placeholder() {
        let config = SeoConfig::builder()
            .site_url("https://site.example")
            .no_anchor_text_label("(empty)")
            .build()
            .unwrap();
        let graph = LinkGraph::new(&config);
        let target = Document::new(2, "B", "", "https://site.example/b");
        let source = Document::new(1, "A", r#"<a href="/b"></a>"#, "https://site.example/a");
        let entries = graph.find_incoming_links(&target, [&source]);
        assert_eq!(entries[0].anchor_text, "(empty)");
    }
}
