//! Incoming link discovery
//!
//! Scans every other document of a corpus for anchors pointing at a target
//! permalink. This is a full scan per call; index externally if it runs hot.

use crate::document::{Document, DocumentId};
use crate::extraction::{normalize_url, LinkExtractor};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One anchor in another document that targets the document of interest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingLinkEntry {
    /// Document containing the anchor
    pub source_document_id: DocumentId,
    /// Title of that document
    pub source_title: String,
    /// Anchor text, or the configured placeholder when empty
    pub anchor_text: String,
}

/// Collect every internal anchor in `corpus` whose URL equals `target`'s permalink.
///
/// Both sides are compared in normalized form, so `/سلام` and
/// `https://site.example/سلام` reach the same target.
///
/// The target itself is never scanned. Repeated anchors yield repeated
/// entries. Empty anchor text is replaced by `no_anchor_text_label`.
#[instrument(skip_all, fields(target = target.id))]
pub fn find_incoming_links<'a, I>(
    target: &Document,
    corpus: I,
    extractor: &LinkExtractor,
    no_anchor_text_label: &str,
) -> Vec<IncomingLinkEntry>
where
    I: IntoIterator<Item = &'a Document>,
{
    info!("Scanning corpus for links to {}", target.permalink);

    let raw = target.permalink.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    let permalink = normalize_url(raw).unwrap_or_else(|| raw.to_string());

    let mut entries = Vec::new();
    let mut scanned = 0usize;

    for source in corpus.into_iter().filter(|doc| doc.id != target.id) {
        scanned += 1;
        let links = extractor.extract(&source.body);
        entries.extend(
            links
                .internal
                .into_iter()
                .filter(|link| link.url == permalink)
                .map(|link| IncomingLinkEntry {
                    source_document_id: source.id,
                    source_title: source.title.clone(),
                    anchor_text: if link.anchor_text.is_empty() {
                        no_anchor_text_label.to_string()
                    } else {
                        link.anchor_text
                    },
                }),
        );
    }

    debug!("Found {} incoming links across {} documents", entries.len(), scanned);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NO_ANCHOR_TEXT;

    const SITE: &str = "https://site.example";

    #[test]
    fn test_single_incoming_link() {
        let b = Document::new(2, "B", "", "https://site.example/b");
        let a = Document::new(1, "A", r#"<a href="https://site.example/b">see B</a>"#, "https://site.example/a");
        let c = Document::new(3, "C", "<p>nothing</p>", "https://site.example/c");

        let entries = find_incoming_links(&b, [&a, &c], &LinkExtractor::new(SITE), NO_ANCHOR_TEXT);
        assert_eq!(
            entries,
            vec![IncomingLinkEntry {
                source_document_id: 1,
                source_title: "A".to_string(),
                anchor_text: "see B".to_string(),
            }]
        );
    }

    #[test]
    fn test_self_links_ignored() {
        let b = Document::new(2, "B", r#"<a href="https://site.example/b">me</a>"#, "https://site.example/b");
        let entries = find_incoming_links(&b, [&b], &LinkExtractor::new(SITE), NO_ANCHOR_TEXT);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_duplicates_and_placeholder() {
        let b = Document::new(2, "B", "", "https://site.example/b");
        let a = Document::new(
            1,
            "A",
            r#"<a href="/b">first</a><a href="https://site.example/b"><img src="i.png"></a>"#,
            "https://site.example/a",
        );
        let entries = find_incoming_links(&b, [&a], &LinkExtractor::new(SITE), NO_ANCHOR_TEXT);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].anchor_text, "first");
        assert_eq!(entries[1].anchor_text, NO_ANCHOR_TEXT);
    }

    #[test]
    fn test_exact_match_only() {
        let b = Document::new(2, "B", "", "https://site.example/b");
        let a = Document::new(
            1,
            "A",
            r#"<a href="https://site.example/b/">slash</a><a href="https://site.example/b?x=1">query</a>"#,
            "https://site.example/a",
        );
        let entries = find_incoming_links(&b, [&a], &LinkExtractor::new(SITE), NO_ANCHOR_TEXT);
        assert!(entries.is_empty());
    }
}
