//! Body text extraction
//!
//! This module turns a raw HTML body into plain text, counts words and
//! keyword occurrences, and audits `<img>` tags for alt text.

use crate::error::ExtractionError;
use regex::{Regex, RegexBuilder};
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Elements whose text never reaches the reader
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Plain-text view of a document body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    /// Text with all markup removed and whitespace collapsed
    pub text: String,
    /// Word count
    pub word_count: usize,
    /// Character count
    pub char_count: usize,
}

/// An `<img>` tag that fails the alt text check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageIssue {
    /// The image source, if any
    pub src: Option<String>,
    /// Whether the alt attribute is missing entirely (vs. present but empty)
    pub alt_missing: bool,
}

/// Content extraction functionality
pub struct ContentExtractor;

impl ContentExtractor {
    /// Strip markup and count words
    pub fn extract(html: &str) -> ExtractedContent {
        let text = Self::html_to_text(html);
        let word_count = Self::count_words(&text);
        let char_count = text.chars().count();
        debug!("Extracted {} words, {} chars", word_count, char_count);
        ExtractedContent {
            text,
            word_count,
            char_count,
        }
    }

    /// Convert HTML to plain text.
    ///
    /// Text nodes are joined with a space so adjacent block elements do not
    /// fuse their words together. Script and style contents are dropped and
    /// entities are decoded by the parser.
    pub fn html_to_text(html: &str) -> String {
        let fragment = Html::parse_fragment(html);
        let mut pieces: Vec<&str> = Vec::new();

        for node in fragment.root_element().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|el| HIDDEN_ELEMENTS.contains(&el.value().name()));
            if !hidden {
                pieces.extend(text.split_whitespace());
            }
        }

        pieces.join(" ")
    }

    /// Count words in plain text.
    ///
    /// A word is a run of letters or digits, optionally joined by apostrophes,
    /// hyphens or zero-width non-joiners.
    pub fn count_words(text: &str) -> usize {
        text.split(|c: char| !is_word_char(c))
            .filter(|w| w.chars().any(char::is_alphanumeric))
            .count()
    }

    /// Count case-insensitive, non-overlapping occurrences of `keyword`
    pub fn count_occurrences(text: &str, keyword: &str) -> usize {
        if keyword.is_empty() {
            return 0;
        }
        match keyword_pattern(keyword) {
            Ok(re) => re.find_iter(text).count(),
            Err(e) => {
                warn!("{}; falling back to lowercase matching", e);
                text.to_lowercase().matches(&keyword.to_lowercase()).count()
            }
        }
    }

    /// Return the first `<img>` lacking a usable alt attribute.
    ///
    /// An image fails when `alt` is absent or holds only whitespace. Scanning
    /// stops at the first failure.
    pub fn find_image_without_alt(html: &str) -> Option<ImageIssue> {
        let fragment = Html::parse_fragment(html);
        let mut images = fragment
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "img");

        images.find_map(|img| {
            let alt = img.value().attr("alt");
            let ok = alt.is_some_and(|a| !a.trim().is_empty());
            (!ok).then(|| ImageIssue {
                src: img.value().attr("src").map(String::from),
                alt_missing: alt.is_none(),
            })
        })
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '\'' | '\u{2019}' | '-' | '\u{200c}')
}

fn keyword_pattern(keyword: &str) -> Result<Regex, ExtractionError> {
    RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .map_err(|e| ExtractionError::InvalidPattern(e.to_string()))
}
