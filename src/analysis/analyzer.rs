//! On-page analysis
//!
//! Runs the seven checks against one document and assembles an
//! [`SeoReport`]. Each check fills one field and adds at most one suggestion
//! when it fails.

use crate::analysis::report::{AnalysisOutcome, SeoReport, Suggestion};
use crate::config::SeoConfig;
use crate::document::{Document, DocumentId};
use crate::extraction::{
    ContentExtractor, LinkExtractor, MarkupInspector, StructuredDataInspector,
};
use crate::store::ContentStore;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

/// Scores documents against a focus keyword
pub struct OnPageAnalyzer {
    config: SeoConfig,
    links: LinkExtractor,
    inspector: Box<dyn MarkupInspector>,
}

impl OnPageAnalyzer {
    /// Create an analyzer using the built-in structured data inspector
    pub fn new(config: SeoConfig) -> Self {
        Self::with_inspector(config, Box::new(StructuredDataInspector))
    }

    /// Create an analyzer with a custom FAQ markup probe
    pub fn with_inspector(config: SeoConfig, inspector: Box<dyn MarkupInspector>) -> Self {
        let links = LinkExtractor::new(config.site_url.clone());
        Self {
            config,
            links,
            inspector,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &SeoConfig {
        &self.config
    }

    /// Link extractor for a document.
    ///
    /// Uses the configured site URL, or the origin of the document's own
    /// permalink when none is configured.
    pub fn link_extractor_for(&self, document: &Document) -> LinkExtractor {
        if self.config.site_url.is_empty() {
            LinkExtractor::for_permalink(&document.permalink)
        } else {
            self.links.clone()
        }
    }

    /// Analyze a document, stamping the report with the current time
    pub fn analyze(&self, document: &Document, focus_keyword: &str) -> SeoReport {
        self.analyze_at(document, focus_keyword, Utc::now())
    }

    /// Look up a document and analyze it; a missing id yields a failed outcome
    #[instrument(skip(self, store))]
    pub fn analyze_by_id<S>(&self, store: &S, id: DocumentId, focus_keyword: &str) -> AnalysisOutcome
    where
        S: ContentStore + ?Sized,
    {
        match store.get_document(id) {
            Some(document) => AnalysisOutcome::Completed(self.analyze(&document, focus_keyword)),
            None => {
                warn!("Document {} not found for analysis", id);
                AnalysisOutcome::not_found(id)
            }
        }
    }

    /// Analyze a document with an explicit timestamp
    #[instrument(skip(self, document), fields(id = document.id))]
    pub fn analyze_at(
        &self,
        document: &Document,
        focus_keyword: &str,
        timestamp: DateTime<Utc>,
    ) -> SeoReport {
        info!("Analyzing document");

        let keyword = focus_keyword.trim();
        let mut suggestions: Vec<Suggestion> = Vec::new();

        // 1. keyword in title
        let keyword_in_title = if keyword.is_empty() {
            suggestions.push(Suggestion::NoFocusKeyword);
            true
        } else {
            let found = ContentExtractor::count_occurrences(&document.title, keyword) > 0;
            if !found {
                suggestions.push(Suggestion::KeywordNotInTitle {
                    keyword: keyword.to_string(),
                });
            }
            found
        };

        // 2. keyword density
        let content = ContentExtractor::extract(&document.body);
        let measurable = !keyword.is_empty() && content.word_count > 0;
        let keyword_density = if measurable {
            let occurrences = ContentExtractor::count_occurrences(&content.text, keyword);
            round2(occurrences as f64 / content.word_count as f64 * 100.0)
        } else {
            0.0
        };
        let keyword_density_ok = self.config.density_in_range(keyword_density);
        if measurable && !keyword_density_ok {
            let keyword = keyword.to_string();
            suggestions.push(if keyword_density < self.config.density_min {
                Suggestion::DensityTooLow {
                    keyword,
                    density: keyword_density,
                }
            } else {
                Suggestion::DensityTooHigh {
                    keyword,
                    density: keyword_density,
                }
            });
        }

        // 3. content length
        let content_length_ok = content.word_count >= self.config.min_word_count;
        if !content_length_ok {
            suggestions.push(Suggestion::ContentTooShort {
                words: content.word_count,
                minimum: self.config.min_word_count,
            });
        }

        // 4. image alt text
        let images_alt_present = match ContentExtractor::find_image_without_alt(&document.body) {
            Some(issue) => {
                debug!("Image {:?} fails alt check", issue.src);
                suggestions.push(Suggestion::MissingImageAlt);
                false
            }
            None => true,
        };

        // 5. links
        let links = self.link_extractor_for(document).extract(&document.body);
        let internal_links = links.internal.len();
        let external_links = links.external.len();
        if internal_links == 0 {
            suggestions.push(Suggestion::NoInternalLinks);
        }
        if external_links == 0 {
            suggestions.push(Suggestion::NoExternalLinks);
        }

        // 6. FAQ schema
        let schema_faq_present = self.inspector.has_faq_markup(&document.body);
        if !schema_faq_present {
            suggestions.push(Suggestion::NoFaqSchema);
        }

        let mut report = SeoReport {
            keyword_in_title,
            keyword_density,
            keyword_density_ok,
            content_length_ok,
            content_word_count: content.word_count,
            images_alt_present,
            internal_links,
            external_links,
            schema_faq_present,
            focus_keyword: keyword.to_string(),
            suggestions: suggestions.iter().map(ToString::to_string).collect(),
            score: 0.0,
            timestamp,
        };
        report.score = SeoReport::score_for(report.passed_checks());

        debug!(
            "Document scored {:.2} with {} suggestions",
            report.score,
            report.suggestions.len()
        );
        report
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysFaq;

    impl MarkupInspector for AlwaysFaq {
        fn has_faq_markup(&self, _raw_body: &str) -> bool {
            true
        }
    }

    fn analyzer() -> OnPageAnalyzer {
        OnPageAnalyzer::new(
            SeoConfig::builder()
                .site_url("https://site.example")
                .build()
                .unwrap(),
        )
    }

    fn words(n: usize) -> String {
        vec!["lorem"; n].join(" ")
    }

    #[test]
    fn test_empty_keyword_branch() {
        let doc = Document::new(1, "Title", format!("<p>{}</p>", words(10)), "https://site.example/t");
        let report = analyzer().analyze(&doc, "  ");

        assert!(report.keyword_in_title);
        assert_eq!(report.keyword_density, 0.0);
        assert!(!report.keyword_density_ok);
        assert!(report.suggestions[0].contains("No focus keyword"));
        assert!(!report.suggestions.iter().any(|s| s.contains("density")));
    }

    #[test]
    fn test_keyword_missing_from_title() {
        let doc = Document::new(1, "Gardening tips", "<p>widget</p>", "https://site.example/t");
        let report = analyzer().analyze(&doc, "Widget");
        assert!(!report.keyword_in_title);
        assert!(report.suggestions[0].contains("not found in the title"));
    }

    #[test]
    fn test_density_low_and_in_range() {
        // 1 occurrence in 300 words = 0.33%
        let low = Document::new(1, "widget", format!("widget {}", words(299)), "https://s/x");
        let report = analyzer().analyze(&low, "widget");
        assert_eq!(report.keyword_density, 0.33);
        assert!(report.suggestions.iter().any(|s| s.contains("too low")));

        // 3 occurrences in 300 words = 1%
        let ok = Document::new(1, "widget", format!("widget widget widget {}", words(297)), "https://s/x");
        let report = analyzer().analyze(&ok, "widget");
        assert_eq!(report.keyword_density, 1.0);
        assert!(report.keyword_density_ok);
        assert!(!report.suggestions.iter().any(|s| s.contains("density")));
    }

    #[test]
    fn test_zero_words_with_keyword() {
        let doc = Document::new(1, "widget", "<img src=\"a.png\" alt=\"x\">", "https://s/x");
        let report = analyzer().analyze(&doc, "widget");
        assert_eq!(report.content_word_count, 0);
        assert_eq!(report.keyword_density, 0.0);
        assert!(!report.suggestions.iter().any(|s| s.contains("density")));
    }

    #[test]
    fn test_custom_inspector() {
        let analyzer = OnPageAnalyzer::with_inspector(SeoConfig::default(), Box::new(AlwaysFaq));
        let doc = Document::new(1, "t", "", "https://site.example/t");
        let report = analyzer.analyze(&doc, "");
        assert!(report.schema_faq_present);
        assert!(!report.suggestions.iter().any(|s| s.contains("FAQ")));
    }

    #[test]
    fn test_site_url_falls_back_to_permalink_origin() {
        let analyzer = OnPageAnalyzer::new(SeoConfig::default());
        let doc = Document::new(
            1,
            "t",
            r#"<a href="https://blog.example/other">o</a><a href="https://else.example">e</a>"#,
            "https://blog.example/post",
        );
        let report = analyzer.analyze(&doc, "");
        assert_eq!(report.internal_links, 1);
        assert_eq!(report.external_links, 1);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(4.0), 4.0);
        assert_eq!(round2(1.0 / 3.0 * 100.0), 33.33);
    }
}
