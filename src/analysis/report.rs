//! SEO report types
//!
//! [`SeoReport`] is produced fresh on every analysis. Callers decide whether
//! and how long to keep it; [`SeoReport::is_stale`] supports that decision.

use crate::document::DocumentId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of pass/fail criteria contributing to the score
pub const CRITERIA_COUNT: usize = 7;

/// On-page SEO report for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoReport {
    /// Focus keyword found in the title (true when no keyword is set)
    pub keyword_in_title: bool,
    /// Keyword occurrences per hundred words, rounded to 2 decimals
    pub keyword_density: f64,
    /// Density falls inside the configured window
    pub keyword_density_ok: bool,
    /// Word count meets the configured minimum
    pub content_length_ok: bool,
    /// Words in the body's plain text
    pub content_word_count: usize,
    /// Every image carries non-empty alt text (true when there are no images)
    pub images_alt_present: bool,
    /// Number of internal link occurrences
    pub internal_links: usize,
    /// Number of external link occurrences
    pub external_links: usize,
    /// FAQ structured data detected
    pub schema_faq_present: bool,
    /// Keyword the document was analyzed against
    pub focus_keyword: String,
    /// Improvement hints in check order
    pub suggestions: Vec<String>,
    /// Share of passing criteria, 0 to 100, unrounded
    pub score: f64,
    /// When the analysis ran
    pub timestamp: DateTime<Utc>,
}

impl SeoReport {
    /// Number of the seven criteria that pass
    pub fn passed_checks(&self) -> usize {
        [
            self.keyword_in_title,
            self.keyword_density_ok,
            self.content_length_ok,
            self.images_alt_present,
            self.internal_links > 0,
            self.external_links > 0,
            self.schema_faq_present,
        ]
        .into_iter()
        .filter(|passed| *passed)
        .count()
    }

    /// Score for a number of passing criteria
    pub fn score_for(passed: usize) -> f64 {
        passed as f64 / CRITERIA_COUNT as f64 * 100.0
    }

    /// Score rounded to 2 decimals for display
    pub fn display_score(&self) -> f64 {
        (self.score * 100.0).round() / 100.0
    }

    /// Traffic-light band of the score
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// Whether the report is older than `max_age` at `now`
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        now.signed_duration_since(self.timestamp) > max_age
    }
}

/// Coarse rating of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 80 and above
    Good,
    /// 50 to below 80
    Fair,
    /// Below 50
    Poor,
}

impl ScoreBand {
    /// Band for a raw score
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Good
        } else if score >= 50.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

/// Result of analyzing a document looked up by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    /// Analysis ran
    Completed(SeoReport),
    /// The document could not be resolved
    Failed(AnalysisFailure),
}

impl AnalysisOutcome {
    /// Failed outcome for a missing document
    pub fn not_found(document_id: DocumentId) -> Self {
        AnalysisOutcome::Failed(AnalysisFailure {
            success: false,
            document_id,
            message: "Document not found for analysis.".to_string(),
        })
    }

    /// Whether the analysis ran
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisOutcome::Completed(_))
    }

    /// The report, if the analysis ran
    pub fn report(&self) -> Option<&SeoReport> {
        match self {
            AnalysisOutcome::Completed(report) => Some(report),
            AnalysisOutcome::Failed(_) => None,
        }
    }

    /// Take the report, if the analysis ran
    pub fn into_report(self) -> Option<SeoReport> {
        match self {
            AnalysisOutcome::Completed(report) => Some(report),
            AnalysisOutcome::Failed(_) => None,
        }
    }
}

/// Diagnostic returned instead of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    /// Always false
    pub success: bool,
    /// Id that was requested
    pub document_id: DocumentId,
    /// Human-readable reason
    pub message: String,
}

/// A failed check and the hint shown for it
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestion {
    /// No focus keyword was given
    NoFocusKeyword,
    /// Keyword absent from the title
    KeywordNotInTitle {
        /// Focus keyword
        keyword: String,
    },
    /// Density below the window
    DensityTooLow {
        /// Focus keyword
        keyword: String,
        /// Measured density
        density: f64,
    },
    /// Density above the window
    DensityTooHigh {
        /// Focus keyword
        keyword: String,
        /// Measured density
        density: f64,
    },
    /// Not enough words
    ContentTooShort {
        /// Measured word count
        words: usize,
        /// Required word count
        minimum: usize,
    },
    /// Some image lacks alt text
    MissingImageAlt,
    /// No internal links
    NoInternalLinks,
    /// No external links
    NoExternalLinks,
    /// No FAQ structured data
    NoFaqSchema,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::NoFocusKeyword => write!(
                f,
                "No focus keyword is defined for this document. Set one to get a more precise analysis."
            ),
            Suggestion::KeywordNotInTitle { keyword } => write!(
                f,
                "The focus keyword (\"{}\") was not found in the title. Try to include it in the title.",
                keyword
            ),
            Suggestion::DensityTooLow { keyword, density } => write!(
                f,
                "Keyword density for \"{}\" is too low ({:.2}%). Repeat the keyword naturally in the content.",
                keyword, density
            ),
            Suggestion::DensityTooHigh { keyword, density } => write!(
                f,
                "Keyword density for \"{}\" is too high ({:.2}%). Watch out for keyword stuffing and use synonyms.",
                keyword, density
            ),
            Suggestion::ContentTooShort { words, minimum } => write!(
                f,
                "The content is short ({} words). Expand it to at least {} words for better SEO.",
                words, minimum
            ),
            Suggestion::MissingImageAlt => write!(
                f,
                "Some images have no alt text or an empty alt text. Descriptive alt text helps image SEO and accessibility."
            ),
            Suggestion::NoInternalLinks => write!(
                f,
                "This document has no internal links. Linking to related content on the site matters for SEO and navigation."
            ),
            Suggestion::NoExternalLinks => write!(
                f,
                "This document has no external links. Linking to reputable sources can strengthen its credibility."
            ),
            Suggestion::NoFaqSchema => write!(
                f,
                "No FAQ schema markup was found. If the document answers questions, FAQ schema can make it stand out in search results."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(score_inputs: [bool; 7]) -> SeoReport {
        let [title, density, length, images, internal, external, faq] = score_inputs;
        let mut report = SeoReport {
            keyword_in_title: title,
            keyword_density: if density { 1.0 } else { 0.0 },
            keyword_density_ok: density,
            content_length_ok: length,
            content_word_count: 0,
            images_alt_present: images,
            internal_links: usize::from(internal),
            external_links: usize::from(external),
            schema_faq_present: faq,
            focus_keyword: String::new(),
            suggestions: Vec::new(),
            score: 0.0,
            timestamp: Utc::now(),
        };
        report.score = SeoReport::score_for(report.passed_checks());
        report
    }

    #[test]
    fn test_passed_checks() {
        assert_eq!(report([true; 7]).passed_checks(), 7);
        assert_eq!(report([false; 7]).passed_checks(), 0);
        assert_eq!(
            report([true, false, true, false, true, false, true]).passed_checks(),
            4
        );
    }

    #[test]
    fn test_display_score() {
        let r = report([true, false, false, false, false, false, false]);
        assert_eq!(r.display_score(), 14.29);
        let r = report([true, true, false, false, false, false, false]);
        assert_eq!(r.display_score(), 28.57);
        assert_eq!(report([true; 7]).display_score(), 100.0);
    }

    #[test]
    fn test_score_band() {
        assert_eq!(ScoreBand::from_score(85.71), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(57.14), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(42.86), ScoreBand::Poor);
    }

    #[test]
    fn test_is_stale() {
        let mut r = report([true; 7]);
        let now = Utc::now();
        r.timestamp = now - Duration::hours(25);
        assert!(r.is_stale(now, Duration::hours(24)));
        r.timestamp = now - Duration::hours(23);
        assert!(!r.is_stale(now, Duration::hours(24)));
    }

    #[test]
    fn test_not_found_outcome_serialization() {
        let outcome = AnalysisOutcome::not_found(42);
        assert!(!outcome.is_success());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["document_id"], 42);
        assert!(json["message"].as_str().unwrap().contains("not found"));
    }

    #[test]
    fn test_suggestion_text() {
        let s = Suggestion::DensityTooHigh {
            keyword: "widget".to_string(),
            density: 4.0,
        };
        assert_eq!(
            s.to_string(),
            "Keyword density for \"widget\" is too high (4.00%). Watch out for keyword stuffing and use synonyms."
        );
        let s = Suggestion::ContentTooShort {
            words: 50,
            minimum: 300,
        };
        assert!(s.to_string().contains("50 words"));
        assert!(s.to_string().contains("300 words"));
    }
}
