//! On-page SEO analysis
//!
//! Scores a document on keyword usage, length, image alt text, links and FAQ
//! structured data, and summarizes scores across a corpus.

pub mod analyzer;
pub mod report;
pub mod summary;

pub use analyzer::OnPageAnalyzer;
pub use report::{
    AnalysisFailure, AnalysisOutcome, ScoreBand, SeoReport, Suggestion, CRITERIA_COUNT,
};
pub use summary::{summarize, SeoSummary, WeakDocument, WEAKEST_LIMIT};
