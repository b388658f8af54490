//! Corpus-wide score summary
//!
//! Aggregates reports that were already produced: how many fall in each
//! [`ScoreBand`], the average score and the weakest documents.

use crate::analysis::report::{ScoreBand, SeoReport};
use crate::document::{Document, DocumentId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default number of weakest documents listed in a summary
pub const WEAKEST_LIMIT: usize = 10;

/// A low-scoring document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeakDocument {
    /// Document id
    pub document_id: DocumentId,
    /// Document title
    pub title: String,
    /// Score rounded to 2 decimals
    pub score: f64,
}

/// Score distribution over a set of analyzed documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoSummary {
    /// Number of reports summarized
    pub analyzed: usize,
    /// Reports scoring 80 and above
    pub good: usize,
    /// Reports scoring 50 to below 80
    pub fair: usize,
    /// Reports scoring below 50
    pub poor: usize,
    /// Mean score rounded to 2 decimals; absent when nothing was analyzed
    pub average_score: Option<f64>,
    /// Lowest scores first, ties by document id
    pub weakest: Vec<WeakDocument>,
}

/// Summarize `reports`, listing at most `weakest_limit` weakest documents
#[instrument(skip_all, fields(weakest_limit = weakest_limit))]
pub fn summarize<'a, I>(reports: I, weakest_limit: usize) -> SeoSummary
where
    I: IntoIterator<Item = (&'a Document, &'a SeoReport)>,
{
    let mut summary = SeoSummary::default();
    let mut total = 0.0;
    let mut ranked = Vec::new();

    for (document, report) in reports {
        summary.analyzed += 1;
        total += report.score;
        match report.band() {
            ScoreBand::Good => summary.good += 1,
            ScoreBand::Fair => summary.fair += 1,
            ScoreBand::Poor => summary.poor += 1,
        }
        ranked.push((report.score, document.id, document.title.as_str(), report.display_score()));
    }

    if summary.analyzed > 0 {
        let mean = total / summary.analyzed as f64;
        summary.average_score = Some((mean * 100.0).round() / 100.0);
    }

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    summary.weakest = ranked
        .into_iter()
        .take(weakest_limit)
        .map(|(_, document_id, title, score)| WeakDocument {
            document_id,
            title: title.to_string(),
            score,
        })
        .collect();

    debug!(
        "Summarized {} reports: {} good, {} fair, {} poor",
        summary.analyzed, summary.good, summary.fair, summary.poor
    );
    summary
}
