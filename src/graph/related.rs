//! Related content suggestions
//!
//! Picks documents of the same type that share a category or a tag with the
//! source document. Selection among qualifying documents is random.

use crate::document::Document;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A document worth linking to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkSuggestion {
    /// Title of the related document
    pub title: String,
    /// Its permalink
    pub url: String,
}

/// Suggest up to `limit` related documents using the thread-local RNG
pub fn suggest_related<'a, I>(document: &Document, corpus: I, limit: usize) -> Vec<LinkSuggestion>
where
    I: IntoIterator<Item = &'a Document>,
{
    suggest_related_with_rng(document, corpus, limit, &mut rand::rng())
}

/// Suggest up to `limit` related documents, drawing from `rng`.
///
/// Candidates share the document's content type, are not the document itself
/// and share at least one category or tag. A document without categories and
/// tags gets no suggestions.
#[instrument(skip_all, fields(id = document.id, limit = limit))]
pub fn suggest_related_with_rng<'a, I, R>(
    document: &Document,
    corpus: I,
    limit: usize,
    rng: &mut R,
) -> Vec<LinkSuggestion>
where
    I: IntoIterator<Item = &'a Document>,
    R: Rng + ?Sized,
{
    if limit == 0 || !document.has_terms() {
        return Vec::new();
    }

    let mut pool: Vec<&Document> = corpus
        .into_iter()
        .filter(|candidate| {
            candidate.id != document.id
                && candidate.content_type == document.content_type
                && document.shares_terms_with(candidate)
        })
        .collect();

    debug!("{} related candidates", pool.len());

    pool.shuffle(rng);
    pool.into_iter()
        .take(limit)
        .map(|doc| LinkSuggestion {
            title: doc.title.clone(),
            url: doc.permalink.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ContentType;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new(1, "Source", "", "https://s/1").with_categories([10]).with_tags([100]),
            Document::new(2, "Same category", "", "https://s/2").with_categories([10]),
            Document::new(3, "Same tag", "", "https://s/3").with_tags([100]),
            Document::new(4, "Unrelated", "", "https://s/4").with_categories([11]),
            Document::new(5, "Page sharing", "", "https://s/5")
                .with_categories([10])
                .with_content_type(ContentType::Page),
        ]
    }

    #[test]
    fn test_candidates_share_terms_and_type() {
        let docs = corpus();
        let mut rng = StdRng::seed_from_u64(7);
        let got: HashSet<_> = suggest_related_with_rng(&docs[0], &docs, 10, &mut rng)
            .into_iter()
            .map(|s| s.url)
            .collect();
        let want: HashSet<_> = ["https://s/2", "https://s/3"].into_iter().map(String::from).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn test_limit_respected() {
        let docs = corpus();
        let got = suggest_related(&docs[0], &docs, 1);
        assert_eq!(got.len(), 1);
        assert!(got[0].url == "https://s/2" || got[0].url == "https://s/3");
    }

    #[test]
    fn test_no_terms_no_suggestions() {
        let docs = corpus();
        let bare = Document::new(9, "Bare", "", "https://s/9");
        assert!(suggest_related(&bare, &docs, 5).is_empty());
    }

    #[test]
    fn test_zero_limit() {
        let docs = corpus();
        assert!(suggest_related(&docs[0], &docs, 0).is_empty());
    }
}
