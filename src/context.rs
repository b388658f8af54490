//! Analysis context
//!
//! [`SeoContext`] is built once by the entry point from a [`SeoConfig`] and
//! passed wherever analysis or link graph queries are needed. It owns no
//! documents; every call reads from the [`ContentStore`] it is handed.

use crate::analysis::{summarize, AnalysisOutcome, OnPageAnalyzer, SeoReport, SeoSummary, WEAKEST_LIMIT};
use crate::config::SeoConfig;
use crate::document::{DocumentFilter, DocumentId};
use crate::extraction::MarkupInspector;
use crate::graph::{IncomingLinkEntry, LinkGraph, LinkSuggestion};
use crate::search::{MetricsProvider, SearchMetrics};
use crate::store::ContentStore;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Analysis outcome merged with search metrics for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInsights {
    /// Document the insights describe
    pub document_id: DocumentId,
    /// On-page analysis
    pub analysis: AnalysisOutcome,
    /// Search metrics, absent when the provider has none
    pub metrics: Option<SearchMetrics>,
    /// Documents linking here
    pub incoming_links: Vec<IncomingLinkEntry>,
}

/// Entry point for analysis and link graph queries
pub struct SeoContext {
    analyzer: OnPageAnalyzer,
    graph: LinkGraph,
}

impl SeoContext {
    /// Create a context with the built-in FAQ markup inspector
    pub fn new(config: SeoConfig) -> Self {
        let graph = LinkGraph::new(&config);
        Self {
            analyzer: OnPageAnalyzer::new(config),
            graph,
        }
    }

    /// Create a context with a custom FAQ markup inspector
    pub fn with_inspector(config: SeoConfig, inspector: Box<dyn MarkupInspector>) -> Self {
        let graph = LinkGraph::new(&config);
        Self {
            analyzer: OnPageAnalyzer::with_inspector(config, inspector),
            graph,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &SeoConfig {
        self.analyzer.config()
    }

    /// The on-page analyzer
    pub fn analyzer(&self) -> &OnPageAnalyzer {
        &self.analyzer
    }

    /// The link graph
    pub fn graph(&self) -> &LinkGraph {
        &self.graph
    }

    /// Analyze the document with the given id
    pub fn analyze<S>(&self, store: &S, id: DocumentId, focus_keyword: &str) -> AnalysisOutcome
    where
        S: ContentStore + ?Sized,
    {
        self.analyzer.analyze_by_id(store, id, focus_keyword)
    }

    /// Published documents of the scanned types linking to `id`
    #[instrument(skip(self, store))]
    pub fn incoming_links<S>(&self, store: &S, id: DocumentId) -> Vec<IncomingLinkEntry>
    where
        S: ContentStore + ?Sized,
    {
        let Some(target) = store.get_document(id) else {
            debug!("Document {} not found; no incoming links", id);
            return Vec::new();
        };
        let corpus = store.list_documents(&DocumentFilter::published(self.config().scanned_types.clone()));
        self.graph.find_incoming_links(&target, &corpus)
    }

    /// Related published documents of the same type.
    ///
    /// Only documents of a scanned type get suggestions. `limit` defaults to
    /// the configured suggestion limit.
    #[instrument(skip(self, store))]
    pub fn related<S>(&self, store: &S, id: DocumentId, limit: Option<usize>) -> Vec<LinkSuggestion>
    where
        S: ContentStore + ?Sized,
    {
        let Some(document) = store.get_document(id) else {
            debug!("Document {} not found; no suggestions", id);
            return Vec::new();
        };
        if !self.config().scanned_types.contains(&document.content_type) {
            debug!("Content type {:?} is not eligible for suggestions", document.content_type);
            return Vec::new();
        }
        if !document.has_terms() {
            return Vec::new();
        }

        let filter = DocumentFilter::published(vec![document.content_type.clone()])
            .sharing_terms_with(&document);
        let corpus = store.list_documents(&filter);
        let limit = limit.unwrap_or(self.config().suggestion_limit);
        self.graph.suggest_related(&document, &corpus, limit)
    }

    /// Reuse `cached` while it is fresh, otherwise analyze again.
    ///
    /// A cached report is reused only if it was made for the same keyword and
    /// is not older than the configured maximum age at `now`.
    #[instrument(skip(self, store, cached))]
    pub fn refresh_report<S>(
        &self,
        store: &S,
        id: DocumentId,
        focus_keyword: &str,
        cached: Option<SeoReport>,
        now: DateTime<Utc>,
    ) -> AnalysisOutcome
    where
        S: ContentStore + ?Sized,
    {
        let max_age = Duration::seconds(i64::try_from(self.config().report_max_age_secs).unwrap_or(i64::MAX));
        if let Some(report) = cached {
            if report.focus_keyword == focus_keyword.trim() && !report.is_stale(now, max_age) {
                debug!("Reusing cached report from {}", report.timestamp);
                return AnalysisOutcome::Completed(report);
            }
            info!("Cached report is stale or for another keyword; re-analyzing");
        }

        match store.get_document(id) {
            Some(document) => {
                AnalysisOutcome::Completed(self.analyzer.analyze_at(&document, focus_keyword, now))
            }
            None => AnalysisOutcome::not_found(id),
        }
    }

    /// Score summary over stored reports.
    ///
    /// Only reports of published documents of the scanned types count; ids
    /// missing from the store are skipped.
    #[instrument(skip_all)]
    pub fn summary<'a, S, I>(&self, store: &S, reports: I) -> SeoSummary
    where
        S: ContentStore + ?Sized,
        I: IntoIterator<Item = (DocumentId, &'a SeoReport)>,
    {
        let filter = DocumentFilter::published(self.config().scanned_types.clone());
        let eligible: Vec<_> = reports
            .into_iter()
            .filter_map(|(id, report)| store.get_document(id).map(|doc| (doc, report)))
            .filter(|(doc, _)| filter.matches(doc))
            .collect();
        summarize(eligible.iter().map(|(doc, report)| (doc, *report)), WEAKEST_LIMIT)
    }

    /// Analysis, incoming links and search metrics for one document
    #[instrument(skip(self, store, metrics))]
    pub fn insights<S, M>(&self, store: &S, id: DocumentId, focus_keyword: &str, metrics: &M) -> PageInsights
    where
        S: ContentStore + ?Sized,
        M: MetricsProvider + ?Sized,
    {
        let analysis = self.analyze(store, id, focus_keyword);
        let metrics = store
            .get_document(id)
            .and_then(|doc| metrics.get_metrics(&doc.permalink));
        PageInsights {
            document_id: id,
            analysis,
            metrics,
            incoming_links: self.incoming_links(store, id),
        }
    }
}
