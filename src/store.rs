//! Content store access
//!
//! The host system owns the documents. The core only needs lookup by id and
//! filtered listing, expressed by [`ContentStore`]. [`InMemoryStore`] backs the
//! command line tool and the tests.

use crate::document::{Document, DocumentFilter, DocumentId};
use crate::error::{Result, StoreError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Read access to the documents of a site
pub trait ContentStore {
    /// Look up a document by id
    fn get_document(&self, id: DocumentId) -> Option<Document>;

    /// List every document matching the filter
    fn list_documents(&self, filter: &DocumentFilter) -> Vec<Document>;
}

/// Corpus file layout: `{ "documents": [ ... ] }`
#[derive(Debug, Deserialize)]
struct CorpusFile {
    documents: Vec<Document>,
}

/// Document store held in memory, ordered by id
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    documents: BTreeMap<DocumentId, Document>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from documents, rejecting duplicate ids
    pub fn from_documents<I>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = Document>,
    {
        let mut store = Self::new();
        for doc in documents {
            let id = doc.id;
            if store.documents.insert(id, doc).is_some() {
                return Err(StoreError::DuplicateId(id).into());
            }
        }
        Ok(store)
    }

    /// Parse a JSON corpus from a reader
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let corpus: CorpusFile = serde_json::from_reader(reader)
            .map_err(|e| StoreError::ParsingFailed(e.to_string()))?;
        debug!("Parsed corpus with {} documents", corpus.documents.len());
        Self::from_documents(corpus.documents)
    }

    /// Load a JSON corpus file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading corpus from {}", path.display());
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Insert or replace a document
    pub fn insert(&mut self, document: Document) -> Option<Document> {
        self.documents.insert(document.id, document)
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl ContentStore for InMemoryStore {
    fn get_document(&self, id: DocumentId) -> Option<Document> {
        self.documents.get(&id).cloned()
    }

    fn list_documents(&self, filter: &DocumentFilter) -> Vec<Document> {
        self.documents
            .values()
            .filter(|doc| filter.matches(doc))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ContentType, PublicationStatus};
    use crate::error::Error;

    fn sample() -> InMemoryStore {
        InMemoryStore::from_documents(vec![
            Document::new(1, "One", "", "https://s/1"),
            Document::new(2, "Two", "", "https://s/2").with_status(PublicationStatus::Draft),
            Document::new(3, "Three", "", "https://s/3").with_content_type(ContentType::Page),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_document() {
        let store = sample();
        assert_eq!(store.get_document(1).map(|d| d.title), Some("One".to_string()));
        assert!(store.get_document(99).is_none());
    }

    #[test]
    fn test_list_published() {
        let store = sample();
        let docs = store.list_documents(&DocumentFilter::published(vec![
            ContentType::Post,
            ContentType::Page,
        ]));
        let ids: Vec<_> = docs.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = InMemoryStore::from_documents(vec![
            Document::new(1, "A", "", "https://s/a"),
            Document::new(1, "B", "", "https://s/b"),
        ]);
        assert!(matches!(result, Err(Error::Store(StoreError::DuplicateId(1)))));
    }

    #[test]
    fn test_from_json_reader() {
        let json = r#"{"documents": [
            {"id": 5, "title": "Five", "body": "<p>x</p>", "permalink": "https://s/5",
             "content_type": "page", "category_ids": [1, 2]}
        ]}"#;
        let store = InMemoryStore::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(store.len(), 1);
        let doc = store.get_document(5).unwrap();
        assert_eq!(doc.content_type, ContentType::Page);
        assert_eq!(doc.category_ids.len(), 2);
    }

    #[test]
    fn test_malformed_json() {
        let result = InMemoryStore::from_json_reader("{ not json".as_bytes());
        assert!(matches!(result, Err(Error::Store(StoreError::ParsingFailed(_)))));
    }
}
