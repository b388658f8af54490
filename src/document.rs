//! Documents under analysis
//!
//! A [`Document`] is a read-only view supplied by the content store. The
//! analyzer and link graph never mutate it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Opaque document identifier assigned by the content store
pub type DocumentId = u64;

/// Opaque taxonomy term identifier (category or tag)
pub type TermId = u64;

/// Kind of content a document represents
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Blog post
    #[default]
    Post,
    /// Static page
    Page,
    /// Any other content type, by slug
    #[serde(untagged)]
    Custom(String),
}

/// Publication status of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    /// Publicly visible
    #[default]
    Publish,
    /// Work in progress
    Draft,
    /// Awaiting review
    Pending,
    /// Visible to editors only
    Private,
    /// Scheduled
    Future,
}

/// A document as seen by the analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned id
    pub id: DocumentId,
    /// Document title
    pub title: String,
    /// Raw HTML body
    pub body: String,
    /// Absolute public URL of the document
    pub permalink: String,
    /// Content type
    #[serde(default)]
    pub content_type: ContentType,
    /// Publication status
    #[serde(default)]
    pub status: PublicationStatus,
    /// Category term ids
    #[serde(default)]
    pub category_ids: BTreeSet<TermId>,
    /// Tag term ids
    #[serde(default)]
    pub tag_ids: BTreeSet<TermId>,
}

impl Document {
    /// Create a published post with no taxonomy terms
    pub fn new<T, B, P>(id: DocumentId, title: T, body: B, permalink: P) -> Self
    where
        T: Into<String>,
        B: Into<String>,
        P: Into<String>,
    {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            permalink: permalink.into(),
            content_type: ContentType::Post,
            status: PublicationStatus::Publish,
            category_ids: BTreeSet::new(),
            tag_ids: BTreeSet::new(),
        }
    }

    /// Set the content type
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Set the publication status
    pub fn with_status(mut self, status: PublicationStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the category ids
    pub fn with_categories<I: IntoIterator<Item = TermId>>(mut self, ids: I) -> Self {
        self.category_ids = ids.into_iter().collect();
        self
    }

    /// Set the tag ids
    pub fn with_tags<I: IntoIterator<Item = TermId>>(mut self, ids: I) -> Self {
        self.tag_ids = ids.into_iter().collect();
        self
    }

    /// Whether the document carries any category or tag
    pub fn has_terms(&self) -> bool {
        !self.category_ids.is_empty() || !self.tag_ids.is_empty()
    }

    /// True if the two documents share a category or a tag
    pub fn shares_terms_with(&self, other: &Document) -> bool {
        !self.category_ids.is_disjoint(&other.category_ids)
            || !self.tag_ids.is_disjoint(&other.tag_ids)
    }
}

/// Taxonomy restriction for listing documents (OR across categories and tags)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxonomyFilter {
    /// Categories to match
    pub category_ids: BTreeSet<TermId>,
    /// Tags to match
    pub tag_ids: BTreeSet<TermId>,
}

/// Query for [`ContentStore::list_documents`](crate::store::ContentStore::list_documents)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    /// Accepted content types; empty accepts all
    pub content_types: Vec<ContentType>,
    /// Required status; `None` accepts all
    pub status: Option<PublicationStatus>,
    /// Taxonomy restriction; `None` accepts all
    pub taxonomy: Option<TaxonomyFilter>,
}

impl DocumentFilter {
    /// Published documents of the given types
    pub fn published(content_types: Vec<ContentType>) -> Self {
        Self {
            content_types,
            status: Some(PublicationStatus::Publish),
            taxonomy: None,
        }
    }

    /// Restrict to documents sharing a category or tag with `document`
    pub fn sharing_terms_with(mut self, document: &Document) -> Self {
        self.taxonomy = Some(TaxonomyFilter {
            category_ids: document.category_ids.clone(),
            tag_ids: document.tag_ids.clone(),
        });
        self
    }

    /// Whether a document satisfies the filter
    pub fn matches(&self, document: &Document) -> bool {
        if !self.content_types.is_empty() && !self.content_types.contains(&document.content_type) {
            return false;
        }
        if let Some(status) = self.status {
            if document.status != status {
                return false;
            }
        }
        match &self.taxonomy {
            Some(tax) => {
                !tax.category_ids.is_disjoint(&document.category_ids)
                    || !tax.tag_ids.is_disjoint(&document.tag_ids)
            }
            None => true,
        }
    }
}
