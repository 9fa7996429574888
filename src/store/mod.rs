//! Content store - the repository boundary between ingestion and rendering
//!
//! The listing and resolution logic never reaches into the filesystem or the
//! renderer; it only sees a `ContentRepository`. The repository contract
//! requires that `body_html` on every document is already safe HTML - the
//! rendering side injects it verbatim.

use indexmap::IndexMap;
use thiserror::Error;

use crate::content::{ContentDocument, DocumentId};

/// Errors from the content store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no document found for slug '{slug}'")]
    NotFound { slug: String },

    #[error("duplicate slug '{slug}' (slugs must be unique per build)")]
    DuplicateSlug { slug: String },
}

/// Read access to the build-time-frozen document set.
pub trait ContentRepository {
    /// All documents, in ingestion order.
    fn list_all(&self) -> &[ContentDocument];

    /// Exact-match lookup by slug.
    fn find_by_slug(&self, slug: &str) -> Result<&ContentDocument, StoreError>;
}

/// In-memory store over an immutable document set.
///
/// Built once per site build; assigns document ids at ingestion and
/// rejects duplicate slugs.
#[derive(Debug)]
pub struct MemoryStore {
    documents: Vec<ContentDocument>,
    by_slug: IndexMap<String, usize>,
}

impl MemoryStore {
    /// Build a store from ingested documents, assigning ids.
    pub fn ingest(mut documents: Vec<ContentDocument>) -> Result<Self, StoreError> {
        let mut by_slug = IndexMap::with_capacity(documents.len());

        for (i, doc) in documents.iter_mut().enumerate() {
            doc.id = DocumentId::new(i as u64 + 1);
            if by_slug.insert(doc.slug.clone(), i).is_some() {
                return Err(StoreError::DuplicateSlug {
                    slug: doc.slug.clone(),
                });
            }
        }

        Ok(Self { documents, by_slug })
    }

    /// Number of documents in the store
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl ContentRepository for MemoryStore {
    fn list_all(&self) -> &[ContentDocument] {
        &self.documents
    }

    fn find_by_slug(&self, slug: &str) -> Result<&ContentDocument, StoreError> {
        self.by_slug
            .get(slug)
            .map(|&i| &self.documents[i])
            .ok_or_else(|| StoreError::NotFound {
                slug: slug.to_string(),
            })
    }
}
