//! Content document model

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Opaque identifier for a document, assigned by the content store
/// when the document is ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DocumentId(u64);

impl DocumentId {
    /// Placeholder id carried by documents that have not entered a store yet.
    pub const UNASSIGNED: DocumentId = DocumentId(0);

    pub(crate) fn new(n: u64) -> Self {
        DocumentId(n)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single authored post: metadata plus the pre-rendered body.
///
/// Documents are produced by the ingestion side (front-matter parsing and
/// Markdown rendering) and are read-only from there on. `body_html` is
/// trusted output of our own renderer and is injected into pages verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct ContentDocument {
    /// Store-assigned identifier
    pub id: DocumentId,

    /// URL-safe path fragment, unique per build, derived from the
    /// source filename at ingestion time
    pub slug: String,

    /// Display title
    pub title: String,

    /// Publication date; documents without one sort last in listings
    pub publish_date: Option<NaiveDate>,

    /// Rendered HTML body, injected without further escaping
    pub body_html: String,

    /// Source file path relative to the source directory
    pub source: String,
}

impl ContentDocument {
    /// Create a document with an unassigned id.
    pub fn new(
        slug: String,
        title: String,
        publish_date: Option<NaiveDate>,
        body_html: String,
        source: String,
    ) -> Self {
        Self {
            id: DocumentId::UNASSIGNED,
            slug,
            title,
            publish_date,
            body_html,
            source,
        }
    }
}
