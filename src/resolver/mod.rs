//! Page resolver - materializes a single document's full view

use serde::Serialize;

use crate::store::{ContentRepository, StoreError};

/// The full view of one document, ready for the post template
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostView {
    pub title: String,
    /// Pre-rendered HTML, injected into the page without escaping
    pub body_html: String,
}

/// Resolve a document by its slug.
///
/// Pure lookup over the frozen document set, so repeated calls with the
/// same slug return the same view. Unknown slugs surface
/// `StoreError::NotFound`; the caller decides how to render that case.
pub fn resolve_by_slug(repo: &dyn ContentRepository, slug: &str) -> Result<PostView, StoreError> {
    let doc = repo.find_by_slug(slug)?;
    Ok(PostView {
        title: doc.title.clone(),
        body_html: doc.body_html.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentDocument;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn store() -> MemoryStore {
        let docs = vec![
            ContentDocument::new(
                "a".to_string(),
                "A".to_string(),
                NaiveDate::from_ymd_opt(2024, 1, 1),
                "<p>body of a</p>".to_string(),
                "a.md".to_string(),
            ),
            ContentDocument::new(
                "b".to_string(),
                "B".to_string(),
                NaiveDate::from_ymd_opt(2024, 6, 1),
                "<p>body of b</p>".to_string(),
                "b.md".to_string(),
            ),
        ];
        MemoryStore::ingest(docs).unwrap()
    }

    #[test]
    fn test_resolve_known_slug() {
        let view = resolve_by_slug(&store(), "b").unwrap();
        assert_eq!(view.title, "B");
        assert_eq!(view.body_html, "<p>body of b</p>");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let store = store();
        let first = resolve_by_slug(&store, "a").unwrap();
        let second = resolve_by_slug(&store, "a").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_unknown_slug() {
        let err = resolve_by_slug(&store(), "z").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref slug } if slug == "z"));
    }
}
