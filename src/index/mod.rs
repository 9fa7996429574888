//! Content index - the ordered listing shown on the landing page

use serde::Serialize;

use crate::content::DocumentId;
use crate::helpers::{date, url};
use crate::store::ContentRepository;

/// Reduced projection of a document used in listing views
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub id: DocumentId,
    pub slug: String,
    pub title: String,
    /// Publish date rendered with the site date format; `None` for
    /// undated documents
    pub formatted_date: Option<String>,
    /// Hyperlink of the form `/{base_path}/{slug}/`
    pub path: String,
}

/// Produce the ordered summary list for the landing page.
///
/// Documents are sorted by publish date descending, newest first. The sort
/// is stable: documents sharing a date keep their ingestion order, and
/// undated documents go last. An empty document set yields an empty list.
pub fn list_documents(
    repo: &dyn ContentRepository,
    base_path: &str,
    date_format: &str,
) -> Vec<Summary> {
    let mut documents: Vec<_> = repo.list_all().iter().collect();

    // Vec::sort_by is stable, which gives the tie-break on input order
    documents.sort_by(|a, b| match (a.publish_date, b.publish_date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    documents
        .into_iter()
        .map(|doc| Summary {
            id: doc.id,
            slug: doc.slug.clone(),
            title: doc.title.clone(),
            formatted_date: doc
                .publish_date
                .map(|d| date::format_date(&d, date_format)),
            path: url::path_for(base_path, &doc.slug),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentDocument;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn doc(slug: &str, title: &str, date: Option<(i32, u32, u32)>) -> ContentDocument {
        ContentDocument::new(
            slug.to_string(),
            title.to_string(),
            date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            String::new(),
            format!("{}.md", slug),
        )
    }

    #[test]
    fn test_sorted_by_date_descending() {
        let store = MemoryStore::ingest(vec![
            doc("a", "A", Some((2024, 1, 1))),
            doc("b", "B", Some((2024, 6, 1))),
        ])
        .unwrap();

        let summaries = list_documents(&store, "/", "YYYY-MM-DD");
        let slugs: Vec<_> = summaries.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"]);
        assert_eq!(summaries[0].formatted_date.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let store = MemoryStore::ingest(vec![
            doc("first", "First", Some((2024, 3, 3))),
            doc("second", "Second", Some((2024, 3, 3))),
            doc("third", "Third", Some((2024, 3, 3))),
        ])
        .unwrap();

        let slugs: Vec<_> = list_documents(&store, "/", "YYYY-MM-DD")
            .into_iter()
            .map(|s| s.slug)
            .collect();
        assert_eq!(slugs, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_undated_documents_sort_last() {
        let store = MemoryStore::ingest(vec![
            doc("undated", "Undated", None),
            doc("old", "Old", Some((2020, 1, 1))),
            doc("new", "New", Some((2025, 1, 1))),
        ])
        .unwrap();

        let summaries = list_documents(&store, "/", "YYYY-MM-DD");
        let slugs: Vec<_> = summaries.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "old", "undated"]);
        assert_eq!(summaries[2].formatted_date, None);
    }

    #[test]
    fn test_empty_set_is_empty_list() {
        let store = MemoryStore::ingest(Vec::new()).unwrap();
        assert!(list_documents(&store, "/", "YYYY-MM-DD").is_empty());
    }

    #[test]
    fn test_slug_passes_through_unchanged() {
        let store = MemoryStore::ingest(vec![doc("my-exact-slug", "T", Some((2024, 1, 1)))]).unwrap();
        let summaries = list_documents(&store, "/blog", "YYYY-MM-DD");
        assert_eq!(summaries[0].slug, "my-exact-slug");
        assert_eq!(summaries[0].path, "/blog/my-exact-slug/");
    }

    #[test]
    fn test_display_date_format() {
        let store = MemoryStore::ingest(vec![doc("a", "A", Some((2024, 6, 1)))]).unwrap();
        let summaries = list_documents(&store, "/", "MMMM DD, YYYY");
        assert_eq!(summaries[0].formatted_date.as_deref(), Some("June 01, 2024"));
    }
}
