//! Content loader - ingests markdown documents from the source directory

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentDocument, FrontMatter, MarkdownRenderer};
use crate::Site;

/// Loads content documents from the source directory.
///
/// This is the ingestion half of the pipeline: it reads authored files,
/// parses front-matter, renders Markdown to HTML and derives each
/// document's slug. The slug is derived once here and never changes.
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load all documents from the source directory
    pub fn load_documents(&self) -> Result<Vec<ContentDocument>> {
        if !self.site.source_dir.exists() {
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.site.source_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match self.load_document(path) {
                    Ok(Some(doc)) => documents.push(doc),
                    Ok(None) => {
                        tracing::debug!("Skipping unpublished document {:?}", path);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load document {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(documents)
    }

    /// Load a single document from a file.
    /// Returns `None` for documents marked unpublished.
    fn load_document(&self, path: &Path) -> Result<Option<ContentDocument>> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        if !fm.published {
            return Ok(None);
        }

        // Title from front-matter, falling back to the filename
        let title = fm.title.clone().unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let publish_date = fm.parse_date();
        if publish_date.is_none() {
            // Undated documents still build but sort last in listings
            tracing::warn!(
                "Document {:?} has a missing or unparsable date, it will sort last",
                path
            );
        }

        // Slug comes from the filename, not the title
        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(slug::slugify)
            .unwrap_or_else(|| "untitled".to_string());

        let source = path
            .strip_prefix(&self.site.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let body_html = self.renderer.render(body);

        Ok(Some(ContentDocument::new(
            slug,
            title,
            publish_date,
            body_html,
            source,
        )))
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
