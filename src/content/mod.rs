//! Content models and ingestion

pub mod document;
pub mod frontmatter;
pub mod loader;
pub mod markdown;

pub use document::{ContentDocument, DocumentId};
pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use markdown::MarkdownRenderer;
