//! List site content

use anyhow::Result;

use crate::content::ContentLoader;
use crate::index;
use crate::store::MemoryStore;
use crate::Site;

/// Print the document listing in index order
pub fn run(site: &Site) -> Result<()> {
    let loader = ContentLoader::new(site);
    let documents = loader.load_documents()?;
    let store = MemoryStore::ingest(documents)?;

    let summaries = index::list_documents(
        &store,
        &site.config.base_path,
        &site.config.date_format,
    );

    println!("Documents ({}):", summaries.len());
    for summary in summaries {
        println!(
            "  {} - {} [{}]",
            summary.formatted_date.as_deref().unwrap_or("undated"),
            summary.title,
            summary.path
        );
    }

    Ok(())
}
