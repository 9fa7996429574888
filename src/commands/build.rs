//! Build the static site

use anyhow::Result;

use crate::content::ContentLoader;
use crate::generator::Generator;
use crate::store::MemoryStore;
use crate::Site;

/// Build the site: ingest documents, freeze the store, render pages
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(site);
    let documents = loader.load_documents()?;
    tracing::info!("Loaded {} documents", documents.len());

    // Duplicate slugs are a build failure, not something to paper over
    let store = MemoryStore::ingest(documents)?;

    let generator = Generator::new(site)?;
    generator.generate(&store)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
