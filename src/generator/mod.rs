//! Generator module - writes the static site using the built-in templates

use anyhow::Result;
use chrono::Datelike;
use std::fs;
use tera::Context;

use crate::helpers::url;
use crate::index;
use crate::resolver;
use crate::store::ContentRepository;
use crate::templates::{ConfigData, TemplateRenderer};
use crate::Site;

/// Static site generator
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Generate the entire site from the document store
    pub fn generate(&self, repo: &dyn ContentRepository) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        let config_data = self.build_config_data();

        let summaries = index::list_documents(
            repo,
            &self.site.config.base_path,
            &self.site.config.date_format,
        );

        self.generate_index_page(&summaries, &config_data)?;
        self.generate_post_pages(repo, &summaries, &config_data)?;
        self.generate_not_found_page(&config_data)?;

        Ok(())
    }

    /// Build config data for templates
    fn build_config_data(&self) -> ConfigData {
        let config = &self.site.config;
        ConfigData {
            title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            url: config.url.clone(),
            base_path: config.base_path.clone(),
            github: config.github.clone(),
            linkedin: config.linkedin.clone(),
        }
    }

    /// Create a base context with common variables
    fn create_base_context(&self, config_data: &ConfigData) -> Context {
        let mut context = Context::new();
        context.insert("config", config_data);
        context.insert("current_year", &chrono::Utc::now().year().to_string());
        context
    }

    /// Generate the landing page listing all documents
    fn generate_index_page(
        &self,
        summaries: &[index::Summary],
        config_data: &ConfigData,
    ) -> Result<()> {
        let mut context = self.create_base_context(config_data);
        context.insert("posts", summaries);

        let html = self.renderer.render("index.html", &context)?;
        let output_path = self.site.public_dir.join("index.html");
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(())
    }

    /// Generate one page per document, resolved by slug
    fn generate_post_pages(
        &self,
        repo: &dyn ContentRepository,
        summaries: &[index::Summary],
        config_data: &ConfigData,
    ) -> Result<()> {
        for summary in summaries {
            let view = resolver::resolve_by_slug(repo, &summary.slug)?;

            let mut context = self.create_base_context(config_data);
            context.insert("page_title", &view.title);
            context.insert("page_content", &view.body_html);
            context.insert("current_path", &summary.path);

            let html = self.renderer.render("post.html", &context)?;

            let output_path = self
                .site
                .public_dir
                .join(url::as_output_path(&summary.path))
                .join("index.html");
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
            }
            fs::write(&output_path, &html)
                .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
            tracing::debug!("Generated post: {:?}", output_path);
        }

        tracing::info!("Generated {} post pages", summaries.len());
        Ok(())
    }

    /// Generate the fallback page served for unknown addresses
    fn generate_not_found_page(&self, config_data: &ConfigData) -> Result<()> {
        let context = self.create_base_context(config_data);
        let html = self.renderer.render("404.html", &context)?;
        fs::write(self.site.public_dir.join("404.html"), html)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::ContentDocument;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn doc(slug: &str, title: &str, ymd: (i32, u32, u32)) -> ContentDocument {
        ContentDocument::new(
            slug.to_string(),
            title.to_string(),
            NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2),
            format!("<p>{} body</p>", title),
            format!("{}.md", slug),
        )
    }

    #[test]
    fn test_generate_site() {
        let tmp = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            base_path: "/blog".to_string(),
            ..Default::default()
        };
        let site = Site::with_config(tmp.path(), config);

        let store = MemoryStore::ingest(vec![
            doc("a", "A", (2024, 1, 1)),
            doc("b", "B", (2024, 6, 1)),
        ])
        .unwrap();

        Generator::new(&site).unwrap().generate(&store).unwrap();

        let index_html = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
        // Newest first
        let pos_b = index_html.find("/blog/b/").unwrap();
        let pos_a = index_html.find("/blog/a/").unwrap();
        assert!(pos_b < pos_a);

        let post_html =
            fs::read_to_string(site.public_dir.join("blog/b/index.html")).unwrap();
        assert!(post_html.contains("<h1>B</h1>"));
        assert!(post_html.contains("<p>B body</p>"));

        assert!(site.public_dir.join("404.html").exists());
    }

    #[test]
    fn test_generate_empty_site() {
        let tmp = tempfile::tempdir().unwrap();
        let site = Site::with_config(tmp.path(), SiteConfig::default());
        let store = MemoryStore::ingest(Vec::new()).unwrap();

        Generator::new(&site).unwrap().generate(&store).unwrap();
        assert!(site.public_dir.join("index.html").exists());
    }
}
