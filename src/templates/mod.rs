//! Built-in theme templates using the Tera template engine
//!
//! The handful of templates the site needs are embedded directly in the
//! binary, so a site directory only has to carry content and a config file.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Document bodies are pre-rendered HTML and must pass through
        // untouched, so autoescaping stays off
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("index.html", include_str!("theme/index.html")),
            ("post.html", include_str!("theme/post.html")),
            ("404.html", include_str!("theme/404.html")),
            (
                "partials/header.html",
                include_str!("theme/partials/header.html"),
            ),
            (
                "partials/footer.html",
                include_str!("theme/partials/footer.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with the given context
    pub fn render(&self, template: &str, context: &Context) -> Result<String> {
        let html = self.tera.render(template, context)?;
        Ok(html)
    }
}

/// Site configuration fields exposed to templates
#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub description: String,
    pub author: String,
    pub url: String,
    pub base_path: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_data() -> ConfigData {
        ConfigData {
            title: "My Blog".to_string(),
            description: String::new(),
            author: "Jakub".to_string(),
            url: "http://example.com".to_string(),
            base_path: "/".to_string(),
            github: None,
            linkedin: None,
        }
    }

    #[test]
    fn test_render_index() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("config", &config_data());
        context.insert("current_year", "2026");
        context.insert("posts", &Vec::<crate::index::Summary>::new());

        let html = renderer.render("index.html", &context).unwrap();
        assert!(html.contains("My Blog"));
    }

    #[test]
    fn test_post_body_not_escaped() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("config", &config_data());
        context.insert("current_year", "2026");
        context.insert("page_title", "A Post");
        context.insert("page_content", "<p>raw <em>html</em></p>");

        let html = renderer.render("post.html", &context).unwrap();
        assert!(html.contains("<p>raw <em>html</em></p>"));
    }
}
