//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,
    /// Path prefix for document links, e.g. "/blog"
    pub base_path: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Display
    /// Moment.js-style date format used in listings
    pub date_format: String,

    // Header profile links
    pub github: Option<String>,
    pub linkedin: Option<String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: String::new(),

            url: "http://example.com".to_string(),
            base_path: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),

            date_format: "MMMM DD, YYYY".to_string(),

            github: None,
            linkedin: None,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
