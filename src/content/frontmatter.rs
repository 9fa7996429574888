//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Front-matter data from a content document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    /// Documents are published by default
    #[serde(default = "default_published")]
    pub published: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

fn default_published() -> bool {
    true
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            date: None,
            published: true,
            extra: HashMap::new(),
        }
    }
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        // YAML front-matter (---)
        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        // JSON front-matter ({"key": ...)
        if content.starts_with('{') {
            return Self::parse_json(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str)> {
        let rest = &content[3..]; // Skip opening ---
        let rest = rest.trim_start_matches(['\n', '\r']);

        if let Some(end_pos) = rest.find("\n---") {
            let yaml_content = &rest[..end_pos];
            let remaining = &rest[end_pos + 4..]; // Skip \n---
            let remaining = remaining.trim_start_matches(['\n', '\r']);

            if yaml_content.trim().is_empty() {
                return Ok((FrontMatter::default(), remaining));
            }

            match serde_yaml::from_str::<FrontMatter>(yaml_content) {
                Ok(fm) => Ok((fm, remaining)),
                Err(e) => {
                    // Not valid YAML, treat the whole file as content
                    tracing::warn!(
                        "Failed to parse YAML front-matter, treating as content: {}",
                        e
                    );
                    Ok((FrontMatter::default(), content))
                }
            }
        } else {
            // No closing ---, treat as no front-matter
            Ok((FrontMatter::default(), content))
        }
    }

    fn parse_json(content: &str) -> Result<(Self, &str)> {
        // Find the matching closing brace
        let mut depth = 0;
        let mut end_pos = 0;
        for (i, c) in content.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        end_pos = i + 1;
                        break;
                    }
                }
                _ => {}
            }
        }

        if end_pos > 0 {
            let json_content = &content[..end_pos];
            let remaining = &content[end_pos..];
            let remaining = remaining.trim_start_matches(['\n', '\r']);

            let fm: FrontMatter = serde_json::from_str(json_content)
                .map_err(|e| anyhow!("Failed to parse JSON front-matter: {}", e))?;

            return Ok((fm, remaining));
        }

        Err(anyhow!("Invalid JSON front-matter"))
    }

    /// Parse the date string into a calendar date
    pub fn parse_date(&self) -> Option<NaiveDate> {
        self.date.as_ref().and_then(|s| parse_date_string(s))
    }
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // Datetime strings carry a date too
    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}
