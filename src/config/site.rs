//! Site configuration (mdpost.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL that relative post paths are resolved against
    pub base_url: String,
    /// Read posts from this directory instead of over HTTP
    pub source_dir: Option<String>,
    /// Fetch timeout in seconds, 0 disables it
    pub timeout: u64,
    pub user_agent: String,

    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000/".to_string(),
            source_dir: None,
            timeout: 30,
            user_agent: concat!("mdpost/", env!("CARGO_PKG_VERSION")).to_string(),
            markdown: MarkdownConfig::default(),
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Fetch timeout, if one is configured
    pub fn fetch_timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

/// Markdown extension toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub tables: bool,
    pub footnotes: bool,
    pub strikethrough: bool,
    pub tasklists: bool,
    pub smart_punctuation: bool,
    pub heading_attributes: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            tasklists: true,
            smart_punctuation: false,
            heading_attributes: true,
        }
    }
}

/// Client-side highlighter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Wrap code blocks in the activation marker
    pub enable: bool,
    /// Element used as the marker
    pub tag: String,
    /// Attribute that activates the highlighter
    pub activation: String,
    pub stylesheet: String,
    pub script: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            tag: "span".to_string(),
            activation: r#"onload="hljs.highlightAll()""#.to_string(),
            stylesheet:
                "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.2.0/styles/atom-one-light.min.css"
                    .to_string(),
            script: "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.2.0/highlight.min.js"
                .to_string(),
        }
    }
}
