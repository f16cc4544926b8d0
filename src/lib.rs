//! mdpost: fetch a markdown post and split it for display
//!
//! A post is fetched from a path, rendered to HTML, stripped of its leading
//! level-1 heading (returned separately as the title) and has its code blocks
//! wrapped so highlight.js picks them up in the browser.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod fetch;
pub mod parser;
pub mod templates;

pub use content::{ParsedPost, PostView};
pub use error::{FetchError, PostError};
pub use parser::PostParser;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Config file looked up in the base directory
pub const CONFIG_FILE: &str = "mdpost.yml";

/// The main mdpost application
#[derive(Clone)]
pub struct MdPost {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
}

impl MdPost {
    /// Create a new instance from a directory, loading `mdpost.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create with an explicit config file, relative paths resolved against
    /// the base directory
    pub fn with_config_file<P: AsRef<Path>, C: AsRef<Path>>(
        base_dir: P,
        config_file: C,
    ) -> Result<Self> {
        let config_path = base_dir.as_ref().join(config_file);
        let config = config::SiteConfig::load(&config_path)?;
        Ok(Self::with_config(base_dir, config))
    }

    /// Create with an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        Self {
            config,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Source directory for local posts, resolved against the base directory
    pub fn source_dir(&self) -> Option<PathBuf> {
        self.config
            .source_dir
            .as_ref()
            .map(|dir| self.base_dir.join(dir))
    }

    /// Build the post parser described by the configuration
    pub fn parser(&self) -> std::result::Result<PostParser, FetchError> {
        let mut config = self.config.clone();
        config.source_dir = self
            .source_dir()
            .map(|dir| dir.to_string_lossy().into_owned());
        PostParser::from_config(&config)
    }

    /// Fetch and parse a single post
    pub async fn parse(&self, path: &str) -> std::result::Result<ParsedPost, PostError> {
        let parser = self.parser().map_err(|source| PostError::Unavailable {
            path: path.to_string(),
            source,
        })?;
        parser.parse_markdown(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_without_config_file() {
        let dir = TempDir::new().unwrap();
        let app = MdPost::new(dir.path()).unwrap();
        assert_eq!(app.config.base_url, "http://localhost:4000/");
        assert!(app.source_dir().is_none());
    }

    #[test]
    fn test_config_file_relative_to_base_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("conf")).unwrap();
        fs::write(
            dir.path().join("conf/site.yml"),
            "base_url: https://example.com/blog/\n",
        )
        .unwrap();

        let app = MdPost::with_config_file(dir.path(), "conf/site.yml").unwrap();
        assert_eq!(app.config.base_url, "https://example.com/blog/");
        assert_eq!(app.base_dir, dir.path());

        let absolute = dir.path().join("conf/site.yml");
        let app = MdPost::with_config_file("/nonexistent", &absolute).unwrap();
        assert_eq!(app.config.base_url, "https://example.com/blog/");
    }

    #[tokio::test]
    async fn test_parse_from_source_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "source_dir: posts\n").unwrap();
        fs::create_dir_all(dir.path().join("posts/2023/may")).unwrap();
        fs::write(
            dir.path().join("posts/2023/may/19.md"),
            "# SOLID\n\nSingle responsibility.\n",
        )
        .unwrap();

        let app = MdPost::new(dir.path()).unwrap();
        assert_eq!(app.source_dir(), Some(dir.path().join("posts")));

        let post = app.parse("/2023/may/19.md").await.unwrap();
        assert_eq!(post.title, "<h1>SOLID</h1>");
        assert!(post.content.contains("<p>Single responsibility.</p>"));
    }
}
