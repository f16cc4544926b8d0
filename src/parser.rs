//! Fetch-and-parse pipeline
//!
//! `fetch -> markdown to HTML -> title extraction -> code block annotation`,
//! run as one sequential chain per post. The fetch is the only await point.

use std::time::Duration;

use crate::config::SiteConfig;
use crate::content::{extract_title, CodeHighlighter, Convert, MarkdownRenderer, ParsedPost};
use crate::error::{FetchError, PostError, Result};
use crate::fetch::{Fetch, FileFetcher, HttpFetcher};

/// Turns a post path into a title and an annotated body
pub struct PostParser {
    fetcher: Box<dyn Fetch>,
    converter: Box<dyn Convert>,
    highlighter: CodeHighlighter,
    timeout: Option<Duration>,
}

impl PostParser {
    /// Create a parser with the default converter and highlighter
    pub fn new(fetcher: impl Fetch + 'static) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            converter: Box::new(MarkdownRenderer::new()),
            highlighter: CodeHighlighter::new(),
            timeout: None,
        }
    }

    /// Build from site configuration, reading from `source_dir` when set
    pub fn from_config(config: &SiteConfig) -> std::result::Result<Self, FetchError> {
        let fetcher: Box<dyn Fetch> = match &config.source_dir {
            Some(dir) => Box::new(FileFetcher::new(dir)),
            None => Box::new(HttpFetcher::from_config(config)?),
        };

        Ok(Self {
            fetcher,
            converter: Box::new(MarkdownRenderer::with_options(&config.markdown)),
            highlighter: CodeHighlighter::with_options(&config.highlight),
            timeout: config.fetch_timeout(),
        })
    }

    pub fn with_converter(mut self, converter: impl Convert + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }

    pub fn with_highlighter(mut self, highlighter: CodeHighlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Limit how long the fetch step may take
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fetch the raw markdown for a post, logging any failure
    pub async fn fetch_markdown(&self, path: &str) -> std::result::Result<String, FetchError> {
        let fetched = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.fetcher.fetch(path))
                .await
                .unwrap_or(Err(FetchError::Timeout(limit))),
            None => self.fetcher.fetch(path).await,
        };

        if let Err(e) = &fetched {
            tracing::error!("There was an error fetching the markdown file {}: {}", path, e);
        }
        fetched
    }

    /// Fetch a post and split it into title and content
    pub async fn parse_markdown(&self, path: &str) -> Result<ParsedPost> {
        let markdown = self
            .fetch_markdown(path)
            .await
            .map_err(|source| PostError::Unavailable {
                path: path.to_string(),
                source,
            })?;
        tracing::debug!("Fetched {} ({} bytes)", path, markdown.len());

        self.transform(&markdown)
    }

    /// Convert already-fetched markdown into a parsed post
    pub fn transform(&self, markdown: &str) -> Result<ParsedPost> {
        let html = self.converter.to_html(markdown)?;
        let (title, remainder) = extract_title(&html)?;
        let content = self.highlighter.annotate_code_blocks(&remainder);

        Ok(ParsedPost { title, content })
    }
}
