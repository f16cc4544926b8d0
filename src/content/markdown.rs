//! Markdown to HTML conversion

use pulldown_cmark::{html, Options, Parser};

use crate::config::MarkdownConfig;
use crate::error::Result;

/// Converts markdown text into an HTML fragment
pub trait Convert: Send + Sync {
    fn to_html(&self, markdown: &str) -> Result<String>;
}

/// Markdown renderer backed by pulldown-cmark
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer with the default extensions
    pub fn new() -> Self {
        Self::with_options(&MarkdownConfig::default())
    }

    /// Create with custom settings
    pub fn with_options(config: &MarkdownConfig) -> Self {
        // YAML metadata blocks stay off, posts carry no front-matter
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, config.tables);
        options.set(Options::ENABLE_FOOTNOTES, config.footnotes);
        options.set(Options::ENABLE_STRIKETHROUGH, config.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, config.tasklists);
        options.set(Options::ENABLE_SMART_PUNCTUATION, config.smart_punctuation);
        options.set(Options::ENABLE_HEADING_ATTRIBUTES, config.heading_attributes);
        Self { options }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Convert for MarkdownRenderer {
    fn to_html(&self, markdown: &str) -> Result<String> {
        Ok(self.render(markdown))
    }
}
