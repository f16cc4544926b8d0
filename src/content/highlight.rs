//! Code block annotation for the client-side highlighter
//!
//! Fenced code blocks come out of the renderer as `<pre><code>` pairs. Each
//! one is wrapped in a marker element that tells highlight.js to process it
//! once the page loads. The escaped code inside is never touched.

use regex::{Captures, Regex};

use crate::config::HighlightConfig;

/// Wraps rendered code blocks in a highlighter-activation marker
#[derive(Debug, Clone)]
pub struct CodeHighlighter {
    open: String,
    close: String,
    block_re: Option<Regex>,
}

impl CodeHighlighter {
    /// Create a highlighter using the highlight.js defaults
    pub fn new() -> Self {
        Self::with_options(&HighlightConfig::default())
    }

    /// Create with custom settings
    pub fn with_options(config: &HighlightConfig) -> Self {
        let open = if config.activation.trim().is_empty() {
            format!("<{}>", config.tag)
        } else {
            format!("<{} {}>", config.tag, config.activation.trim())
        };
        let close = format!("</{}>", config.tag);

        // An optional leading marker lets already-wrapped blocks be skipped
        let block_re = config.enable.then(|| {
            let pattern = format!(
                r"(?s)(?P<wrapped>{}\s*)?<pre><code(?:\s[^>]*)?>.*?</code></pre>",
                regex::escape(&open)
            );
            Regex::new(&pattern).expect("code block pattern is valid")
        });

        Self {
            open,
            close,
            block_re,
        }
    }

    /// Opening tag of the marker element
    pub fn marker(&self) -> &str {
        &self.open
    }

    /// Wrap every code block that is not already wrapped
    pub fn annotate_code_blocks(&self, html: &str) -> String {
        let Some(re) = &self.block_re else {
            return html.to_string();
        };

        re.replace_all(html, |caps: &Captures| {
            if caps.name("wrapped").is_some() {
                caps[0].to_string()
            } else {
                format!("{}{}{}", self.open, &caps[0], self.close)
            }
        })
        .into_owned()
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
