//! Post page rendering
//!
//! Injects a [`PostView`] into a standalone HTML page: the title heading goes
//! into the `#post-title` region, the body into `#content-body`, and the
//! highlight.js assets are linked so annotated code blocks get highlighted.

use crate::config::HighlightConfig;
use crate::content::PostView;

/// Renders post views into full HTML pages
pub struct PageRenderer {
    highlight: HighlightConfig,
}

impl PageRenderer {
    pub fn new(highlight: HighlightConfig) -> Self {
        Self { highlight }
    }

    /// Render the page for a post view
    pub fn render(&self, view: &PostView) -> String {
        let mut head = format!(
            "<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{}</title>\n",
            strip_html(&view.title).trim()
        );
        if self.highlight.enable {
            head.push_str(&css(&self.highlight.stylesheet));
            head.push('\n');
            head.push_str(&js(&self.highlight.script));
            head.push_str("\n<script>hljs.highlightAll();</script>\n");
        }

        let error_attr = match &view.error {
            Some(message) => format!(r#" data-error="{}""#, html_escape(message)),
            None => String::new(),
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
{head}</head>
<body>
<article class="post"{error_attr}>
<div class="post-title" id="post-title">{title}</div>
<div class="post-body" id="content-body">{content}</div>
</article>
</body>
</html>
"#,
            head = head,
            error_attr = error_attr,
            title = view.title,
            content = view.content,
        )
    }
}

/// Generate a CSS link tag
fn css(href: &str) -> String {
    format!(r#"<link rel="stylesheet" href="{}">"#, href)
}

/// Generate a JavaScript script tag
fn js(src: &str) -> String {
    format!(r#"<script src="{}"></script>"#, src)
}

/// Strip HTML tags, keeping text
fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    result
}

/// Simple HTML escaping for attribute and title text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
