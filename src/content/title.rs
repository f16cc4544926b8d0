//! Title extraction from rendered HTML

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{PostError, Result};

lazy_static! {
    /// An HTML comment, or an `<h1>` element closed by the nearest `</h1>`.
    /// Comments are consumed whole so headings inside them never match.
    static ref H1_RE: Regex =
        Regex::new(r"(?is)<!--.*?-->|<h1(?:\s[^>]*)?>.*?</h1\s*>").unwrap();
}

/// Split the first level-1 heading off the document.
///
/// Returns the heading's full markup and the document with that heading
/// removed. Later `<h1>` elements and headings inside comments are left in
/// place.
pub fn extract_title(html: &str) -> Result<(String, String)> {
    let m = H1_RE
        .find_iter(html)
        .find(|m| !m.as_str().starts_with("<!--"))
        .ok_or(PostError::MissingTitle)?;

    let title = m.as_str().to_string();
    let mut remainder = String::with_capacity(html.len() - m.len());
    remainder.push_str(&html[..m.start()]);
    remainder.push_str(&html[m.end()..]);

    Ok((title, remainder))
}
