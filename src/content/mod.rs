//! Content module - converts markdown posts into display fragments

mod highlight;
mod markdown;
mod post;
mod title;

pub use highlight::CodeHighlighter;
pub use markdown::{Convert, MarkdownRenderer};
pub use post::{ParsedPost, PostView};
pub use title::extract_title;
