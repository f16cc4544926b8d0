//! Parsed post model and its display-side view

use serde::Serialize;

use crate::error::PostError;

/// A post split into its title heading and body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPost {
    /// Full markup of the first level-1 heading
    pub title: String,

    /// Rendered body with the title removed and code blocks annotated
    pub content: String,
}

/// What the display receives: either a post or an explicit unavailable signal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub title: String,
    pub content: String,
    /// Set when the post could not be produced
    pub error: Option<String>,
}

impl PostView {
    pub const UNAVAILABLE_TITLE: &'static str = "<h1>Content unavailable</h1>";

    /// Placeholder view for a failed fetch or parse
    pub fn unavailable(err: &PostError) -> Self {
        let message = match err {
            PostError::Unavailable { .. } => "This post could not be loaded.",
            PostError::MissingTitle => "This post has no title.",
            PostError::Conversion(_) => "This post could not be rendered.",
        };
        Self {
            title: Self::UNAVAILABLE_TITLE.to_string(),
            content: format!(r#"<p class="post-error">{}</p>"#, message),
            error: Some(err.to_string()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.error.is_none()
    }
}

impl From<ParsedPost> for PostView {
    fn from(post: ParsedPost) -> Self {
        Self {
            title: post.title,
            content: post.content,
            error: None,
        }
    }
}

impl From<&Result<ParsedPost, PostError>> for PostView {
    fn from(result: &Result<ParsedPost, PostError>) -> Self {
        match result {
            Ok(post) => post.clone().into(),
            Err(err) => Self::unavailable(err),
        }
    }
}
