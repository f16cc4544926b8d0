//! Fetchers that retrieve raw markdown documents
//!
//! A fetcher only moves bytes: it resolves a post path, reads the whole body
//! and hands it back as text. Every failure is returned as a [`FetchError`];
//! nothing here panics or returns an empty string in place of an error.

mod file;
mod http;

use async_trait::async_trait;

use crate::error::FetchError;

pub use file::FileFetcher;
pub use http::HttpFetcher;

/// Retrieves markdown text for a post path
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

/// Decode a document body as strict UTF-8, dropping a leading byte order mark
pub(crate) fn decode_text(bytes: Vec<u8>) -> Result<String, FetchError> {
    let text = String::from_utf8(bytes)?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}
