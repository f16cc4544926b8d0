//! Error types for the fetch and transform pipeline

use std::time::Duration;
use thiserror::Error;

/// Failure to retrieve a markdown document
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Cannot resolve path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("Unexpected content type: {0}")]
    NotText(String),

    #[error("Document is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

/// Failure of the whole fetch-and-parse pipeline
#[derive(Error, Debug)]
pub enum PostError {
    /// The document could not be fetched, so there is nothing to parse
    #[error("Content unavailable for {path}: {source}")]
    Unavailable { path: String, source: FetchError },

    /// The rendered document has no level-1 heading
    #[error("Document has no level-1 heading to use as a title")]
    MissingTitle,

    /// The converter could not turn the markdown into HTML
    #[error("Markdown conversion failed: {0}")]
    Conversion(String),
}

impl PostError {
    /// Whether the failure happened before any markdown was available
    pub fn is_unavailable(&self) -> bool {
        matches!(self, PostError::Unavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, PostError>;
