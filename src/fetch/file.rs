//! Local directory fetcher

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

use super::{decode_text, Fetch};
use crate::error::FetchError;

/// Reads posts from a directory, treating post paths as relative to it
#[derive(Debug, Clone)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Resolve a post path inside the root directory
    pub fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path.trim_start_matches('/'));

        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || relative.as_os_str().is_empty() {
            return Err(FetchError::InvalidPath {
                path: path.to_string(),
                reason: "path must stay inside the source directory".to_string(),
            });
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl Fetch for FileFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let full_path = self.resolve(path)?;
        tracing::debug!("Reading {:?}", full_path);

        let bytes = tokio::fs::read(&full_path).await?;
        decode_text(bytes)
    }
}
