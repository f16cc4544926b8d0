//! HTTP fetcher

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use super::{decode_text, Fetch};
use crate::config::SiteConfig;
use crate::error::FetchError;

/// Fetches posts over HTTP, resolving relative paths against a base URL
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    /// Create a fetcher with a default client
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a fetcher around an existing client
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, FetchError> {
        // Without a trailing slash, joins would replace the last segment
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized).map_err(|e| FetchError::InvalidPath {
            path: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Create from site configuration
    pub fn from_config(config: &SiteConfig) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Self::with_client(client, &config.base_url)
    }

    /// Resolve a post path to the URL it is fetched from
    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        if let Ok(url) = Url::parse(path) {
            if matches!(url.scheme(), "http" | "https") {
                return Ok(url);
            }
        }

        // Site-absolute paths still live under the base URL's path
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| FetchError::InvalidPath {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = self.resolve(path)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default();
            if !is_text(content_type) {
                return Err(FetchError::NotText(content_type.to_string()));
            }
        }

        let bytes = response.bytes().await?;
        decode_text(bytes.to_vec())
    }
}

/// Whether a content type can carry a markdown document.
///
/// Static servers often send `.md` files as `application/octet-stream`, so
/// that is accepted too and left to UTF-8 decoding to reject.
fn is_text(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime.starts_with("text/") || mime.contains("markdown") || mime == "application/octet-stream"
}
