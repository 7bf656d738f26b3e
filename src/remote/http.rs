//! HTTP content provider
//!
//! Fetches the catalog from a Firebase-style REST endpoint: each node is
//! served as JSON at `<base>/<node>.json`. No retry, no caching; the
//! session awaits these once at startup.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::core::error::{GameError, Result};
use crate::remote::{ContentProvider, RemoteCategory, RemoteMetadata};

/// Content provider backed by an HTTP JSON endpoint
pub struct HttpContentProvider {
    client: Client,
    base_url: String,
}

impl HttpContentProvider {
    /// Create a provider with an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a provider from environment variables
    ///
    /// Required: CONTENT_BASE_URL
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("CONTENT_BASE_URL")
            .map_err(|_| GameError::Fetch("CONTENT_BASE_URL not set".into()))?;
        Ok(Self::new(base_url))
    }

    async fn get_node<T: DeserializeOwned>(&self, node: &str) -> Result<T> {
        let url = format!("{}/{}.json", self.base_url.trim_end_matches('/'), node);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GameError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GameError::Fetch(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| GameError::Fetch(e.to_string()))
    }
}

impl ContentProvider for HttpContentProvider {
    async fn fetch_categories(&self) -> Result<Vec<RemoteCategory>> {
        self.get_node("categories").await
    }

    async fn fetch_metadata(&self) -> Result<RemoteMetadata> {
        self.get_node("metadata").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = HttpContentProvider::new("https://content.example.com");
        assert_eq!(provider.base_url, "https://content.example.com");
    }

    #[test]
    fn test_from_env_missing_url() {
        // Should fail if CONTENT_BASE_URL is not set
        if std::env::var("CONTENT_BASE_URL").is_err() {
            assert!(HttpContentProvider::from_env().is_err());
        }
    }
}
