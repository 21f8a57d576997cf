//! Metadata lookup client
//!
//! Resolves a validated post URL into [`VideoInfo`] by calling the
//! extraction backend's info endpoint. The request is idempotent; a
//! failed lookup is safe to retry by resubmitting.

use crate::config::Config;
use crate::error::{Error, GENERIC_LOOKUP_FAILURE, Result};
use crate::types::VideoInfo;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Failure payload the backend returns alongside non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Capability for resolving a post URL into video metadata.
///
/// [`MetadataClient`] is the production implementation; tests inject
/// mocks so the controller can be exercised without a network.
#[async_trait]
pub trait FetchInfo: Send + Sync {
    /// Resolve `url` into metadata.
    ///
    /// # Errors
    /// Returns [`Error::Lookup`] when the request fails or the endpoint
    /// reports a failure status.
    async fn fetch_info(&self, url: &str) -> Result<VideoInfo>;
}

/// HTTP client for the metadata lookup endpoint
pub struct MetadataClient {
    /// HTTP client with timeout and user agent applied
    http_client: reqwest::Client,
    /// Endpoint configuration
    config: Config,
}

impl MetadataClient {
    /// Create a new metadata client.
    ///
    /// # Errors
    /// Returns an error when `config.base_url` is not an absolute URL or
    /// the HTTP client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        config.validated_base_url()?;

        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Extract the user-facing failure message from a non-success response
    /// body, falling back to a generic message when the body carries none.
    fn failure_message(body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| GENERIC_LOOKUP_FAILURE.to_string())
    }
}

#[async_trait]
impl FetchInfo for MetadataClient {
    async fn fetch_info(&self, url: &str) -> Result<VideoInfo> {
        let endpoint = self.config.endpoint_for(&self.config.info_path, url);
        debug!(url, "fetching video info");

        let response = self
            .http_client
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| Error::Lookup {
                message: format!("Failed to reach lookup endpoint: {}", e),
            })?;

        // Check HTTP status before trying to parse the response body
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = Self::failure_message(&body);
            debug!(url, status = status.as_u16(), message, "lookup failed");
            return Err(Error::Lookup { message });
        }

        let info: VideoInfo = response.json().await.map_err(|e| Error::Lookup {
            message: format!("Invalid lookup response: {}", e),
        })?;

        debug!(url, title = %info.title, "video info resolved");
        Ok(info)
    }
}
