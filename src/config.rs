//! Configuration types for insta-dl

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration for the workflow engine
///
/// Works out of the box with zero configuration against a co-located
/// backend; every field has a sensible default and can be overridden from
/// JSON/TOML or in code via struct update syntax.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the extraction backend (default: "http://127.0.0.1:8000")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the metadata lookup endpoint (default: "/api/info")
    #[serde(default = "default_info_path")]
    pub info_path: String,

    /// Path of the download endpoint (default: "/api/download")
    #[serde(default = "default_download_path")]
    pub download_path: String,

    /// Timeout applied to metadata lookup requests (default: 30 seconds)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,

    /// User-Agent header sent on outbound requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            info_path: default_info_path(),
            download_path: default_download_path(),
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Parse and return the configured base URL.
    ///
    /// # Errors
    /// Returns a configuration error when `base_url` is not an absolute URL.
    pub fn validated_base_url(&self) -> Result<url::Url> {
        url::Url::parse(&self.base_url).map_err(|e| Error::Config {
            message: format!("invalid base_url '{}': {}", self.base_url, e),
            key: Some("base_url".to_string()),
        })
    }

    /// The absolute URL of an endpoint with the post URL attached as a
    /// percent-encoded `url` query parameter.
    pub(crate) fn endpoint_for(&self, path: &str, post_url: &str) -> String {
        format!(
            "{}{}?url={}",
            self.base_url.trim_end_matches('/'),
            path,
            urlencoding::encode(post_url)
        )
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_info_path() -> String {
    "/api/info".to_string()
}

fn default_download_path() -> String {
    "/api/download".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    concat!("insta-dl/", env!("CARGO_PKG_VERSION")).to_string()
}
