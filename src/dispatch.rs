//! Download dispatch
//!
//! Turning a resolved post URL into an actual file transfer is the
//! backend's job; this module only builds the download endpoint URL and
//! hands it to an opener. The dispatch is fire-and-forget by design: no
//! completion signal exists, and failures of the download endpoint are
//! not observable from here.

use crate::config::Config;
use std::sync::Arc;
use tracing::{debug, warn};

/// Capability for opening the download URL in a "new browsing context".
///
/// A desktop shell would open the system browser, a web embedder a new
/// tab. Implementations must not block and must not report back.
pub trait LinkOpener: Send + Sync {
    /// Open `url`, without observing the outcome
    fn open(&self, url: &str);
}

/// Opener that issues the GET itself on a background task.
///
/// For headless embedders without a browser to delegate to: the request
/// is spawned and its response dropped, so the backend still receives the
/// download trigger. Failures are logged and otherwise ignored.
#[derive(Clone, Debug, Default)]
pub struct BackgroundOpener;

impl LinkOpener for BackgroundOpener {
    fn open(&self, url: &str) {
        let url = url.to_string();
        tokio::spawn(async move {
            let client = reqwest::Client::new();
            match client.get(&url).send().await {
                Ok(response) if !response.status().is_success() => {
                    warn!(url = %url, status = response.status().as_u16(), "download endpoint returned failure");
                }
                Ok(_) => debug!(url = %url, "download request dispatched"),
                Err(e) => warn!(url = %url, error = %e, "failed to dispatch download request"),
            }
        });
    }
}

/// Builds download endpoint URLs and triggers the opener
pub struct DownloadDispatcher {
    /// Endpoint configuration
    config: Config,
    /// Injected opener capability
    opener: Arc<dyn LinkOpener>,
}

impl DownloadDispatcher {
    /// Create a dispatcher that hands download URLs to `opener`
    pub fn new(config: Config, opener: Arc<dyn LinkOpener>) -> Self {
        Self { config, opener }
    }

    /// Trigger a download for an already-validated post URL.
    ///
    /// Fire-and-forget: does not await completion and receives no typed
    /// response. The caller (the controller) is responsible for only
    /// invoking this once a lookup has succeeded.
    pub fn start_download(&self, url: &str) {
        let endpoint = self.config.endpoint_for(&self.config.download_path, url);
        debug!(url, endpoint = %endpoint, "starting download");
        self.opener.open(&endpoint);
    }
}
