//! Workflow orchestration
//!
//! [`WorkflowController`] owns the workflow state and sequences the
//! collaborators: validation gates the input, the metadata client resolves
//! it, the dispatcher triggers downloads. A presentation layer forwards
//! user intents ([`on_url_change`](WorkflowController::on_url_change),
//! [`on_submit`](WorkflowController::on_submit),
//! [`on_download_click`](WorkflowController::on_download_click)) and reads
//! the resulting state back; it never mutates state itself.
//!
//! Everything is single-threaded and event-driven. The metadata lookup is
//! the only suspend point; a submit arriving while one is in flight is
//! ignored rather than cancelled-and-restarted, so an in-flight lookup
//! always runs to completion. Its result is tagged with the URL it was
//! issued for and discarded if the input has changed in the meantime.


use crate::client::{FetchInfo, MetadataClient};
use crate::config::Config;
use crate::dispatch::{BackgroundOpener, DownloadDispatcher, LinkOpener};
use crate::error::{Error, Result};
use crate::notify::{Notifier, TracingNotifier};
use crate::types::{NotifyKind, Phase, VideoInfo, WorkflowState};
use crate::validator::is_valid_post_url;
use std::sync::Arc;
use tracing::{debug, info};

/// Orchestrates the submit → validate → lookup → download workflow.
///
/// The controller exclusively owns [`WorkflowState`] and the current
/// input text. All transitions happen inside the intent methods, one
/// event at a time.
pub struct WorkflowController {
    /// Current input text, as last forwarded by the presentation layer
    url: String,
    /// Current workflow state with its payload
    state: WorkflowState,
    /// Metadata lookup capability (trait object for pluggable implementations)
    provider: Arc<dyn FetchInfo>,
    /// Download endpoint dispatcher
    dispatcher: DownloadDispatcher,
    /// User-facing notification capability
    notifier: Arc<dyn Notifier>,
}

impl WorkflowController {
    /// Create a controller with the default collaborators: a
    /// [`MetadataClient`] for lookups, a
    /// [`BackgroundOpener`](crate::dispatch::BackgroundOpener) for download
    /// dispatch and a [`TracingNotifier`] for notifications.
    ///
    /// # Errors
    /// Returns an error when the configuration is invalid or the HTTP
    /// client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        let provider = Arc::new(MetadataClient::new(config.clone())?);
        Ok(Self::with_collaborators(
            config,
            provider,
            Arc::new(BackgroundOpener),
            Arc::new(TracingNotifier),
        ))
    }

    /// Create a controller with explicit collaborators.
    ///
    /// This is the seam embedders use to plug in a browser-based opener or
    /// a toast notifier, and tests use to inject mock providers.
    pub fn with_collaborators(
        config: Config,
        provider: Arc<dyn FetchInfo>,
        opener: Arc<dyn LinkOpener>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            url: String::new(),
            state: WorkflowState::Idle,
            provider,
            dispatcher: DownloadDispatcher::new(config, opener),
            notifier,
        }
    }

    /// Update the input text.
    ///
    /// Typing clears any validation or lookup error back to idle, and
    /// drops a previous success (the metadata no longer describes the
    /// input). A lookup already in flight keeps its `loading` state; its
    /// result will be discarded on arrival because the URL tag no longer
    /// matches.
    pub fn on_url_change(&mut self, text: &str) {
        self.url = text.to_string();
        if self.phase() != Phase::Loading {
            self.state = WorkflowState::Idle;
        }
    }

    /// Submit the current input for a metadata lookup.
    ///
    /// Validation failures transition to `validation-failed` without
    /// issuing a request. A submit while a lookup is already in flight is
    /// a no-op; only one lookup runs at a time.
    pub async fn on_submit(&mut self) {
        if self.phase() == Phase::Loading {
            debug!("submit ignored, lookup already in flight");
            return;
        }

        if self.url.trim().is_empty() {
            self.state = WorkflowState::ValidationFailed {
                message: Error::EmptyInput.user_message(),
            };
            return;
        }

        if !is_valid_post_url(&self.url) {
            debug!(url = %self.url, "rejected by validator");
            self.state = WorkflowState::ValidationFailed {
                message: Error::InvalidUrl.user_message(),
            };
            return;
        }

        // Tag the lookup with the URL it was issued for; a previous
        // VideoInfo is cleared by entering Loading
        let submitted = self.url.clone();
        self.state = WorkflowState::Loading;
        info!(url = %submitted, "starting metadata lookup");

        let result = self.provider.fetch_info(&submitted).await;
        self.apply_lookup(&submitted, result);
    }

    /// Apply the outcome of a lookup that was issued for `submitted`.
    ///
    /// A result whose tag no longer matches the current input is stale:
    /// it is discarded without touching the payload and without emitting
    /// notifications, and the workflow returns to idle.
    fn apply_lookup(&mut self, submitted: &str, result: Result<VideoInfo>) {
        if self.url != submitted {
            debug!(submitted, current = %self.url, "discarding stale lookup result");
            if self.phase() == Phase::Loading {
                self.state = WorkflowState::Idle;
            }
            return;
        }

        match result {
            Ok(info) => {
                info!(url = %submitted, title = %info.title, "metadata lookup succeeded");
                self.state = WorkflowState::Success { info };
                self.notifier
                    .notify(NotifyKind::Success, "Video info loaded", "Ready to download!");
            }
            Err(e) => {
                let message = e.user_message();
                info!(url = %submitted, message, "metadata lookup failed");
                self.state = WorkflowState::Error {
                    message: message.clone(),
                };
                self.notifier.notify(NotifyKind::Failure, "Error", &message);
            }
        }
    }

    /// Trigger a download for the URL whose lookup succeeded.
    ///
    /// Fire-and-forget; the state stays `success`. Outside `success` this
    /// is a caller error and nothing is dispatched.
    ///
    /// # Errors
    /// Returns [`Error::NotReady`] when no successful lookup is present.
    pub fn on_download_click(&mut self) -> Result<()> {
        if self.phase() != Phase::Success {
            return Err(Error::NotReady {
                phase: self.phase(),
            });
        }

        self.dispatcher.start_download(&self.url);
        self.notifier.notify(
            NotifyKind::Success,
            "Download started",
            "Your video is being prepared...",
        );
        Ok(())
    }

    /// The current workflow state with its payload
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// The current workflow phase
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The resolved metadata, present only in the `success` phase
    pub fn video_info(&self) -> Option<&VideoInfo> {
        match &self.state {
            WorkflowState::Success { info } => Some(info),
            _ => None,
        }
    }

    /// The user-facing error message, present only in the
    /// `validation-failed` and `error` phases
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            WorkflowState::ValidationFailed { message } | WorkflowState::Error { message } => {
                Some(message)
            }
            _ => None,
        }
    }

    /// The current input text
    pub fn url(&self) -> &str {
        &self.url
    }
}
