//! Error types for insta-dl
//!
//! Every failure the workflow can surface to a user maps onto one of the
//! variants here. None of them are fatal: the controller handles each one
//! by moving to a failed state and exposing a message, and the user
//! resubmits. There are no automatic retries.

use thiserror::Error;

use crate::types::Phase;

/// Result type alias for insta-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Generic failure message shown when the lookup endpoint gives us nothing
/// better to display.
pub(crate) const GENERIC_LOOKUP_FAILURE: &str = "Failed to get video info";

/// Main error type for insta-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Submit was triggered with blank (or whitespace-only) input
    #[error("no URL entered")]
    EmptyInput,

    /// Submitted text is not a recognizable Instagram post or reel URL
    #[error("not a valid Instagram post or reel URL")]
    InvalidUrl,

    /// The metadata lookup failed, either at the transport level or with a
    /// non-success status from the endpoint
    #[error("metadata lookup failed: {message}")]
    Lookup {
        /// Server-provided reason when the response body carried one,
        /// otherwise a generic fallback
        message: String,
    },

    /// HTTP client error outside the lookup path (e.g. client construction)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_url")
        key: Option<String>,
    },

    /// A download was requested before a lookup succeeded
    #[error("cannot start download in phase {phase:?}")]
    NotReady {
        /// The workflow phase the controller was in at the time
        phase: Phase,
    },
}

impl Error {
    /// The message a presentation layer should show for this error.
    ///
    /// Mirrors the wording users of the original web client saw, so
    /// embedders get consistent copy without maintaining their own mapping.
    pub fn user_message(&self) -> String {
        match self {
            Error::EmptyInput => "Please enter an Instagram URL".to_string(),
            Error::InvalidUrl => "Please enter a valid Instagram post or reel URL".to_string(),
            Error::Lookup { message } => message.clone(),
            Error::NotReady { .. } => "Get video info before downloading".to_string(),
            other => other.to_string(),
        }
    }
}
