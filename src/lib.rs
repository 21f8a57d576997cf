//! # insta-dl
//!
//! Embeddable workflow engine for Instagram post and reel download clients.
//!
//! ## Design Philosophy
//!
//! insta-dl is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Presentation-agnostic** - The UI reads state and forwards intents;
//!   all transitions live in [`WorkflowController`]
//! - **Pluggable at the seams** - Lookups, notifications and download
//!   opening are injected capabilities
//! - **Sensible defaults** - Works out of the box against a co-located
//!   extraction backend with zero configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use insta_dl::{Config, Phase, WorkflowController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut controller = WorkflowController::new(Config::default())?;
//!
//!     controller.on_url_change("https://www.instagram.com/reel/XyZ123/");
//!     controller.on_submit().await;
//!
//!     if controller.phase() == Phase::Success {
//!         controller.on_download_click()?;
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Metadata lookup client
pub mod client;
/// Configuration types
pub mod config;
/// Workflow orchestration
pub mod controller;
/// Download dispatch
pub mod dispatch;
/// Error types
pub mod error;
/// Notification capability
pub mod notify;
/// Display formatting helpers
pub mod render;
/// Core types and workflow states
pub mod types;
/// Post/reel URL validation
pub mod validator;

// Re-export commonly used types
pub use client::{FetchInfo, MetadataClient};
pub use config::Config;
pub use controller::WorkflowController;
pub use dispatch::{BackgroundOpener, DownloadDispatcher, LinkOpener};
pub use error::{Error, Result};
pub use notify::{Notifier, TracingNotifier};
pub use types::{NotifyKind, Phase, VideoInfo, WorkflowState};
pub use validator::is_valid_post_url;
