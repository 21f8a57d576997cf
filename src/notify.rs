//! User-facing notification capability
//!
//! The controller announces lookup success, lookup failure, and download
//! start through this seam. How the announcement surfaces (toast, desktop
//! notification, log line) is the embedder's choice; the controller never
//! depends on a concrete presentation.

use crate::types::NotifyKind;
use tracing::{info, warn};

/// Capability for delivering user-facing notifications.
///
/// Implementations must be fire-and-forget: the controller does not await
/// delivery and never observes failures.
pub trait Notifier: Send + Sync {
    /// Deliver a notification with a short title and a longer description
    fn notify(&self, kind: NotifyKind, title: &str, description: &str);
}

/// Default notifier that routes notifications into the `tracing` log.
///
/// Useful for headless embedders and as a stand-in before a real
/// presentation layer is wired up.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotifyKind, title: &str, description: &str) {
        match kind {
            NotifyKind::Success => info!(title, description, "notification"),
            NotifyKind::Failure => warn!(title, description, "notification"),
        }
    }
}
