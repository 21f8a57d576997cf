//! Core types for insta-dl

use serde::{Deserialize, Serialize};

/// Metadata describing a single downloadable Instagram video.
///
/// This is the wire format of the lookup endpoint (`GET /api/info`).
/// Field names match the JSON the extraction backend produces. Optional
/// fields stay `None` when the backend omits them; substituting "unknown"
/// placeholders is the renderer's job (see [`crate::render`]), not the
/// parser's.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    /// Video title (required, may be empty)
    pub title: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Duration in seconds
    pub duration: f64,

    /// Container format tag (e.g. "mp4")
    pub ext: String,

    /// File size in bytes, when the backend knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesize: Option<u64>,

    /// Uploader handle, without the leading `@`
    pub uploader: String,
}

/// The workflow's current position, with its associated payload.
///
/// Exactly one of these is active at a time. Carrying the payload inside
/// the variant makes impossible combinations unrepresentable: there is no
/// way to be `Loading` while still holding a stale [`VideoInfo`], and no
/// error message can survive into `Success`.
#[derive(Clone, Debug, PartialEq)]
pub enum WorkflowState {
    /// Waiting for input; nothing submitted yet (or input was cleared)
    Idle,

    /// The submitted text did not pass validation; no request was issued
    ValidationFailed {
        /// Message explaining what the user should enter instead
        message: String,
    },

    /// A metadata lookup is in flight
    Loading,

    /// Lookup succeeded
    Success {
        /// The resolved metadata, ready for display and download
        info: VideoInfo,
    },

    /// Lookup failed
    Error {
        /// Server-provided reason or a generic fallback
        message: String,
    },
}

impl WorkflowState {
    /// The lightweight discriminant of this state
    pub fn phase(&self) -> Phase {
        match self {
            WorkflowState::Idle => Phase::Idle,
            WorkflowState::ValidationFailed { .. } => Phase::ValidationFailed,
            WorkflowState::Loading => Phase::Loading,
            WorkflowState::Success { .. } => Phase::Success,
            WorkflowState::Error { .. } => Phase::Error,
        }
    }
}

/// Payload-free discriminant of [`WorkflowState`], for presentation layers
/// that key rendering off the phase alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Waiting for input
    Idle,
    /// Last submit failed validation
    #[serde(rename = "validating-failed")]
    ValidationFailed,
    /// Lookup in flight
    Loading,
    /// Metadata available
    Success,
    /// Lookup failed
    Error,
}

/// The kind of a user-facing notification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyKind {
    /// Positive confirmation (info loaded, download started)
    Success,
    /// Something went wrong
    Failure,
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_info_deserializes_wire_format() {
        let json = r#"{
            "title": "Cat video",
            "thumbnail": "http://t/1.jpg",
            "duration": 42,
            "ext": "mp4",
            "filesize": 1048576,
            "uploader": "catlover"
        }"#;

        let info: VideoInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.title, "Cat video");
        assert_eq!(info.thumbnail, "http://t/1.jpg");
        assert_eq!(info.duration, 42.0);
        assert_eq!(info.ext, "mp4");
        assert_eq!(info.filesize, Some(1048576));
        assert_eq!(info.uploader, "catlover");
    }

    #[test]
    fn test_video_info_missing_filesize_stays_none() {
        let json = r#"{
            "title": "",
            "thumbnail": "http://t/2.jpg",
            "duration": 3.5,
            "ext": "mp4",
            "uploader": "someone"
        }"#;

        let info: VideoInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.filesize, None);
        assert_eq!(info.title, "");
    }

    #[test]
    fn test_state_phase_mapping() {
        assert_eq!(WorkflowState::Idle.phase(), Phase::Idle);
        assert_eq!(WorkflowState::Loading.phase(), Phase::Loading);
        assert_eq!(
            WorkflowState::ValidationFailed {
                message: "m".to_string()
            }
            .phase(),
            Phase::ValidationFailed
        );
        assert_eq!(
            WorkflowState::Error {
                message: "m".to_string()
            }
            .phase(),
            Phase::Error
        );
    }

    #[test]
    fn test_phase_serializes_kebab_case() {
        let s = serde_json::to_string(&Phase::ValidationFailed).unwrap();
        assert_eq!(s, "\"validating-failed\"");
    }
}
