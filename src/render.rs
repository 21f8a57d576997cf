//! Display formatting helpers for [`VideoInfo`](crate::types::VideoInfo) fields
//!
//! Parsing keeps optional metadata as `Option`; the "unknown" substitution
//! happens here, at render time, so every embedder shows the same copy.

/// Format a duration in seconds as `M:SS`.
///
/// # Examples
///
/// ```
/// use insta_dl::render::format_duration;
///
/// assert_eq!(format_duration(42.0), "0:42");
/// assert_eq!(format_duration(125.0), "2:05");
/// ```
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format an optional byte count as megabytes with one decimal, or
/// "Unknown size" when the backend did not report one.
///
/// # Examples
///
/// ```
/// use insta_dl::render::format_file_size;
///
/// assert_eq!(format_file_size(Some(1_572_864)), "1.5 MB");
/// assert_eq!(format_file_size(None), "Unknown size");
/// ```
#[must_use]
pub fn format_file_size(bytes: Option<u64>) -> String {
    match bytes {
        Some(bytes) if bytes > 0 => {
            let mb = bytes as f64 / (1024.0 * 1024.0);
            format!("{:.1} MB", mb)
        }
        _ => "Unknown size".to_string(),
    }
}
