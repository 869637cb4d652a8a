use crate::types::VideoId;
use regex::Regex;
use std::sync::OnceLock;

fn video_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Accepted shapes: `watch?v=<id>` (with other query params around it),
        // `youtu.be/<id>`, `embed/<id>` and `/v/<id>`. The id is exactly 11
        // characters outside the `"&?/` + whitespace class, so trailing query
        // parameters are never captured.
        Regex::new(
            r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
        )
        .expect("valid video id regex")
    })
}

/// Extracts the 11-character video identifier from a YouTube URL.
///
/// Returns `None` when no recognized URL shape carries a well-formed
/// identifier; unrecognized input is never an error.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    video_id_re()
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| VideoId::new(m.as_str()))
}

/// A string is a valid video URL iff extraction succeeds on it.
///
/// Deliberately defined in terms of [`extract_video_id`] so the two can never
/// disagree.
pub fn is_valid_video_url(input: &str) -> bool {
    extract_video_id(input).is_some()
}
