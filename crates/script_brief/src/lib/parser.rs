//! URL parsing and transcript merging.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::yt::TranscriptSegment;

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|youtu\.be/)([a-zA-Z0-9_-]{11})").unwrap());

/// The URL did not contain a recognizable 11-character video id.
#[derive(Debug, thiserror::Error)]
#[error("Invalid YouTube URL")]
pub struct InvalidUrl {
    pub url: String,
}

/// Extracts the video id from a `v=` query parameter or a `youtu.be/` path
/// segment. The first match wins.
pub fn extract_video_id(youtube_url: &str) -> Result<&str, InvalidUrl> {
    VIDEO_ID_RE
        .captures(youtube_url)
        .map(|caps| caps.get(1).unwrap().as_str())
        .ok_or_else(|| InvalidUrl {
            url: youtube_url.to_string(),
        })
}

/// Joins segment texts with a single space, preserving segment order.
pub fn merge_transcript(segments: &[TranscriptSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).join(" ")
}
