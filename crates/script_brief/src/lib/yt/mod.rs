pub mod innertube;

use std::future::Future;

use serde::Deserialize;

/// Retrieves the ordered caption segments for a video.
pub trait TranscriptFetcher {
    /// Language/variant tags tried in order when selecting a caption track.
    /// `a.ko` and `ko.auto` address the auto-generated Korean variants.
    const LANGUAGE_PRIORITY: &'static [&'static str] = &["ko", "ko-KR", "a.ko", "ko.auto"];

    fn fetch(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Vec<TranscriptSegment>, TranscriptError>> + Send;
}

/// One timed unit of caption text.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TranscriptError {
    #[error("Subtitles are disabled for this video.")]
    SubtitlesDisabled,
    #[error("No transcript found for the video.")]
    NoTranscriptFound,
    #[error("{0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for TranscriptError {
    fn from(err: reqwest::Error) -> Self {
        TranscriptError::Unexpected(err.to_string())
    }
}
