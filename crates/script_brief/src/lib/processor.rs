pub mod builder;

use crate::{
    error::ApiError,
    llm::summarizer::{Brief, Summarizer},
    parser,
    yt::TranscriptFetcher,
};

/// The per-request pipeline: URL → video id → transcript → merged text →
/// summary + hashtags. Holds no mutable state; one instance serves all
/// in-flight requests.
pub struct BriefProcessor<F, S>
where
    F: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    transcript_fetcher: F,
    summarizer: S,
}

impl<F, S> BriefProcessor<F, S>
where
    F: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    #[tracing::instrument(skip(self, main_keywords))]
    pub async fn process(
        &self,
        youtube_url: &str,
        main_keywords: &[String],
    ) -> Result<Brief, ApiError> {
        let video_id = parser::extract_video_id(youtube_url)
            .inspect_err(|e| tracing::warn!(url = %e.url, "no video id in URL"))?;

        let segments = self
            .transcript_fetcher
            .fetch(video_id)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, video_id, "transcript stage failed"))?;

        let transcript_text = parser::merge_transcript(&segments);

        let brief = self
            .summarizer
            .summarize(&transcript_text, main_keywords)
            .await
            .map_err(|e| ApiError::Unexpected(e.to_string()))?;

        tracing::info!(
            video_id,
            summary = %brief.summary,
            hashtags = ?brief.hashtags,
            summary_tokens = brief.summary_tokens,
            hashtag_tokens = brief.hashtag_tokens,
            total_tokens = brief.total_tokens,
            "brief generated"
        );

        Ok(brief)
    }
}
