use std::fmt::Display;
use std::future::Future;

/// Produces a keyword-focused summary and hashtags for a merged transcript.
pub trait Summarizer {
    type Error: Display;

    fn summarize(
        &self,
        text: &str,
        keywords: &[String],
    ) -> impl Future<Output = Result<Brief, Self::Error>> + Send;
}

/// Result of one summarize-then-hashtag round trip. Token counts are the
/// provider-reported totals per call; they are logged, never returned to
/// the caller.
#[derive(Debug, Clone)]
pub struct Brief {
    pub summary: String,
    pub hashtags: Vec<String>,
    pub summary_tokens: u32,
    pub hashtag_tokens: u32,
    pub total_tokens: u32,
}
