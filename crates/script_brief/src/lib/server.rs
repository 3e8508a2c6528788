//! HTTP surface: a single POST route mapping pipeline outcomes to statuses.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::{
    error::ApiError, llm::summarizer::Summarizer, processor::BriefProcessor,
    yt::TranscriptFetcher,
};

#[derive(Debug, Deserialize)]
pub struct BriefRequest {
    #[serde(default)]
    pub youtube_url: Option<String>,
    #[serde(default)]
    pub main_keywords: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct BriefResponse {
    pub summary: String,
    pub hashtags: Vec<String>,
}

pub fn router<F, S>(processor: BriefProcessor<F, S>) -> Router
where
    F: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    Router::new()
        .route("/youtube/script/brief", post(brief::<F, S>))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(processor))
}

async fn brief<F, S>(
    State(processor): State<Arc<BriefProcessor<F, S>>>,
    Json(request): Json<BriefRequest>,
) -> Result<Json<BriefResponse>, ApiError>
where
    F: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    let (youtube_url, main_keywords) = match (request.youtube_url, request.main_keywords) {
        (Some(url), Some(keywords)) if !url.is_empty() && !keywords.is_empty() => (url, keywords),
        _ => return Err(ApiError::MissingFields),
    };

    tracing::info!(youtube_url = %youtube_url, main_keywords = ?main_keywords, "brief requested");

    let brief = processor.process(&youtube_url, &main_keywords).await?;

    Ok(Json(BriefResponse {
        summary: brief.summary,
        hashtags: brief.hashtags,
    }))
}
