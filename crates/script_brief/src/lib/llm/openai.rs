use itertools::Itertools;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::AppConfig,
    llm::summarizer::{Brief, Summarizer},
};

pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    summary_max_tokens: u32,
    hashtag_max_tokens: u32,
    hashtag_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No content in response")]
    EmptyCompletion,
}

impl OpenAIClient {
    const SUMMARY_SYSTEM_PROMPT: &str = include_str!("./prompts/summary_system.txt");
    const HASHTAG_SYSTEM_PROMPT: &str = include_str!("./prompts/hashtag_system.txt");

    pub fn new(config: &AppConfig) -> Self {
        OpenAIClient {
            client: Client::new(),
            api_key: config.openai_api_key.clone(),
            base_url: "https://api.openai.com/v1".into(),
            model: config.model.clone(),
            temperature: config.temperature,
            summary_max_tokens: config.summary_max_tokens,
            hashtag_max_tokens: config.hashtag_max_tokens,
            hashtag_count: config.hashtag_max_cnt,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn send_completion_request(
        &self,
        system_prompt: &str,
        user_content: String,
        max_tokens: u32,
    ) -> Result<CompletionResponse, OpenAIError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt
                },
                {
                    "role": "user",
                    "content": user_content
                }
            ],
            "max_tokens": max_tokens,
            "temperature": self.temperature
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

impl Summarizer for OpenAIClient {
    type Error = OpenAIError;

    async fn summarize(&self, text: &str, keywords: &[String]) -> Result<Brief, OpenAIError> {
        let keyword_list = quoted_keyword_list(keywords);

        let summary_prompt = format!(
            "이 스크립트는 주식전문가가 {keyword_list} 종목을 추천한 내용입니다. \
             {keyword_list} 해당 종목에 왜 추천해줬는지 줄바꿈 없이 요약해주세요. :\n\n{text}"
        );
        let response = self
            .send_completion_request(
                Self::SUMMARY_SYSTEM_PROMPT,
                summary_prompt,
                self.summary_max_tokens,
            )
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize transcript"))?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or(OpenAIError::EmptyCompletion)?;
        let summary_tokens = response.usage.total_tokens;

        let hashtag_prompt = format!(
            "다음 요약을 바탕으로 {count}개의 관련 해시태그를 문자열로 줄바꿈 없이 한줄로 생성해 주세요. \
             해시태그는 {keyword_list}에 초점을 맞추어 한국어로 생성하되, 중요한 순으로 {count}개를 뽑아주세요.:\n\n{summary}",
            count = self.hashtag_count
        );
        let hashtag_response = self
            .send_completion_request(
                Self::HASHTAG_SYSTEM_PROMPT,
                hashtag_prompt,
                self.hashtag_max_tokens,
            )
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate hashtags"))?;

        let hashtags_text = hashtag_response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or(OpenAIError::EmptyCompletion)?;
        let hashtags = extract_hashtags(&hashtags_text);
        let hashtag_tokens = hashtag_response.usage.total_tokens;

        Ok(Brief {
            summary,
            hashtags,
            summary_tokens,
            hashtag_tokens,
            total_tokens: summary_tokens + hashtag_tokens,
        })
    }
}

/// Comma-joined, quoted keyword list as embedded in both prompts.
fn quoted_keyword_list(keywords: &[String]) -> String {
    keywords.iter().map(|k| format!("'{k}'")).join(", ")
}

/// Keeps the whitespace-delimited tokens that start with `#`, in response
/// order. No dedup, no re-sorting.
pub fn extract_hashtags(raw: &str) -> Vec<String> {
    raw.split_whitespace()
        .filter(|tag| tag.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hashtags_keeps_only_hash_prefixed_tokens() {
        let raw = "summary #A #B plain #C";
        assert_eq!(extract_hashtags(raw), vec!["#A", "#B", "#C"]);
    }

    #[test]
    fn test_extract_hashtags_korean_one_liner() {
        let raw = "#삼성전자 #주식 전망 #실적발표 #반도체";
        assert_eq!(
            extract_hashtags(raw),
            vec!["#삼성전자", "#주식", "#실적발표", "#반도체"]
        );
    }

    #[test]
    fn test_extract_hashtags_preserves_order_and_duplicates() {
        let raw = "#b #a #b";
        assert_eq!(extract_hashtags(raw), vec!["#b", "#a", "#b"]);
    }

    #[test]
    fn test_extract_hashtags_handles_newlines_and_empty_input() {
        assert_eq!(extract_hashtags("#a\n#b\t#c"), vec!["#a", "#b", "#c"]);
        assert!(extract_hashtags("").is_empty());
        assert!(extract_hashtags("no tags here").is_empty());
    }

    #[test]
    fn test_quoted_keyword_list_single() {
        assert_eq!(quoted_keyword_list(&["삼성전자".to_string()]), "'삼성전자'");
    }

    #[test]
    fn test_quoted_keyword_list_multiple() {
        let keywords = vec!["삼성전자".to_string(), "SK하이닉스".to_string()];
        assert_eq!(quoted_keyword_list(&keywords), "'삼성전자', 'SK하이닉스'");
    }
}
