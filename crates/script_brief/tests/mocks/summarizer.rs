use std::sync::{Arc, Mutex};

use script_brief::{openai, Brief, Summarizer};

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub raw_hashtag_response: String,
    pub calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
    pub fail_with: Option<String>,
}

impl MockSummarizer {
    pub fn new(summary: &str, raw_hashtag_response: &str) -> Self {
        Self {
            summary: summary.to_string(),
            raw_hashtag_response: raw_hashtag_response.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            summary: String::new(),
            raw_hashtag_response: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl Summarizer for MockSummarizer {
    type Error = anyhow::Error;

    async fn summarize(&self, text: &str, keywords: &[String]) -> Result<Brief, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), keywords.to_vec()));
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(Brief {
            summary: self.summary.clone(),
            hashtags: openai::extract_hashtags(&self.raw_hashtag_response),
            summary_tokens: 128,
            hashtag_tokens: 32,
            total_tokens: 160,
        })
    }
}
