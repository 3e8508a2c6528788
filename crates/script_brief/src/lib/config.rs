//! Process-wide configuration, built once at startup and passed by reference
//! into the handler and its collaborators. Read-only after construction.

pub const DEFAULT_MODEL: &str = "gpt-4-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_SUMMARY_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_HASHTAG_MAX_TOKENS: u32 = 150;
pub const DEFAULT_LIMIT_TEXT_NUM: usize = 300;
pub const DEFAULT_HASHTAG_MIN_CNT: usize = 10;
pub const DEFAULT_HASHTAG_MAX_CNT: usize = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    /// Chat completion model used for both generation calls.
    pub model: String,
    /// Sampling temperature shared by both generation calls.
    pub temperature: f32,
    pub summary_max_tokens: u32,
    pub hashtag_max_tokens: u32,
    /// Declared summary character limit. Not enforced against the merged
    /// transcript or the generated summary.
    pub limit_text_num: usize,
    /// Declared lower bound on hashtag count. Only the maximum is applied
    /// when prompting.
    pub hashtag_min_cnt: usize,
    /// Number of hashtags requested from the model.
    pub hashtag_max_cnt: usize,
    /// Upstream proxy credentials for transcript retrieval, when set.
    pub proxy: Option<ProxyCredentials>,
}

#[derive(Debug, Clone)]
pub struct ProxyCredentials {
    pub username: String,
    pub password: String,
}

impl AppConfig {
    pub fn new(openai_api_key: impl Into<String>) -> Self {
        AppConfig {
            openai_api_key: openai_api_key.into(),
            model: DEFAULT_MODEL.into(),
            temperature: DEFAULT_TEMPERATURE,
            summary_max_tokens: DEFAULT_SUMMARY_MAX_TOKENS,
            hashtag_max_tokens: DEFAULT_HASHTAG_MAX_TOKENS,
            limit_text_num: DEFAULT_LIMIT_TEXT_NUM,
            hashtag_min_cnt: DEFAULT_HASHTAG_MIN_CNT,
            hashtag_max_cnt: DEFAULT_HASHTAG_MAX_CNT,
            proxy: None,
        }
    }
}
