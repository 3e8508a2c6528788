pub mod config;
mod diagnostics;
mod error;
mod llm;
pub mod parser;
mod processor;
pub mod server;
pub mod tracing;
pub mod yt;

pub use error::ApiError;
pub use llm::openai;
pub use llm::summarizer::{Brief, Summarizer};
pub use processor::{builder::BriefProcessorBuilder, BriefProcessor};
