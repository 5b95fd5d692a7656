//! Narrative flow summaries via an LLM chat API, with an offline fallback

mod prompt;
mod summarizer;
mod types;

pub use prompt::{build_analysis_prompt, build_executive_prompt};
pub use summarizer::{
    api_key_from_env, fallback_summary, generate_summary, summarize_via_api, ChatClient,
    API_KEY_ENV,
};
pub use types::{Summary, SummaryError, SummarySource};
