use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a summary's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummarySource {
    Llm,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub executive_summary: String,
    pub detailed_analysis: String,
    pub flow_name: String,
    pub total_actions: usize,
    pub source: SummarySource,
}

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("response had no message content")]
    MissingContent,
}
