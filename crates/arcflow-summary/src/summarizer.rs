use crate::prompt::{
    build_analysis_prompt, build_executive_prompt, ANALYST_SYSTEM_PROMPT, EXECUTIVE_SYSTEM_PROMPT,
};
use crate::types::{Summary, SummaryError, SummarySource};
use arcflow_core::Config;
use arcflow_insights::{FunnelStage, Insights};
use arcflow_record::Flow;
use std::time::Duration;

/// Environment variable holding the chat API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Non-empty API key from the environment
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Minimal client for an OpenAI-compatible chat completions endpoint
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    pub fn new(config: &Config, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            endpoint: format!("{}/chat/completions", config.api_base.trim_end_matches('/')),
            api_key: api_key.into(),
            model: config.model.clone(),
        }
    }

    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, SummaryError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": self.model,
                "max_tokens": max_tokens,
                "temperature": temperature,
                "messages": [
                    {"role": "system", "content": system},
                    {"role": "user", "content": user}
                ]
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SummaryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: serde_json::Value = response.json().await?;
        extract_content(&body)
    }
}

/// Trimmed `choices[0].message.content` of a chat completion body
fn extract_content(body: &serde_json::Value) -> Result<String, SummaryError> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(SummaryError::MissingContent)
}

/// Detailed analysis, then an executive summary of that analysis
pub async fn summarize_via_api(client: &ChatClient, flow: &Flow) -> Result<Summary, SummaryError> {
    let detailed_analysis = client
        .complete(ANALYST_SYSTEM_PROMPT, &build_analysis_prompt(flow), 500, 0.3)
        .await?;

    let executive_summary = client
        .complete(
            EXECUTIVE_SYSTEM_PROMPT,
            &build_executive_prompt(flow.name(), &detailed_analysis),
            100,
            0.2,
        )
        .await?;

    Ok(Summary {
        executive_summary,
        detailed_analysis,
        flow_name: flow.name().to_string(),
        total_actions: flow.len(),
        source: SummarySource::Llm,
    })
}

/// Summary assembled from insights alone
pub fn fallback_summary(flow: &Flow, insights: &Insights) -> Summary {
    let executive_summary = format!(
        "{}: {} across {} actions ({}% completion).",
        flow.name(),
        insights.classification.label(),
        flow.len(),
        insights.behavior.completion_rate
    );

    let stages = |reached: bool| -> Vec<FunnelStage> {
        insights
            .conversion_funnel
            .iter()
            .filter(|c| c.reached == reached)
            .map(|c| c.stage)
            .collect()
    };
    let (reached, missed) = (stages(true), stages(false));

    let mut detailed_analysis = format!(
        "Funnel stages reached: {}.",
        join_labels(&reached).unwrap_or_else(|| "none".to_string())
    );
    if let Some(missed) = join_labels(&missed) {
        detailed_analysis.push_str(&format!(" Not reached: {}.", missed));
    }

    let signals: Vec<&str> = insights
        .behavior
        .flags()
        .iter()
        .filter(|(_, present)| *present)
        .map(|(label, _)| *label)
        .collect();
    if !signals.is_empty() {
        detailed_analysis.push_str(&format!(" Behavior signals: {}.", signals.join(", ")));
    }

    Summary {
        executive_summary,
        detailed_analysis,
        flow_name: flow.name().to_string(),
        total_actions: flow.len(),
        source: SummarySource::Fallback,
    }
}

/// Use the API when a key is available; degrade to the fallback on any failure
pub async fn generate_summary(
    config: &Config,
    api_key: Option<&str>,
    flow: &Flow,
    insights: &Insights,
) -> Summary {
    let Some(key) = api_key else {
        tracing::info!("no API key configured, using fallback summary");
        return fallback_summary(flow, insights);
    };

    let client = ChatClient::new(config, key);
    match summarize_via_api(&client, flow).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!(error = %e, "narrative summary failed, using fallback");
            fallback_summary(flow, insights)
        }
    }
}

fn join_labels(stages: &[FunnelStage]) -> Option<String> {
    if stages.is_empty() {
        return None;
    }
    Some(
        stages
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", "),
    )
}
