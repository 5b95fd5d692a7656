//! Configuration for flow parsing and analysis

use crate::error::FlowError;
use arcflow_record::Paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding [`Config::model`]
pub const MODEL_ENV: &str = "ARCFLOW_MODEL";

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Image text containing one of these marks a product selection
    pub product_keywords: Vec<String>,

    /// Image text equal to one of these marks a variant choice
    pub option_values: Vec<String>,

    /// Button text containing one of these marks a declined upsell
    pub decline_phrases: Vec<String>,

    /// URL query keys that encode a selected product variant
    pub variant_keys: Vec<String>,

    /// Render times in UTC instead of local time
    pub utc_times: bool,

    /// Chat model used for the narrative summary
    pub model: String,

    /// OpenAI-compatible API base URL
    pub api_base: String,
}

impl Config {
    pub fn new() -> Self {
        Self {
            product_keywords: vec!["scooter".to_string()],
            option_values: ["Blue", "Pink", "Red", "Black"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            decline_phrases: ["no thanks", "decline", "skip"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            variant_keys: vec!["preselect".to_string()],
            utc_times: false,
            model: "gpt-4".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Load a JSON config file; missing keys fall back to defaults
    pub fn load(path: &Path) -> Result<Self, FlowError> {
        arcflow_record::read_json(path).map_err(|source| FlowError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve config: explicit file, else `<config_dir>/arcflow/config.json`, else defaults.
    /// Environment overrides are applied last.
    pub fn resolve(explicit: Option<&Path>, paths: &Paths) -> Result<Self, FlowError> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => match paths.config_file().filter(|p| p.exists()) {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "loading user config");
                    Self::load(&path)?
                }
                None => Self::new(),
            },
        };
        config.apply_env(std::env::var(MODEL_ENV).ok());
        Ok(config)
    }

    fn apply_env(&mut self, model: Option<String>) {
        if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
            self.model = model;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
