//! Path resolution for configuration and generated files

use chrono::{DateTime, TimeZone};
use std::path::{Path, PathBuf};

const SOCIAL_IMAGE_PREFIX: &str = "social_media_";
const SOCIAL_IMAGE_EXT: &str = ".png";

/// Resolves standard paths for config and output files
#[derive(Debug, Clone)]
pub struct Paths {
    pub config_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
}

impl Paths {
    /// Create a resolver writing generated files into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: dirs::config_dir().map(|d| d.join("arcflow")),
            output_dir: output_dir.into(),
        }
    }

    /// Get the default config.json path, if a config directory exists
    pub fn config_file(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|d| d.join("config.json"))
    }

    /// Get the companion listing paths (`parsed_actions.md`, `parsed_actions.json`)
    pub fn parsed_actions_md(&self) -> PathBuf {
        self.output_dir.join("parsed_actions.md")
    }

    pub fn parsed_actions_json(&self) -> PathBuf {
        self.output_dir.join("parsed_actions.json")
    }

    /// Get the report path for a flow analysed at `at`
    pub fn report_path<Tz: TimeZone>(&self, flow_name: &str, at: &DateTime<Tz>) -> PathBuf
    where
        Tz::Offset: std::fmt::Display,
    {
        self.output_dir.join(report_file_name(flow_name, at))
    }

    /// Newest `social_media_<unix>.png` in the output directory
    pub fn latest_social_image(&self) -> Option<PathBuf> {
        latest_social_image(&self.output_dir)
    }
}

/// Keep alphanumerics, space, `-` and `_`, then turn spaces into underscores
pub fn safe_name(flow_name: &str) -> String {
    flow_name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .replace(' ', "_")
}

/// `flow_analysis_report_<safe_name>_<YYYYmmdd_HHMMSS>.md`
pub fn report_file_name<Tz: TimeZone>(flow_name: &str, at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "flow_analysis_report_{}_{}.md",
        safe_name(flow_name),
        at.format("%Y%m%d_%H%M%S")
    )
}

/// `social_media_<unix_timestamp>.png`
pub fn social_image_file_name(unix_secs: i64) -> String {
    format!("{SOCIAL_IMAGE_PREFIX}{unix_secs}{SOCIAL_IMAGE_EXT}")
}

/// Unix timestamp encoded in a social image file name
pub fn parse_social_image_file_name(file_name: &str) -> Option<i64> {
    file_name
        .strip_prefix(SOCIAL_IMAGE_PREFIX)?
        .strip_suffix(SOCIAL_IMAGE_EXT)?
        .parse()
        .ok()
}

fn latest_social_image(dir: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;

    entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            let stamp = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(parse_social_image_file_name)?;
            path.is_file().then_some((stamp, path))
        })
        .max_by_key(|(stamp, _)| *stamp)
        .map(|(_, path)| path)
}
