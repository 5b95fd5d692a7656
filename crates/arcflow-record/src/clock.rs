//! Wall-clock rendering of captured event times

use chrono::{DateTime, Local, Utc};

/// Which zone `HH:MM:SS` times are rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    Local,
    Utc,
}

impl Clock {
    pub fn from_utc_flag(utc: bool) -> Self {
        if utc { Clock::Utc } else { Clock::Local }
    }

    /// Render Unix milliseconds as `HH:MM:SS`
    pub fn format(&self, timestamp_ms: i64) -> Option<String> {
        let at: DateTime<Utc> = DateTime::from_timestamp_millis(timestamp_ms)?;
        let rendered = match self {
            Clock::Local => at.with_timezone(&Local).format("%H:%M:%S").to_string(),
            Clock::Utc => at.format("%H:%M:%S").to_string(),
        };
        Some(rendered)
    }
}
