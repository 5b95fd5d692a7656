//! Wire schema of a recorded `flow.json` export
//!
//! Only the fields the parser reads are modelled; everything else in the
//! export is ignored.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFlow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<RawStep>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub captured_events: Vec<CapturedEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepKind {
    Chapter,
    Image,
    Video,
    Unknown(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStep {
    #[serde(rename = "type", default)]
    pub step_type: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub page_context: Option<RawPageContext>,
    #[serde(default)]
    pub click_context: Option<RawClickContext>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hotspots: Vec<RawHotspot>,
}

impl RawStep {
    pub fn kind(&self) -> StepKind {
        match self.step_type.as_str() {
            "CHAPTER" => StepKind::Chapter,
            "IMAGE" => StepKind::Image,
            "VIDEO" => StepKind::Video,
            other => StepKind::Unknown(other.to_string()),
        }
    }

    /// Label of the first hotspot, if any
    pub fn hotspot_label(&self) -> Option<&str> {
        self.hotspots
            .first()
            .and_then(|h| h.label.as_deref())
            .filter(|l| !l.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPageContext {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClickContext {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub element_type: Option<String>,
    #[serde(default)]
    pub css_selector: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawHotspot {
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedEvent {
    #[serde(default)]
    pub click_id: Option<String>,
    #[serde(default)]
    pub time_ms: Option<f64>,
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_flow_ignores_unknown_fields() {
        let json = r##"{
            "name": "Demo",
            "schemaVersion": "1.0",
            "steps": [
                {"type": "CHAPTER", "id": "c1", "title": "Intro", "theme": "dark"},
                {"type": "IMAGE", "id": "s1",
                 "pageContext": {"url": "https://a.example/", "title": "A", "width": 100},
                 "clickContext": {"text": "Search", "elementType": "other", "cssSelector": "#q"},
                 "hotspots": [{"label": "Click the search bar", "x": 0.1}]}
            ],
            "capturedEvents": [{"clickId": "s1", "timeMs": 1700000000000, "type": "click"}]
        }"##;

        let raw: RawFlow = serde_json::from_str(json).unwrap();
        assert_eq!(raw.name.as_deref(), Some("Demo"));
        assert_eq!(raw.steps.len(), 2);
        assert_eq!(raw.steps[0].kind(), StepKind::Chapter);
        assert_eq!(raw.steps[1].hotspot_label(), Some("Click the search bar"));
        assert_eq!(
            raw.steps[1].click_context.as_ref().unwrap().element_type.as_deref(),
            Some("other")
        );
        assert_eq!(raw.captured_events[0].time_ms, Some(1_700_000_000_000.0));
    }

    #[test]
    fn test_raw_flow_empty_object() {
        let raw: RawFlow = serde_json::from_str("{}").unwrap();
        assert!(raw.name.is_none());
        assert!(raw.steps.is_empty());
    }

    #[test]
    fn test_null_collections_read_as_empty() {
        let json = r#"{
            "name": "Demo",
            "steps": [
                {"type": "IMAGE", "id": "s1", "hotspots": null,
                 "clickContext": {"text": "Go", "elementType": "button"}}
            ],
            "capturedEvents": null
        }"#;

        let raw: RawFlow = serde_json::from_str(json).unwrap();
        assert_eq!(raw.steps.len(), 1);
        assert!(raw.steps[0].hotspots.is_empty());
        assert_eq!(raw.steps[0].hotspot_label(), None);
        assert!(raw.captured_events.is_empty());

        let raw: RawFlow = serde_json::from_str(r#"{"steps": null}"#).unwrap();
        assert!(raw.steps.is_empty());
    }

    #[test]
    fn test_step_kind_unknown() {
        let step = RawStep {
            step_type: "EMBED".to_string(),
            ..Default::default()
        };
        assert_eq!(step.kind(), StepKind::Unknown("EMBED".to_string()));
    }
}
