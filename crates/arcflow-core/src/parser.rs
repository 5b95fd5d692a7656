//! Action log parser: recorded flow export -> ordered `Flow`

use crate::classify::{classify, ClickSite};
use crate::config::Config;
use crate::error::FlowError;
use crate::raw::{RawFlow, RawStep, StepKind};
use arcflow_record::{
    Action, ActionType, Element, ElementRole, Flow, PageContext, END_PREFIX, START_PREFIX,
};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

const UNKNOWN_FLOW: &str = "Unknown Flow";

static END_SCREEN_RE: OnceLock<Regex> = OnceLock::new();

fn is_end_screen(title: &str) -> bool {
    END_SCREEN_RE
        .get_or_init(|| Regex::new(r"(?i)thank\s+you|conclusion").unwrap())
        .is_match(title)
}

/// Parses recorded flow exports into canonical action sequences
#[derive(Debug, Clone)]
pub struct FlowParser<'a> {
    config: &'a Config,
}

impl<'a> FlowParser<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn parse_file(&self, path: &Path) -> Result<Flow, FlowError> {
        let content = std::fs::read_to_string(path).map_err(|source| FlowError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_str(&content)
    }

    pub fn parse_str(&self, json: &str) -> Result<Flow, FlowError> {
        let raw: RawFlow = serde_json::from_str(json)?;
        Ok(self.parse(&raw))
    }

    /// Walk the steps in order, emitting one action per chapter or image step
    pub fn parse(&self, raw: &RawFlow) -> Flow {
        let name = raw
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(UNKNOWN_FLOW);

        let event_times: HashMap<&str, i64> = raw
            .captured_events
            .iter()
            .filter_map(|e| Some((e.click_id.as_deref()?, e.time_ms? as i64)))
            .collect();

        let mut actions: Vec<Action> = Vec::new();
        for step in &raw.steps {
            let index = actions.len() + 1;
            let action = match step.kind() {
                StepKind::Chapter => chapter_action(step, index),
                StepKind::Image => self.image_action(step, index, &event_times),
                StepKind::Video => continue,
                StepKind::Unknown(kind) => {
                    tracing::debug!(kind = %kind, "skipping unknown step type");
                    continue;
                }
            };
            actions.push(action);
        }

        tracing::info!(flow = name, actions = actions.len(), "parsed flow");
        Flow::new(name, actions)
    }

    fn image_action(
        &self,
        step: &RawStep,
        index: usize,
        event_times: &HashMap<&str, i64>,
    ) -> Action {
        let click = step.click_context.clone().unwrap_or_default();
        let text = click.text.unwrap_or_default();
        let element_type = click.element_type.unwrap_or_default();

        let page = step.page_context.as_ref().and_then(|p| {
            let url = p.url.clone().unwrap_or_default();
            let title = p.title.clone().unwrap_or_default();
            (!url.is_empty() || !title.is_empty()).then_some(PageContext { title, url })
        });

        let element = (!text.is_empty() || !element_type.is_empty()).then(|| Element {
            text: text.clone(),
            role: ElementRole::from(element_type),
            css_selector: click.css_selector.filter(|s| !s.is_empty()),
        });

        let hotspot_label = step.hotspot_label();
        let site = ClickSite {
            text: &text,
            role: element.as_ref().map(|e| &e.role),
            hotspot_label,
            page_url: page.as_ref().map(|p| p.url.as_str()).unwrap_or_default(),
        };
        let (action_type, description) = classify(self.config, &site);

        Action {
            sequence_index: index,
            action_type,
            description,
            element,
            page,
            timestamp_ms: step
                .id
                .as_deref()
                .and_then(|id| event_times.get(id).copied()),
            hotspot_label: hotspot_label.map(str::to_string),
            step_id: step.id.clone(),
        }
    }
}

fn chapter_action(step: &RawStep, index: usize) -> Action {
    let title = step.title.as_deref().unwrap_or_default();

    let (action_type, description) = if is_end_screen(title) {
        (ActionType::Complete, format!("{END_PREFIX}{title}"))
    } else if index == 1 {
        (ActionType::Navigate, format!("{START_PREFIX}{title}"))
    } else {
        (ActionType::Navigate, format!("Reached chapter: {title}"))
    };

    let mut action = Action::new(index, action_type, description);
    action.step_id = step.id.clone();
    action
}
