//! Flow record types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of recorded interaction
///
/// The set is open-ended: tags that are not known to this crate are kept
/// verbatim in [`ActionType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActionType {
    Navigate,
    Search,
    Type,
    SelectProduct,
    SelectOption,
    BrowseOptions,
    AddToCart,
    DeclineOption,
    NavigateCart,
    Click,
    Complete,
    Other(String),
}

impl ActionType {
    pub fn as_str(&self) -> &str {
        match self {
            ActionType::Navigate => "navigate",
            ActionType::Search => "search",
            ActionType::Type => "type",
            ActionType::SelectProduct => "select_product",
            ActionType::SelectOption => "select_option",
            ActionType::BrowseOptions => "browse_options",
            ActionType::AddToCart => "add_to_cart",
            ActionType::DeclineOption => "decline_option",
            ActionType::NavigateCart => "navigate_cart",
            ActionType::Click => "click",
            ActionType::Complete => "complete",
            ActionType::Other(tag) => tag,
        }
    }

    /// Title-cased label, e.g. `add_to_cart` -> `Add To Cart`
    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl From<&str> for ActionType {
    fn from(tag: &str) -> Self {
        match tag {
            "navigate" => ActionType::Navigate,
            "search" => ActionType::Search,
            "type" => ActionType::Type,
            "select_product" => ActionType::SelectProduct,
            "select_option" => ActionType::SelectOption,
            "browse_options" => ActionType::BrowseOptions,
            "add_to_cart" => ActionType::AddToCart,
            "decline_option" => ActionType::DeclineOption,
            "navigate_cart" => ActionType::NavigateCart,
            "click" => ActionType::Click,
            "complete" => ActionType::Complete,
            other => ActionType::Other(other.to_string()),
        }
    }
}

impl From<String> for ActionType {
    fn from(tag: String) -> Self {
        ActionType::from(tag.as_str())
    }
}

impl From<ActionType> for String {
    fn from(action_type: ActionType) -> Self {
        action_type.as_str().to_string()
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role tag of the UI element an action targeted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementRole {
    Button,
    Image,
    Link,
    Other,
    Unknown(String),
}

impl ElementRole {
    pub fn as_str(&self) -> &str {
        match self {
            ElementRole::Button => "button",
            ElementRole::Image => "image",
            ElementRole::Link => "link",
            ElementRole::Other => "other",
            ElementRole::Unknown(tag) => tag,
        }
    }
}

impl From<String> for ElementRole {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "button" => ElementRole::Button,
            "image" => ElementRole::Image,
            "link" => ElementRole::Link,
            "other" => ElementRole::Other,
            _ => ElementRole::Unknown(tag),
        }
    }
}

impl From<ElementRole> for String {
    fn from(role: ElementRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UI element acted upon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub text: String,
    pub role: ElementRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_selector: Option<String>,
}

/// Page an action happened on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub title: String,
    pub url: String,
}

impl PageContext {
    /// Query parameters of the page URL, in order of appearance
    pub fn query_params(&self) -> Vec<(String, String)> {
        let Some((_, query)) = self.url.split_once('?') else {
            return Vec::new();
        };
        let query = query.split('#').next().unwrap_or_default();

        query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (k.to_string(), v.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect()
    }

    /// Query parameters whose key is one of `variant_keys`
    pub fn variant_params(&self, variant_keys: &[String]) -> Vec<(String, String)> {
        self.query_params()
            .into_iter()
            .filter(|(k, _)| variant_keys.iter().any(|vk| vk == k))
            .collect()
    }
}

/// One discrete recorded user interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// 1-based position in the flow
    pub sequence_index: usize,
    pub action_type: ActionType,
    pub description: String,
    #[serde(default)]
    pub element: Option<Element>,
    #[serde(default)]
    pub page: Option<PageContext>,
    /// Unix milliseconds of the matching captured event
    #[serde(default)]
    pub timestamp_ms: Option<i64>,
    #[serde(default)]
    pub hotspot_label: Option<String>,
    #[serde(default)]
    pub step_id: Option<String>,
}

impl Action {
    pub fn new(
        sequence_index: usize,
        action_type: ActionType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            sequence_index,
            action_type,
            description: description.into(),
            element: None,
            page: None,
            timestamp_ms: None,
            hotspot_label: None,
            step_id: None,
        }
    }

    pub fn element_text(&self) -> Option<&str> {
        self.element
            .as_ref()
            .map(|e| e.text.as_str())
            .filter(|t| !t.is_empty())
    }

    pub fn is_start_marker(&self) -> bool {
        self.action_type == ActionType::Navigate && self.description.starts_with(START_PREFIX)
    }

    pub fn is_completion_marker(&self) -> bool {
        self.action_type == ActionType::Complete
    }
}

/// Description prefix of a flow-start marker
pub const START_PREFIX: &str = "Started flow: ";

/// Description prefix of a flow-completion marker
pub const END_PREFIX: &str = "Reached end screen: ";

/// A recorded end-to-end session, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    name: String,
    actions: Vec<Action>,
}

impl Flow {
    pub fn new(name: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            name: name.into(),
            actions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn has(&self, action_type: &ActionType) -> bool {
        self.actions.iter().any(|a| &a.action_type == action_type)
    }

    /// Count per action type, in first-seen order
    pub fn type_counts(&self) -> Vec<(&ActionType, usize)> {
        let mut counts: Vec<(&ActionType, usize)> = Vec::new();
        for action in &self.actions {
            match counts.iter_mut().find(|(t, _)| *t == &action.action_type) {
                Some((_, count)) => *count += 1,
                None => counts.push((&action.action_type, 1)),
            }
        }
        counts
    }

    pub fn stats(&self) -> FlowStats {
        let mut action_types = BTreeMap::new();
        for action in &self.actions {
            *action_types
                .entry(action.action_type.as_str().to_string())
                .or_default() += 1;
        }

        FlowStats {
            flow_name: self.name.clone(),
            total_actions: self.actions.len(),
            action_types,
            first_action_time: self.actions.first().and_then(|a| a.timestamp_ms),
            last_action_time: self.actions.last().and_then(|a| a.timestamp_ms),
        }
    }
}

/// Summary statistics of a parsed flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowStats {
    pub flow_name: String,
    pub total_actions: usize,
    pub action_types: BTreeMap<String, usize>,
    pub first_action_time: Option<i64>,
    pub last_action_time: Option<i64>,
}

/// `snake_case` -> `Title Case`
pub fn title_case(snake: &str) -> String {
    snake
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
