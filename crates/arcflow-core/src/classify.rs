//! Action type inference for recorded clicks

use crate::config::Config;
use arcflow_record::{ActionType, ElementRole};

/// What was clicked, and where
#[derive(Debug, Clone, Copy)]
pub struct ClickSite<'a> {
    pub text: &'a str,
    pub role: Option<&'a ElementRole>,
    pub hotspot_label: Option<&'a str>,
    pub page_url: &'a str,
}

/// Infer the action type and a human-readable description of a click.
///
/// Rules are checked in order and the first match wins.
pub fn classify(config: &Config, site: &ClickSite<'_>) -> (ActionType, String) {
    let text = site.text;
    let lower = text.to_lowercase();

    if let Some(label) = site.hotspot_label {
        if label.to_lowercase().starts_with("type ") {
            return (ActionType::Type, label.to_string());
        }
    }

    match site.role {
        Some(ElementRole::Button) => {
            if contains_any(&lower, &config.decline_phrases) {
                (ActionType::DeclineOption, format!("Declined option by clicking '{text}'"))
            } else if lower.contains("cart") {
                (ActionType::AddToCart, format!("Added item to cart by clicking '{text}'"))
            } else if lower.contains("search") {
                (ActionType::Search, format!("Initiated search by clicking '{text}'"))
            } else {
                (ActionType::Click, format!("Clicked button '{text}'"))
            }
        }
        Some(ElementRole::Image) => {
            if contains_any(&lower, &config.product_keywords) {
                (ActionType::SelectProduct, format!("Selected product: {text}"))
            } else if config.option_values.iter().any(|v| v == text) {
                (ActionType::SelectOption, format!("Selected color option: {text}"))
            } else {
                (ActionType::Click, format!("Clicked image: {text}"))
            }
        }
        Some(ElementRole::Other) if lower.contains("search") => (
            ActionType::Search,
            "Clicked on search bar to start searching".to_string(),
        ),
        Some(ElementRole::Link) => {
            if site.page_url.contains("cart") || text == "1" {
                (ActionType::NavigateCart, "Navigated to shopping cart".to_string())
            } else {
                (ActionType::Navigate, format!("Clicked link: {text}"))
            }
        }
        _ => (ActionType::Click, fallback_description(site)),
    }
}

fn fallback_description(site: &ClickSite<'_>) -> String {
    match site.hotspot_label {
        Some(label) => label.to_string(),
        None if !site.text.is_empty() => format!("Clicked on {}", site.text),
        None => "Performed action".to_string(),
    }
}

fn contains_any(haystack_lower: &str, needles: &[String]) -> bool {
    needles
        .iter()
        .any(|n| !n.is_empty() && haystack_lower.contains(&n.to_lowercase()))
}
