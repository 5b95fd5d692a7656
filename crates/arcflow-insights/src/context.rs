//! Annotated action listing handed to the narrative summarizer

use arcflow_record::{Action, ActionType, Flow};

fn note_for(action_type: &ActionType) -> Option<&'static str> {
    let note = match action_type {
        ActionType::Search => "INTENT: Product discovery initiated",
        ActionType::SelectProduct => "CONVERSION: Moved from browse to product focus",
        ActionType::SelectOption => "DECISION: Made customization choice",
        ActionType::BrowseOptions => "EXPLORATION: Comparing alternatives before deciding",
        ActionType::AddToCart => "CONVERSION: Purchase intent confirmed",
        ActionType::DeclineOption => "PRICE SENSITIVITY: Rejected additional cost",
        ActionType::NavigateCart => "VERIFICATION: Confirming purchase decision",
        ActionType::Complete => "SUCCESS: Flow completed successfully",
        _ => return None,
    };
    Some(note)
}

/// Behavioral note for an action, if its type carries one
pub fn behavior_hint(action: &Action) -> Option<String> {
    if action.action_type == ActionType::Type {
        let query = action.element_text().unwrap_or_default();
        return Some(format!(
            "SEARCH QUERY: '{query}' - specific product interest"
        ));
    }
    note_for(&action.action_type).map(str::to_string)
}

/// One `<index>. <description> [HINT]` line per action
pub fn action_context(flow: &Flow) -> String {
    flow.actions()
        .iter()
        .map(|action| {
            let line = format!("{}. {}", action.sequence_index, action.description);
            match behavior_hint(action) {
                Some(hint) => format!("{line} [{hint}]"),
                None => line,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
