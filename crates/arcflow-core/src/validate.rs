//! Structural checks on a parsed flow

use arcflow_record::{ActionType, Flow};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    EmptyFlow,
    /// `sequence_index` at `position` (0-based) is not `position + 1`
    IndexGap { position: usize, found: usize },
    MissingStartMarker,
    MissingCompletionMarker,
    /// Add-to-cart with no select-product before it
    CartWithoutProduct { sequence_index: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyFlow => write!(f, "flow has no actions"),
            Violation::IndexGap { position, found } => write!(
                f,
                "action {} has sequence index {}, expected {}",
                position + 1,
                found,
                position + 1
            ),
            Violation::MissingStartMarker => write!(f, "first action is not a flow-start marker"),
            Violation::MissingCompletionMarker => {
                write!(f, "last action is not a flow-completion marker")
            }
            Violation::CartWithoutProduct { sequence_index } => write!(
                f,
                "add-to-cart at step {} has no preceding product selection",
                sequence_index
            ),
        }
    }
}

/// Check every structural property, collecting all violations
pub fn validate_flow(flow: &Flow) -> Vec<Violation> {
    let actions = flow.actions();
    if actions.is_empty() {
        return vec![Violation::EmptyFlow];
    }

    let mut violations = Vec::new();

    for (position, action) in actions.iter().enumerate() {
        if action.sequence_index != position + 1 {
            violations.push(Violation::IndexGap {
                position,
                found: action.sequence_index,
            });
        }
    }

    if !actions[0].is_start_marker() {
        violations.push(Violation::MissingStartMarker);
    }
    if !actions[actions.len() - 1].is_completion_marker() {
        violations.push(Violation::MissingCompletionMarker);
    }

    let mut product_seen = false;
    for action in actions {
        match action.action_type {
            ActionType::SelectProduct => product_seen = true,
            ActionType::AddToCart if !product_seen => {
                violations.push(Violation::CartWithoutProduct {
                    sequence_index: action.sequence_index,
                });
            }
            _ => {}
        }
    }

    violations
}
