//! Deterministic insights derived from a parsed flow

mod context;
mod insights;

pub use context::{action_context, behavior_hint};
pub use insights::{
    analyze, BehaviorIndicators, BreakdownEntry, FlowClassification, FunnelCheck, FunnelStage,
    Insights,
};
