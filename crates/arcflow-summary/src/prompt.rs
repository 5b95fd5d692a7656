//! Prompts for the narrative summary

use arcflow_record::Flow;

pub const ANALYST_SYSTEM_PROMPT: &str = "You are a UX analyst and business intelligence expert. \
Analyze recorded user flows and explain what the user's actions reveal about their intent, \
how the interface shaped their behavior, where friction or success showed up, and what a \
product team should change. Explain why things happened rather than retelling them.";

pub const EXECUTIVE_SYSTEM_PROMPT: &str =
    "You are a business analyst writing executive summaries.";

const MAX_CONTEXT_CHARS: usize = 10000;

pub fn build_analysis_prompt(flow: &Flow) -> String {
    let context = arcflow_insights::action_context(flow);
    let truncated = truncate_chars(&context, MAX_CONTEXT_CHARS);
    format!(
        "Analyze this user flow: \"{}\"\n\n\
         DETAILED USER ACTIONS:\n{}\n\n\
         Cover the user's goal and how well they reached it, behavioral signals, \
         how the interface helped or hindered, business impact, and 3-4 concrete takeaways. \
         Keep it to 3-4 paragraphs.",
        flow.name(),
        truncated
    )
}

pub fn build_executive_prompt(flow_name: &str, detailed_analysis: &str) -> String {
    format!(
        "Based on this user flow analysis for \"{}\":\n\n{}\n\n\
         Write a 1-2 sentence executive summary capturing the key business outcome \
         and user behavior insight.",
        flow_name, detailed_analysis
    )
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
