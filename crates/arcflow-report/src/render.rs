//! Markdown rendering of parsed flows and analysis reports

use arcflow_insights::Insights;
use arcflow_record::{Clock, Flow};
use arcflow_summary::{Summary, SummarySource};
use chrono::NaiveDateTime;
use std::fmt::Write;

pub const REPORT_TITLE: &str = "# Arcade Flow Analysis Report";
pub const TOOL_NAME: &str = "Arcade Flow Analyzer";

/// Everything the analysis report is rendered from
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub flow: &'a Flow,
    pub insights: &'a Insights,
    pub summary: &'a Summary,
    pub generated_at: NaiveDateTime,
    pub source_file: &'a str,
    pub report_file_name: &'a str,
    /// Existing social image to embed
    pub image: Option<&'a str>,
    /// Model that wrote the narrative, when it came from the API
    pub model: &'a str,
}

/// Companion listing: one `## Step N` block per action
pub fn render_parsed_actions(flow: &Flow, clock: Clock) -> String {
    let mut lines = vec![format!("# User Actions for {}\n", flow.name())];

    for action in flow.actions() {
        lines.push(format!(
            "## Step {}: {}",
            action.sequence_index, action.description
        ));
        lines.push(format!("- **Action Type:** {}", action.action_type));

        if let Some(page) = action.page.as_ref().filter(|p| !p.url.is_empty()) {
            lines.push(format!("- **Page:** {} ({})", page.title, page.url));
        }

        if let Some(element) = action.element.as_ref().filter(|e| !e.text.is_empty()) {
            lines.push(format!("- **Element:** {} ({})", element.text, element.role));
        }

        if let Some(time) = action
            .timestamp_ms
            .filter(|ms| *ms > 0)
            .and_then(|ms| clock.format(ms))
        {
            lines.push(format!("- **Time:** {}", time));
        }

        lines.push(String::new());
    }

    lines.join("\n")
}

/// Full analysis report
pub fn render_report(input: &ReportInput<'_>) -> String {
    let flow = input.flow;
    let insights = input.insights;
    let mut md = String::new();

    // Header
    let _ = writeln!(md, "{REPORT_TITLE}\n");
    let _ = writeln!(md, "**Flow Name:** {}  ", flow.name());
    let _ = writeln!(
        md,
        "**Analysis Date:** {}  ",
        input.generated_at.format("%B %d, %Y at %I:%M %p")
    );
    let _ = writeln!(md, "**Total Actions:** {}  \n", flow.len());
    md.push_str("---\n\n");

    // Narrative
    let _ = writeln!(md, "## Executive Summary\n");
    let _ = writeln!(md, "> {}\n", input.summary.executive_summary);
    let _ = writeln!(md, "## Detailed Analysis\n");
    let _ = writeln!(md, "{}\n", input.summary.detailed_analysis);
    md.push_str("---\n\n");

    // Insights
    let _ = writeln!(md, "## Flow Insights\n");
    let _ = writeln!(
        md,
        "- **Flow Classification:** {}",
        insights.classification.label()
    );
    let _ = writeln!(
        md,
        "- **Completion Rate:** {}%\n",
        insights.behavior.completion_rate
    );
    let _ = writeln!(md, "### Conversion Funnel\n");
    for check in &insights.conversion_funnel {
        let _ = writeln!(md, "- **{}:** {}", check.stage.label(), yes_no(check.reached));
    }
    let _ = writeln!(md, "\n### User Behavior Indicators\n");
    for (label, present) in insights.behavior.flags() {
        let _ = writeln!(md, "- **{}:** {}", label, yes_no(present));
    }
    md.push_str("\n---\n\n");

    // Step-by-step
    let _ = writeln!(md, "## User Interactions (Step-by-Step)\n");
    let _ = writeln!(
        md,
        "The following actions were performed by the user during this flow:\n"
    );
    for action in flow.actions() {
        let _ = writeln!(md, "{}. **{}**", action.sequence_index, action.description);
        if let Some(text) = action.element_text().filter(|t| *t != action.description) {
            let _ = writeln!(md, "   - *Element:* {}", text);
        }
        if let Some(page) = action.page.as_ref().filter(|p| !p.title.is_empty()) {
            let _ = writeln!(md, "   - *Page:* {}", page.title);
        }
        md.push('\n');
    }

    if !insights.action_breakdown.is_empty() {
        let _ = writeln!(md, "### Action Breakdown\n");
        for entry in &insights.action_breakdown {
            let _ = writeln!(md, "- **{}:** {}", entry.action_type.label(), entry.count);
        }
        md.push('\n');
    }

    // Social image
    md.push_str("---\n\n## Social Media Image\n\n");
    match input.image {
        Some(image) => {
            let _ = writeln!(md, "![Social Media Image for {}]({})\n", flow.name(), image);
            md.push_str(
                "*Generated social media image optimized for sharing across platforms*\n\n",
            );
        }
        None => md.push_str("*Social media image not available*\n\n"),
    }

    // Technical details
    md.push_str("---\n\n## Technical Details\n\n");
    let _ = writeln!(md, "- **Analysis Tool:** {}", TOOL_NAME);
    let models = match input.summary.source {
        SummarySource::Llm => format!("{} (summary)", input.model),
        SummarySource::Fallback => "none (offline summary)".to_string(),
    };
    let _ = writeln!(md, "- **AI Models Used:** {}", models);
    let _ = writeln!(md, "- **Source Data:** {}", input.source_file);
    md.push_str("- **Generated Files:**\n");
    let _ = write!(md, "  - Report: `{}`", input.report_file_name);
    if let Some(image) = input.image {
        let _ = write!(md, "\n  - Image: `{}`", image);
    }
    let _ = write!(
        md,
        "\n\n---\n\n*This report was automatically generated by the {}.*\n",
        TOOL_NAME
    );

    md
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcflow_record::{Action, ActionType, Element, ElementRole, PageContext};
    use chrono::NaiveDate;

    fn sample_flow() -> Flow {
        let mut product = Action::new(
            2,
            ActionType::SelectProduct,
            "Selected product: Razor Scooter",
        );
        product.element = Some(Element {
            text: "Razor Scooter".to_string(),
            role: ElementRole::Image,
            css_selector: None,
        });
        product.page = Some(PageContext {
            title: "scooter : Target".to_string(),
            url: "https://www.target.com/s?searchTerm=scooter".to_string(),
        });
        product.timestamp_ms = Some(1_704_112_496_789);

        Flow::new(
            "Add a Scooter",
            vec![
                Action::new(1, ActionType::Navigate, "Started flow: Add a Scooter"),
                product,
                Action::new(3, ActionType::Complete, "Reached end screen: Thank you"),
            ],
        )
    }

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(15, 4, 0)
            .unwrap()
    }

    #[test]
    fn test_parsed_actions_listing() {
        let listing = render_parsed_actions(&sample_flow(), Clock::Utc);
        let expected = "\
# User Actions for Add a Scooter

## Step 1: Started flow: Add a Scooter
- **Action Type:** navigate

## Step 2: Selected product: Razor Scooter
- **Action Type:** select_product
- **Page:** scooter : Target (https://www.target.com/s?searchTerm=scooter)
- **Element:** Razor Scooter (image)
- **Time:** 12:34:56

## Step 3: Reached end screen: Thank you
- **Action Type:** complete
";
        assert_eq!(listing, expected);
    }

    #[test]
    fn test_report_sections_in_order() {
        let flow = sample_flow();
        let insights = arcflow_insights::analyze(&flow);
        let summary = arcflow_summary::fallback_summary(&flow, &insights);
        let report = render_report(&ReportInput {
            flow: &flow,
            insights: &insights,
            summary: &summary,
            generated_at: generated_at(),
            source_file: "flow.json",
            report_file_name: "report.md",
            image: None,
            model: "gpt-4",
        });

        let headers = [
            "# Arcade Flow Analysis Report",
            "## Executive Summary",
            "## Detailed Analysis",
            "## Flow Insights",
            "### Conversion Funnel",
            "### User Behavior Indicators",
            "## User Interactions (Step-by-Step)",
            "### Action Breakdown",
            "## Social Media Image",
            "## Technical Details",
        ];
        let positions: Vec<usize> = headers
            .iter()
            .map(|h| report.find(h).unwrap_or_else(|| panic!("missing {h}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(report.contains("**Analysis Date:** March 07, 2025 at 03:04 PM"));
        assert!(report.contains("**Total Actions:** 3  "));
        assert!(report.contains("- **Flow Completed:** Yes"));
        assert!(report.contains("- **Search Initiated:** No"));
        assert!(report.contains("*Social media image not available*"));
        assert!(report.contains("- **AI Models Used:** none (offline summary)"));
        assert!(!report.contains("  - Image:"));
    }

    #[test]
    fn test_report_interaction_entries() {
        let flow = sample_flow();
        let insights = arcflow_insights::analyze(&flow);
        let summary = arcflow_summary::fallback_summary(&flow, &insights);
        let report = render_report(&ReportInput {
            flow: &flow,
            insights: &insights,
            summary: &summary,
            generated_at: generated_at(),
            source_file: "flow.json",
            report_file_name: "report.md",
            image: Some("social_media_1718000000.png"),
            model: "gpt-4",
        });

        assert!(report.contains(
            "2. **Selected product: Razor Scooter**\n   - *Element:* Razor Scooter\n   - *Page:* scooter : Target\n"
        ));
        assert!(report.contains("1. **Started flow: Add a Scooter**\n\n"));
        assert!(report.contains("- **Select Product:** 1"));
        assert!(report.contains(
            "![Social Media Image for Add a Scooter](social_media_1718000000.png)"
        ));
        assert!(report.contains("  - Image: `social_media_1718000000.png`"));
        assert!(report.ends_with(
            "*This report was automatically generated by the Arcade Flow Analyzer.*\n"
        ));
    }
}
