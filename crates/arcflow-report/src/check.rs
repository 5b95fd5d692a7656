//! Structural checks on a rendered analysis report

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

pub const REQUIRED_SECTIONS: [&str; 5] = [
    "## Executive Summary",
    "## Detailed Analysis",
    "## Flow Insights",
    "## User Interactions",
    "## Technical Details",
];

const INTERACTIONS_HEADER: &str = "## User Interactions";

static TOTAL_RE: OnceLock<Regex> = OnceLock::new();
static STEP_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("report is missing section '{0}'")]
    MissingSection(&'static str),

    #[error("report does not declare a Total Actions count")]
    MissingTotal,

    #[error("report declares {declared} actions but enumerates {enumerated}")]
    CountMismatch { declared: usize, enumerated: usize },
}

/// Verify the fixed sections exist and the declared total matches the enumerated steps.
/// Returns the number of enumerated steps.
pub fn check_report(markdown: &str) -> Result<usize, ReportError> {
    for section in REQUIRED_SECTIONS {
        if !markdown.lines().any(|l| l.starts_with(section)) {
            return Err(ReportError::MissingSection(section));
        }
    }

    let total_re = TOTAL_RE.get_or_init(|| Regex::new(r"\*\*Total Actions:\*\*\s*(\d+)").unwrap());
    let declared: usize = total_re
        .captures(markdown)
        .and_then(|c| c[1].parse().ok())
        .ok_or(ReportError::MissingTotal)?;

    let enumerated = count_enumerated_steps(markdown);
    if declared != enumerated {
        return Err(ReportError::CountMismatch {
            declared,
            enumerated,
        });
    }
    Ok(enumerated)
}

/// Numbered `N. **...**` entries between the interactions header and the next `## ` section
pub fn count_enumerated_steps(markdown: &str) -> usize {
    let step_re = STEP_RE.get_or_init(|| Regex::new(r"^\d+\. \*\*").unwrap());

    markdown
        .lines()
        .skip_while(|l| !l.starts_with(INTERACTIONS_HEADER))
        .skip(1)
        .take_while(|l| !l.starts_with("## "))
        .filter(|l| step_re.is_match(l))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(total: usize, steps: &[&str]) -> String {
        let mut md = format!(
            "# Arcade Flow Analysis Report\n\n**Total Actions:** {total}  \n\n\
             ## Executive Summary\n\n> ok\n\n## Detailed Analysis\n\n1. **Not a step**\n\n\
             ## Flow Insights\n\n## User Interactions (Step-by-Step)\n\n"
        );
        for (i, step) in steps.iter().enumerate() {
            md.push_str(&format!("{}. **{}**\n   - *Page:* Home\n\n", i + 1, step));
        }
        md.push_str("### Action Breakdown\n\n- **Click:** 2\n\n## Technical Details\n");
        md
    }

    #[test]
    fn test_check_report_ok() {
        let md = report(2, &["Started flow: x", "Reached end screen: y"]);
        assert_eq!(check_report(&md), Ok(2));
    }

    #[test]
    fn test_check_report_mismatch() {
        let md = report(3, &["Started flow: x", "Reached end screen: y"]);
        assert_eq!(
            check_report(&md),
            Err(ReportError::CountMismatch {
                declared: 3,
                enumerated: 2
            })
        );
    }

    #[test]
    fn test_check_report_missing_section() {
        let md = report(0, &[]).replace("## Technical Details", "## Tech");
        assert_eq!(
            check_report(&md),
            Err(ReportError::MissingSection("## Technical Details"))
        );
    }

    #[test]
    fn test_check_report_missing_total() {
        let md = report(1, &["a"]).replace("**Total Actions:** 1", "Total: 1");
        assert_eq!(check_report(&md), Err(ReportError::MissingTotal));
    }

    #[test]
    fn test_count_ignores_other_sections() {
        // The numbered line under Detailed Analysis is not counted
        let md = report(1, &["only"]);
        assert_eq!(count_enumerated_steps(&md), 1);
    }
}
