//! Markdown report rendering and report structure checks

mod check;
mod render;

pub use arcflow_record::report_file_name;
pub use check::{check_report, count_enumerated_steps, ReportError, REQUIRED_SECTIONS};
pub use render::{render_parsed_actions, render_report, ReportInput, REPORT_TITLE, TOOL_NAME};
