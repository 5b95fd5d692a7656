use arcflow_record::{Clock, Flow};
use std::path::{Path, PathBuf};

pub fn run(config_path: Option<&Path>, file: &Path, out: &Path, json: bool) -> anyhow::Result<()> {
    let (config, paths, flow) = super::load_flow(config_path, file, out)?;

    println!("{}", format_summary(&flow));

    let written = write_outputs(&flow, &paths, Clock::from_utc_flag(config.utc_times), json)?;
    for path in &written {
        println!("Saved {}", path.display());
    }
    Ok(())
}

/// Console overview; type counts follow the report's first-seen order
fn format_summary(flow: &Flow) -> String {
    let mut lines = vec![
        format!("Flow Name: {}", flow.name()),
        format!("Total Actions: {}", flow.len()),
        "Action Types:".to_string(),
    ];
    for (action_type, count) in flow.type_counts() {
        lines.push(format!("  {}: {}", action_type, count));
    }
    lines.push(String::new());

    for action in flow.actions() {
        lines.push(format!("{}. {}", action.sequence_index, action.description));
        if let Some(page) = &action.page {
            lines.push(format!("   Page: {}", page.title));
        }
        if let Some(element) = action.element.as_ref().filter(|e| !e.text.is_empty()) {
            lines.push(format!("   Element: {} ({})", element.text, element.role));
        }
    }
    lines.push(String::new());
    lines.join("\n")
}

fn write_outputs(
    flow: &Flow,
    paths: &arcflow_record::Paths,
    clock: Clock,
    json: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    let md_path = paths.parsed_actions_md();
    let markdown = arcflow_report::render_parsed_actions(flow, clock);
    arcflow_record::atomic_write(&md_path, markdown.as_bytes())?;
    written.push(md_path);

    if json {
        let json_path = paths.parsed_actions_json();
        arcflow_record::write_json(&json_path, &flow.actions())?;
        written.push(json_path);
    }

    Ok(written)
}
