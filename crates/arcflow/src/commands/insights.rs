use std::path::Path;

pub fn run(config_path: Option<&Path>, file: &Path) -> anyhow::Result<()> {
    let (_config, _paths, flow) = super::load_flow(config_path, file, Path::new("."))?;
    let insights = arcflow_insights::analyze(&flow);

    let output = serde_json::json!({
        "stats": flow.stats(),
        "insights": insights,
        "classification": insights.classification.label(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
