use arcflow_core::Config;
use arcflow_insights::Insights;
use arcflow_record::{Flow, Paths};
use arcflow_report::ReportInput;
use arcflow_summary::Summary;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

pub struct AnalyzeArgs {
    pub file: PathBuf,
    pub out: PathBuf,
    pub image: Option<PathBuf>,
    pub offline: bool,
}

pub fn run(config_path: Option<&Path>, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let (config, paths, flow) = super::load_flow(config_path, &args.file, &args.out)?;
    let insights = arcflow_insights::analyze(&flow);

    let api_key = if args.offline {
        None
    } else {
        arcflow_summary::api_key_from_env()
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let summary = runtime.block_on(arcflow_summary::generate_summary(
        &config,
        api_key.as_deref(),
        &flow,
        &insights,
    ));

    let image = resolve_image(args.image.as_deref(), &paths);
    let report_path = write_report(
        &config,
        &paths,
        &flow,
        &insights,
        &summary,
        &args.file,
        image.as_deref(),
        Local::now(),
    )?;

    println!("Complete: {}", report_path.display());
    Ok(())
}

/// Explicit image if it exists, else the newest social image in the output dir
fn resolve_image(explicit: Option<&Path>, paths: &Paths) -> Option<PathBuf> {
    match explicit {
        Some(path) if path.is_file() => Some(path.to_path_buf()),
        Some(path) => {
            tracing::warn!(path = %path.display(), "social image not found, omitting");
            None
        }
        None => paths.latest_social_image(),
    }
}

/// Render the report, check its structure, and write it into the output dir
#[allow(clippy::too_many_arguments)]
fn write_report(
    config: &Config,
    paths: &Paths,
    flow: &Flow,
    insights: &Insights,
    summary: &Summary,
    source: &Path,
    image: Option<&Path>,
    now: DateTime<Local>,
) -> anyhow::Result<PathBuf> {
    let report_path = paths.report_path(flow.name(), &now);
    let report_file_name = arcflow_report::report_file_name(flow.name(), &now);

    let image_link = image.map(|img| image_link(img, &paths.output_dir));
    let source_file = source.display().to_string();

    let markdown = arcflow_report::render_report(&ReportInput {
        flow,
        insights,
        summary,
        generated_at: now.naive_local(),
        source_file: &source_file,
        report_file_name: &report_file_name,
        image: image_link.as_deref(),
        model: &config.model,
    });

    if let Err(e) = arcflow_report::check_report(&markdown) {
        tracing::warn!(error = %e, "rendered report failed structure check");
    }

    arcflow_record::atomic_write(&report_path, markdown.as_bytes())?;
    tracing::info!(path = %report_path.display(), "report written");
    Ok(report_path)
}

/// Link to `image` as seen from a report written into `output_dir`:
/// relative when the image lives under it, absolute otherwise
fn image_link(image: &Path, output_dir: &Path) -> String {
    let image = std::path::absolute(image).unwrap_or_else(|_| image.to_path_buf());
    let output_dir = std::path::absolute(output_dir).unwrap_or_else(|_| output_dir.to_path_buf());

    match image.strip_prefix(&output_dir) {
        Ok(relative) => relative.display().to_string(),
        Err(_) => image.display().to_string(),
    }
}
