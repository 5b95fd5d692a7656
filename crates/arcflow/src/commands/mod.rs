pub mod analyze;
pub mod insights;
pub mod parse;
pub mod validate;
pub mod version;

use arcflow_core::{Config, FlowParser};
use arcflow_record::{Flow, Paths};
use std::path::Path;

/// Resolve config for `out_dir` and parse the flow at `file`
pub(crate) fn load_flow(
    config_path: Option<&Path>,
    file: &Path,
    out_dir: &Path,
) -> anyhow::Result<(Config, Paths, Flow)> {
    let paths = Paths::new(out_dir);
    let config = Config::resolve(config_path, &paths)?;
    let flow = FlowParser::new(&config).parse_file(file)?;
    Ok((config, paths, flow))
}
