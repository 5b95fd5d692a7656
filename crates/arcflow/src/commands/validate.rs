use arcflow_core::{Config, FlowParser, Violation};
use arcflow_record::Paths;
use std::path::Path;

pub fn run(config_path: Option<&Path>, file: &Path) -> anyhow::Result<()> {
    if is_report(file) {
        let markdown = std::fs::read_to_string(file)?;
        let steps = arcflow_report::check_report(&markdown)?;
        println!("OK: report enumerates {} actions", steps);
        return Ok(());
    }

    let paths = Paths::new(".");
    let config = Config::resolve(config_path, &paths)?;
    let flow = FlowParser::new(&config).parse_file(file)?;
    let violations = arcflow_core::validate_flow(&flow);

    print_violations(&violations);
    if !violations.is_empty() {
        anyhow::bail!("{} violation(s) in {}", violations.len(), file.display());
    }
    println!("OK: {} actions", flow.len());
    Ok(())
}

fn is_report(file: &Path) -> bool {
    file.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

fn print_violations(violations: &[Violation]) {
    for violation in violations {
        println!("  - {}", violation);
    }
}
