mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Parse { file, out, json } => commands::parse::run(config, &file, &out, json),
        Commands::Insights { file } => commands::insights::run(config, &file),
        Commands::Analyze {
            file,
            out,
            image,
            offline,
        } => commands::analyze::run(
            config,
            &commands::analyze::AnalyzeArgs {
                file,
                out,
                image,
                offline,
            },
        ),
        Commands::Validate { file } => commands::validate::run(config, &file),
        Commands::Version => commands::version::run(),
    }
}
