use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arcflow")]
#[command(version)]
#[command(about = "Turn recorded user flows into analysis reports")]
pub struct Cli {
    /// Config file (defaults to <config dir>/arcflow/config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a flow export into the parsed-actions listing
    Parse {
        /// Path to flow.json
        #[arg(default_value = "flow.json")]
        file: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Also write parsed_actions.json
        #[arg(long)]
        json: bool,
    },

    /// Print flow statistics and insights as JSON
    Insights {
        /// Path to flow.json
        #[arg(default_value = "flow.json")]
        file: PathBuf,
    },

    /// Run the full pipeline and write the analysis report
    Analyze {
        /// Path to flow.json
        #[arg(default_value = "flow.json")]
        file: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Social image to embed (newest social_media_*.png in the output dir if omitted)
        #[arg(long)]
        image: Option<PathBuf>,

        /// Skip the summary API even if a key is set
        #[arg(long)]
        offline: bool,
    },

    /// Check a flow export (.json) or a rendered report (.md)
    Validate {
        file: PathBuf,
    },

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["arcflow", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["arcflow", "parse"]).unwrap();
        if let Commands::Parse { file, out, json } = cli.command {
            assert_eq!(file, PathBuf::from("flow.json"));
            assert_eq!(out, PathBuf::from("."));
            assert!(!json);
        } else {
            panic!("Expected Parse command");
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_parse_analyze() {
        let cli = Cli::try_parse_from([
            "arcflow",
            "analyze",
            "session.json",
            "--out",
            "reports",
            "--image",
            "cover.png",
            "--offline",
            "--config",
            "arcflow.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("arcflow.json")));
        if let Commands::Analyze {
            file,
            out,
            image,
            offline,
        } = cli.command
        {
            assert_eq!(file, PathBuf::from("session.json"));
            assert_eq!(out, PathBuf::from("reports"));
            assert_eq!(image, Some(PathBuf::from("cover.png")));
            assert!(offline);
        } else {
            panic!("Expected Analyze command");
        }
    }

    #[test]
    fn test_cli_validate_requires_file() {
        assert!(Cli::try_parse_from(["arcflow", "validate"]).is_err());
    }
}
