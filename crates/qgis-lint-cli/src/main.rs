//! qgis-lint CLI tool.
//!
//! Usage:
//! ```bash
//! qgis-lint check [OPTIONS] [PATH]
//! qgis-lint list-rules
//! qgis-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use qgis_lint_rules::Preset;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Linter for QGIS Python plugins (flake8-qgis compatible codes)
#[derive(Parser)]
#[command(name = "qgis-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "QGIS_LINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks
    Check {
        /// File or directory to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only report these codes or code prefixes (comma-separated)
        #[arg(long)]
        select: Option<String>,

        /// Drop these codes or code prefixes (comma-separated)
        #[arg(long)]
        ignore: Option<String>,

        /// Use a predefined code selection: recommended, strict or qt6
        #[arg(long, conflicts_with = "select")]
        preset: Option<Preset>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// JSON table of methods whose return value must be checked
        #[arg(long)]
        return_methods: Option<PathBuf>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// Flake8-style `path:line:col: message` lines.
    Compact,
    /// Annotated source snippets.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            select,
            ignore,
            preset,
            exclude,
            return_methods,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            let options = commands::check::CheckOptions {
                format,
                select,
                ignore,
                preset,
                exclude,
                return_methods,
            };
            let passed = commands::check::run(&path, options, &source)?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
