//! cma-lint CLI tool.
//!
//! Usage:
//! ```bash
//! cma-lint check [OPTIONS] [PATHS]...
//! cma-lint list-rules
//! cma-lint validate-config
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Clean Modular Architecture linter for Flutter projects
#[derive(Parser)]
#[command(name = "cma-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Project root holding the configuration file
    #[arg(short, long, global = true, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks over syntax dumps
    Check {
        /// `*.ast.json` files or directories to scan (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules by id or code (comma-separated)
        #[arg(long)]
        rules: Option<String>,
    },

    /// List available rules
    ListRules,

    /// Validate the project configuration
    ValidateConfig,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-diagnostic compact format.
    Compact,
    /// Source snippets rendered with miette.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let source = config_resolver::resolve(&cli.project, cli.config.as_deref());

    match cli.command {
        Commands::Check {
            paths,
            format,
            rules,
        } => commands::check::run(&paths, format, rules, &source),
        Commands::ListRules => {
            let config = source.load()?;
            commands::list_rules::run(&config);
            Ok(())
        }
        Commands::ValidateConfig => commands::validate_config::run(&source),
    }
}
