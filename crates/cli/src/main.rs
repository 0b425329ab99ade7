// cinegraph CLI - batch film-catalog pipeline

mod exit_codes;
mod pipeline;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::EXIT_SUCCESS;

#[derive(Parser)]
#[command(name = "cinegraph")]
#[command(about = "Reconcile streaming catalog titles with IMDb data and publish Turtle documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: merge the sources, then emit the graph documents
    #[command(after_help = "\
Examples:
  cinegraph run cinegraph.toml
  cinegraph run cinegraph.toml --json")]
    Run {
        /// Path to the pipeline .toml config file
        config: PathBuf,

        /// Print a JSON report to stdout in addition to the stderr summary
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Reconcile the sources into the cleaned table, without graph output
    #[command(after_help = "\
Examples:
  cinegraph merge cinegraph.toml
  cinegraph merge cinegraph.toml --json > report.json")]
    Merge {
        config: PathBuf,

        #[arg(long)]
        json: bool,

        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Project an existing cleaned table into the catalog document
    Graph {
        config: PathBuf,

        #[arg(long)]
        json: bool,

        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Build only the director document from an existing cleaned table
    Directors {
        config: PathBuf,

        #[arg(long)]
        json: bool,

        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Parse and validate a config file without running anything
    Validate {
        config: PathBuf,
    },
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(code: u8, message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            hint: Some(hint.into()),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { config, json, output } => {
            pipeline::cmd_run(&config, json, output.as_deref())
        }
        Commands::Merge { config, json, output } => {
            pipeline::cmd_merge(&config, json, output.as_deref())
        }
        Commands::Graph { config, json, output } => {
            pipeline::cmd_graph(&config, json, output.as_deref())
        }
        Commands::Directors { config, json, output } => {
            pipeline::cmd_directors(&config, json, output.as_deref())
        }
        Commands::Validate { config } => pipeline::cmd_validate(&config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}
