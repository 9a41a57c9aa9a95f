//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for inquiry-concierge
#[derive(Parser, Debug)]
#[command(name = "inquiry-concierge")]
#[command(author, version, about = "Customer inquiry enrichment pipeline")]
#[command(long_about = r#"
Inquiry Concierge ingests customer inquiries and enriches them with a
generated reply and a category, both produced by a hosted generative model.

Each enrichment stage is independent and idempotent: re-running a stage
against the same inquiry overwrites its own field with a freshly computed
value.

Configuration files are loaded from (in priority order):
1. CONCIERGE_* environment variables
2. --config <path>       Explicit config file
3. ./concierge.toml      Project-level config
4. ~/.config/inquiry-concierge/config.toml   Global config

Example:
  inquiry-concierge ingest --mail guest@example.com --name Tanaka \
      --text "What time is checkout?"
  inquiry-concierge answer 058b2f0a-985a-4fa1-8d42-5c1313f1c0c4
  inquiry-concierge classify 058b2f0a-985a-4fa1-8d42-5c1313f1c0c4
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

/// Pipeline stages exposed as subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a new customer inquiry and print its generated id
    Ingest {
        /// Mail address of the submitter
        #[arg(long = "mail", value_name = "ADDRESS")]
        mail_address: String,

        /// Name of the submitter
        #[arg(long = "name", value_name = "NAME")]
        user_name: String,

        /// The inquiry body
        #[arg(long = "text", value_name = "TEXT")]
        review_text: String,
    },

    /// Generate and save a reply for an existing inquiry
    Answer {
        /// Inquiry id
        id: String,
    },

    /// Classify an existing inquiry into one of the five categories
    Classify {
        /// Inquiry id
        id: String,
    },

    /// Print a stored inquiry record
    Show {
        /// Inquiry id
        id: String,
    },
}
