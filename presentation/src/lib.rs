//! Presentation layer for inquiry-concierge
//!
//! CLI argument definitions and console output formatting.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::formatter::ConsoleFormatter;
