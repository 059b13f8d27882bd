//! Presentation layer for promptline
//!
//! This crate contains the console adapters, CLI definitions and
//! result formatters.

pub mod cli;
pub mod config;
pub mod console;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{AskCommand, Cli, Command, NumberKind, OutputFormat, ReadMode};
pub use config::OutputConfig;
pub use console::stream::{StdConsole, StreamConsole};
pub use output::{CommandOutcome, console::ConsoleFormatter};
