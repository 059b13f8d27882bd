//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Plain,
    /// JSON output
    Json,
}

impl From<OutputFormat> for promptline_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => promptline_domain::OutputFormat::Plain,
            OutputFormat::Json => promptline_domain::OutputFormat::Json,
        }
    }
}

/// Numeric width for `ask number`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NumberKind {
    Double,
    Float,
    Int,
    Long,
    Short,
    Byte,
}

impl NumberKind {
    /// Full range of the kind, used when a bound is not given
    pub fn default_bounds(self) -> (f64, f64) {
        match self {
            NumberKind::Double => (f64::MIN, f64::MAX),
            NumberKind::Float => (f32::MIN.into(), f32::MAX.into()),
            NumberKind::Int => (i32::MIN.into(), i32::MAX.into()),
            NumberKind::Long => (i64::MIN as f64, i64::MAX as f64),
            NumberKind::Short => (i16::MIN.into(), i16::MAX.into()),
            NumberKind::Byte => (i8::MIN.into(), i8::MAX.into()),
        }
    }
}

/// How `read` returns the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReadMode {
    /// Whole file as text
    #[default]
    Whole,
    /// One entry per line
    Lines,
    /// Lines concatenated without line breaks
    Joined,
}

/// CLI arguments for promptline
#[derive(Parser, Debug)]
#[command(name = "promptline")]
#[command(author, version, about = "Console prompts with validation, lenient parsing and file helpers")]
#[command(long_about = r#"
promptline asks for values on the console and keeps asking until the answer
is valid. It also exposes the lenient integer parser, a bounded factorial and
simple text file helpers.

Configuration files are loaded from (in priority order):
1. PROMPTLINE_* env     e.g. PROMPTLINE_PROMPT__MODE=legacy
2. --config <path>      Explicit config file
3. ./promptline.toml    Project-level config
4. ~/.config/promptline/config.toml   Global config

Example:
  promptline ask bool "Continue?" --yes y --no n
  promptline ask number "Age" --min 0 --max 150 --kind int
  promptline ask menu "Main menu" Start Settings --with-quit
  promptline parse-int "order #12-34"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Use the legacy OR-based bound checks
    #[arg(long, global = true)]
    pub legacy: bool,

    /// Give up after this many invalid answers
    #[arg(long, value_name = "N", global = true)]
    pub max_attempts: Option<u32>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask for a value on the console
    #[command(subcommand)]
    Ask(AskCommand),

    /// Extract an integer from free-form text
    ParseInt {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Compute n! for 0 <= n <= 20
    Factorial {
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },

    /// Read a text file
    Read {
        path: PathBuf,
        #[arg(long, value_enum, default_value = "whole")]
        mode: ReadMode,
    },

    /// Write text to a file
    Write {
        path: PathBuf,
        contents: String,
        /// Report failures on stderr instead of exiting with an error
        #[arg(long)]
        report: bool,
    },
}

/// Prompt kinds for `ask`
#[derive(Subcommand, Debug)]
pub enum AskCommand {
    /// Yes/no style question
    Bool {
        message: String,
        /// Token meaning true
        #[arg(long, default_value = "yes")]
        yes: String,
        /// Token meaning false
        #[arg(long, default_value = "no")]
        no: String,
    },

    /// Single character
    Char {
        message: String,
        #[arg(long)]
        min: Option<char>,
        #[arg(long)]
        max: Option<char>,
    },

    /// Number within a range
    Number {
        message: String,
        #[arg(long, allow_hyphen_values = true)]
        min: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        max: Option<f64>,
        #[arg(long, value_enum, default_value = "double")]
        kind: NumberKind,
    },

    /// Free text
    Text {
        message: String,
        #[arg(long)]
        allow_empty: bool,
    },

    /// Numbered menu
    Menu {
        message: String,
        #[arg(required = true)]
        options: Vec<String>,
        /// Offer `0) Exit`
        #[arg(long)]
        with_quit: bool,
    },
}
