//! Result formatting for CLI commands

pub mod console;
pub mod formatter;

use promptline_domain::PromptValue;
use serde::Serialize;

/// Result of one CLI command, ready to be rendered
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// Answer accepted by a prompt
    Answer { answer: PromptValue },
    /// Lenient integer extraction
    ParseInt { input: String, value: Option<i32> },
    /// Bounded factorial
    Factorial { n: i64, value: u64 },
    /// File contents as a single string
    Read { path: String, contents: String },
    /// File contents split into lines
    ReadLines { path: String, lines: Vec<String> },
    /// File write
    Write { path: String, written: bool },
}
