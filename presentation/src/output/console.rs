//! Console output formatter for command outcomes

use super::CommandOutcome;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;

/// Formats command outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format as plain text
    pub fn format(outcome: &CommandOutcome) -> String {
        match outcome {
            CommandOutcome::Answer { answer } => answer.to_string(),
            CommandOutcome::ParseInt { input, value } => match value {
                Some(value) => value.to_string(),
                None => format!("{} '{}'", "No integer found in".red(), input),
            },
            CommandOutcome::Factorial { n, value } => format!("{}! = {}", n, value),
            CommandOutcome::Read { contents, .. } => contents.clone(),
            CommandOutcome::ReadLines { lines, .. } => Self::numbered(lines),
            CommandOutcome::Write { path, written } => {
                if *written {
                    format!("{} {}", "Wrote".green(), path)
                } else {
                    format!("{} {}", "Could not write".red(), path)
                }
            }
        }
    }

    /// Format as JSON
    pub fn format_json(outcome: &CommandOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    fn numbered(lines: &[String]) -> String {
        let width = lines.len().to_string().len();
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{:>width$} {} {}", i + 1, "|".dimmed(), line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &CommandOutcome) -> String {
        Self::format(outcome)
    }

    fn format_json(&self, outcome: &CommandOutcome) -> String {
        Self::format_json(outcome)
    }
}
