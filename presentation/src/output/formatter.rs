//! Output formatter trait

use super::CommandOutcome;
use promptline_domain::OutputFormat;

/// Trait for formatting command outcomes
pub trait OutputFormatter {
    /// Format as human-readable text
    fn format(&self, outcome: &CommandOutcome) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &CommandOutcome) -> String;

    /// Format in the requested output format
    fn render(&self, outcome: &CommandOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Plain => self.format(outcome),
            OutputFormat::Json => self.format_json(outcome),
        }
    }
}
