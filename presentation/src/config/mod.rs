//! Presentation-level configuration
//!
//! Configuration for output formatting.

use promptline_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Result format
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl OutputConfig {
    /// Apply the color preference process-wide.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
