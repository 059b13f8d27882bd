//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod prompt;

pub use output::FileOutputConfig;
pub use prompt::FilePromptConfig;

use promptline_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Prompt loop settings
    pub prompt: FilePromptConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.prompt.to_prompt_settings().1);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptline_domain::{ConfigIssueCode, OutputFormat, ValidationMode};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[prompt]
mode = "legacy"
max_attempts = 3

[output]
color = false
format = "json"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (settings, issues) = config.prompt.to_prompt_settings();
        assert!(issues.is_empty());
        assert_eq!(settings.mode, ValidationMode::Legacy);
        assert_eq!(settings.max_attempts, Some(3));
        assert!(!config.output.color);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[prompt]
max_attempts = 5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.prompt.mode, "strict");
        assert_eq!(config.prompt.max_attempts, Some(5));
        assert!(config.output.color);
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_collects_issues() {
        let toml_str = r#"
[prompt]
mode = "lenient"
max_attempts = 0
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidEnumValue { .. }
        ));
        assert_eq!(issues[1].code, ConfigIssueCode::ZeroMaxAttempts);
    }
}
