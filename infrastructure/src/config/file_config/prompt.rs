//! Prompt configuration from TOML (`[prompt]` section)

use promptline_application::PromptSettings;
use promptline_domain::config::lookup_key;
use promptline_domain::{ConfigIssue, ConfigIssueCode, ValidationMode};
use serde::{Deserialize, Serialize};

/// Raw prompt configuration from TOML
///
/// # Example
///
/// ```toml
/// [prompt]
/// mode = "strict"      # "strict" or "legacy"
/// max_attempts = 5     # omit for unlimited
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    /// Validation mode: "strict" or "legacy"
    pub mode: String,
    /// Rejected answers tolerated before a prompt gives up
    pub max_attempts: Option<u32>,
}

impl Default for FilePromptConfig {
    fn default() -> Self {
        Self {
            mode: "strict".to_string(),
            max_attempts: None,
        }
    }
}

impl FilePromptConfig {
    /// Parse mode string into ValidationMode, returning warnings on failure.
    pub fn parse_mode(&self) -> (ValidationMode, Vec<ConfigIssue>) {
        match self.mode.parse::<ValidationMode>() {
            Ok(mode) => (mode, vec![]),
            Err(_) => {
                let valid_values: Vec<String> = lookup_key("prompt.mode")
                    .map(|info| info.valid_values.iter().map(|v| v.to_string()).collect())
                    .unwrap_or_default();
                let issue = ConfigIssue {
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "prompt.mode".to_string(),
                        value: self.mode.clone(),
                        valid_values,
                    },
                    message: format!(
                        "prompt.mode: unknown value '{}', falling back to 'strict'",
                        self.mode
                    ),
                };
                (ValidationMode::default(), vec![issue])
            }
        }
    }

    /// Build the prompt loop settings, falling back to defaults for bad values.
    pub fn to_prompt_settings(&self) -> (PromptSettings, Vec<ConfigIssue>) {
        let (mode, mut issues) = self.parse_mode();

        let max_attempts = match self.max_attempts {
            Some(0) => {
                issues.push(ConfigIssue {
                    code: ConfigIssueCode::ZeroMaxAttempts,
                    message: "prompt.max_attempts: 0 would refuse every answer, using unlimited"
                        .to_string(),
                });
                None
            }
            other => other,
        };

        let settings = PromptSettings::default()
            .with_mode(mode)
            .with_max_attempts(max_attempts);
        (settings, issues)
    }
}
