//! Prompt settings: re-prompt loop control.
//!
//! [`PromptSettings`] groups the parameters that control the loop in
//! [`Prompter`](crate::use_cases::prompt::Prompter). These are
//! application-layer concerns, not part of any single prompt.

use promptline_domain::ValidationMode;
use serde::{Deserialize, Serialize};

/// Re-prompt loop control parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptSettings {
    /// How bounds are interpreted when validating a line.
    pub mode: ValidationMode,
    /// Rejected lines tolerated before giving up. `None` keeps asking forever.
    pub max_attempts: Option<u32>,
}

impl PromptSettings {
    // ==================== Builder Methods ====================

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_attempts(mut self, max: Option<u32>) -> Self {
        self.max_attempts = max;
        self
    }

    /// Whether `rejected` invalid lines exhaust the attempt limit.
    pub fn attempts_exhausted(&self, rejected: u32) -> bool {
        self.max_attempts.is_some_and(|max| rejected >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict_and_unlimited() {
        let settings = PromptSettings::default();
        assert_eq!(settings.mode, ValidationMode::Strict);
        assert_eq!(settings.max_attempts, None);
        assert!(!settings.attempts_exhausted(u32::MAX));
    }

    #[test]
    fn test_builder() {
        let settings = PromptSettings::default()
            .with_mode(ValidationMode::Legacy)
            .with_max_attempts(Some(3));
        assert_eq!(settings.mode, ValidationMode::Legacy);
        assert!(!settings.attempts_exhausted(2));
        assert!(settings.attempts_exhausted(3));
    }

    #[test]
    fn test_serde_roundtrip_uses_lowercase_mode() {
        let settings = PromptSettings::default().with_mode(ValidationMode::Legacy);
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"mode":"legacy","max_attempts":null}"#);
    }
}
