//! Configuration issues.
//!
//! Loading never fails on a bad value: the loader falls back to a default
//! and records a [`ConfigIssue`] so the caller can warn about it.

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field holds a value outside its accepted set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// `prompt.max_attempts = 0` would refuse every answer.
    ZeroMaxAttempts,
}

/// A detected issue in the configuration. Issues never stop loading; they
/// are printed as warnings.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub code: ConfigIssueCode,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "warning: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_a_warning() {
        let issue = ConfigIssue {
            code: ConfigIssueCode::ZeroMaxAttempts,
            message: "prompt.max_attempts must be at least 1".to_string(),
        };
        assert_eq!(
            issue.to_string(),
            "warning: prompt.max_attempts must be at least 1"
        );
    }
}
