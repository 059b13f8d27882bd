//! Config key registry.
//!
//! Metadata for the known configuration keys: name, description, the
//! command-line flag that overrides it, and valid values. Used when
//! printing configuration sources and when reporting invalid values.

/// Metadata for a single config key.
#[derive(Debug, Clone)]
pub struct ConfigKeyInfo {
    /// Dotted key path (e.g., `"prompt.mode"`).
    pub key: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Command-line flag that overrides the key, if any.
    pub cli_flag: Option<&'static str>,
    /// Valid string values (empty if freeform).
    pub valid_values: &'static [&'static str],
}

/// All known config keys with their metadata.
pub fn known_keys() -> &'static [ConfigKeyInfo] {
    &KNOWN_KEYS
}

/// Look up a config key by its dotted path.
pub fn lookup_key(key: &str) -> Option<&'static ConfigKeyInfo> {
    KNOWN_KEYS.iter().find(|k| k.key == key)
}

static KNOWN_KEYS: [ConfigKeyInfo; 4] = [
    ConfigKeyInfo {
        key: "prompt.mode",
        description: "Validation mode: strict bounds or legacy OR-based bounds",
        cli_flag: Some("--legacy"),
        valid_values: &["strict", "legacy"],
    },
    ConfigKeyInfo {
        key: "prompt.max_attempts",
        description: "Invalid answers allowed before a prompt gives up (unset = unlimited)",
        cli_flag: Some("--max-attempts"),
        valid_values: &[],
    },
    ConfigKeyInfo {
        key: "output.color",
        description: "Colored diagnostics",
        cli_flag: Some("--no-color"),
        valid_values: &["true", "false"],
    },
    ConfigKeyInfo {
        key: "output.format",
        description: "Result format",
        cli_flag: Some("--output"),
        valid_values: &["plain", "json"],
    },
];
