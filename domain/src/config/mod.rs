//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

pub mod config_key;
pub mod output_format;
pub mod validation;

pub use config_key::{ConfigKeyInfo, known_keys, lookup_key};
pub use output_format::OutputFormat;
pub use validation::{ConfigIssue, ConfigIssueCode};
