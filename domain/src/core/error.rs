//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Factorial argument {0} is out of range (must be between 0 and 20)")]
    FactorialOutOfRange(i64),

    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),
}
