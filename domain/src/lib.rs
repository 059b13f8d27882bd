//! Domain layer for promptline
//!
//! This crate contains the prompt model, the validation rules applied to a
//! single line of console input, and the pure helpers (lenient integer
//! parsing, factorial). It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Prompt
//!
//! A [`PromptSpec`] pairs the message shown to the user with a [`PromptKind`]
//! describing what counts as an acceptable answer. Validating a line yields
//! either a [`PromptValue`] or a [`Rejection`] explaining why the line was
//! refused.
//!
//! ## Validation mode
//!
//! - **Strict** (default): bounds are real inclusive ranges
//! - **Legacy**: reproduces the historical OR-based bound checks

pub mod config;
pub mod core;
pub mod math;
pub mod parsing;
pub mod prompt;

// Re-export commonly used types
pub use config::{
    output_format::OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode},
};
pub use core::error::DomainError;
pub use math::{MAX_FACTORIAL_INPUT, factorial};
pub use parsing::lenient::{lenient_int, parse_lenient_int};
pub use prompt::{
    spec::{PromptKind, PromptSpec},
    validation::{Rejection, ValidationMode},
    value::{MenuSelection, PromptValue},
};
