//! Prompt model
//!
//! - [`spec::PromptSpec`]: message plus the constraints for one request
//! - [`value::PromptValue`]: an accepted answer
//! - [`validation`]: the rules turning one input line into a value or a [`validation::Rejection`]

pub mod spec;
pub mod validation;
pub mod value;
