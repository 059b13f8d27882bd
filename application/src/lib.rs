//! Application layer for promptline
//!
//! This crate contains the prompt use case, the console port it talks
//! through, and the settings that control the re-prompt loop.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PromptSettings;
pub use ports::console::ConsolePort;
pub use use_cases::prompt::{PromptError, Prompter};
