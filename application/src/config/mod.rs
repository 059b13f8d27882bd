//! Application-level configuration.
//!
//! - [`PromptSettings`]: re-prompt loop control (validation mode, attempt limit)

pub mod prompt_settings;

pub use prompt_settings::PromptSettings;
