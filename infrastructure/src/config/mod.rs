//! Configuration file loading for promptline
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PROMPTLINE_*` environment variables (`PROMPTLINE_PROMPT__MODE=legacy`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./promptline.toml` or `./.promptline.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/promptline/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig, FilePromptConfig};
pub use loader::ConfigLoader;
