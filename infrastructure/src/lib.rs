//! Infrastructure layer for promptline
//!
//! This crate contains the text-file helpers and configuration file loading.

pub mod config;
pub mod files;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig, FilePromptConfig};
pub use files::{
    FileError, read_file, read_file_joined, read_file_lines, write_file, write_file_reporting,
};
