//! Use cases (application services)

pub mod prompt;
