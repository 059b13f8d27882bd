//! Text parsing helpers.

pub mod lenient;
