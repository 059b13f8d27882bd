//! Line validation rules
//!
//! [`PromptSpec::validate`] turns one line of input into a [`PromptValue`]
//! or a [`Rejection`]. How bounds are interpreted depends on the
//! [`ValidationMode`]:
//!
//! | Rule | Strict | Legacy |
//! |------|--------|--------|
//! | char / number bounds | `min <= v && v <= max` | `v >= min \|\| v <= max` |
//! | menu with quit | `0..=n` | any `v <= n` (negatives too) |
//! | menu without quit | `1..=n` | any integer when `n > 0` |
//! | text, empty disallowed | rejects blank lines | rejects only `""` |
//! | char line length | exactly one char | first char of the line |
//! | boolean tokens | compared after trimming | compared verbatim |
//! | menu number | surrounding whitespace ignored | must be the whole line |

use super::spec::{PromptKind, PromptSpec};
use super::value::{MenuSelection, PromptValue};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// How bound checks are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Bounds are real inclusive ranges (default).
    #[default]
    Strict,
    /// Historical acceptance rules, kept for compatibility.
    Legacy,
}

impl ValidationMode {
    /// Inclusive bound check under this mode.
    pub fn within<T: PartialOrd>(self, value: T, min: T, max: T) -> bool {
        match self {
            ValidationMode::Strict => min <= value && value <= max,
            ValidationMode::Legacy => value >= min || value <= max,
        }
    }

    pub fn is_legacy(self) -> bool {
        self == ValidationMode::Legacy
    }
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationMode::Strict => write!(f, "strict"),
            ValidationMode::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" | "s" => Ok(ValidationMode::Strict),
            "legacy" | "compat" | "l" => Ok(ValidationMode::Legacy),
            _ => Err(format!("Invalid ValidationMode: {}", s)),
        }
    }
}

/// Why a line was refused. The message is shown to the user before the
/// prompt repeats.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("That's not a valid answer. Try again.")]
    Unparseable,

    #[error("That's not an option. Try again.")]
    NotAnOption,

    #[error("That's out of range. Try again.")]
    OutOfRange,

    #[error("An answer is required. Try again.")]
    Empty,
}

impl PromptSpec {
    /// Refuse specifications that could never accept any line.
    pub fn check(&self, mode: ValidationMode) -> Result<(), DomainError> {
        let problem = match &self.kind {
            PromptKind::Bool {
                true_token,
                false_token,
            } if true_token.to_lowercase() == false_token.to_lowercase() => {
                Some(format!("boolean tokens must differ (both '{}')", true_token))
            }
            PromptKind::Char { min, max } if !mode.is_legacy() && min > max => {
                Some(format!("character range '{}'..='{}' is empty", min, max))
            }
            PromptKind::Number { min, max } if min.is_nan() || max.is_nan() => {
                Some("numeric bounds must not be NaN".to_string())
            }
            PromptKind::Number { min, max } if !mode.is_legacy() && min > max => {
                Some(format!("numeric range {}..={} is empty", min, max))
            }
            PromptKind::Menu { options, with_quit }
                if !mode.is_legacy() && options.is_empty() && !with_quit =>
            {
                Some("menu has no options and no exit entry".to_string())
            }
            _ => None,
        };

        match problem {
            Some(reason) => Err(DomainError::InvalidPrompt(reason)),
            None => Ok(()),
        }
    }

    /// Validate one line of input (line terminator already removed).
    pub fn validate(&self, line: &str, mode: ValidationMode) -> Result<PromptValue, Rejection> {
        match &self.kind {
            PromptKind::Bool {
                true_token,
                false_token,
            } => accept_bool(line, true_token, false_token, mode).map(PromptValue::Bool),
            PromptKind::Char { min, max } => {
                accept_char(line, *min, *max, mode).map(PromptValue::Char)
            }
            PromptKind::Number { min, max } => {
                accept_number(line, *min, *max, mode).map(PromptValue::Number)
            }
            PromptKind::Text { allow_empty } => {
                accept_text(line, *allow_empty, mode).map(PromptValue::Text)
            }
            PromptKind::Menu { options, with_quit } => {
                accept_menu(line, options, *with_quit, mode).map(PromptValue::Menu)
            }
        }
    }
}

/// Match `line` against the two boolean tokens, ignoring case.
pub fn accept_bool(
    line: &str,
    true_token: &str,
    false_token: &str,
    mode: ValidationMode,
) -> Result<bool, Rejection> {
    let answer = if mode.is_legacy() { line } else { line.trim() };
    let answer = answer.to_lowercase();
    if answer == true_token.to_lowercase() {
        Ok(true)
    } else if answer == false_token.to_lowercase() {
        Ok(false)
    } else {
        Err(Rejection::NotAnOption)
    }
}

/// Accept a single character within `min..=max`.
pub fn accept_char(
    line: &str,
    min: char,
    max: char,
    mode: ValidationMode,
) -> Result<char, Rejection> {
    let mut chars = line.chars();
    let first = chars.next().ok_or(Rejection::Empty)?;
    if !mode.is_legacy() && chars.next().is_some() {
        return Err(Rejection::NotAnOption);
    }
    if mode.within(first, min, max) {
        Ok(first)
    } else {
        Err(Rejection::OutOfRange)
    }
}

/// Parse a number within `min..=max`. Surrounding whitespace is ignored.
///
/// The line is parsed directly in `T`, so the bounds are compared at the
/// same precision as the answer (`0.1` typed at an `f32` prompt equals
/// `0.1f32`).
pub fn accept_number<T: FromStr + PartialOrd + Copy>(
    line: &str,
    min: T,
    max: T,
    mode: ValidationMode,
) -> Result<T, Rejection> {
    let value: T = line.trim().parse().map_err(|_| Rejection::Unparseable)?;
    if mode.within(value, min, max) {
        Ok(value)
    } else {
        Err(Rejection::OutOfRange)
    }
}

pub fn accept_text(
    line: &str,
    allow_empty: bool,
    mode: ValidationMode,
) -> Result<String, Rejection> {
    let blank = if mode.is_legacy() {
        line.is_empty()
    } else {
        line.trim().is_empty()
    };
    if blank && !allow_empty {
        Err(Rejection::Empty)
    } else {
        Ok(line.to_string())
    }
}

/// Parse a menu selection number and resolve it against `options`.
pub fn accept_menu(
    line: &str,
    options: &[String],
    with_quit: bool,
    mode: ValidationMode,
) -> Result<MenuSelection, Rejection> {
    let text = if mode.is_legacy() { line } else { line.trim() };
    let number: i64 = text.parse().map_err(|_| Rejection::Unparseable)?;
    let count = options.len() as i64;
    let accepted = match (mode, with_quit) {
        (ValidationMode::Strict, true) => (0..=count).contains(&number),
        (ValidationMode::Strict, false) => (1..=count).contains(&number),
        (ValidationMode::Legacy, true) => number <= count,
        (ValidationMode::Legacy, false) => count > 0,
    };
    if accepted {
        Ok(MenuSelection::from_number(number, options, with_quit))
    } else {
        Err(Rejection::NotAnOption)
    }
}
