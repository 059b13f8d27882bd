//! Accepted prompt answers

use serde::{Deserialize, Serialize};

/// Outcome of a menu prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "selection", rename_all = "snake_case")]
pub enum MenuSelection {
    /// The reserved `0) Exit` entry.
    Quit,
    /// One of the listed options, numbered from 1.
    Choice { number: usize, label: String },
    /// A number with no matching entry, only reachable in legacy mode.
    Unlisted { number: i64 },
}

impl MenuSelection {
    /// Resolve a selection number against the option list.
    pub fn from_number(number: i64, options: &[String], with_quit: bool) -> Self {
        if number == 0 && with_quit {
            return MenuSelection::Quit;
        }
        match usize::try_from(number) {
            Ok(n) if (1..=options.len()).contains(&n) => MenuSelection::Choice {
                number: n,
                label: options[n - 1].clone(),
            },
            _ => MenuSelection::Unlisted { number },
        }
    }

    /// The number the user typed.
    pub fn number(&self) -> i64 {
        match self {
            MenuSelection::Quit => 0,
            MenuSelection::Choice { number, .. } => *number as i64,
            MenuSelection::Unlisted { number } => *number,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, MenuSelection::Quit)
    }

    /// Label of the selected option, if one was selected.
    pub fn label(&self) -> Option<&str> {
        match self {
            MenuSelection::Choice { label, .. } => Some(label),
            _ => None,
        }
    }
}

impl std::fmt::Display for MenuSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuSelection::Quit => write!(f, "0) Exit"),
            MenuSelection::Choice { number, label } => write!(f, "{}) {}", number, label),
            MenuSelection::Unlisted { number } => write!(f, "{}", number),
        }
    }
}

/// A validated answer to a prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PromptValue {
    Bool(bool),
    Char(char),
    Number(f64),
    Text(String),
    Menu(MenuSelection),
}

impl std::fmt::Display for PromptValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptValue::Bool(b) => write!(f, "{}", b),
            PromptValue::Char(c) => write!(f, "{}", c),
            PromptValue::Number(n) => write!(f, "{}", n),
            PromptValue::Text(s) => write!(f, "{}", s),
            PromptValue::Menu(m) => write!(f, "{}", m),
        }
    }
}
