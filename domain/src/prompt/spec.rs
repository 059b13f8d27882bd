//! Prompt specification value object

use serde::{Deserialize, Serialize};

/// What kind of answer a prompt expects, with its constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PromptKind {
    /// Two case-insensitive tokens mapping to `true` / `false`
    Bool {
        true_token: String,
        false_token: String,
    },
    /// A single character within an inclusive code point range
    Char { min: char, max: char },
    /// A decimal number within an inclusive range
    Number { min: f64, max: f64 },
    /// Free text, optionally allowed to be empty
    Text { allow_empty: bool },
    /// A numbered choice from a list, optionally with `0) Exit`
    Menu { options: Vec<String>, with_quit: bool },
}

/// Message plus constraints for one interactive request (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptSpec {
    pub message: String,
    pub kind: PromptKind,
}

impl PromptSpec {
    pub fn new(message: impl Into<String>, kind: PromptKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn boolean(
        message: impl Into<String>,
        true_token: impl Into<String>,
        false_token: impl Into<String>,
    ) -> Self {
        Self::new(
            message,
            PromptKind::Bool {
                true_token: true_token.into(),
                false_token: false_token.into(),
            },
        )
    }

    pub fn character(message: impl Into<String>, min: char, max: char) -> Self {
        Self::new(message, PromptKind::Char { min, max })
    }

    pub fn number(message: impl Into<String>, min: f64, max: f64) -> Self {
        Self::new(message, PromptKind::Number { min, max })
    }

    pub fn text(message: impl Into<String>, allow_empty: bool) -> Self {
        Self::new(message, PromptKind::Text { allow_empty })
    }

    pub fn menu<I, S>(message: impl Into<String>, options: I, with_quit: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            message,
            PromptKind::Menu {
                options: options.into_iter().map(Into::into).collect(),
                with_quit,
            },
        )
    }

    /// Lines written to the console before the first read.
    ///
    /// For menus this is the message followed by the numbered entries:
    ///
    /// ```text
    /// Pick one
    /// 0) Exit
    /// 1) A
    /// 2) B
    ///
    /// Enter the number for your selection:
    /// ```
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.message.is_empty() {
            lines.push(self.message.clone());
        }

        if let PromptKind::Menu { options, with_quit } = &self.kind {
            if *with_quit {
                lines.push("0) Exit".to_string());
            }
            for (i, option) in options.iter().enumerate() {
                lines.push(format!("{}) {}", i + 1, option));
            }
            lines.push(String::new());
            lines.push("Enter the number for your selection:".to_string());
        }

        lines
    }
}
