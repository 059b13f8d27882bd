//! Prompt use case.
//!
//! Shows a prompt, reads lines from a [`ConsolePort`] and keeps asking until
//! a line passes validation.
//!
//! # Flow
//!
//! ```text
//! check spec ──(never satisfiable)──▶ Err(InvalidSpec)
//!     │
//! write prompt lines
//!     │
//!     ▼
//! read line ──(end of input / I/O error)──▶ diagnostic, Err(InputClosed | Io)
//!     │
//! validate ──(ok)──▶ Ok(value)
//!     │
//! (rejected) write diagnostic ──(attempt limit hit)──▶ Err(RetriesExhausted)
//!     │
//!     └──────────▶ read line
//! ```

use crate::config::PromptSettings;
use crate::ports::console::ConsolePort;
use promptline_domain::prompt::validation::{
    accept_bool, accept_char, accept_menu, accept_number, accept_text,
};
use promptline_domain::{DomainError, MenuSelection, PromptSpec, PromptValue, Rejection};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Diagnostic written when the input stream ends or breaks.
const INPUT_UNAVAILABLE: &str = "Input is no longer available.";

/// Errors that end a prompt without a valid answer.
///
/// Malformed input is not an error: it is rejected, reported on the
/// console, and the prompt repeats.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Input ended before a valid answer was given")]
    InputClosed,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No valid answer after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    #[error(transparent)]
    InvalidSpec(#[from] DomainError),
}

impl PromptError {
    /// Check if the console ran out of input
    pub fn is_input_closed(&self) -> bool {
        matches!(self, PromptError::InputClosed)
    }
}

/// Use case for asking the user for values on a console.
///
/// Every typed operation builds a [`PromptSpec`], displays it, and loops
/// until a line is accepted or the loop has to stop.
///
/// # Example
///
/// ```ignore
/// let mut prompter = Prompter::new(StdConsole::stdio());
/// let age = prompter.prompt_int("How old are you?", 0, 150)?;
/// ```
pub struct Prompter<C: ConsolePort> {
    console: C,
    settings: PromptSettings,
}

impl<C: ConsolePort> Prompter<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            settings: PromptSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: PromptSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Give the console back, e.g. to inspect what was written.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Ask for any kind of value described by `spec`.
    pub fn ask(&mut self, spec: &PromptSpec) -> Result<PromptValue, PromptError> {
        let mode = self.settings.mode;
        self.run(spec, |line| spec.validate(line, mode))
    }

    /// Ask for one of two tokens (case-insensitive) meaning `true` / `false`.
    pub fn prompt_bool(
        &mut self,
        message: &str,
        true_token: &str,
        false_token: &str,
    ) -> Result<bool, PromptError> {
        let spec = PromptSpec::boolean(message, true_token, false_token);
        let mode = self.settings.mode;
        self.run(&spec, |line| accept_bool(line, true_token, false_token, mode))
    }

    /// Ask for a single character in `min..=max`.
    pub fn prompt_char(
        &mut self,
        message: &str,
        min: char,
        max: char,
    ) -> Result<char, PromptError> {
        let spec = PromptSpec::character(message, min, max);
        let mode = self.settings.mode;
        self.run(&spec, |line| accept_char(line, min, max, mode))
    }

    /// Ask for a number in `min..=max`.
    pub fn prompt_double(
        &mut self,
        message: &str,
        min: f64,
        max: f64,
    ) -> Result<f64, PromptError> {
        let spec = PromptSpec::number(message, min, max);
        let mode = self.settings.mode;
        self.run(&spec, |line| accept_number(line, min, max, mode))
    }

    /// Ask for an `f32` in `min..=max`. The range is checked in `f32`, so a
    /// bound such as `0.1` is accepted when typed exactly.
    pub fn prompt_float(
        &mut self,
        message: &str,
        min: f32,
        max: f32,
    ) -> Result<f32, PromptError> {
        let spec = PromptSpec::number(message, min.into(), max.into());
        let mode = self.settings.mode;
        self.run(&spec, |line| accept_number(line, min, max, mode))
    }

    /// Ask for a whole number. The answer is parsed as a double and
    /// truncated toward zero.
    pub fn prompt_int(&mut self, message: &str, min: i32, max: i32) -> Result<i32, PromptError> {
        Ok(self.prompt_double(message, min.into(), max.into())? as i32)
    }

    pub fn prompt_long(&mut self, message: &str, min: i64, max: i64) -> Result<i64, PromptError> {
        Ok(self.prompt_double(message, min as f64, max as f64)? as i64)
    }

    pub fn prompt_short(&mut self, message: &str, min: i16, max: i16) -> Result<i16, PromptError> {
        Ok(self.prompt_double(message, min.into(), max.into())? as i16)
    }

    pub fn prompt_byte(&mut self, message: &str, min: i8, max: i8) -> Result<i8, PromptError> {
        Ok(self.prompt_double(message, min.into(), max.into())? as i8)
    }

    /// Ask for free text. With `allow_empty = false`, blank answers are refused.
    pub fn prompt_input(
        &mut self,
        message: &str,
        allow_empty: bool,
    ) -> Result<String, PromptError> {
        let spec = PromptSpec::text(message, allow_empty);
        let mode = self.settings.mode;
        self.run(&spec, |line| accept_text(line, allow_empty, mode))
    }

    /// Show a numbered menu and ask for a selection.
    ///
    /// With `with_quit`, entry `0) Exit` is listed first and selecting it
    /// returns [`MenuSelection::Quit`].
    pub fn prompt_menu<S: AsRef<str>>(
        &mut self,
        message: &str,
        options: &[S],
        with_quit: bool,
    ) -> Result<MenuSelection, PromptError> {
        let labels: Vec<String> = options.iter().map(|o| o.as_ref().to_string()).collect();
        let spec = PromptSpec::menu(message, labels.iter().cloned(), with_quit);
        let mode = self.settings.mode;
        self.run(&spec, |line| accept_menu(line, &labels, with_quit, mode))
    }

    /// The re-prompt loop shared by every operation.
    fn run<T>(
        &mut self,
        spec: &PromptSpec,
        mut accept: impl FnMut(&str) -> Result<T, Rejection>,
    ) -> Result<T, PromptError> {
        spec.check(self.settings.mode)?;

        for line in spec.display_lines() {
            self.console.write_line(&line)?;
        }

        let mut rejected: u32 = 0;
        loop {
            let line = match self.console.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    warn!(prompt = %spec.message, "Input closed while prompting");
                    self.report_unavailable();
                    return Err(PromptError::InputClosed);
                }
                Err(e) => {
                    warn!(prompt = %spec.message, error = %e, "Failed to read input");
                    self.report_unavailable();
                    return Err(PromptError::Io(e));
                }
            };

            match accept(&line) {
                Ok(value) => {
                    info!(prompt = %spec.message, rejected, "Prompt answered");
                    return Ok(value);
                }
                Err(rejection) => {
                    rejected += 1;
                    debug!(input = %line, ?rejection, attempt = rejected, "Rejected input");
                    self.console.write_diagnostic(&rejection.to_string())?;

                    if self.settings.attempts_exhausted(rejected) {
                        warn!(prompt = %spec.message, attempts = rejected, "Giving up on prompt");
                        return Err(PromptError::RetriesExhausted { attempts: rejected });
                    }
                }
            }
        }
    }

    fn report_unavailable(&mut self) {
        // The console may be what broke; nothing more to do if this fails too
        let _ = self.console.write_diagnostic(INPUT_UNAVAILABLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptline_domain::ValidationMode;
    use std::collections::VecDeque;
    use std::io;

    // ==================== Test Console ====================

    #[derive(Default)]
    struct ScriptedConsole {
        input: VecDeque<String>,
        broken: bool,
        lines: Vec<String>,
        diagnostics: Vec<String>,
    }

    impl ScriptedConsole {
        fn new(input: &[&str]) -> Self {
            Self {
                input: input.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }

        fn broken() -> Self {
            Self {
                broken: true,
                ..Default::default()
            }
        }
    }

    impl ConsolePort for ScriptedConsole {
        fn read_line(&mut self) -> io::Result<Option<String>> {
            match self.input.pop_front() {
                Some(line) => Ok(Some(line)),
                None if self.broken => Err(io::Error::other("terminal gone")),
                None => Ok(None),
            }
        }

        fn write_line(&mut self, text: &str) -> io::Result<()> {
            self.lines.push(text.to_string());
            Ok(())
        }

        fn write_diagnostic(&mut self, text: &str) -> io::Result<()> {
            self.diagnostics.push(text.to_string());
            Ok(())
        }
    }

    fn strict(input: &[&str]) -> Prompter<ScriptedConsole> {
        Prompter::new(ScriptedConsole::new(input))
    }

    fn legacy(input: &[&str]) -> Prompter<ScriptedConsole> {
        Prompter::new(ScriptedConsole::new(input))
            .with_settings(PromptSettings::default().with_mode(ValidationMode::Legacy))
    }

    // ==================== Bool ====================

    #[test]
    fn test_bool_first_valid_line_any_case() {
        for (line, expected) in [("YES", true), ("yes", true), ("No", false), ("nO", false)] {
            let mut prompter = strict(&[line]);
            assert_eq!(prompter.prompt_bool("Go?", "yes", "no").unwrap(), expected);
            let console = prompter.into_console();
            assert_eq!(console.lines, vec!["Go?"]);
            assert!(console.diagnostics.is_empty());
        }
    }

    #[test]
    fn test_bool_reprompts_until_valid() {
        let mut prompter = strict(&["maybe", "", "y"]);
        assert!(prompter.prompt_bool("Go?", "y", "n").unwrap());
        let console = prompter.into_console();
        assert_eq!(console.diagnostics.len(), 2);
        assert_eq!(console.diagnostics[0], "That's not an option. Try again.");
    }

    // ==================== Numeric ====================

    #[test]
    fn test_numeric_boundaries_accepted_in_both_modes() {
        assert_eq!(strict(&["1"]).prompt_int("n", 1, 10).unwrap(), 1);
        assert_eq!(strict(&["10"]).prompt_int("n", 1, 10).unwrap(), 10);
        assert_eq!(legacy(&["1"]).prompt_int("n", 1, 10).unwrap(), 1);
        assert_eq!(legacy(&["10"]).prompt_int("n", 1, 10).unwrap(), 10);
    }

    #[test]
    fn test_narrow_kind_boundaries_accepted_in_both_modes() {
        for build in [strict, legacy] {
            assert_eq!(build(&["0.1"]).prompt_float("x", 0.1, 0.7).unwrap(), 0.1);
            assert_eq!(build(&["0.7"]).prompt_float("x", 0.1, 0.7).unwrap(), 0.7);
            assert_eq!(build(&["-2.5"]).prompt_float("x", -2.5, 1.5).unwrap(), -2.5);

            assert_eq!(build(&["-40"]).prompt_long("n", -40, 9_000).unwrap(), -40);
            assert_eq!(build(&["9000"]).prompt_long("n", -40, 9_000).unwrap(), 9_000);

            assert_eq!(
                build(&["-32768"]).prompt_short("n", i16::MIN, i16::MAX).unwrap(),
                i16::MIN
            );
            assert_eq!(
                build(&["32767"]).prompt_short("n", i16::MIN, i16::MAX).unwrap(),
                i16::MAX
            );

            assert_eq!(build(&["-128"]).prompt_byte("n", i8::MIN, 5).unwrap(), i8::MIN);
            assert_eq!(build(&["5"]).prompt_byte("n", i8::MIN, 5).unwrap(), 5);
        }
    }

    #[test]
    fn test_float_bounds_without_exact_binary_form() {
        let mut prompter = strict(&["0.1"]);
        assert_eq!(prompter.prompt_float("x", 0.1, 1.0).unwrap(), 0.1);
        assert!(prompter.into_console().diagnostics.is_empty());

        let mut prompter = strict(&["0.09", "0.71", "0.7"]);
        assert_eq!(prompter.prompt_float("x", 0.1, 0.7).unwrap(), 0.7);
        assert_eq!(
            prompter.into_console().diagnostics,
            vec![
                "That's out of range. Try again.",
                "That's out of range. Try again.",
            ]
        );
    }

    #[test]
    fn test_numeric_out_of_range_strict_reprompts() {
        let mut prompter = strict(&["11", "0", "abc", "5"]);
        assert_eq!(prompter.prompt_int("n", 1, 10).unwrap(), 5);
        let console = prompter.into_console();
        assert_eq!(
            console.diagnostics,
            vec![
                "That's out of range. Try again.",
                "That's out of range. Try again.",
                "That's not a valid answer. Try again.",
            ]
        );
    }

    #[test]
    fn test_numeric_out_of_range_legacy_accepts() {
        assert_eq!(legacy(&["11"]).prompt_int("n", 1, 10).unwrap(), 11);
        assert_eq!(legacy(&["-3"]).prompt_long("n", 1, 10).unwrap(), -3);
    }

    #[test]
    fn test_narrowing_truncates() {
        assert_eq!(strict(&["7.9"]).prompt_int("n", 0, 10).unwrap(), 7);
        assert_eq!(strict(&["-7.9"]).prompt_short("n", -10, 0).unwrap(), -7);
        assert_eq!(strict(&["2.5"]).prompt_float("n", 0.0, 3.0).unwrap(), 2.5);
        assert_eq!(strict(&["127"]).prompt_byte("n", 0, 127).unwrap(), 127);
    }

    #[test]
    fn test_narrowing_saturates_in_legacy() {
        // Legacy accepts 300 for a byte prompt; the cast saturates
        assert_eq!(legacy(&["300"]).prompt_byte("n", 0, 100).unwrap(), i8::MAX);
    }

    // ==================== Char ====================

    #[test]
    fn test_char_range() {
        let mut prompter = strict(&["", "z", "ab", "c"]);
        assert_eq!(prompter.prompt_char("Letter", 'a', 'e').unwrap(), 'c');
        assert_eq!(prompter.into_console().diagnostics.len(), 3);

        assert_eq!(legacy(&["z"]).prompt_char("Letter", 'a', 'e').unwrap(), 'z');
    }

    // ==================== Text ====================

    #[test]
    fn test_text_empty_disallowed() {
        let mut prompter = strict(&["", " ", "Ada"]);
        assert_eq!(prompter.prompt_input("Name", false).unwrap(), "Ada");
        assert_eq!(prompter.into_console().diagnostics.len(), 2);
    }

    #[test]
    fn test_text_single_space_accepted_in_legacy() {
        let mut prompter = legacy(&["", " "]);
        assert_eq!(prompter.prompt_input("Name", false).unwrap(), " ");
        assert_eq!(prompter.into_console().diagnostics.len(), 1);
    }

    #[test]
    fn test_text_empty_allowed() {
        assert_eq!(strict(&[""]).prompt_input("Note", true).unwrap(), "");
    }

    // ==================== Menu ====================

    #[test]
    fn test_menu_displays_options() {
        let mut prompter = strict(&["1"]);
        prompter.prompt_menu("Pick", &["A", "B"], true).unwrap();
        assert_eq!(
            prompter.into_console().lines,
            vec![
                "Pick",
                "0) Exit",
                "1) A",
                "2) B",
                "",
                "Enter the number for your selection:"
            ]
        );
    }

    #[test]
    fn test_menu_with_quit_selections() {
        assert!(strict(&["0"]).prompt_menu("", &["A", "B"], true).unwrap().is_quit());

        let selection = strict(&["1"]).prompt_menu("", &["A", "B"], true).unwrap();
        assert_eq!(selection.label(), Some("A"));

        let mut prompter = strict(&["3", "2"]);
        let selection = prompter.prompt_menu("", &["A", "B"], true).unwrap();
        assert_eq!(selection.label(), Some("B"));
        assert_eq!(prompter.into_console().diagnostics.len(), 1);
    }

    #[test]
    fn test_menu_negative_selection_strict_rejects() {
        let mut prompter = strict(&["-5", "0"]);
        assert!(prompter.prompt_menu("", &["A", "B"], true).unwrap().is_quit());
        assert_eq!(
            prompter.into_console().diagnostics,
            vec!["That's not an option. Try again."]
        );
    }

    #[test]
    fn test_menu_negative_selection_legacy_accepts() {
        let selection = legacy(&["-5"]).prompt_menu("", &["A", "B"], true).unwrap();
        assert_eq!(selection, MenuSelection::Unlisted { number: -5 });
    }

    // ==================== ask ====================

    #[test]
    fn test_ask_returns_tagged_value() {
        let spec = PromptSpec::text("Name", false);
        assert_eq!(
            strict(&["Ada"]).ask(&spec).unwrap(),
            PromptValue::Text("Ada".to_string())
        );
    }

    // ==================== Loop exits ====================

    #[test]
    fn test_closed_input_terminates() {
        let mut prompter = strict(&["nope"]);
        let err = prompter.prompt_bool("Go?", "y", "n").unwrap_err();
        assert!(err.is_input_closed());
        let console = prompter.into_console();
        assert_eq!(
            console.diagnostics.last().map(String::as_str),
            Some(INPUT_UNAVAILABLE)
        );
    }

    #[test]
    fn test_io_error_terminates() {
        let mut prompter = Prompter::new(ScriptedConsole::broken());
        let err = prompter.prompt_input("Name", true).unwrap_err();
        assert!(matches!(err, PromptError::Io(_)));
    }

    #[test]
    fn test_max_attempts_stops_loop() {
        let mut prompter = strict(&["a", "b", "c", "yes"])
            .with_settings(PromptSettings::default().with_max_attempts(Some(2)));
        let err = prompter.prompt_bool("Go?", "yes", "no").unwrap_err();
        assert!(matches!(err, PromptError::RetriesExhausted { attempts: 2 }));
        // The third line was never consumed
        assert_eq!(prompter.into_console().input.len(), 2);
    }

    #[test]
    fn test_invalid_spec_refused_before_io() {
        let mut prompter = strict(&["5"]);
        let err = prompter.prompt_double("n", 10.0, 1.0).unwrap_err();
        assert!(matches!(err, PromptError::InvalidSpec(_)));
        let console = prompter.into_console();
        assert!(console.lines.is_empty());
        assert_eq!(console.input.len(), 1);
    }

    #[test]
    fn test_borrowed_console() {
        let mut console = ScriptedConsole::new(&["42"]);
        {
            let mut prompter = Prompter::new(&mut console);
            assert_eq!(prompter.prompt_long("n", 0, 100).unwrap(), 42);
        }
        assert_eq!(console.lines, vec!["n"]);
    }
}
