//! Reader/writer console adapter.
//!
//! [`StreamConsole`] implements [`ConsolePort`] over any `BufRead` +
//! `Write` pair. [`StdConsole`] is the stdin/stdout instance used by the
//! binary; tests drive the same adapter with in-memory buffers.

use colored::Colorize;
use promptline_application::ConsolePort;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Console over a reader/writer pair
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
    styled_diagnostics: bool,
}

/// Console bound to the process stdin/stdout
pub type StdConsole = StreamConsole<StdinLock<'static>, Stdout>;

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            styled_diagnostics: false,
        }
    }

    /// Render diagnostics in yellow (subject to `colored`'s global override)
    pub fn with_styled_diagnostics(mut self, styled: bool) -> Self {
        self.styled_diagnostics = styled;
        self
    }

    /// Split the console back into its reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl StdConsole {
    /// Console on the locked process stdin and stdout
    pub fn stdio() -> Self {
        StreamConsole::new(io::stdin().lock(), io::stdout()).with_styled_diagnostics(true)
    }
}

impl<R: BufRead, W: Write> ConsolePort for StreamConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    fn write_diagnostic(&mut self, text: &str) -> io::Result<()> {
        if self.styled_diagnostics {
            writeln!(self.writer, "{}", text.yellow())?;
        } else {
            writeln!(self.writer, "{}", text)?;
        }
        self.writer.flush()
    }
}
