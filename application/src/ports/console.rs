//! Console port for line-oriented interaction.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`ConsolePort`] - defined here in application layer
//! - **Adapters**: `StreamConsole` / `StdConsole` - implemented in presentation layer
//!
//! The prompt loop never touches stdin/stdout directly, so it can be driven
//! by any reader/writer pair, including in-memory buffers in tests.

use std::io;

/// Line-oriented console the prompt loop reads from and writes to.
pub trait ConsolePort {
    /// Read the next line without its terminator (`\n` or `\r\n`).
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write one line of prompt text.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Write one line of diagnostic text (rejections, stream errors).
    ///
    /// Defaults to [`write_line`](Self::write_line); adapters may style it.
    fn write_diagnostic(&mut self, text: &str) -> io::Result<()> {
        self.write_line(text)
    }
}

impl<T: ConsolePort + ?Sized> ConsolePort for &mut T {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }

    fn write_diagnostic(&mut self, text: &str) -> io::Result<()> {
        (**self).write_diagnostic(text)
    }
}

impl<T: ConsolePort + ?Sized> ConsolePort for Box<T> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }

    fn write_diagnostic(&mut self, text: &str) -> io::Result<()> {
        (**self).write_diagnostic(text)
    }
}
