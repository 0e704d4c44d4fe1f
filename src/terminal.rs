//! A [`Table`] over line-based text streams.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::event::Event;
use crate::table::Table;

/// Plays over a text input and output, one line per answer and event.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal over the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the terminal, returning the streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Creates a terminal over the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Table for Terminal<R, W> {
    type Error = io::Error;

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a move was made",
            ));
        }

        Ok(line.trim().to_lowercase())
    }

    fn announce(&mut self, event: &Event<'_>) -> io::Result<()> {
        writeln!(self.output, "{event}")
    }
}
