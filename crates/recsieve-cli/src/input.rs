//! Query input.
//!
//! Queries are read one per line, either typed at a prompt or piped in.
//! [`LineReader`] abstracts over stdin so the prompt loop can be tested
//! without a terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal};

/// Abstraction over line-oriented query input.
pub trait LineReader {
    /// Returns `true` if input comes from an interactive terminal.
    fn is_terminal(&self) -> bool;

    /// Reads the next line without its line ending.
    ///
    /// Returns `Ok(None)` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Real stdin reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl LineReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }
}

/// Mock reader serving canned lines, for tests.
#[derive(Debug, Clone, Default)]
pub struct MockLines {
    lines: VecDeque<String>,
    terminal: bool,
}

impl MockLines {
    /// Simulates piped input.
    pub fn piped<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            terminal: false,
        }
    }

    /// Simulates a user typing at a terminal.
    pub fn terminal<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terminal: true,
            ..Self::piped(lines)
        }
    }
}

impl LineReader for MockLines {
    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Returns `true` for the words that end an interactive session.
pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
