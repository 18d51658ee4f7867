//! Query session over a loaded record set.
//!
//! A [`Session`] owns the records and runs queries against them, either once
//! ([`Session::execute`]) or in a read-eval-print loop
//! ([`Session::prompt_loop`]).

use std::io::{self, Write};

use recsieve::{Query, QueryError, Record};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::input::{is_exit_command, LineReader};
use crate::output::{render, OutputError, OutputMode};

/// Errors that can occur while running a query.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// How query results are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub mode: OutputMode,
    /// Print only the number of matches.
    pub count_only: bool,
    /// Print the parsed conditions instead of the matches.
    pub explain: bool,
}

/// Tally of a finished prompt loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopSummary {
    /// Queries that ran.
    pub executed: usize,
    /// Queries rejected as malformed.
    pub rejected: usize,
}

/// A loaded record set plus output settings.
#[derive(Debug, Clone)]
pub struct Session {
    records: Vec<Record>,
    settings: Settings,
}

impl Session {
    pub fn new(records: Vec<Record>, settings: Settings) -> Self {
        Session { records, settings }
    }

    /// Returns the loaded records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Parses and runs one query, writing the results to `out`.
    ///
    /// Returns the number of matching records.
    pub fn execute<W: Write>(&self, text: &str, out: &mut W) -> Result<usize, SessionError> {
        let query = Query::parse(text)?;
        self.write_results(&query, out, false)
    }

    /// Reads queries from `input` until end of input or `exit`/`quit`.
    ///
    /// Malformed queries are reported on `err` and the loop continues. Blank
    /// lines are skipped. When `input` is a terminal every read is preceded
    /// by a prompt.
    pub fn prompt_loop<L, W, E>(
        &self,
        input: &mut L,
        out: &mut W,
        err: &mut E,
    ) -> Result<LoopSummary, SessionError>
    where
        L: LineReader,
        W: Write,
        E: Write,
    {
        let interactive = input.is_terminal();
        let mut summary = LoopSummary::default();

        writeln!(out, "Total records loaded: {}", self.records.len())?;

        loop {
            if interactive {
                write!(out, "\nEnter your WHERE query:\n> ")?;
                out.flush()?;
            }

            let Some(line) = input.read_line()? else {
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if is_exit_command(line) {
                break;
            }

            match Query::parse(line) {
                Ok(query) => {
                    self.write_results(&query, out, true)?;
                    summary.executed += 1;
                }
                Err(e) => {
                    warn!(error = %e, "rejected query");
                    writeln!(err, "{}", e)?;
                    summary.rejected += 1;
                }
            }
        }

        debug!(?summary, "prompt loop finished");
        Ok(summary)
    }

    fn write_results<W: Write>(
        &self,
        query: &Query,
        out: &mut W,
        header: bool,
    ) -> Result<usize, SessionError> {
        info!(%query, "running query");

        if self.settings.explain {
            let plan = serde_json::to_string_pretty(query).map_err(OutputError::from)?;
            writeln!(out, "{}", plan)?;
            return Ok(query.count(&self.records));
        }

        let hits = query.filter(&self.records);
        if header {
            writeln!(out, "\nMatched Records: {}\n", hits.len())?;
        }

        if self.settings.count_only {
            if !header {
                writeln!(out, "{}", hits.len())?;
            }
        } else {
            out.write_all(render(&hits, self.settings.mode)?.as_bytes())?;
        }
        Ok(hits.len())
    }
}
