//! Command line front end for [`recsieve`].
//!
//! Loads a record file, then filters it with `WHERE` queries given on the
//! command line, piped in, or typed at a prompt.
//!
//! - [`source`] reads record files, including `var x = [...];` wrappers
//! - [`input`] reads query lines from stdin
//! - [`session`] runs queries against the loaded records
//! - [`output`] renders matches as JSON, YAML or CSV
//! - [`logging`] installs the tracing subscriber

mod cli;
pub mod input;
pub mod logging;
pub mod output;
pub mod session;
pub mod source;

pub use cli::{run, Cli};
pub use output::OutputMode;
pub use session::{Session, SessionError, Settings};
pub use source::{load_records, SourceError};
