//! Command line arguments and the top-level run function.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::input::RealStdin;
use crate::output::OutputMode;
use crate::session::{Session, Settings};
use crate::source::load_records;

/// Filter JSON records with WHERE queries.
///
/// Without --query, queries are read one per line from stdin. At a terminal
/// each query is prompted for; type `exit` or press Ctrl-D to stop.
#[derive(Debug, Parser)]
#[command(name = "recsieve", version)]
pub struct Cli {
    /// Record file: a JSON array of objects, optionally wrapped as `var name = [...];`
    #[arg(env = "RECSIEVE_FILE")]
    pub file: PathBuf,

    /// Run a single query, e.g. "WHERE length > 200 AND type = 'Tanker'"
    #[arg(short, long)]
    pub query: Option<String>,

    /// How matched records are printed
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = OutputMode::Json,
        env = "RECSIEVE_OUTPUT"
    )]
    pub output: OutputMode,

    /// Print only the number of matching records
    #[arg(long)]
    pub count: bool,

    /// Print the parsed conditions instead of the matching records
    #[arg(long, conflicts_with = "count")]
    pub explain: bool,
}

impl Cli {
    /// Output settings derived from the flags.
    pub fn settings(&self) -> Settings {
        Settings {
            mode: self.output,
            count_only: self.count,
            explain: self.explain,
        }
    }
}

/// Loads the record file and runs the requested queries.
pub fn run(cli: Cli) -> Result<()> {
    let records = load_records(&cli.file)
        .with_context(|| format!("failed to load records from {}", cli.file.display()))?;
    info!(count = records.len(), path = %cli.file.display(), "loaded records");

    let session = Session::new(records, cli.settings());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.query {
        Some(query) => {
            session.execute(query, &mut out)?;
        }
        None => {
            let stderr = io::stderr();
            let mut err = stderr.lock();
            session.prompt_loop(&mut RealStdin, &mut out, &mut err)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "recsieve",
            "vessels.json",
            "-q",
            "WHERE length > 200",
            "-o",
            "csv",
            "--count",
        ])
        .unwrap();

        assert_eq!(cli.file, PathBuf::from("vessels.json"));
        assert_eq!(cli.query.as_deref(), Some("WHERE length > 200"));
        assert_eq!(
            cli.settings(),
            Settings {
                mode: OutputMode::Csv,
                count_only: true,
                explain: false,
            }
        );
    }

    #[test]
    fn count_conflicts_with_explain() {
        let result = Cli::try_parse_from(["recsieve", "f.json", "--count", "--explain"]);
        assert!(result.is_err());
    }
}
