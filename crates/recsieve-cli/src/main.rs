use clap::Parser;
use recsieve_cli::{logging, run, Cli};

fn main() -> anyhow::Result<()> {
    logging::init();
    run(Cli::parse())
}
