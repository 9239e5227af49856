//! Correctness gate: stop at the first output that differs from a
//! hard-coded expected value and exit nonzero.

use clap::Parser;
use specimen_bench::config::ConfigArgs;
use specimen_bench::{logging, Catalogue, HarnessError};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "check", about = "Fail fast on the first mismatch against an expected value")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Debug-level logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<(), HarnessError> {
    let config = cli.config.resolve()?;
    let catalogue = Catalogue::standard(&config)?;

    for specimen in catalogue.iter() {
        let checked = specimen.check()?;
        println!("{} tests passed! ({checked} checks)", specimen.name());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "check failed");
            ExitCode::from(err.exit_code())
        }
    }
}
