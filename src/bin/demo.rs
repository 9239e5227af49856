//! Verification demo: run every vector through both variants and show all
//! discrepancies. Mismatches are reported, never fatal.

use clap::Parser;
use specimen_bench::config::ConfigArgs;
use specimen_bench::{logging, report, Catalogue, HarnessError, SpecimenVerdict};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "demo", about = "Show reference and optimized outputs side by side")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Only verify this specimen
    #[arg(long)]
    specimen: Option<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Debug-level logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<(), HarnessError> {
    let config = cli.config.resolve()?;
    let catalogue = Catalogue::standard(&config)?;

    let verdicts: Vec<SpecimenVerdict> = catalogue
        .select(cli.specimen.as_deref())?
        .into_iter()
        .map(|specimen| specimen.verify())
        .collect();

    for verdict in verdicts.iter().filter(|v| !v.passed) {
        tracing::warn!(
            specimen = %verdict.specimen,
            failures = verdict.failures().count(),
            "variants disagree"
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string(&verdicts)?);
        return Ok(());
    }

    println!("===== Reference vs Optimized Demonstrations =====");
    for verdict in &verdicts {
        print!("{}", report::render_verdict(verdict));
    }
    println!("\nNote:");
    println!("{} indicates both variants agree (and match the expected value, if any)", report::PASS);
    println!("{} indicates a discrepancy", report::FAIL);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "demo failed");
            ExitCode::from(err.exit_code())
        }
    }
}
