//! Benchmark binary: time reference vs optimized for every specimen
//!
//! Prints one line per specimen, or the full reports as JSON with `--json`.

use clap::Parser;
use specimen_bench::config::ConfigArgs;
use specimen_bench::{logging, report, Catalogue, HarnessError, ProfileReport};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "benchmark", about = "Compare reference and optimized variants by wall-clock time")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Only profile this specimen
    #[arg(long)]
    specimen: Option<String>,

    /// Emit JSON instead of the text table
    #[arg(long)]
    json: bool,

    /// Debug-level logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<(), HarnessError> {
    let config = cli.config.resolve()?;
    let catalogue = Catalogue::standard(&config)?;

    let mut reports: Vec<ProfileReport> = Vec::new();
    for specimen in catalogue.select(cli.specimen.as_deref())? {
        let iterations = config.iterations_for(specimen.category());
        tracing::info!(specimen = specimen.name(), iterations, "profiling");
        reports.push(specimen.profile(iterations));
    }

    if cli.json {
        println!("{}", serde_json::to_string(&reports)?);
        return Ok(());
    }

    println!(
        "\nBenchmark Results (Iterations: {}, Array Size: {})",
        config.iterations, config.array_size
    );
    println!("{}", "-".repeat(48));
    for profile in &reports {
        println!("{}", report::render_profile(profile));
    }
    println!("\nNote:");
    println!("- Times are total nanoseconds for all iterations");
    println!("- strrev and array operations use fewer iterations due to higher overhead");
    println!("- Positive percentage means optimized is slower, negative means faster");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "benchmark failed");
            ExitCode::from(err.exit_code())
        }
    }
}
