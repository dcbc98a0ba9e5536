//! CLI entry point for the step-by-step sort animator

use clap::Parser;
use stepsort::io::cli::{Cli, RunProcessor, format_summary};
use stepsort::io::pacing::RunSummary;
use tracing_subscriber::EnvFilter;

fn main() -> stepsort::Result<()> {
    // Quiet by default so log lines do not interleave with the progress spinner
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let processor = RunProcessor::new(cli);
    let summary = processor.process()?;
    report(&summary);

    Ok(())
}

// Allow print for the sorted result, the program's primary output
#[allow(clippy::print_stdout)]
fn report(summary: &RunSummary<f64>) {
    println!("{}", format_summary(summary));
}
