//! Command-line interface for animating a sort of user-supplied numbers

use crate::engine::algorithm::Algorithm;
use crate::engine::cancel::CancellationToken;
use crate::engine::run::SortRun;
use crate::io::configuration::{
    DEFAULT_SEED, DEFAULT_STEP_DELAY_MS, MAX_RANDOM_LEN, RANDOM_VALUE_MAX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::input::{parse_sequence, random_sequence};
use crate::io::pacing::{Pacer, RunSummary};
use crate::io::progress::RunProgress;
use crate::io::visualization::BarCapture;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "stepsort")]
#[command(
    author,
    version,
    about = "Animate classic sorting algorithms one mutation at a time"
)]
/// Command-line arguments for the sort animator
pub struct Cli {
    /// Comma-separated numbers to sort, e.g. "5,3,1"
    #[arg(value_name = "VALUES", conflicts_with = "random")]
    pub values: Option<String>,

    /// Sorting algorithm to animate
    #[arg(short, long, value_enum)]
    pub algorithm: Algorithm,

    /// Generate this many random values instead of reading VALUES
    #[arg(short, long, value_name = "N")]
    pub random: Option<usize>,

    /// Random seed for reproducible input
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Delay between steps in milliseconds
    #[arg(short, long, value_name = "MS", default_value_t = DEFAULT_STEP_DELAY_MS)]
    pub delay: u64,

    /// Stop the sort after this many steps
    #[arg(short = 'x', long, value_name = "K")]
    pub stop_after: Option<usize>,

    /// Write the animation as a GIF instead of pacing in real time
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Sequence to sort, from VALUES or `--random`
    ///
    /// The parser already rejects VALUES together with `--random`; the same
    /// check applies to a `Cli` built in code.
    ///
    /// # Errors
    ///
    /// Returns an error if not exactly one source is given or `--random`
    /// exceeds the limit
    pub fn sequence(&self) -> Result<Vec<f64>> {
        match (&self.values, self.random) {
            (Some(text), None) => Ok(parse_sequence(text)),
            (None, Some(len)) if len > MAX_RANDOM_LEN => Err(invalid_parameter(
                "random",
                &len,
                &format!("at most {MAX_RANDOM_LEN} values"),
            )),
            (None, Some(len)) => Ok(random_sequence(len, RANDOM_VALUE_MAX, self.seed)),
            (Some(_), Some(_)) => Err(invalid_parameter(
                "random",
                &"VALUES",
                &"give either VALUES or --random, not both",
            )),
            (None, None) => Err(invalid_parameter(
                "values",
                &"",
                &"give comma-separated VALUES or --random N",
            )),
        }
    }

    /// Pacer for this invocation
    ///
    /// GIF export carries its own timing, so no wall-clock delay is applied
    pub fn pacer(&self) -> Pacer {
        let pacer = if self.output.is_some() {
            Pacer::immediate()
        } else {
            Pacer::new(Duration::from_millis(self.delay))
        };
        pacer.with_stop_after(self.stop_after)
    }
}

/// Orchestrates one animated sort with optional progress and export
pub struct RunProcessor {
    cli: Cli,
}

impl RunProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the sort described by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid or the animation cannot be written
    pub fn process(&self) -> Result<RunSummary<f64>> {
        let sequence = self.cli.sequence()?;
        let algorithm = self.cli.algorithm;
        tracing::info!(%algorithm, len = sequence.len(), "starting sort");

        let progress = self
            .cli
            .should_show_progress()
            .then(|| RunProgress::start(algorithm, sequence.len()));

        let mut capture = self.cli.output.as_ref().map(|_| {
            let mut frames = BarCapture::new(sequence.len() * sequence.len());
            frames.record_snapshot(&sequence, Vec::new());
            frames
        });

        let run = SortRun::new(sequence, algorithm, CancellationToken::new());
        let summary = self.cli.pacer().drive(run, |event| {
            if let Some(ref pm) = progress {
                pm.record_step(event.step, event.mutation);
            }
            if let Some(ref mut capture) = capture {
                capture.record_step(event);
            }
        });

        if let Some(ref pm) = progress {
            pm.finish(summary.state, summary.steps);
        }

        if let (Some(path), Some(capture)) = (&self.cli.output, &capture) {
            let delay_ms = u32::try_from(self.cli.delay).unwrap_or(u32::MAX);
            capture.export_gif(path, delay_ms)?;
        }

        tracing::info!(state = ?summary.state, steps = summary.steps, "sort finished");
        Ok(summary)
    }
}

/// Human-readable line for the final sequence of a run
pub fn format_summary(summary: &RunSummary<f64>) -> String {
    let values = summary
        .final_sequence
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{:?} after {} steps: [{values}]", summary.state, summary.steps)
}
