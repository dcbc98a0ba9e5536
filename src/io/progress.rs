//! Terminal progress display for a running sort

use crate::engine::algorithm::Algorithm;
use crate::engine::step::{Mutation, RunState};
use crate::io::configuration::PROGRESS_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix} [{elapsed_precise}] step {pos} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner that reports the step count and latest mutation of one run
///
/// The total number of steps depends on the data, so no length is set.
pub struct RunProgress {
    bar: ProgressBar,
}

impl RunProgress {
    /// Begin reporting a run of `algorithm` over `len` values
    pub fn start(algorithm: Algorithm, len: usize) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(STEP_STYLE.clone());
        bar.set_prefix(format!("{algorithm} ({len} values)"));
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self { bar }
    }

    /// Report the event numbered `step`
    pub fn record_step(&self, step: usize, mutation: Mutation) {
        self.bar.set_position(step as u64);
        self.bar.set_message(describe(mutation));
    }

    /// Steps reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Replace the spinner with the terminal state of the run
    pub fn finish(&self, state: RunState, steps: usize) {
        let outcome = match state {
            RunState::Cancelled => "stopped",
            RunState::Completed => "sorted",
            RunState::Idle | RunState::Running => "unfinished",
        };
        self.bar
            .finish_with_message(format!("{outcome} after {steps} steps"));
    }
}

/// Short label for a mutation, shown beside the step counter
pub fn describe(mutation: Mutation) -> String {
    match mutation {
        Mutation::Swap { a, b } => format!("swap {a}<->{b}"),
        Mutation::Shift { from, to } => format!("shift {from}->{to}"),
        Mutation::Overwrite { index } => format!("write {index}"),
        Mutation::MergeWrite { index, from } => format!("merge {from}->{index}"),
    }
}
