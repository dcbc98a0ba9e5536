//! Host-side scheduler that paces consumption of a run

use crate::engine::run::SortRun;
use crate::engine::step::{RunState, StepEvent};
use std::time::Duration;

/// Outcome of driving a run to a terminal state
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary<T> {
    /// Terminal state reached
    pub state: RunState,
    /// Number of events delivered to the consumer
    pub steps: usize,
    /// Sequence as of the last delivered event
    pub final_sequence: Vec<T>,
}

/// Pulls steps from a run with a fixed delay between them
///
/// The delay is slept before every pull after the first, so consumers see
/// one event per interval, and never after the final event. With
/// `stop_after` set the run's token is signalled once that many events have
/// been delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    delay: Duration,
    stop_after: Option<usize>,
}

impl Pacer {
    /// Pace with `delay` between steps
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            stop_after: None,
        }
    }

    /// Pace without sleeping
    pub const fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Cancel the run after `steps` events
    #[must_use]
    pub const fn with_stop_after(mut self, steps: Option<usize>) -> Self {
        self.stop_after = steps;
        self
    }

    /// Delay slept between steps
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Drive `run` until it stops, handing each event to `on_step`
    pub fn drive<T, F>(&self, mut run: SortRun<T>, mut on_step: F) -> RunSummary<T>
    where
        T: PartialOrd + Clone,
        F: FnMut(&StepEvent<T>),
    {
        tracing::info!(
            algorithm = %run.algorithm(),
            delay_ms = self.delay.as_millis(),
            stop_after = ?self.stop_after,
            "pacing sort run"
        );

        while !run.state().is_terminal() {
            let delivered = run.steps_emitted();
            if self.stop_after.is_some_and(|limit| delivered >= limit) {
                run.token().cancel();
            } else if delivered > 0 && !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }

            if let Some(event) = run.next() {
                on_step(&event);
            }
        }

        RunSummary {
            state: run.state(),
            steps: run.steps_emitted(),
            final_sequence: run.into_sequence(),
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::io::configuration::DEFAULT_STEP_DELAY_MS,
        ))
    }
}
