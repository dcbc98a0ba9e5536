//! Lazy, cancelable stream of intermediate sequence snapshots

use crate::engine::algorithm::Algorithm;
use crate::engine::cancel::CancellationToken;
use crate::engine::step::{RunState, StepEvent};
use crate::strategy::{self, Strategy};
use std::fmt;
use std::iter::FusedIterator;

/// One sort of one sequence, consumed one [`StepEvent`] at a time
///
/// The run owns its working buffer; every event carries an independent copy.
/// The cancellation token is polled before each mutation, so after a stop the
/// last emitted snapshot is also the final observable state. The run is
/// already [`RunState::Completed`] once its final event is returned, and a
/// later cancel leaves it so. A run never restarts: once it reports a
/// terminal [`RunState`] it yields nothing more.
pub struct SortRun<T> {
    initial: Vec<T>,
    working: Vec<T>,
    algorithm: Algorithm,
    strategy: Box<dyn Strategy<T>>,
    token: CancellationToken,
    state: RunState,
    steps: usize,
}

/// Start a run over `initial`, stoppable through `token`
pub fn run<T: PartialOrd + Clone>(
    initial: Vec<T>,
    algorithm: Algorithm,
    token: CancellationToken,
) -> SortRun<T> {
    SortRun::new(initial, algorithm, token)
}

impl<T: PartialOrd + Clone> SortRun<T> {
    /// Prepare a run in the [`RunState::Idle`] state
    pub fn new(initial: Vec<T>, algorithm: Algorithm, token: CancellationToken) -> Self {
        let strategy = strategy::for_algorithm(algorithm, initial.len());
        Self {
            working: initial.clone(),
            initial,
            algorithm,
            strategy,
            token,
            state: RunState::Idle,
            steps: 0,
        }
    }

    /// Drain the run, returning its terminal state and final sequence
    pub fn finish(mut self) -> (RunState, Vec<T>) {
        while self.next().is_some() {}
        (self.state, self.working)
    }
}

impl<T> SortRun<T> {
    /// Sequence the run started from
    pub fn initial(&self) -> &[T] {
        &self.initial
    }

    /// Working buffer as of the last emitted step
    pub fn current(&self) -> &[T] {
        &self.working
    }

    /// Consume the run, keeping its working buffer
    pub fn into_sequence(self) -> Vec<T> {
        self.working
    }

    /// Algorithm driving this run
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Current lifecycle state
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Number of events emitted so far
    pub const fn steps_emitted(&self) -> usize {
        self.steps
    }

    /// Token this run polls for cancellation
    pub const fn token(&self) -> &CancellationToken {
        &self.token
    }

    fn terminate(&mut self, state: RunState) {
        self.state = state;
        tracing::debug!(
            algorithm = %self.algorithm,
            steps = self.steps,
            ?state,
            "sort run finished"
        );
    }
}

impl<T: Clone> Iterator for SortRun<T> {
    type Item = StepEvent<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            RunState::Cancelled | RunState::Completed => return None,
            RunState::Idle => {
                self.state = RunState::Running;
                tracing::debug!(
                    algorithm = %self.algorithm,
                    len = self.working.len(),
                    "sort run started"
                );
            }
            RunState::Running => {}
        }

        if self.token.is_cancelled() {
            self.terminate(RunState::Cancelled);
            return None;
        }

        let Some(mutation) = self.strategy.advance(&mut self.working) else {
            self.terminate(RunState::Completed);
            return None;
        };

        self.steps += 1;
        if self.strategy.is_finished(&self.working) {
            self.terminate(RunState::Completed);
        }

        Some(StepEvent {
            step: self.steps,
            snapshot: self.working.clone(),
            mutation,
        })
    }
}

impl<T: Clone> FusedIterator for SortRun<T> {}

impl<T: fmt::Debug> fmt::Debug for SortRun<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortRun")
            .field("algorithm", &self.algorithm)
            .field("state", &self.state)
            .field("steps", &self.steps)
            .field("working", &self.working)
            .finish_non_exhaustive()
    }
}
