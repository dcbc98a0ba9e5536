//! Submit / start / stop / reset controller over a displayed sequence
//!
//! Mirrors the controls a front end exposes: free-text input parsed on
//! submit, one run at a time, a stop that leaves the array as last seen, and a
//! reset that discards the run and re-parses the input.

use crate::engine::algorithm::Algorithm;
use crate::engine::cancel::CancellationToken;
use crate::engine::run::SortRun;
use crate::engine::step::{RunState, StepEvent};
use crate::io::error::{Result, StepsortError};
use crate::io::input::parse_sequence;

/// Front-end state for one visualizer
#[derive(Debug, Default)]
pub struct Session {
    input: String,
    array: Vec<f64>,
    description: &'static str,
    active: Option<(SortRun<f64>, CancellationToken)>,
    last_state: RunState,
}

impl Session {
    /// Empty input, empty array, nothing running
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the raw input text without parsing it
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Raw input text as last set
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Parse the input into the displayed array
    ///
    /// # Errors
    ///
    /// Returns [`StepsortError::SessionBusy`] while a sort is running
    pub fn submit(&mut self) -> Result<()> {
        self.ensure_idle("submit")?;
        self.array = parse_sequence(&self.input);
        Ok(())
    }

    /// Begin sorting a copy of the displayed array
    ///
    /// # Errors
    ///
    /// Returns [`StepsortError::SessionBusy`] while a sort is running
    pub fn start(&mut self, algorithm: Algorithm) -> Result<()> {
        self.ensure_idle("start")?;
        let token = CancellationToken::new();
        let run = SortRun::new(self.array.clone(), algorithm, token.clone());
        self.description = algorithm.description();
        self.last_state = RunState::Running;
        self.active = Some((run, token));
        Ok(())
    }

    /// Pull the next step of the active run into the displayed array
    ///
    /// Returns `None` when idle. The session is idle again as soon as the run
    /// emits its final step.
    pub fn tick(&mut self) -> Option<StepEvent<f64>> {
        let (run, _) = self.active.as_mut()?;

        let event = run.next();
        if let Some(ref event) = event {
            self.array.clone_from(&event.snapshot);
        }

        if event.is_none() || run.state().is_terminal() {
            self.settle();
        }
        event
    }

    /// Cancel the active run, keeping the array as last observed
    pub fn stop(&mut self) {
        if let Some((_, token)) = &self.active {
            token.cancel();
        }
        self.settle();
    }

    /// Discard any run, clear the description, and re-parse the input
    pub fn reset(&mut self) {
        self.stop();
        self.description = "";
        self.last_state = RunState::Idle;
        self.array = parse_sequence(&self.input);
    }

    /// Sequence currently on display
    pub fn array(&self) -> &[f64] {
        &self.array
    }

    /// Description of the most recently started algorithm, empty after reset
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Whether a run is in progress
    pub const fn is_sorting(&self) -> bool {
        self.active.is_some()
    }

    /// State of the current run, or the terminal state of the last one
    pub const fn last_state(&self) -> RunState {
        self.last_state
    }

    fn ensure_idle(&self, action: &'static str) -> Result<()> {
        if self.is_sorting() {
            Err(StepsortError::SessionBusy { action })
        } else {
            Ok(())
        }
    }

    // Drain a run whose token is set or whose strategy is exhausted
    fn settle(&mut self) {
        if let Some((mut run, _)) = self.active.take() {
            while run.next().is_some() {}
            self.last_state = run.state();
            self.array = run.into_sequence();
        }
    }
}
