//! Sort stepper engine: a cancelable, lazy stream of intermediate permutations
//!
//! This module contains:
//! - The algorithm selector and its description text
//! - Step events, mutations and run states
//! - The run iterator and its cancellation token
//! - A session controller for front ends

/// Algorithm selector
pub mod algorithm;
/// Cooperative cancellation
pub mod cancel;
/// Lazy step iterator over one sort
pub mod run;
/// Submit / start / stop / reset lifecycle
pub mod session;
/// Step events and run states
pub mod step;

pub use algorithm::Algorithm;
pub use cancel::CancellationToken;
pub use run::{SortRun, run};
pub use session::Session;
pub use step::{Mutation, RunState, StepEvent};
