//! Step-by-step animation of classic comparison sorts
//!
//! Each sort is decomposed into single mutations (swap, shift, write) and
//! exposed as a lazy iterator of full-sequence snapshots that can be cancelled
//! between any two steps. Rendering and pacing are left to the consumer.

#![forbid(unsafe_code)]

/// Run iterator, step events, cancellation and session control
pub mod engine;
/// Input parsing, pacing, progress, rendering and error handling
pub mod io;
/// The five sort strategies behind one stepping interface
pub mod strategy;

pub use engine::{
    Algorithm, CancellationToken, Mutation, RunState, Session, SortRun, StepEvent, run,
};
pub use io::error::{Result, StepsortError};
