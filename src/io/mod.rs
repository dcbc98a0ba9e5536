/// Command-line parsing and run orchestration
pub mod cli;
/// Presentation constants and defaults
pub mod configuration;
/// Error types for the outer surfaces
pub mod error;
/// Conversion of free text into numeric sequences
pub mod input;
/// Delay-paced driving of a run
pub mod pacing;
/// Terminal progress reporting
pub mod progress;
/// Bar rendering and GIF export
pub mod visualization;
