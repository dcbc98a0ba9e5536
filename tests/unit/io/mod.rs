pub mod input;
pub mod pacing;
