//! Presentation constants and runtime configuration defaults

// Pacing
/// Delay between steps when pacing a run in real time
pub const DEFAULT_STEP_DELAY_MS: u64 = 100;

// Default values for configurable parameters
/// Fixed seed for reproducible random input
pub const DEFAULT_SEED: u64 = 42;
/// Largest value produced for random input
pub const RANDOM_VALUE_MAX: u32 = 100;
// Keeps `--random` runs of the quadratic sorts within a watchable frame count
/// Maximum number of values accepted for random input
pub const MAX_RANDOM_LEN: usize = 500;

// Bar geometry
/// Pixels of bar height per unit of value
pub const BAR_HEIGHT_SCALE: f64 = 3.0;
/// Width of each bar in pixels
pub const BAR_WIDTH: u32 = 20;
/// Horizontal margin on each side of a bar in pixels
pub const BAR_GAP: u32 = 2;
/// Tallest canvas before heights are scaled down to fit
pub const MAX_CANVAS_HEIGHT: u32 = 600;

// Colours
/// Fill for bars not touched by the current step
pub const BAR_COLOR: [u8; 4] = [0, 128, 128, 255];
/// Fill for bars touched by the current step
pub const HIGHLIGHT_COLOR: [u8; 4] = [255, 140, 0, 255];
/// Canvas background
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];

// Output settings
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Multiple of the frame delay the final frame is held for
pub const FINAL_FRAME_HOLD: u32 = 25;

// Progress display settings
/// Spinner redraw interval
pub const PROGRESS_TICK_MS: u64 = 80;
