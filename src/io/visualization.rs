//! Bar-chart frame capture and GIF generation for sort visualization

use crate::engine::step::StepEvent;
use crate::io::configuration::{
    BACKGROUND_COLOR, BAR_COLOR, BAR_GAP, BAR_HEIGHT_SCALE, BAR_WIDTH, FINAL_FRAME_HOLD,
    HIGHLIGHT_COLOR, MAX_CANVAS_HEIGHT, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{Result, StepsortError};
use image::{Frame, Rgba, RgbaImage};
use num_traits::ToPrimitive;
use std::path::Path;

/// One captured sequence state
#[derive(Debug, Clone, PartialEq)]
pub struct BarFrame {
    /// Bar values; non-finite or unrepresentable values render as zero height
    pub values: Vec<f64>,
    /// Indices drawn in the highlight colour
    pub highlighted: Vec<usize>,
}

/// Captures sequence snapshots for rendering as bars
///
/// Records the frames during a run so the whole animation can be encoded
/// afterwards with a single canvas size.
#[derive(Debug, Clone, Default)]
pub struct BarCapture {
    frames: Vec<BarFrame>,
}

impl BarCapture {
    /// Empty capture with room for `capacity` frames
    pub fn new(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
        }
    }

    /// Records an arbitrary snapshot
    pub fn record_snapshot<T: ToPrimitive>(&mut self, values: &[T], highlighted: Vec<usize>) {
        let values = values
            .iter()
            .map(|value| value.to_f64().filter(|v| v.is_finite()).unwrap_or(0.0))
            .collect();
        self.frames.push(BarFrame {
            values,
            highlighted,
        });
    }

    /// Records a step event with its mutated indices highlighted
    pub fn record_step<T: ToPrimitive>(&mut self, event: &StepEvent<T>) {
        self.record_snapshot(&event.snapshot, event.highlighted());
    }

    /// All frames captured so far
    pub fn frames(&self) -> &[BarFrame] {
        &self.frames
    }

    /// Returns the total number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Canvas size (width, height) shared by every frame
    pub fn canvas_size(&self) -> (u32, u32) {
        let bars = self
            .frames
            .iter()
            .map(|frame| frame.values.len())
            .max()
            .unwrap_or(0) as u32;
        let width = (bars * (BAR_WIDTH + 2 * BAR_GAP)).max(1);

        let height = (self.max_value() * self.height_scale()).ceil() as u32;
        (width, height.clamp(1, MAX_CANVAS_HEIGHT))
    }

    /// Export the captured frames as a GIF
    ///
    /// Frames are skipped when `frame_delay_ms` is below what viewers can
    /// display, keeping the apparent speed. The final frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(StepsortError::NoFrames);
        }

        let requested_ms = frame_delay_ms.max(1);
        let effective_delay_ms = requested_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if requested_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(requested_ms) as usize
        } else {
            1
        };

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StepsortError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| StepsortError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(self.frame_stream(effective_delay_ms, skip_factor))
            .map_err(|e| StepsortError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        tracing::info!(
            path = %output_path.display(),
            frames = self.frames.len(),
            delay_ms = effective_delay_ms,
            "animation exported"
        );

        Ok(())
    }

    fn max_value(&self) -> f64 {
        self.frames
            .iter()
            .flat_map(|frame| frame.values.iter().copied())
            .fold(0.0, f64::max)
    }

    // Scaled down so the tallest bar fits the canvas limit
    fn height_scale(&self) -> f64 {
        let max = self.max_value();
        if max * BAR_HEIGHT_SCALE > f64::from(MAX_CANVAS_HEIGHT) {
            f64::from(MAX_CANVAS_HEIGHT) / max
        } else {
            BAR_HEIGHT_SCALE
        }
    }

    // Rendered one at a time as the encoder pulls them; only the captured
    // values stay resident
    fn frame_stream(
        &self,
        delay_ms: u32,
        skip_factor: usize,
    ) -> impl Iterator<Item = Frame> + '_ {
        let (width, height) = self.canvas_size();
        let scale = self.height_scale();
        let last_index = self.frames.len().saturating_sub(1);
        let hold_ms = delay_ms.saturating_mul(FINAL_FRAME_HOLD);

        // The first and last states are always kept
        let kept = self
            .frames
            .iter()
            .enumerate()
            .filter(move |&(index, _)| index % skip_factor == 0 || index == last_index)
            .map(move |(_, frame)| render_frame(frame, width, height, scale, delay_ms));

        let hold = self
            .frames
            .last()
            .into_iter()
            .map(move |frame| render_frame(frame, width, height, scale, hold_ms));

        kept.chain(hold)
    }
}

fn render_frame(frame: &BarFrame, width: u32, height: u32, scale: f64, delay_ms: u32) -> Frame {
    let mut img = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR));

    for (bar, &value) in frame.values.iter().enumerate() {
        let bar_height = ((value.max(0.0) * scale).round() as u32).min(height);
        let color = if frame.highlighted.contains(&bar) {
            Rgba(HIGHLIGHT_COLOR)
        } else {
            Rgba(BAR_COLOR)
        };

        let left = bar as u32 * (BAR_WIDTH + 2 * BAR_GAP) + BAR_GAP;
        for x in left..(left + BAR_WIDTH).min(width) {
            for y in (height - bar_height)..height {
                img.put_pixel(x, y, color);
            }
        }
    }

    Frame::from_parts(img, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
}
