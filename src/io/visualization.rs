//! Frame capture and GIF generation for puzzle sessions
//!
//! Frames are stored as tile position snapshots and only rasterized while the
//! GIF is being encoded, one frame at a time.

use crate::io::configuration::{SURFACE_BACKGROUND, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{PuzzleError, Result};
use crate::io::image::ensure_parent_dir;
use crate::puzzle::board::Board;
use crate::puzzle::tile::Tile;
use crate::render::painter::{Painter, RenderStyle};
use crate::render::raster::RasterSurface;
use crate::spatial::geometry::Point;
use image::{Delay, Frame};
use std::path::Path;

/// Captures the tile layout after each repaint of a session
///
/// Once `max_frames` is reached, further snapshots replace the last one so
/// the final board state is always kept.
pub struct FrameCapture {
    snapshots: Vec<Vec<Point>>,
    max_frames: usize,
    overflow: usize,
}

impl FrameCapture {
    /// Create an empty capture holding at most `max_frames` frames
    pub fn new(max_frames: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            max_frames: max_frames.max(1),
            overflow: 0,
        }
    }

    /// Record the current tile positions of `board`
    pub fn record(&mut self, board: &Board) {
        let positions: Vec<Point> = board.tiles().iter().map(Tile::position).collect();
        if self.snapshots.len() < self.max_frames {
            self.snapshots.push(positions);
        } else if let Some(last) = self.snapshots.last_mut() {
            *last = positions;
            self.overflow += 1;
        }
    }

    /// Number of frames held
    pub const fn frame_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Number of frames that were folded into the last slot
    pub const fn overflow_count(&self) -> usize {
        self.overflow
    }

    /// Render the captured frames of `board` and export them as a GIF
    ///
    /// Frames are skipped if the requested delay is shorter than viewers
    /// reliably support, keeping apparent speed. The last frame is held
    /// longer so the final board stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        board: &Board,
        style: RenderStyle,
        output_path: &Path,
        frame_delay_ms: u32,
    ) -> Result<()> {
        if self.snapshots.is_empty() {
            return Err(PuzzleError::InvalidParameter {
                parameter: "frames",
                value: "0".to_string(),
                reason: "no frames captured for visualization".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        ensure_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|e| PuzzleError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let last_index = self.snapshots.len() - 1;
        let painter = Painter::new(style);
        let mut scratch = board.clone();
        let frames = self
            .snapshots
            .iter()
            .enumerate()
            .filter(|(index, _)| index % skip_factor == 0 || *index == last_index)
            .map(|(index, positions)| {
                scratch.restore_positions(positions);
                let mut surface = RasterSurface::new(SURFACE_BACKGROUND);
                Painter::prepare(&scratch, &mut surface);
                painter.paint(&scratch, &mut surface);

                // Final frame displays longer for better visibility
                let delay = if index == last_index {
                    delay_ms * 25
                } else {
                    delay_ms
                };
                Frame::from_parts(
                    surface.into_image(),
                    0,
                    0,
                    Delay::from_numer_denom_ms(delay, 1),
                )
            });

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| PuzzleError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
