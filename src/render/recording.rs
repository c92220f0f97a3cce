//! Surface that records draw calls instead of rasterizing them

use crate::render::surface::{DrawingSurface, LineStyle};
use crate::spatial::geometry::{Point, Rect, Size};
use image::RgbaImage;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Surface was reallocated
    Resize(Size),
    /// Surface was erased
    Clear,
    /// Image region was copied
    DrawImage {
        /// Region of the source image
        source: Rect,
        /// Top-left corner on the surface
        destination: Point,
    },
    /// Line segment was stroked
    StrokeLine {
        /// Segment start
        from: Point,
        /// Segment end
        to: Point,
        /// Stroke style
        style: LineStyle,
    },
}

/// Records every draw call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording surface
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands since creation or the last [`Self::take_commands`]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands issued since the most recent clear, including the clear
    ///
    /// This is the draw list of the latest full frame.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|command| *command == DrawCommand::Clear)
            .unwrap_or(0);
        self.commands.get(start..).unwrap_or(&[])
    }

    /// Number of full frames drawn so far
    pub fn frame_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| **command == DrawCommand::Clear)
            .count()
    }
}

impl DrawingSurface for RecordingSurface {
    fn resize(&mut self, size: Size) {
        self.size = size;
        self.commands.push(DrawCommand::Resize(size));
    }

    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_image(&mut self, _image: &RgbaImage, source: Rect, destination: Point) {
        self.commands.push(DrawCommand::DrawImage {
            source,
            destination,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: LineStyle) {
        self.commands.push(DrawCommand::StrokeLine { from, to, style });
    }
}
