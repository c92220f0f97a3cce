//! Drawing surface abstraction the board renders onto

use crate::spatial::geometry::{Point, Rect, Size};
use image::RgbaImage;

/// Stroke color and thickness for line drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineStyle {
    /// Straight RGBA color
    pub color: [u8; 4],
    /// Thickness in pixels, centered on the line
    pub width: u32,
}

impl LineStyle {
    /// Create a line style
    pub const fn new(color: [u8; 4], width: u32) -> Self {
        Self { color, width }
    }
}

/// A 2-D canvas the painter issues draw calls against
///
/// Implementations decide how calls are realized, such as rasterizing into
/// an image or recording them for inspection.
pub trait DrawingSurface {
    /// Reallocate the surface at a new size
    fn resize(&mut self, size: Size);

    /// Current surface size
    fn size(&self) -> Size;

    /// Erase the whole surface to its background
    fn clear(&mut self);

    /// Copy the `source` rectangle of `image` with its top-left at `destination`
    fn draw_image(&mut self, image: &RgbaImage, source: Rect, destination: Point);

    /// Stroke a straight line segment
    fn stroke_line(&mut self, from: Point, to: Point, style: LineStyle);
}
