//! Image-backed drawing surface with clipping and alpha blending

use crate::render::surface::{DrawingSurface, LineStyle};
use crate::spatial::geometry::{Point, Rect, Size};
use image::{Pixel, Rgba, RgbaImage};

/// Rasterizes draw calls into an RGBA image
#[derive(Debug, Clone)]
pub struct RasterSurface {
    canvas: RgbaImage,
    background: Rgba<u8>,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new([0, 0, 0, 0])
    }
}

impl RasterSurface {
    /// Create an empty surface that clears to `background`
    pub fn new(background: [u8; 4]) -> Self {
        Self {
            canvas: RgbaImage::new(0, 0),
            background: Rgba(background),
        }
    }

    /// Rendered pixels
    pub const fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Consume the surface, returning its pixels
    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    // Blend a color over the half-open pixel range, clipped to the canvas
    fn blend_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba<u8>) {
        let width = i64::from(self.canvas.width());
        let height = i64::from(self.canvas.height());
        for y in y0.max(0)..y1.min(height) {
            for x in x0.max(0)..x1.min(width) {
                if let Some(pixel) = self.canvas.get_pixel_mut_checked(x as u32, y as u32) {
                    composite(pixel, color);
                }
            }
        }
    }
}

impl DrawingSurface for RasterSurface {
    fn resize(&mut self, size: Size) {
        self.canvas = RgbaImage::from_pixel(size.width, size.height, self.background);
    }

    fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    fn clear(&mut self) {
        let background = self.background;
        for pixel in self.canvas.pixels_mut() {
            *pixel = background;
        }
    }

    fn draw_image(&mut self, image: &RgbaImage, source: Rect, destination: Point) {
        for dy in 0..source.size.height {
            for dx in 0..source.size.width {
                let src_x = i64::from(source.origin.x) + i64::from(dx);
                let src_y = i64::from(source.origin.y) + i64::from(dy);
                let dst_x = i64::from(destination.x) + i64::from(dx);
                let dst_y = i64::from(destination.y) + i64::from(dy);

                let (Ok(src_x), Ok(src_y), Ok(dst_x), Ok(dst_y)) = (
                    u32::try_from(src_x),
                    u32::try_from(src_y),
                    u32::try_from(dst_x),
                    u32::try_from(dst_y),
                ) else {
                    continue;
                };

                let Some(&color) = image.get_pixel_checked(src_x, src_y) else {
                    continue;
                };
                if let Some(pixel) = self.canvas.get_pixel_mut_checked(dst_x, dst_y) {
                    composite(pixel, color);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: LineStyle) {
        if style.width == 0 {
            return;
        }
        let color = Rgba(style.color);
        let width = i64::from(style.width);
        let half = width / 2;

        if from.x == to.x {
            let x = i64::from(from.x) - half;
            let (top, bottom) = (from.y.min(to.y), from.y.max(to.y));
            self.blend_rect(x, i64::from(top), x + width, i64::from(bottom), color);
        } else if from.y == to.y {
            let y = i64::from(from.y) - half;
            let (left, right) = (from.x.min(to.x), from.x.max(to.x));
            self.blend_rect(i64::from(left), y, i64::from(right), y + width, color);
        } else {
            // Stamp a square brush along the segment
            let dx = i64::from(to.x) - i64::from(from.x);
            let dy = i64::from(to.y) - i64::from(from.y);
            let steps = dx.abs().max(dy.abs());
            for step in 0..=steps {
                let x = i64::from(from.x) + dx * step / steps - half;
                let y = i64::from(from.y) + dy * step / steps - half;
                self.blend_rect(x, y, x + width, y + width, color);
            }
        }
    }
}

// Source-over compositing; opaque and fully transparent sources skip the blend math
fn composite(destination: &mut Rgba<u8>, source: Rgba<u8>) {
    match source.0[3] {
        0 => {}
        u8::MAX => *destination = source,
        _ => destination.blend(&source),
    }
}
