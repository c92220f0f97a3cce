//! Full-frame rendering of a board onto a drawing surface

use crate::io::configuration::{GRID_LINE_COLOR, GRID_LINE_WIDTH};
use crate::puzzle::board::Board;
use crate::render::surface::{DrawingSurface, LineStyle};
use crate::spatial::geometry::{Point, Rect};

/// Visual options for board rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    /// Style of the grid overlay
    pub grid: LineStyle,
    /// Whether the reference image is drawn in the top half
    pub show_reference: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid: LineStyle::new(GRID_LINE_COLOR, GRID_LINE_WIDTH),
            show_reference: true,
        }
    }
}

/// Draws complete frames; every call repaints the whole surface
#[derive(Debug, Clone, Copy, Default)]
pub struct Painter {
    style: RenderStyle,
}

impl Painter {
    /// Create a painter with the given style
    pub const fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    /// Active style
    pub const fn style(&self) -> RenderStyle {
        self.style
    }

    /// Size the surface for `board`
    pub fn prepare<S: DrawingSurface + ?Sized>(board: &Board, surface: &mut S) {
        surface.resize(board.layout().surface_size());
    }

    /// Paint one frame: reference image, tiles in sequence order, grid overlay
    ///
    /// The output depends only on the board, so painting an unchanged board
    /// twice issues the same draw calls.
    pub fn paint<S: DrawingSurface + ?Sized>(&self, board: &Board, surface: &mut S) {
        let layout = board.layout();
        let source = board.source_image();

        surface.clear();

        if self.style.show_reference {
            surface.draw_image(
                source,
                Rect::new(Point::ORIGIN, layout.board_size()),
                Point::ORIGIN,
            );
        }

        for tile in board.tiles() {
            surface.draw_image(source, tile.source_rect(), tile.position());
        }

        for (from, to) in layout.grid_lines() {
            surface.stroke_line(from, to, self.style.grid);
        }
    }
}
