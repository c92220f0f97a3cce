//! Board geometry: piece size, surface halves, slot coordinates and grid lines
//!
//! The drawing surface is twice as tall as the board. The top half shows the
//! reference image; the bottom half is the staging area where shuffled tiles
//! start out. Correct positions live in the top half, so a finished puzzle
//! covers the reference image exactly.

use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::spatial::geometry::{Point, Rect, Size};
use clap::ValueEnum;
use tracing::warn;

/// How to handle images whose size is not a multiple of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DivisionPolicy {
    /// Floor the piece size and ignore the leftover right/bottom margin
    #[default]
    Crop,
    /// Fail board construction
    Reject,
}

/// Grid dimensions in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    /// Number of tile columns
    pub columns: u32,
    /// Number of tile rows
    pub rows: u32,
}

impl GridDimensions {
    /// Create grid dimensions
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Total number of tiles
    pub const fn tile_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Derived geometry for one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    grid: GridDimensions,
    piece: Size,
    image: Size,
}

impl BoardLayout {
    /// Compute the layout for an image cut into `grid`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either grid dimension is zero
    /// - The image is smaller than one pixel per tile on either axis
    /// - The image does not divide evenly and `policy` is [`DivisionPolicy::Reject`]
    pub fn new(image: Size, grid: GridDimensions, policy: DivisionPolicy) -> Result<Self> {
        if grid.columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &grid.columns,
                &"must be at least 1",
            ));
        }
        if grid.rows == 0 {
            return Err(invalid_parameter("rows", &grid.rows, &"must be at least 1"));
        }

        let piece = Size::new(image.width / grid.columns, image.height / grid.rows);
        if piece.is_empty() {
            return Err(invalid_parameter(
                "grid",
                &format!("{}x{}", grid.columns, grid.rows),
                &format!("image of {image} is too small for this grid"),
            ));
        }

        let uneven = image.width % grid.columns != 0 || image.height % grid.rows != 0;
        if uneven {
            match policy {
                DivisionPolicy::Reject => {
                    return Err(PuzzleError::UnevenGrid {
                        image: (image.width, image.height),
                        grid: (grid.columns, grid.rows),
                    });
                }
                DivisionPolicy::Crop => {
                    warn!(
                        image = %image,
                        columns = grid.columns,
                        rows = grid.rows,
                        piece = %piece,
                        "image does not divide evenly, cropping right and bottom margin"
                    );
                }
            }
        }

        Ok(Self { grid, piece, image })
    }

    /// Grid dimensions in tiles
    pub const fn grid(&self) -> GridDimensions {
        self.grid
    }

    /// Size shared by every tile
    pub const fn piece_size(&self) -> Size {
        self.piece
    }

    /// Size of the source image the layout was computed for
    pub const fn image_size(&self) -> Size {
        self.image
    }

    /// Area of the source image covered by tiles
    pub const fn board_size(&self) -> Size {
        Size::new(
            self.piece.width * self.grid.columns,
            self.piece.height * self.grid.rows,
        )
    }

    /// Full drawing surface: reference half on top of staging half
    pub const fn surface_size(&self) -> Size {
        let board = self.board_size();
        Size::new(board.width, board.height * 2)
    }

    /// First row of pixels belonging to the staging area
    pub const fn staging_top(&self) -> i32 {
        self.board_size().height as i32
    }

    /// The whole drawing surface
    pub const fn surface_region(&self) -> Rect {
        Rect::new(Point::ORIGIN, self.surface_size())
    }

    /// Region showing the reference image
    pub const fn reference_region(&self) -> Rect {
        Rect::new(Point::ORIGIN, self.board_size())
    }

    /// Region holding the shuffled tiles at start
    pub const fn staging_region(&self) -> Rect {
        Rect::new(Point::new(0, self.staging_top()), self.board_size())
    }

    /// True when a vertical coordinate falls in the reference half
    pub const fn is_in_reference(&self, y: i32) -> bool {
        y < self.staging_top()
    }

    /// Number of slots in each half
    pub const fn slot_count(&self) -> usize {
        self.grid.tile_count()
    }

    /// Top-left corner of the reference cell at `(row, col)`
    pub const fn correct_position(&self, row: u32, col: u32) -> Point {
        Point::new(
            (col * self.piece.width) as i32,
            (row * self.piece.height) as i32,
        )
    }

    /// Top-left corner of the `index`-th staging slot in row-major order
    pub const fn staging_slot(&self, index: usize) -> Point {
        let columns = self.grid.columns as usize;
        let col = (index % columns) as u32;
        let row = (index / columns) as u32;
        let cell = self.correct_position(row, col);
        Point::new(cell.x, cell.y + self.staging_top())
    }

    /// Grid line segments covering both halves
    ///
    /// Vertical lines sit on every interior column boundary and span the
    /// full surface height. Horizontal lines sit on every interior row
    /// boundary of both halves, including the line between them.
    pub fn grid_lines(&self) -> Vec<(Point, Point)> {
        let surface = self.surface_size();
        let bottom = surface.height as i32;
        let right = surface.width as i32;
        let mut lines = Vec::new();

        for col in 1..self.grid.columns {
            let x = (col * self.piece.width) as i32;
            lines.push((Point::new(x, 0), Point::new(x, bottom)));
        }

        for row in 1..self.grid.rows * 2 {
            let y = (row * self.piece.height) as i32;
            lines.push((Point::new(0, y), Point::new(right, y)));
        }

        lines
    }
}
