//! A single draggable slice of the source image

use crate::spatial::geometry::{Point, Rect, Size};
use std::fmt;

/// Grid coordinates of the cell a tile was cut from
///
/// Fixed at creation and never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId {
    /// Source row
    pub row: u32,
    /// Source column
    pub col: u32,
}

impl TileId {
    /// Create an identifier for the cell at `(row, col)`
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// One rectangular slice of the source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    position: Point,
    correct: Point,
    size: Size,
}

impl Tile {
    /// Create a tile resting on its correct position
    pub const fn new(id: TileId, correct: Point, size: Size) -> Self {
        Self {
            id,
            position: correct,
            correct,
            size,
        }
    }

    /// Stable identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Current top-left drawing coordinate
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Target top-left coordinate over the reference image
    pub const fn correct_position(&self) -> Point {
        self.correct
    }

    /// Tile extent
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Rectangle currently covered on the surface
    pub const fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Region of the source image this tile shows
    pub const fn source_rect(&self) -> Rect {
        Rect::new(self.correct, self.size)
    }

    /// Check if a surface point hits this tile, edges included
    pub const fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// True when the tile sits exactly on its correct position
    pub fn is_placed(&self) -> bool {
        self.position == self.correct
    }

    pub(crate) const fn move_to(&mut self, position: Point) {
        self.position = position;
    }
}
