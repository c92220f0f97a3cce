//! Integer pixel geometry shared by layout, tiles and drawing surfaces

use std::fmt;
use std::ops::{Add, Sub};

/// A point on the drawing surface in pixels
///
/// Positions are signed because a dragged tile may leave the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate, growing right
    pub x: i32,
    /// Vertical coordinate, growing down
    pub y: i32,
}

impl Point {
    /// Surface origin
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a point from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Horizontal extent
    pub width: u32,
    /// Vertical extent
    pub height: u32,
}

impl Size {
    /// Create a size from its extents
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either extent is zero
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Top-left corner
    pub origin: Point,
    /// Extent from the origin
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from origin and size
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Right edge coordinate
    pub const fn right(&self) -> i32 {
        self.origin.x.saturating_add_unsigned(self.size.width)
    }

    /// Bottom edge coordinate
    pub const fn bottom(&self) -> i32 {
        self.origin.y.saturating_add_unsigned(self.size.height)
    }

    /// Check if a point lies inside the rectangle, edges included
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.right()
            && point.y >= self.origin.y
            && point.y <= self.bottom()
    }

    /// Check if `other` lies entirely inside this rectangle
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.origin.x >= self.origin.x
            && other.right() <= self.right()
            && other.origin.y >= self.origin.y
            && other.bottom() <= self.bottom()
    }

    /// Center point, rounded toward the origin
    pub const fn center(&self) -> Point {
        Point::new(
            self.origin.x.saturating_add_unsigned(self.size.width / 2),
            self.origin.y.saturating_add_unsigned(self.size.height / 2),
        )
    }
}
