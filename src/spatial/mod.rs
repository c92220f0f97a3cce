//! Spatial data structures and board geometry
//!
//! This module contains spatial-related functionality including:
//! - Pixel points, sizes and rectangles
//! - Board layout with reference and staging halves
//! - Snapping positions to grid cells

/// Pixel geometry primitives
pub mod geometry;
/// Board layout and uneven division handling
pub mod layout;
/// Grid snapping for dropped tiles
pub mod snap;

pub use geometry::{Point, Rect, Size};
pub use layout::{BoardLayout, DivisionPolicy, GridDimensions};
