//! Image tile puzzle with pointer-driven drag, snap-to-grid and completion detection
//!
//! A source image is cut into a grid of tiles which are shuffled into a staging
//! area below a reference rendering of the image. Tiles are dragged with pointer
//! events and snap onto grid cells; the board is solved once every tile rests on
//! its own cell. Boards render onto any [`render::DrawingSurface`].

#![forbid(unsafe_code)]

/// Remote image generation for puzzle sources
pub mod generation;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tiles, boards and the drag-and-drop controller
pub mod puzzle;
/// Board rendering onto drawing surfaces
pub mod render;
/// Pixel geometry, board layout and snapping
pub mod spatial;

pub use io::error::{PuzzleError, Result};
