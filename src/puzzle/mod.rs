//! Puzzle state and interaction
//!
//! Tiles are cut from the source image, shuffled into the staging area and
//! moved by pointer drags until each rests on its reference cell.

/// Solution planning for automatic play
pub mod autoplay;
/// Board state and completion tracking
pub mod board;
/// Drag-and-drop event handling
pub mod controller;
/// Staging order shuffling
pub mod shuffle;
/// Tile entity
pub mod tile;

pub use board::Board;
pub use controller::{
    ControllerOptions, DropPolicy, DropReport, DropResolution, PointerEvent, PointerOutcome,
    PuzzleController,
};
pub use shuffle::TileShuffler;
pub use tile::{Tile, TileId};
