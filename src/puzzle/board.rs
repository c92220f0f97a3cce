//! Board state: the source image and its ordered tile sequence
//!
//! Tiles are created once, shuffled once into the staging area, and after
//! that only change position. The sequence order equals the staging order
//! chosen at construction and never changes; it decides both drawing order
//! and which tile wins a hit test when tiles overlap.

use crate::io::error::{PuzzleError, Result};
use crate::puzzle::shuffle::{TileShuffler, validate_order};
use crate::puzzle::tile::{Tile, TileId};
use crate::spatial::geometry::{Point, Size};
use crate::spatial::layout::{BoardLayout, DivisionPolicy, GridDimensions};
use image::RgbaImage;
use tracing::{debug, info};

/// Tiles, their source image and the completion latch
#[derive(Debug, Clone)]
pub struct Board {
    layout: BoardLayout,
    source: RgbaImage,
    tiles: Vec<Tile>,
    solved: bool,
}

impl Board {
    /// Cut `source` into `grid` and shuffle the tiles into the staging area
    ///
    /// # Errors
    ///
    /// Returns an error if the layout cannot be computed for the image and grid
    pub fn new(
        source: RgbaImage,
        grid: GridDimensions,
        policy: DivisionPolicy,
        shuffler: &mut TileShuffler,
    ) -> Result<Self> {
        let layout = BoardLayout::new(image_size(&source), grid, policy)?;
        let order = shuffler.staging_order(layout.slot_count());
        Self::assemble(source, layout, &order)
    }

    /// Cut `source` into `grid` using an explicit staging order
    ///
    /// `order[slot]` is the row-major index of the tile placed in staging
    /// slot `slot`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The layout cannot be computed for the image and grid
    /// - `order` is not a permutation of all tile indices
    pub fn from_arrangement(
        source: RgbaImage,
        grid: GridDimensions,
        policy: DivisionPolicy,
        order: &[usize],
    ) -> Result<Self> {
        let layout = BoardLayout::new(image_size(&source), grid, policy)?;
        Self::assemble(source, layout, order)
    }

    fn assemble(source: RgbaImage, layout: BoardLayout, order: &[usize]) -> Result<Self> {
        let count = layout.slot_count();
        if let Some(reason) = validate_order(order, count) {
            return Err(PuzzleError::InvalidArrangement {
                expected: count,
                reason,
            });
        }

        let grid = layout.grid();
        let piece = layout.piece_size();
        let mut originals = Vec::with_capacity(count);
        for row in 0..grid.rows {
            for col in 0..grid.columns {
                originals.push(Tile::new(
                    TileId::new(row, col),
                    layout.correct_position(row, col),
                    piece,
                ));
            }
        }

        let mut tiles = Vec::with_capacity(count);
        for (slot, &index) in order.iter().enumerate() {
            if let Some(original) = originals.get(index) {
                let mut tile = original.clone();
                tile.move_to(layout.staging_slot(slot));
                tiles.push(tile);
            }
        }

        debug!(
            tiles = tiles.len(),
            piece = %piece,
            surface = %layout.surface_size(),
            "board assembled"
        );

        // Staging slots never coincide with reference cells, so a fresh board is unsolved
        Ok(Self {
            layout,
            source,
            tiles,
            solved: false,
        })
    }

    /// Geometry of this board
    pub const fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// The original image, as offered for download once solved
    pub const fn source_image(&self) -> &RgbaImage {
        &self.source
    }

    /// Tiles in sequence order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at a sequence index
    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Number of tiles, always `rows * columns`
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Sequence index of the tile with the given identifier
    pub fn index_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.id() == id)
    }

    /// First tile in sequence order whose bounds contain `point`
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.contains(point))
    }

    /// Number of tiles resting on their correct position
    pub fn placed_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_placed()).count()
    }

    /// True when every tile currently sits on its correct position
    pub fn all_placed(&self) -> bool {
        self.tiles.iter().all(Tile::is_placed)
    }

    /// Whether the board has been solved during this session
    ///
    /// Once set this never clears.
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    pub(crate) fn tile_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    /// Move every tile back to a previously recorded position
    ///
    /// Extra or missing entries are ignored. Completion is not re-evaluated.
    pub(crate) fn restore_positions(&mut self, positions: &[Point]) {
        for (tile, &position) in self.tiles.iter_mut().zip(positions) {
            tile.move_to(position);
        }
    }

    /// Re-evaluate completion, returning true only on the transition to solved
    pub(crate) fn refresh_solved(&mut self) -> bool {
        if self.solved || !self.all_placed() {
            return false;
        }
        self.solved = true;
        info!(tiles = self.tiles.len(), "puzzle solved");
        true
    }
}

fn image_size(image: &RgbaImage) -> Size {
    Size::new(image.width(), image.height())
}
