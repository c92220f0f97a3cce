//! Pointer-driven drag and drop over a board
//!
//! The controller owns the board, the surface it renders to and the drag
//! state. Every event handler runs to completion before returning, and every
//! state change is followed by a full repaint.

use crate::puzzle::board::Board;
use crate::puzzle::tile::{Tile, TileId};
use crate::render::painter::{Painter, RenderStyle};
use crate::render::surface::DrawingSurface;
use crate::spatial::geometry::{Point, Rect};
use crate::spatial::layout::BoardLayout;
use crate::spatial::snap::snap_point;
use clap::ValueEnum;
use tracing::{debug, trace};

/// What happens to a tile dropped anywhere but its correct cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DropPolicy {
    /// Return the tile to where it was grabbed
    #[default]
    Revert,
    /// Leave the tile in the cell it snapped to when that cell is on the surface
    Occupy,
}

/// Behavior switches for a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerOptions {
    /// Wrong-drop handling
    pub drop_policy: DropPolicy,
    /// Ignore new drags once the board is solved
    pub lock_when_solved: bool,
    /// Rendering style
    pub style: RenderStyle,
}

/// Pointer input in surface-relative pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed
    Down(Point),
    /// Pointer moved
    Move(Point),
    /// Button released
    Up,
    /// Pointer left the surface
    Leave,
}

/// How a drop was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResolution {
    /// Snapped onto the correct cell
    Placed,
    /// Returned to the pre-drag position
    Reverted,
    /// Left in a wrong cell under [`DropPolicy::Occupy`]
    Occupied,
}

/// Result of finishing a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropReport {
    /// Tile that was dropped
    pub tile: TileId,
    /// Resolution applied
    pub resolution: DropResolution,
    /// Final tile position
    pub position: Point,
    /// True only on the drop that completes the puzzle
    pub newly_solved: bool,
}

/// What a pointer event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Nothing changed and nothing was drawn
    Ignored,
    /// A tile was picked up
    Grabbed(TileId),
    /// The dragged tile moved
    Dragged {
        /// Dragged tile
        tile: TileId,
        /// New unsnapped position
        position: Point,
    },
    /// The dragged tile was released
    Dropped(DropReport),
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    index: usize,
    grab_offset: Point,
    origin: Point,
}

/// Decide where a released tile ends up
///
/// The tile's current position is snapped to the nearest cell. If that cell
/// is the tile's correct one, the tile is placed there. Otherwise the tile
/// goes back to `origin` under [`DropPolicy::Revert`], or stays in the
/// snapped cell under [`DropPolicy::Occupy`]; in the latter case a snapped
/// Y inside the reference half is discarded in favor of the unsnapped Y.
///
/// An occupied cell must lie entirely on the surface. A candidate that
/// would hang off any edge reverts to `origin` instead.
pub fn resolve_drop(
    layout: &BoardLayout,
    tile: &Tile,
    origin: Point,
    policy: DropPolicy,
) -> (Point, DropResolution) {
    let current = tile.position();
    let snapped = snap_point(current, tile.size());

    if snapped == tile.correct_position() {
        return (snapped, DropResolution::Placed);
    }

    match policy {
        DropPolicy::Revert => (origin, DropResolution::Reverted),
        DropPolicy::Occupy => {
            let y = if layout.is_in_reference(snapped.y) {
                current.y
            } else {
                snapped.y
            };
            let candidate = Rect::new(Point::new(snapped.x, y), tile.size());
            if layout.surface_region().contains_rect(&candidate) {
                (candidate.origin, DropResolution::Occupied)
            } else {
                (origin, DropResolution::Reverted)
            }
        }
    }
}

/// Drag-and-drop controller bound to one board and one surface
pub struct PuzzleController<S> {
    board: Board,
    surface: S,
    painter: Painter,
    options: ControllerOptions,
    drag: Option<Drag>,
}

impl<S: DrawingSurface> PuzzleController<S> {
    /// Mount a board on a surface, sizing and painting it
    pub fn new(board: Board, mut surface: S, options: ControllerOptions) -> Self {
        let painter = Painter::new(options.style);
        Painter::prepare(&board, &mut surface);
        let mut controller = Self {
            board,
            surface,
            painter,
            options,
            drag: None,
        };
        controller.render();
        controller
    }

    /// Dispatch a pointer event to its handler
    pub fn handle(&mut self, event: PointerEvent) -> PointerOutcome {
        match event {
            PointerEvent::Down(point) => self.pointer_down(point),
            PointerEvent::Move(point) => self.pointer_move(point),
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    /// Pick up the first tile under the pointer
    pub fn pointer_down(&mut self, point: Point) -> PointerOutcome {
        if self.drag.is_some() {
            return PointerOutcome::Ignored;
        }
        if self.options.lock_when_solved && self.board.is_solved() {
            return PointerOutcome::Ignored;
        }

        let Some(index) = self.board.hit_test(point) else {
            return PointerOutcome::Ignored;
        };
        let Some(tile) = self.board.tile(index) else {
            return PointerOutcome::Ignored;
        };

        let origin = tile.position();
        let id = tile.id();
        self.drag = Some(Drag {
            index,
            grab_offset: point - origin,
            origin,
        });
        debug!(tile = %id, pointer = %point, origin = %origin, "tile grabbed");
        PointerOutcome::Grabbed(id)
    }

    /// Move the dragged tile so the grab point stays under the pointer
    pub fn pointer_move(&mut self, point: Point) -> PointerOutcome {
        let Some(drag) = self.drag else {
            return PointerOutcome::Ignored;
        };
        let position = point - drag.grab_offset;
        let Some(tile) = self.board.tile_mut(drag.index) else {
            return PointerOutcome::Ignored;
        };
        tile.move_to(position);
        let id = tile.id();

        self.render();
        trace!(tile = %id, position = %position, "tile dragged");
        PointerOutcome::Dragged { tile: id, position }
    }

    /// Release the dragged tile
    pub fn pointer_up(&mut self) -> PointerOutcome {
        let Some(drag) = self.drag.take() else {
            return PointerOutcome::Ignored;
        };
        let Some(tile) = self.board.tile(drag.index) else {
            return PointerOutcome::Ignored;
        };

        let id = tile.id();
        let (position, resolution) = resolve_drop(
            self.board.layout(),
            tile,
            drag.origin,
            self.options.drop_policy,
        );
        if let Some(tile) = self.board.tile_mut(drag.index) {
            tile.move_to(position);
        }

        self.render();
        let newly_solved = self.board.refresh_solved();
        debug!(
            tile = %id,
            position = %position,
            resolution = ?resolution,
            placed = self.board.placed_count(),
            "tile dropped"
        );

        PointerOutcome::Dropped(DropReport {
            tile: id,
            resolution,
            position,
            newly_solved,
        })
    }

    /// Pointer leaving the surface finishes the drag like a release
    pub fn pointer_leave(&mut self) -> PointerOutcome {
        self.pointer_up()
    }

    /// Repaint the full board
    pub fn render(&mut self) {
        self.painter.paint(&self.board, &mut self.surface);
    }

    /// Board state
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Surface the board is painted on
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Active options
    pub const fn options(&self) -> ControllerOptions {
        self.options
    }

    /// Whether the board has been solved
    pub const fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Identifier of the tile being dragged, if any
    pub fn dragged_tile(&self) -> Option<TileId> {
        self.drag
            .and_then(|drag| self.board.tile(drag.index))
            .map(Tile::id)
    }

    /// Unmount, returning board and surface
    pub fn into_parts(self) -> (Board, S) {
        (self.board, self.surface)
    }
}
