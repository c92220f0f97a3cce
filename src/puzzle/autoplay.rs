//! Planning pointer sequences that solve a board
//!
//! Used by the CLI `--autosolve` mode and by tests that need a realistic
//! drag session. The plan is computed from the current tile positions and
//! simulates its own drops, so tiles moved earlier in the plan are taken
//! into account when choosing grab points for later ones.

use crate::puzzle::board::Board;
use crate::puzzle::controller::PointerEvent;
use crate::spatial::geometry::{Point, Rect};

/// Plan a drag for every misplaced tile onto its correct cell
///
/// Each drag presses inside the tile, moves in `steps` evenly spaced
/// increments (at least one) so the grab point lands on the matching point
/// of the correct cell, and releases. A tile completely covered by tiles
/// earlier in the sequence cannot be grabbed and is left out of the plan.
pub fn solution_events(board: &Board, steps: u32) -> Vec<PointerEvent> {
    let steps = i64::from(steps.max(1));
    let mut positions: Vec<Point> = board.tiles().iter().map(|tile| tile.position()).collect();
    let mut events = Vec::new();

    for (index, tile) in board.tiles().iter().enumerate() {
        if tile.is_placed() {
            continue;
        }
        let Some(current) = positions.get(index).copied() else {
            continue;
        };
        let bounds = Rect::new(current, tile.size());
        let Some(grab) = grab_point(board, &positions, index, bounds) else {
            continue;
        };

        let offset = grab - current;
        let target = tile.correct_position() + offset;

        events.push(PointerEvent::Down(grab));
        for step in 1..=steps {
            events.push(PointerEvent::Move(lerp(grab, target, step, steps)));
        }
        events.push(PointerEvent::Up);

        if let Some(position) = positions.get_mut(index) {
            *position = tile.correct_position();
        }
    }

    events
}

// First candidate inside `bounds` whose topmost hit is the tile at `index`
fn grab_point(board: &Board, positions: &[Point], index: usize, bounds: Rect) -> Option<Point> {
    let inset_x = (bounds.size.width / 4) as i32;
    let inset_y = (bounds.size.height / 4) as i32;
    let candidates = [
        bounds.center(),
        bounds.origin + Point::new(inset_x, inset_y),
        Point::new(bounds.right() - inset_x, bounds.origin.y + inset_y),
        Point::new(bounds.origin.x + inset_x, bounds.bottom() - inset_y),
        Point::new(bounds.right() - inset_x, bounds.bottom() - inset_y),
    ];

    candidates
        .into_iter()
        .find(|&point| first_hit(board, positions, point) == Some(index))
}

fn first_hit(board: &Board, positions: &[Point], point: Point) -> Option<usize> {
    board
        .tiles()
        .iter()
        .zip(positions)
        .position(|(tile, &position)| Rect::new(position, tile.size()).contains(point))
}

fn lerp(from: Point, to: Point, step: i64, steps: i64) -> Point {
    let x = i64::from(from.x) + (i64::from(to.x) - i64::from(from.x)) * step / steps;
    let y = i64::from(from.y) + (i64::from(to.y) - i64::from(from.y)) * step / steps;
    Point::new(x as i32, y as i32)
}
