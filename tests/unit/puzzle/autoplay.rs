//! Tests for solution planning used by automatic play

#[cfg(test)]
mod tests {
    use crate::three_by_two;
    use jigsnap::puzzle::autoplay::solution_events;
    use jigsnap::puzzle::{ControllerOptions, PointerEvent, PointerOutcome, PuzzleController};
    use jigsnap::render::RecordingSurface;
    use jigsnap::spatial::Point;

    // Tests event shape: press, evenly spaced moves, release per tile
    #[test]
    fn test_plan_shape() {
        let board = three_by_two(&[1, 2, 3, 0, 4, 5]);
        let events = solution_events(&board, 4);

        assert_eq!(events.len(), 6 * 6);
        // Tile (0,1) sits at (0,60) and belongs at (30,0)
        assert_eq!(
            &events[..6],
            &[
                PointerEvent::Down(Point::new(15, 75)),
                PointerEvent::Move(Point::new(22, 60)),
                PointerEvent::Move(Point::new(30, 45)),
                PointerEvent::Move(Point::new(37, 30)),
                PointerEvent::Move(Point::new(45, 15)),
                PointerEvent::Up,
            ]
        );
    }

    // Tests that a zero step count still emits one move
    #[test]
    fn test_zero_steps_clamped() {
        let board = three_by_two(&[1, 0, 2, 3, 4, 5]);
        let events = solution_events(&board, 0);

        assert_eq!(events.len(), 6 * 3);
        assert!(matches!(events[1], PointerEvent::Move(_)));
    }

    // Tests that replaying the plan solves the board
    #[test]
    fn test_plan_solves_board() {
        let board = three_by_two(&[5, 3, 1, 0, 4, 2]);
        let events = solution_events(&board, 3);
        let mut controller =
            PuzzleController::new(board, RecordingSurface::new(), ControllerOptions::default());

        let solved_on = events
            .into_iter()
            .map(|event| controller.handle(event))
            .filter(|outcome| {
                matches!(outcome, PointerOutcome::Dropped(report) if report.newly_solved)
            })
            .count();

        assert_eq!(solved_on, 1);
        assert!(controller.is_solved());
    }

    // Tests that placed tiles are skipped and a solved board needs no events
    #[test]
    fn test_placed_tiles_skipped() {
        let board = three_by_two(&[0, 1, 2, 3, 4, 5]);
        let mut controller =
            PuzzleController::new(board, RecordingSurface::new(), ControllerOptions::default());
        for event in solution_events(controller.board(), 2).into_iter().take(4) {
            controller.handle(event);
        }
        assert_eq!(controller.board().placed_count(), 1);

        let (board, _) = controller.into_parts();
        assert_eq!(solution_events(&board, 2).len(), 5 * 4);

        let events = solution_events(&board, 2);
        let mut controller =
            PuzzleController::new(board, RecordingSurface::new(), ControllerOptions::default());
        for event in events {
            controller.handle(event);
        }
        let (board, _) = controller.into_parts();
        assert!(solution_events(&board, 2).is_empty());
    }
}
