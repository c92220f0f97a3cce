//! Tests for full-frame board painting

#[cfg(test)]
mod tests {
    use crate::three_by_two;
    use jigsnap::io::configuration::{GRID_LINE_COLOR, GRID_LINE_WIDTH};
    use jigsnap::render::{DrawCommand, LineStyle, Painter, RecordingSurface, RenderStyle};
    use jigsnap::spatial::{Point, Rect, Size};

    // Tests draw order: clear, reference, tiles, grid lines
    #[test]
    fn test_paint_order() {
        let board = three_by_two(&[1, 2, 3, 0, 4, 5]);
        let mut surface = RecordingSurface::new();
        let painter = Painter::default();

        painter.paint(&board, &mut surface);
        let commands = surface.commands();

        assert_eq!(commands.len(), 13);
        assert_eq!(commands[0], DrawCommand::Clear);
        assert_eq!(
            commands[1],
            DrawCommand::DrawImage {
                source: Rect::new(Point::ORIGIN, Size::new(90, 60)),
                destination: Point::ORIGIN,
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::DrawImage {
                source: Rect::new(Point::new(30, 0), Size::new(30, 30)),
                destination: Point::new(0, 60),
            }
        );
        assert_eq!(
            commands[5],
            DrawCommand::DrawImage {
                source: Rect::new(Point::ORIGIN, Size::new(30, 30)),
                destination: Point::new(0, 90),
            }
        );
        assert!(commands[8..]
            .iter()
            .all(|command| matches!(command, DrawCommand::StrokeLine { .. })));
    }

    // Tests default grid style
    #[test]
    fn test_default_grid_style() {
        let style = RenderStyle::default();

        assert_eq!(style.grid, LineStyle::new(GRID_LINE_COLOR, GRID_LINE_WIDTH));
        assert_eq!(style.grid.color, [0, 0, 0, 204]);
        assert_eq!(style.grid.width, 2);
        assert!(style.show_reference);
    }

    // Tests that hiding the reference drops exactly one draw call
    #[test]
    fn test_hidden_reference() {
        let board = three_by_two(&[0, 1, 2, 3, 4, 5]);
        let mut surface = RecordingSurface::new();
        let painter = Painter::new(RenderStyle {
            show_reference: false,
            ..RenderStyle::default()
        });

        painter.paint(&board, &mut surface);

        assert_eq!(surface.commands().len(), 12);
        assert!(!painter.style().show_reference);
    }

    // Tests that painting is a pure function of board state
    #[test]
    fn test_paint_repeatable() {
        let board = three_by_two(&[2, 0, 1, 5, 3, 4]);
        let mut surface = RecordingSurface::new();
        let painter = Painter::default();

        painter.paint(&board, &mut surface);
        let first = surface.take_commands();
        painter.paint(&board, &mut surface);

        assert_eq!(surface.commands(), first.as_slice());
    }

    // Tests that preparing sizes the surface at double board height
    #[test]
    fn test_prepare_resizes() {
        let board = three_by_two(&[0, 1, 2, 3, 4, 5]);
        let mut surface = RecordingSurface::new();

        Painter::prepare(&board, &mut surface);

        assert_eq!(surface.commands(), &[DrawCommand::Resize(Size::new(90, 120))]);
    }
}
