//! Tests for session frame capture and GIF export

#[cfg(test)]
mod tests {
    use crate::three_by_two;
    use image::codecs::gif::GifDecoder;
    use image::{AnimationDecoder, Frame};
    use jigsnap::PuzzleError;
    use jigsnap::io::visualization::FrameCapture;
    use jigsnap::puzzle::{ControllerOptions, PointerEvent, PuzzleController};
    use jigsnap::render::{RecordingSurface, RenderStyle};
    use jigsnap::spatial::Point;
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;
    use tempfile::TempDir;

    const ORDER: [usize; 6] = [1, 2, 3, 0, 4, 5];

    fn decoded_frames(path: &Path) -> Vec<Frame> {
        let reader = BufReader::new(File::open(path).unwrap());
        GifDecoder::new(reader)
            .unwrap()
            .into_frames()
            .collect_frames()
            .unwrap()
    }

    // Tests that captures past the limit replace the last frame
    #[test]
    fn test_capture_limit_keeps_last() {
        let board = three_by_two(&ORDER);
        let mut capture = FrameCapture::new(2);
        for _ in 0..4 {
            capture.record(&board);
        }

        assert_eq!(capture.frame_count(), 2);
        assert_eq!(capture.overflow_count(), 2);
    }

    // Tests that a zero limit still keeps one frame
    #[test]
    fn test_zero_limit_clamped() {
        let board = three_by_two(&ORDER);
        let mut capture = FrameCapture::new(0);
        capture.record(&board);
        capture.record(&board);

        assert_eq!(capture.frame_count(), 1);
        assert_eq!(capture.overflow_count(), 1);
    }

    // Tests GIF export writes every frame at the surface size
    #[test]
    fn test_export_gif() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/session.gif");
        let board = three_by_two(&ORDER);
        let mut capture = FrameCapture::new(10);
        for _ in 0..3 {
            capture.record(&board);
        }

        capture
            .export_gif(&board, RenderStyle::default(), &path, 40)
            .unwrap();

        let frames = decoded_frames(&path);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].buffer().dimensions(), (90, 120));
    }

    // Tests that frames show the positions at record time, not at export
    #[test]
    fn test_export_renders_recorded_positions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("moves.gif");
        let mut controller = PuzzleController::new(
            three_by_two(&ORDER),
            RecordingSurface::new(),
            ControllerOptions::default(),
        );
        let mut capture = FrameCapture::new(10);
        capture.record(controller.board());

        // Tile (0,0) moves from staging slot 3 onto its reference cell
        controller.handle(PointerEvent::Down(Point::new(15, 105)));
        controller.handle(PointerEvent::Move(Point::new(15, 15)));
        controller.handle(PointerEvent::Up);
        capture.record(controller.board());

        let (board, _) = controller.into_parts();
        assert_eq!(board.placed_count(), 1);
        capture
            .export_gif(&board, RenderStyle::default(), &path, 40)
            .unwrap();

        let frames = decoded_frames(&path);
        assert_eq!(frames.len(), 2);
        assert_ne!(frames[0].buffer(), frames[1].buffer());
    }

    // Tests frame skipping below the viewer minimum delay
    #[test]
    fn test_export_gif_skips_fast_frames() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fast.gif");
        let board = three_by_two(&ORDER);
        let mut capture = FrameCapture::new(10);
        for _ in 0..5 {
            capture.record(&board);
        }

        // 10ms frames against a 20ms minimum keep every other frame plus the last
        capture
            .export_gif(&board, RenderStyle::default(), &path, 10)
            .unwrap();

        assert_eq!(decoded_frames(&path).len(), 3);
    }

    // Tests that exporting nothing is an error
    #[test]
    fn test_export_empty_capture() {
        let dir = TempDir::new().unwrap();
        let board = three_by_two(&ORDER);
        let path = dir.path().join("empty.gif");
        let capture = FrameCapture::new(4);
        let result = capture.export_gif(&board, RenderStyle::default(), &path, 40);

        assert!(matches!(
            result,
            Err(PuzzleError::InvalidParameter {
                parameter: "frames",
                ..
            })
        ));
    }
}
