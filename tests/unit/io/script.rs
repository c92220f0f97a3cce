//! Tests for pointer script parsing and formatting

#[cfg(test)]
mod tests {
    use jigsnap::PuzzleError;
    use jigsnap::io::script::{format_script, load_script, parse_script};
    use jigsnap::puzzle::PointerEvent;
    use jigsnap::spatial::Point;
    use tempfile::TempDir;

    fn parse_error_line(text: &str) -> Option<usize> {
        match parse_script(text) {
            Err(PuzzleError::ScriptParse { line, .. }) => Some(line),
            _ => None,
        }
    }

    // Tests every event kind with comments, blank lines and mixed case
    #[test]
    fn test_parse_script() {
        let text = "# opening move\n\nDown 10 100\nmove -5 12  # overshoot\nUP\nleave\n";

        let events = parse_script(text).unwrap();

        assert_eq!(
            events,
            vec![
                PointerEvent::Down(Point::new(10, 100)),
                PointerEvent::Move(Point::new(-5, 12)),
                PointerEvent::Up,
                PointerEvent::Leave,
            ]
        );
    }

    // Tests that errors report the one-based line of the first bad entry
    #[test]
    fn test_parse_errors_report_line() {
        assert_eq!(parse_error_line("down 1 2\njump 3 4\n"), Some(2));
        assert_eq!(parse_error_line("down 1\n"), Some(1));
        assert_eq!(parse_error_line("up\nmove 1 2 3\n"), Some(2));
        assert_eq!(parse_error_line("\n\nmove x 2\n"), Some(3));
        assert_eq!(parse_error_line("up now\n"), Some(1));
        assert_eq!(parse_error_line("leave 1 1\n"), Some(1));
    }

    // Tests error reasons name the problem
    #[test]
    fn test_parse_error_reasons() {
        let err = parse_script("move 4").unwrap_err();
        assert!(err.to_string().contains("expected two coordinates, found 1"));

        let err = parse_script("down 4 y").unwrap_err();
        assert!(err.to_string().contains("invalid coordinate 'y'"));

        let err = parse_script("hover 1 1").unwrap_err();
        assert!(err.to_string().contains("unknown event 'hover'"));
    }

    // Tests that formatted scripts parse back to the same events
    #[test]
    fn test_format_script() {
        let events = vec![
            PointerEvent::Down(Point::new(3, 4)),
            PointerEvent::Move(Point::new(-1, 0)),
            PointerEvent::Up,
            PointerEvent::Leave,
        ];

        let text = format_script(&events);

        assert_eq!(text, "down 3 4\nmove -1 0\nup\nleave\n");
        assert_eq!(parse_script(&text).unwrap(), events);
    }

    // Tests reading scripts from disk
    #[test]
    fn test_load_script() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("moves.txt");
        std::fs::write(&path, "down 1 2\nup\n").unwrap();

        assert_eq!(load_script(&path).unwrap().len(), 2);
        assert!(matches!(
            load_script(&dir.path().join("absent.txt")),
            Err(PuzzleError::FileSystem {
                operation: "read script",
                ..
            })
        ));
    }

    // Tests that an empty script is valid
    #[test]
    fn test_empty_script() {
        assert!(parse_script("").unwrap().is_empty());
        assert!(parse_script("# only a comment\n").unwrap().is_empty());
    }
}
