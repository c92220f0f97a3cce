//! Text scripts of pointer events for headless play
//!
//! One event per line:
//!
//! ```text
//! # grab the tile in the first staging slot
//! down 40 290
//! move 10 20
//! up
//! leave
//! ```
//!
//! Keywords are case-insensitive; blank lines and `#` comments are skipped.

use crate::io::error::{PuzzleError, Result, script_error};
use crate::puzzle::controller::PointerEvent;
use crate::spatial::geometry::Point;
use std::path::Path;

/// Parse a whole script
///
/// # Errors
///
/// Returns a [`PuzzleError::ScriptParse`] naming the first malformed line
pub fn parse_script(text: &str) -> Result<Vec<PointerEvent>> {
    let mut events = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        if let Some(event) = parse_line(raw, index + 1)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Read and parse a script file
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is malformed
pub fn load_script(path: &Path) -> Result<Vec<PointerEvent>> {
    let text = std::fs::read_to_string(path).map_err(|e| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "read script",
        source: e,
    })?;
    parse_script(&text)
}

/// Render events back into script text
pub fn format_script(events: &[PointerEvent]) -> String {
    let mut text = String::new();
    for event in events {
        let line = match event {
            PointerEvent::Down(point) => format!("down {} {}", point.x, point.y),
            PointerEvent::Move(point) => format!("move {} {}", point.x, point.y),
            PointerEvent::Up => "up".to_string(),
            PointerEvent::Leave => "leave".to_string(),
        };
        text.push_str(&line);
        text.push('\n');
    }
    text
}

fn parse_line(raw: &str, line: usize) -> Result<Option<PointerEvent>> {
    let content = raw.split('#').next().unwrap_or("").trim();
    if content.is_empty() {
        return Ok(None);
    }

    let mut words = content.split_whitespace();
    let keyword = words.next().unwrap_or("").to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let event = match keyword.as_str() {
        "down" => PointerEvent::Down(parse_point(&args, line)?),
        "move" => PointerEvent::Move(parse_point(&args, line)?),
        "up" => {
            expect_no_args(&args, "up", line)?;
            PointerEvent::Up
        }
        "leave" => {
            expect_no_args(&args, "leave", line)?;
            PointerEvent::Leave
        }
        other => return Err(script_error(line, &format!("unknown event '{other}'"))),
    };

    Ok(Some(event))
}

fn parse_point(args: &[&str], line: usize) -> Result<Point> {
    let [x, y] = args else {
        return Err(script_error(
            line,
            &format!("expected two coordinates, found {}", args.len()),
        ));
    };
    Ok(Point::new(parse_coordinate(x, line)?, parse_coordinate(y, line)?))
}

fn parse_coordinate(text: &str, line: usize) -> Result<i32> {
    text.parse::<i32>()
        .map_err(|e| script_error(line, &format!("invalid coordinate '{text}': {e}")))
}

fn expect_no_args(args: &[&str], keyword: &str, line: usize) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(script_error(line, &format!("'{keyword}' takes no arguments")))
    }
}
