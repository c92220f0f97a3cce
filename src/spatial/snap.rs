//! Snapping of dropped tile positions to the nearest grid cell boundary

use crate::spatial::geometry::{Point, Size};

/// Round a coordinate to the nearest multiple of `step`
///
/// Halfway values round toward positive infinity, so `-1.5` cells becomes
/// `-1` and `1.5` cells becomes `2`. A zero step leaves the value unchanged.
pub const fn round_to_multiple(value: i32, step: u32) -> i32 {
    if step == 0 {
        return value;
    }
    let step = step as i64;
    // floor(value / step + 1/2) in exact integer arithmetic
    let cells = (2 * value as i64 + step).div_euclid(2 * step);
    let snapped = cells * step;
    if snapped > i32::MAX as i64 {
        i32::MAX
    } else if snapped < i32::MIN as i64 {
        i32::MIN
    } else {
        snapped as i32
    }
}

/// Snap both axes of a position to the grid spanned by `cell`
pub const fn snap_point(position: Point, cell: Size) -> Point {
    Point::new(
        round_to_multiple(position.x, cell.width),
        round_to_multiple(position.y, cell.height),
    )
}
