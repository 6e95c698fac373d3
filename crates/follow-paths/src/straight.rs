use follow_core::{Point, Range};

use crate::distance::manhattan;
use crate::traits::Walkable;

/// The straight-line shortcut.
///
/// If `start` and `end` share a row or column and every cell of the segment
/// between them (inclusive) is inside `bounds` and walkable, returns that
/// segment ordered from `start` to `end`. Otherwise returns `None`. Runs in
/// O(distance).
pub fn straight_path<W: Walkable + ?Sized>(
    walkable: &W,
    start: Point,
    end: Point,
    bounds: Range,
) -> Option<Vec<Point>> {
    if !start.is_aligned_with(end) {
        return None;
    }
    let step = Point::new((end.x - start.x).signum(), (end.y - start.y).signum());
    let mut path = Vec::with_capacity(manhattan(start, end) as usize + 1);
    let mut p = start;
    loop {
        if !bounds.contains(p) || !walkable.walkable(p) {
            return None;
        }
        path.push(p);
        if p == end {
            return Some(path);
        }
        p = p + step;
    }
}
