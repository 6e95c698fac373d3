//! Breadth-first reachability.

use std::collections::VecDeque;

use follow_core::{Point, Range};

use crate::traits::Walkable;

/// Every cell reachable from `start` through walkable 4-neighbours inside
/// `bounds`, in breadth-first order.
///
/// The first element is `start` itself and the last one is a cell at the
/// greatest path distance from it. Returns an empty vector if `start` is
/// outside `bounds` or not walkable.
pub fn reachable<W: Walkable + ?Sized>(walkable: &W, bounds: Range, start: Point) -> Vec<Point> {
    let mut order = Vec::new();
    let Some(si) = bounds.index_of(start) else {
        return order;
    };
    if !walkable.walkable(start) {
        return order;
    }

    let mut seen = vec![false; bounds.len()];
    let mut queue: VecDeque<Point> = VecDeque::new();
    seen[si] = true;
    queue.push_back(start);

    while let Some(cp) = queue.pop_front() {
        order.push(cp);
        for np in cp.neighbors_4() {
            let Some(ni) = bounds.index_of(np) else {
                continue;
            };
            if seen[ni] || !walkable.walkable(np) {
                continue;
            }
            seen[ni] = true;
            queue.push_back(np);
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use follow_core::{Cell, Grid};

    #[test]
    fn open_grid_reaches_everything() {
        let g = Grid::new(4, 3);
        let cells = reachable(&g, g.bounds(), Point::new(1, 1));
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], Point::new(1, 1));
        // On an open grid the last cell is at the largest Manhattan distance.
        let last = *cells.last().unwrap();
        assert_eq!(manhattan(Point::new(1, 1), last), 3);
    }

    #[test]
    fn walls_split_components() {
        let mut g = Grid::new(5, 2);
        g.set(Point::new(2, 0), Cell::Blocked);
        g.set(Point::new(2, 1), Cell::Blocked);
        let left = reachable(&g, g.bounds(), Point::new(0, 0));
        assert_eq!(left.len(), 4);
        assert!(left.iter().all(|p| p.x < 2));
    }

    #[test]
    fn blocked_or_outside_start_is_empty() {
        let mut g = Grid::new(3, 3);
        g.set(Point::new(1, 1), Cell::Blocked);
        assert!(reachable(&g, g.bounds(), Point::new(1, 1)).is_empty());
        assert!(reachable(&g, g.bounds(), Point::new(3, 0)).is_empty());
    }
}
