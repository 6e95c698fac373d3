use std::cmp::Ordering;
use std::collections::BinaryHeap;

use follow_core::Point;

use crate::PathFinder;
use crate::distance::manhattan;

/// Parent handle of the root node.
const ROOT: usize = usize::MAX;

/// Best-known cost of a cell nobody has reached yet.
const UNREACHABLE: i32 = i32::MAX;

/// A node of the search tree, stored in a per-search arena.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    pos: Point,
    g: i32,
    /// Arena handle of the node this one was reached from.
    parent: usize,
}

/// Open-set entry.
///
/// `order` is the arena handle of the node. Handles are handed out in
/// insertion order, so it doubles as the final tie-break.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenEntry {
    f: i32,
    h: i32,
    order: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we want the smallest
        // (f, h, order) on top.
        (other.f, other.h, other.order).cmp(&(self.f, self.h, self.order))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PathFinder {
    /// Full A* search. Both endpoints are known to be passable.
    pub(crate) fn astar(
        &mut self,
        passable: &impl Fn(Point) -> bool,
        start: Point,
        end: Point,
    ) -> Option<Vec<Point>> {
        let rng = self.rng;
        let len = rng.len();
        let mut best_g = vec![UNREACHABLE; len];
        let mut closed = vec![false; len];
        let mut arena: Vec<SearchNode> = Vec::new();
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();

        let start_idx = rng.index_of(start)?;
        let h = manhattan(start, end);
        arena.push(SearchNode {
            pos: start,
            g: 0,
            parent: ROOT,
        });
        best_g[start_idx] = 0;
        open.push(OpenEntry { f: h, h, order: 0 });

        while let Some(entry) = open.pop() {
            let node = arena[entry.order];
            let Some(ci) = rng.index_of(node.pos) else {
                continue;
            };

            // Stale duplicate of an already settled cell.
            if closed[ci] {
                continue;
            }

            if node.pos == end {
                self.stats.pushed = arena.len();
                return Some(reconstruct(&arena, entry.order));
            }

            closed[ci] = true;
            self.stats.expanded += 1;

            for np in node.pos.neighbors_4() {
                let Some(ni) = rng.index_of(np) else {
                    continue;
                };
                if closed[ni] || !passable(np) {
                    continue;
                }
                let g = node.g + 1;
                if g >= best_g[ni] {
                    continue;
                }
                best_g[ni] = g;

                let h = manhattan(np, end);
                let order = arena.len();
                arena.push(SearchNode {
                    pos: np,
                    g,
                    parent: entry.order,
                });
                open.push(OpenEntry { f: g + h, h, order });
            }
        }

        self.stats.pushed = arena.len();
        None
    }
}

fn reconstruct(arena: &[SearchNode], goal: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let mut i = goal;
    while i != ROOT {
        let node = &arena[i];
        path.push(node.pos);
        i = node.parent;
    }
    path.reverse();
    path
}
