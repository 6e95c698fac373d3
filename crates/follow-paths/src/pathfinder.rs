use follow_core::{Point, Range};

use crate::straight::straight_path;
use crate::traits::Walkable;

/// Counters describing the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the open set and closed.
    pub expanded: usize,
    /// Nodes allocated, including the start node.
    pub pushed: usize,
    /// Whether the straight-line shortcut answered the query.
    pub fast_path: bool,
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// A* search over a rectangle of cells.
///
/// A `PathFinder` only remembers its bounds and the [`SearchStats`] of the
/// last query. Search nodes live in an arena local to a single
/// [`find_path`](Self::find_path) call and are dropped when it returns, so
/// nothing from one grid state can leak into a search on the next.
#[derive(Debug, Clone)]
pub struct PathFinder {
    pub(crate) rng: Range,
    pub(crate) stats: SearchStats,
}

impl PathFinder {
    /// Create a path finder for the given rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Replace the search bounds, e.g. after the grid was resized.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.stats = SearchStats::default();
    }

    /// The search bounds.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Statistics of the most recent [`find_path`](Self::find_path) call.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Compute the shortest 4-connected path from `start` to `end`.
    ///
    /// Returns the full path including both endpoints, `Some(vec![start])`
    /// when they coincide, or `None` if either endpoint is outside the
    /// bounds or not walkable, or if `end` cannot be reached.
    ///
    /// Aligned endpoints with an unobstructed segment between them are
    /// answered directly without running the search.
    pub fn find_path<W: Walkable + ?Sized>(
        &mut self,
        walkable: &W,
        start: Point,
        end: Point,
    ) -> Option<Vec<Point>> {
        self.stats = SearchStats::default();
        let rng = self.rng;
        let passable = |p: Point| rng.contains(p) && walkable.walkable(p);

        if !passable(start) || !passable(end) {
            return None;
        }

        if let Some(path) = straight_path(walkable, start, end, rng) {
            self.stats.fast_path = true;
            return Some(path);
        }

        self.astar(&passable, start, end)
    }
}

/// One-shot search over `[0, width) × [0, height)`.
///
/// Equivalent to `PathFinder::new(Range::sized(width, height)).find_path(..)`.
pub fn find_path<W: Walkable + ?Sized>(
    walkable: &W,
    start: Point,
    end: Point,
    width: i32,
    height: i32,
) -> Option<Vec<Point>> {
    PathFinder::new(Range::sized(width, height)).find_path(walkable, start, end)
}
