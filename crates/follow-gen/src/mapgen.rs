//! Map generation algorithms.
//!
//! Both generators rewrite a [`Grid`] in place and go through its normal
//! write path, so the grid's revision and dirty flag reflect the change.

use follow_core::{Cell, Grid, Point};
use rand::{Rng, RngExt};

/// First corridor cell of every maze: the first odd coordinate on each axis.
pub const MAZE_START: Point = Point::new(1, 1);

/// Two-cell jumps between corridor cells, in north, east, south, west order.
const JUMPS: [Point; 4] = [
    Point::new(0, -2),
    Point::new(2, 0),
    Point::new(0, 2),
    Point::new(-2, 0),
];

/// Map generator owning its random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a perfect maze using iterative recursive backtracking.
    ///
    /// 1. Every cell becomes `Blocked`.
    /// 2. [`MAZE_START`] is opened and pushed onto a stack.
    /// 3. While the stack is not empty, look at the still-blocked cells two
    ///    steps away from the top that lie strictly inside the border. Pick
    ///    one uniformly at random, open it together with the wall cell in
    ///    between and push it; if there is none, pop.
    ///
    /// The outer ring of cells is never opened. Grids narrower or shorter
    /// than 3 cells have no interior and end up fully blocked.
    ///
    /// Returns the number of open cells.
    pub fn maze(&mut self, grid: &mut Grid) -> usize {
        grid.fill(Cell::Blocked);
        let (w, h) = (grid.width(), grid.height());
        if w < 3 || h < 3 {
            log::debug!("maze: {w}x{h} grid has no interior");
            return 0;
        }

        let interior = |p: Point| p.x > 0 && p.x < w - 1 && p.y > 0 && p.y < h - 1;

        grid.set(MAZE_START, Cell::Open);
        let mut open = 1;
        let mut stack = vec![MAZE_START];
        let mut choices: Vec<Point> = Vec::with_capacity(JUMPS.len());

        while let Some(&cur) = stack.last() {
            choices.clear();
            for d in JUMPS {
                let n = cur + d;
                if interior(n) && grid.at(n).is_blocked() {
                    choices.push(n);
                }
            }

            if choices.is_empty() {
                stack.pop();
                continue;
            }

            let next = choices[self.rng.random_range(0..choices.len())];
            let wall = Point::new((cur.x + next.x) / 2, (cur.y + next.y) / 2);
            grid.set(wall, Cell::Open);
            grid.set(next, Cell::Open);
            open += 2;
            stack.push(next);
        }

        log::debug!("maze: carved {open} open cells in {w}x{h}");
        open
    }

    /// Block each cell independently with the given probability.
    ///
    /// `probability` is clamped to `[0, 1]`; NaN counts as 0. There is no
    /// connectivity guarantee.
    ///
    /// Returns the number of blocked cells.
    pub fn random_obstacles(&mut self, grid: &mut Grid, probability: f64) -> usize {
        let p = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        let rng = &mut self.rng;
        grid.fill_fn(|_| Cell::from(rng.random_bool(p)));
        let blocked = grid.count(Cell::Blocked);
        log::debug!(
            "random obstacles: {blocked}/{} cells blocked (p = {p})",
            grid.bounds().len()
        );
        blocked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use follow_paths::reachable;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> MapGen<StdRng> {
        MapGen::new(StdRng::seed_from_u64(seed))
    }

    /// Number of 4-adjacent pairs of open cells.
    fn open_edges(g: &Grid) -> usize {
        g.bounds()
            .iter()
            .filter(|&p| g.is_open(p))
            .map(|p| g.is_open(p.shift(1, 0)) as usize + g.is_open(p.shift(0, 1)) as usize)
            .sum()
    }

    #[test]
    fn maze_is_a_spanning_tree() {
        for seed in 0..8 {
            let mut g = Grid::new(21, 15);
            let open = seeded(seed).maze(&mut g);
            assert_eq!(open, g.count(Cell::Open));

            // Connected: every open cell is reachable from the start.
            let reached = reachable(&g, g.bounds(), MAZE_START);
            assert_eq!(reached.len(), open, "seed {seed}");

            // Acyclic: a connected graph with V - 1 edges is a tree.
            assert_eq!(open_edges(&g), open - 1, "seed {seed}");
        }
    }

    #[test]
    fn maze_visits_every_corridor_cell() {
        let mut g = Grid::new(21, 15);
        let open = seeded(3).maze(&mut g);
        // 10 x 7 corridor cells joined by 69 wall cells.
        assert_eq!(open, 70 + 69);
        for y in (1..15).step_by(2) {
            for x in (1..21).step_by(2) {
                assert!(g.is_open(Point::new(x, y)), "({x}, {y})");
            }
        }
        // Even-even cells are pillars and never open.
        for y in (0..15).step_by(2) {
            for x in (0..21).step_by(2) {
                assert!(!g.is_open(Point::new(x, y)));
            }
        }
    }

    #[test]
    fn maze_keeps_border_blocked() {
        let mut g = Grid::new(16, 10);
        seeded(11).maze(&mut g);
        for p in g.bounds() {
            let edge = p.x == 0 || p.y == 0 || p.x == 15 || p.y == 9;
            if edge {
                assert!(!g.is_open(p), "border cell {p} is open");
            }
        }
        // Even sizes also leave the second-to-last line closed.
        assert!((0..10).all(|y| !g.is_open(Point::new(14, y))));
    }

    #[test]
    fn maze_on_tiny_grids() {
        let mut g = Grid::new(2, 9);
        assert_eq!(seeded(0).maze(&mut g), 0);
        assert_eq!(g.count(Cell::Open), 0);

        let mut g = Grid::new(3, 3);
        assert_eq!(seeded(0).maze(&mut g), 1);
        assert!(g.is_open(MAZE_START));
    }

    #[test]
    fn maze_is_reproducible_per_seed() {
        let mut a = Grid::new(31, 21);
        let mut b = Grid::new(31, 21);
        seeded(42).maze(&mut a);
        seeded(42).maze(&mut b);
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn maze_marks_grid_changed() {
        let mut g = Grid::new(9, 9);
        g.clear_dirty();
        let rev = g.revision();
        seeded(1).maze(&mut g);
        assert!(g.is_dirty());
        assert!(g.revision() > rev);
    }

    #[test]
    fn random_fraction_tracks_probability() {
        let mut mg = seeded(7);
        for p in [0.05, 0.2, 0.45, 0.6] {
            let mut g = Grid::new(100, 100);
            let blocked = mg.random_obstacles(&mut g, p);
            assert_eq!(blocked, g.count(Cell::Blocked));
            let frac = blocked as f64 / 10_000.0;
            assert!((frac - p).abs() < 0.03, "p = {p}, observed {frac}");
        }
    }

    #[test]
    fn random_probability_is_clamped() {
        let mut mg = seeded(9);
        let mut g = Grid::new(20, 20);
        assert_eq!(mg.random_obstacles(&mut g, 0.0), 0);
        assert_eq!(mg.random_obstacles(&mut g, 1.0), 400);
        assert_eq!(mg.random_obstacles(&mut g, 3.5), 400);
        assert_eq!(mg.random_obstacles(&mut g, -1.0), 0);
        assert_eq!(mg.random_obstacles(&mut g, f64::NAN), 0);
    }
}
