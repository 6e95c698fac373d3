//! Application loop state.

use std::time::Duration;

use follow_core::{Grid, Point};
use follow_draw::{Brush, DrawingTool};
use follow_gen::MapGen;
use follow_paths::{PathFinder, SearchStats, Walkable};
use rand::Rng;

use crate::mover::Mover;
use crate::settings::{Settings, SettingsError, UnreachablePolicy};

/// What happened during one [`Session::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// A path search ran this tick.
    pub recomputed: bool,
    /// The mover advanced one cell.
    pub moved: bool,
    /// Whether the last search found the target. `false` without a target.
    pub reachable: bool,
}

/// Everything the editor loop needs between frames.
///
/// Each [`tick`](Self::tick) first brings the path up to date with the
/// grid and the target, then lets the mover take at most one step. Edits
/// made between ticks are therefore always seen by the next search.
pub struct Session<R: Rng> {
    grid: Grid,
    mapgen: MapGen<R>,
    tool: DrawingTool,
    finder: PathFinder,
    mover: Mover,
    settings: Settings,
    target: Option<Point>,
    path: Vec<Point>,
    reachable: bool,
    canvas: Option<(f32, f32)>,
    // Grid revision and target of the last search.
    searched: Option<(u64, Option<Point>)>,
}

impl<R: Rng> Session<R> {
    /// Create a session with a `width × height` grid, the mover at its
    /// centre and no target.
    pub fn new(
        width: i32,
        height: i32,
        rng: R,
        settings: Settings,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        let mut grid = Grid::new(width, height);
        grid.set_cell_size(settings.cell_size);
        let mut mover = Mover::new(centre(&grid));
        mover.set_speed(settings.speed);
        Ok(Self {
            finder: PathFinder::new(grid.bounds()),
            grid,
            mapgen: MapGen::new(rng),
            tool: DrawingTool::with_axis_lock(settings.axis_lock),
            mover,
            settings,
            target: None,
            path: Vec::new(),
            reachable: false,
            canvas: None,
            searched: None,
        })
    }

    // -----------------------------------------------------------------------
    // Grid shape
    // -----------------------------------------------------------------------

    /// Fill a canvas of the given pixel size with whole cells.
    pub fn fit(&mut self, canvas_width: f32, canvas_height: f32) {
        self.canvas = Some((canvas_width, canvas_height));
        self.grid.fit(canvas_width, canvas_height);
        self.reset_after_resize();
    }

    /// Resize to `width × height` cells, all open.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.grid.resize(width, height);
        self.reset_after_resize();
    }

    fn reset_after_resize(&mut self) {
        self.finder.set_range(self.grid.bounds());
        self.tool.release();
        self.mover.place(centre(&self.grid));
        self.path.clear();
        self.reachable = false;
        self.searched = None;
        if self.target.is_some_and(|t| !self.grid.contains(t)) {
            self.target = None;
        }
        log::debug!(
            "session: grid is now {}x{} at {} px",
            self.grid.width(),
            self.grid.height(),
            self.grid.cell_size()
        );
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Set or clear the cell the mover should head to.
    pub fn set_target(&mut self, target: Option<Point>) {
        self.target = target;
    }

    #[inline]
    pub fn target(&self) -> Option<Point> {
        self.target
    }

    pub fn press(&mut self, cell: Point, brush: Brush) -> bool {
        self.tool.press(&mut self.grid, cell, brush)
    }

    pub fn drag(&mut self, cell: Point) -> usize {
        self.tool.drag(&mut self.grid, cell)
    }

    pub fn release(&mut self) {
        self.tool.release();
    }

    /// Engage or disengage the axis lock, also mid-drag.
    pub fn set_axis_lock(&mut self, on: bool) {
        self.settings.axis_lock = on;
        self.tool.set_axis_lock(on);
    }

    /// Replace the grid contents with a maze. Returns the open cell count.
    pub fn generate_maze(&mut self) -> usize {
        self.tool.release();
        self.mapgen.maze(&mut self.grid)
    }

    /// Replace the grid contents with random obstacles at the configured
    /// probability. Returns the blocked cell count.
    pub fn generate_random(&mut self) -> usize {
        self.tool.release();
        self.mapgen
            .random_obstacles(&mut self.grid, self.settings.obstacle_probability)
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    pub fn set_speed(&mut self, speed: f64) -> Result<(), SettingsError> {
        self.apply_settings(self.settings.clone().with_speed(speed))
    }

    /// Switch to new settings. Invalid settings are rejected as a whole and
    /// the current ones stay in effect.
    ///
    /// A new cell size refits the last canvas passed to [`fit`](Self::fit),
    /// which resets the grid like the fit itself would.
    pub fn apply_settings(&mut self, settings: Settings) -> Result<(), SettingsError> {
        if let Err(e) = settings.validate() {
            log::warn!("session: rejected settings: {e}");
            return Err(e);
        }
        self.mover.set_speed(settings.speed);
        self.tool.set_axis_lock(settings.axis_lock);
        let resized = settings.cell_size != self.settings.cell_size;
        self.settings = settings;
        if resized {
            self.grid.set_cell_size(self.settings.cell_size);
            if let Some((w, h)) = self.canvas {
                self.fit(w, h);
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Advance the session to time `now`.
    pub fn tick(&mut self, now: Duration) -> TickReport {
        let recomputed = self.refresh_path();
        let moved = self.mover.tick(now);
        TickReport {
            recomputed,
            moved,
            reachable: self.reachable,
        }
    }

    /// Search again if the grid or the target changed since the last search.
    fn refresh_path(&mut self) -> bool {
        let key = (self.grid.revision(), self.target);
        if self.searched == Some(key) {
            return false;
        }
        self.searched = Some(key);

        let Some(target) = self.target else {
            self.reachable = false;
            self.path.clear();
            self.mover.clear_path();
            log::trace!("session: no target");
            return true;
        };

        let from = self.mover.position();
        let walk = FromCell {
            grid: &self.grid,
            start: from,
        };
        match self.finder.find_path(&walk, from, target) {
            Some(path) => {
                log::trace!(
                    "session: {} -> {target}: {} steps ({:?})",
                    from,
                    path.len() - 1,
                    self.finder.stats()
                );
                self.reachable = true;
                self.mover.set_path(path.clone());
                self.path = path;
            }
            None => {
                log::trace!("session: {from} -> {target}: unreachable");
                self.reachable = false;
                match self.settings.unreachable {
                    UnreachablePolicy::Clear => {
                        self.path.clear();
                        self.mover.clear_path();
                    }
                    UnreachablePolicy::KeepLast => {
                        // The old route stays on display, but the mover
                        // stops short of any wall drawn across it.
                        let grid = &self.grid;
                        let cut = self.mover.cut_at(|p| !grid.is_open(p));
                        if cut > 0 {
                            log::trace!("session: stopping {cut} steps early");
                        }
                    }
                }
            }
        }
        true
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for direct edits. Changes are picked up by the
    /// next tick through the grid revision.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[inline]
    pub fn mover(&self) -> &Mover {
        &self.mover
    }

    /// The path to display: the last one found.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Statistics of the last search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.finder.stats()
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.tool.is_drawing()
    }
}

/// The grid as seen from the mover's cell. That cell stays walkable even
/// when a wall is drawn or carved under it, so the mover can step off.
struct FromCell<'a> {
    grid: &'a Grid,
    start: Point,
}

impl Walkable for FromCell<'_> {
    #[inline]
    fn walkable(&self, p: Point) -> bool {
        p == self.start || self.grid.is_open(p)
    }
}

fn centre(grid: &Grid) -> Point {
    Point::new(grid.width() / 2, grid.height() / 2)
}
