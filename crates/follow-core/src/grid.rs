//! The [`Grid`] type: the editable open/blocked map.
//!
//! A `Grid` owns a row-major buffer of [`Cell`]s. The buffer is replaced
//! wholesale on [`resize`](Grid::resize), never partially reshaped.
//!
//! Reads outside the bounds return [`Cell::Blocked`] and writes outside the
//! bounds are ignored, so callers driving the grid from pointer input never
//! need to bounds-check first.
//!
//! # Change tracking
//!
//! Every effective write bumps [`revision`](Grid::revision). Collaborators
//! that need to know "did anything change since I last looked" keep their
//! own copy of the revision. The single [`is_dirty`](Grid::is_dirty) flag is
//! meant for one consumer (typically the renderer's cached layer).

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// Default cell edge length in pixels.
pub const DEFAULT_CELL_SIZE: i32 = 20;

/// A 2D grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    cell_size: i32,
    revision: u64,
    dirty: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Grid {
    /// Create a new grid of the given dimensions with every cell open.
    /// Negative dimensions are treated as 0.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::sized(width, height);
        Self {
            cells: vec![Cell::Open; bounds.len()],
            bounds,
            cell_size: DEFAULT_CELL_SIZE,
            revision: 0,
            dirty: true,
        }
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Read the cell at `p`. Out-of-bounds positions are `Blocked`.
    #[inline]
    pub fn at(&self, p: Point) -> Cell {
        match self.bounds.index_of(p) {
            Some(i) => self.cells[i],
            None => Cell::Blocked,
        }
    }

    /// Whether `p` is inside the grid and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_open()
    }

    /// Write `cell` at `p`.
    ///
    /// Returns `true` if the grid changed. Out-of-bounds writes and writes of
    /// the value already stored are no-ops and leave the change tracking
    /// untouched.
    pub fn set(&mut self, p: Point, cell: Cell) -> bool {
        let Some(i) = self.bounds.index_of(p) else {
            return false;
        };
        if self.cells[i] == cell {
            return false;
        }
        self.cells[i] = cell;
        self.mark_changed();
        true
    }

    /// Set every cell to `cell`. Returns the number of cells that changed.
    pub fn fill(&mut self, cell: Cell) -> usize {
        self.fill_fn(|_| cell)
    }

    /// Set every cell to the value returned by `f`, in row-major order.
    /// Returns the number of cells that changed.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Cell) -> usize {
        let mut changed = 0;
        for (i, p) in self.bounds.iter().enumerate() {
            let c = f(p);
            if self.cells[i] != c {
                self.cells[i] = c;
                changed += 1;
            }
        }
        if changed > 0 {
            self.mark_changed();
        }
        changed
    }

    /// Replace the buffer with a fresh, all-open one of the new size.
    ///
    /// Always counts as a change, even when the size is unchanged.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.bounds = Range::sized(width, height);
        self.cells = vec![Cell::Open; self.bounds.len()];
        self.mark_changed();
    }

    /// Count how many cells equal `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// All blocked positions, row-major. This is the set a renderer paints.
    pub fn blocked_cells(&self) -> Vec<Point> {
        self.iter()
            .filter(|&(_, c)| c.is_blocked())
            .map(|(p, _)| p)
            .collect()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// The raw row-major buffer.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    // -----------------------------------------------------------------------
    // Change tracking
    // -----------------------------------------------------------------------

    /// Counter bumped on every effective change.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the grid changed since the last [`clear_dirty`](Self::clear_dirty).
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    fn mark_changed(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.dirty = true;
    }

    // -----------------------------------------------------------------------
    // Pixel <-> cell conversion
    // -----------------------------------------------------------------------

    /// Edge length of a cell in pixels.
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Change the cell edge length (at least 1 px).
    ///
    /// The cell buffer is untouched; call [`fit`](Self::fit) afterwards to
    /// re-derive the dimensions from the canvas.
    pub fn set_cell_size(&mut self, px: i32) {
        let px = px.max(1);
        if px != self.cell_size {
            self.cell_size = px;
            self.dirty = true;
        }
    }

    /// Resize to as many whole cells as fit in a canvas of the given pixel
    /// size.
    pub fn fit(&mut self, canvas_width: f32, canvas_height: f32) {
        let cs = self.cell_size as f32;
        let w = (canvas_width.max(0.0) / cs).floor() as i32;
        let h = (canvas_height.max(0.0) / cs).floor() as i32;
        self.resize(w, h);
    }

    /// The cell under a pixel position. May lie outside the grid.
    #[inline]
    pub fn cell_from_pixel(&self, px: f32, py: f32) -> Point {
        let cs = self.cell_size as f32;
        Point::new((px / cs).floor() as i32, (py / cs).floor() as i32)
    }

    /// Top-left pixel corner of a cell.
    #[inline]
    pub fn pixel_from_cell(&self, p: Point) -> (f32, f32) {
        let cs = self.cell_size as f32;
        (p.x as f32 * cs, p.y as f32 * cs)
    }

    /// Pixel centre of a cell.
    #[inline]
    pub fn center_pixel(&self, p: Point) -> (f32, f32) {
        let half = self.cell_size as f32 / 2.0;
        let (x, y) = self.pixel_from_cell(p);
        (x + half, y + half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_open() {
        let g = Grid::new(10, 5);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.count(Cell::Open), 50);
        assert!(g.blocked_cells().is_empty());
    }

    #[test]
    fn out_of_bounds_reads_blocked() {
        let g = Grid::new(4, 4);
        assert_eq!(g.at(Point::new(-1, 0)), Cell::Blocked);
        assert_eq!(g.at(Point::new(4, 0)), Cell::Blocked);
        assert_eq!(g.at(Point::new(0, 4)), Cell::Blocked);
        assert_eq!(g.at(Point::new(3, 3)), Cell::Open);
    }

    #[test]
    fn set_tracks_changes() {
        let mut g = Grid::new(4, 4);
        g.clear_dirty();
        let rev = g.revision();

        assert!(g.set(Point::new(1, 2), Cell::Blocked));
        assert_eq!(g.at(Point::new(1, 2)), Cell::Blocked);
        assert!(g.is_dirty());
        assert_eq!(g.revision(), rev + 1);

        g.clear_dirty();
        // Same value: no change.
        assert!(!g.set(Point::new(1, 2), Cell::Blocked));
        assert!(!g.is_dirty());
        assert_eq!(g.revision(), rev + 1);

        // Out of bounds: ignored.
        assert!(!g.set(Point::new(9, 9), Cell::Blocked));
        assert!(!g.is_dirty());
        assert_eq!(g.revision(), rev + 1);
    }

    #[test]
    fn resize_replaces_buffer() {
        let mut g = Grid::new(3, 3);
        g.fill(Cell::Blocked);
        let rev = g.revision();
        g.resize(5, 2);
        assert_eq!(g.size(), Point::new(5, 2));
        assert_eq!(g.count(Cell::Open), 10);
        assert!(g.revision() > rev);
    }

    #[test]
    fn zero_size_grid_blocks_everything() {
        let mut g = Grid::new(0, 7);
        assert!(g.is_empty());
        assert_eq!(g.at(Point::ZERO), Cell::Blocked);
        assert!(!g.set(Point::ZERO, Cell::Open));
        assert_eq!(g.fill(Cell::Blocked), 0);
    }

    #[test]
    fn fill_counts_changes() {
        let mut g = Grid::new(3, 3);
        g.set(Point::new(0, 0), Cell::Blocked);
        assert_eq!(g.fill(Cell::Blocked), 8);
        let rev = g.revision();
        assert_eq!(g.fill(Cell::Blocked), 0);
        assert_eq!(g.revision(), rev);
    }

    #[test]
    fn iter_and_blocked_cells_are_row_major() {
        let mut g = Grid::new(3, 2);
        g.set(Point::new(2, 0), Cell::Blocked);
        g.set(Point::new(0, 1), Cell::Blocked);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[2], (Point::new(2, 0), Cell::Blocked));
        assert_eq!(
            g.blocked_cells(),
            vec![Point::new(2, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn pixel_conversion() {
        let mut g = Grid::new(0, 0);
        assert_eq!(g.cell_size(), DEFAULT_CELL_SIZE);
        g.fit(205.0, 99.0);
        assert_eq!(g.size(), Point::new(10, 4));

        assert_eq!(g.cell_from_pixel(0.0, 0.0), Point::new(0, 0));
        assert_eq!(g.cell_from_pixel(39.9, 20.0), Point::new(1, 1));
        assert_eq!(g.cell_from_pixel(-0.5, 5.0), Point::new(-1, 0));
        assert_eq!(g.pixel_from_cell(Point::new(2, 3)), (40.0, 60.0));
        assert_eq!(g.center_pixel(Point::new(2, 3)), (50.0, 70.0));
    }

    #[test]
    fn cell_size_is_clamped_and_refits() {
        let mut g = Grid::new(0, 0);
        g.set_cell_size(0);
        assert_eq!(g.cell_size(), 1);
        g.set_cell_size(50);
        g.fit(400.0, 260.0);
        assert_eq!(g.size(), Point::new(8, 5));
    }
}
