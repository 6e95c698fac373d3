use follow_core::{Cell, Grid, Point};

use crate::line::{Axis, LineRasterizer};

/// What a drag paints.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Brush {
    #[default]
    Wall,
    Erase,
}

impl Brush {
    /// The cell value this brush writes.
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Brush::Wall => Cell::Blocked,
            Brush::Erase => Cell::Open,
        }
    }
}

/// Press / drag / release state machine writing into a [`Grid`].
///
/// A press paints the pressed cell and starts a drag. Every drag move paints
/// the cells [`LineRasterizer::segment`] returns between the previous pointer
/// cell and the new one, so fast pointer motion leaves no gaps. Moves that
/// stay in the same cell do nothing.
#[derive(Clone, Debug, Default)]
pub struct DrawingTool {
    raster: LineRasterizer,
    brush: Option<Brush>,
    prev: Option<Point>,
}

impl DrawingTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axis_lock(lock: bool) -> Self {
        Self {
            raster: LineRasterizer::with_axis_lock(lock),
            ..Self::default()
        }
    }

    /// Start a drag at `cell` and paint it. Returns whether the grid changed.
    ///
    /// A press while already drawing restarts the drag from `cell`.
    pub fn press(&mut self, grid: &mut Grid, cell: Point, brush: Brush) -> bool {
        self.brush = Some(brush);
        self.prev = Some(cell);
        self.raster.begin(cell);
        grid.set(cell, brush.cell())
    }

    /// Continue the drag to `cell`. Returns the number of cells changed.
    pub fn drag(&mut self, grid: &mut Grid, cell: Point) -> usize {
        let (Some(brush), Some(prev)) = (self.brush, self.prev) else {
            return 0;
        };
        if cell == prev {
            return 0;
        }
        self.prev = Some(cell);
        let value = brush.cell();
        self.raster
            .segment(prev, cell)
            .into_iter()
            .filter(|&p| grid.set(p, value))
            .count()
    }

    /// End the drag.
    pub fn release(&mut self) {
        self.brush = None;
        self.prev = None;
        self.raster.end();
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.brush.is_some()
    }

    /// Brush of the current drag.
    #[inline]
    pub fn brush(&self) -> Option<Brush> {
        self.brush
    }

    #[inline]
    pub fn axis_lock(&self) -> bool {
        self.raster.axis_lock()
    }

    pub fn set_axis_lock(&mut self, on: bool) {
        self.raster.set_axis_lock(on);
    }

    #[inline]
    pub fn locked_axis(&self) -> Option<Axis> {
        self.raster.locked_axis()
    }
}
