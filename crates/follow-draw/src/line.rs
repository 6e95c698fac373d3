use std::collections::HashSet;

use follow_core::Point;

/// Cells on the line from `from` to `to`, both inclusive.
///
/// Integer Bresenham walk with an error accumulator. The result is
/// 8-connected, has no gaps and contains every position once, in walk order.
/// `from == to` yields a single cell.
pub fn rasterize(from: Point, to: Point) -> Vec<Point> {
    // Widened so extreme coordinates cannot overflow the error terms.
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = (i64::from(to.y) - i64::from(from.y)).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx - dy;

    let len = usize::try_from(dx.max(dy)).map_or(0, |n| n.saturating_add(1));
    let mut cells = Vec::with_capacity(len);
    let mut seen = HashSet::new();
    let mut p = from;
    loop {
        if seen.insert(p) {
            cells.push(p);
        }
        if p == to {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            p.x += sx;
        }
        if e2 < dx {
            err += dx;
            p.y += sy;
        }
    }
    cells
}

/// Axis a locked drag is constrained to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Row of the anchor: `y` is pinned.
    Horizontal,
    /// Column of the anchor: `x` is pinned.
    Vertical,
}

impl Axis {
    /// The axis a movement by `delta` follows. Ties go vertical.
    #[inline]
    pub fn of(delta: Point) -> Self {
        if delta.x.abs() > delta.y.abs() {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// Project `p` onto the line through `anchor` along this axis.
    #[inline]
    pub fn project(self, anchor: Point, p: Point) -> Point {
        match self {
            Self::Horizontal => Point::new(p.x, anchor.y),
            Self::Vertical => Point::new(anchor.x, p.y),
        }
    }
}

/// Per-drag line rasterization with optional axis lock.
///
/// While a drag is active and the lock is engaged, the first movement away
/// from the anchor decides the [`Axis`]. From then on every segment runs from
/// the anchor to the pointer projected onto that axis, until the drag ends
/// or the lock is disengaged.
#[derive(Clone, Debug, Default)]
pub struct LineRasterizer {
    lock: bool,
    anchor: Option<Point>,
    last: Option<Point>,
    axis: Option<Axis>,
}

impl LineRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A rasterizer with the lock initially engaged or not.
    pub fn with_axis_lock(lock: bool) -> Self {
        Self {
            lock,
            ..Self::default()
        }
    }

    /// Start a drag at `start`.
    pub fn begin(&mut self, start: Point) {
        self.anchor = Some(start);
        self.last = Some(start);
        self.axis = None;
    }

    /// Finish the current drag. The lock setting itself is kept.
    pub fn end(&mut self) {
        self.anchor = None;
        self.last = None;
        self.axis = None;
    }

    /// Whether a drag is in progress.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    #[inline]
    pub fn axis_lock(&self) -> bool {
        self.lock
    }

    /// Engage or disengage the axis lock.
    ///
    /// Either way the current axis is forgotten. Engaging during a drag
    /// re-anchors at the latest drag position so the next movement picks a
    /// fresh axis from there.
    pub fn set_axis_lock(&mut self, on: bool) {
        if on == self.lock {
            return;
        }
        self.lock = on;
        self.axis = None;
        if on && self.last.is_some() {
            self.anchor = self.last;
        }
    }

    /// The axis the current drag is locked to, if any.
    #[inline]
    pub fn locked_axis(&self) -> Option<Axis> {
        self.axis
    }

    /// The cells to edit for a pointer move from `from` to `to`.
    pub fn segment(&mut self, from: Point, to: Point) -> Vec<Point> {
        let cells = match (self.lock, self.anchor) {
            (true, Some(anchor)) => match self.lock_axis(anchor, to) {
                Some(axis) => rasterize(anchor, axis.project(anchor, to)),
                None => vec![anchor],
            },
            _ => rasterize(from, to),
        };
        if self.anchor.is_some() {
            self.last = Some(to);
        }
        cells
    }

    fn lock_axis(&mut self, anchor: Point, to: Point) -> Option<Axis> {
        if self.axis.is_none() {
            let delta = to - anchor;
            if delta != Point::ZERO {
                self.axis = Some(Axis::of(delta));
            }
        }
        self.axis
    }
}
