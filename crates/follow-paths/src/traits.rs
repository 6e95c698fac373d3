use follow_core::{Grid, Point};

/// Read-only walkability query used by every search.
pub trait Walkable {
    /// Whether a mover may stand on `p`.
    fn walkable(&self, p: Point) -> bool;
}

impl Walkable for Grid {
    #[inline]
    fn walkable(&self, p: Point) -> bool {
        self.is_open(p)
    }
}

impl<W: Walkable + ?Sized> Walkable for &W {
    #[inline]
    fn walkable(&self, p: Point) -> bool {
        (**self).walkable(p)
    }
}

/// Adapts a plain predicate into a [`Walkable`].
///
/// ```
/// use follow_core::Point;
/// use follow_paths::{WalkFn, find_path};
///
/// let no_walls = WalkFn(|_p: Point| true);
/// let path = find_path(&no_walls, Point::new(0, 0), Point::new(2, 0), 3, 1);
/// assert_eq!(path.map(|p| p.len()), Some(3));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WalkFn<F>(pub F);

impl<F: Fn(Point) -> bool> Walkable for WalkFn<F> {
    #[inline]
    fn walkable(&self, p: Point) -> bool {
        (self.0)(p)
    }
}
