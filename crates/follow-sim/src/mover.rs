//! Time-stepped movement along a path.

use std::time::Duration;

use follow_core::Point;

/// Default speed in cells per second.
pub const DEFAULT_SPEED: f64 = 5.0;

/// Something that walks along a path one cell at a time.
///
/// Time is supplied by the caller as a monotonic [`Duration`] since some
/// fixed origin, so the mover works the same under a real clock and in
/// tests.
#[derive(Debug, Clone)]
pub struct Mover {
    pos: Point,
    path: Vec<Point>,
    cursor: usize,
    speed: f64,
    last_move: Duration,
}

impl Default for Mover {
    fn default() -> Self {
        Self::new(Point::ZERO)
    }
}

impl Mover {
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            path: Vec::new(),
            cursor: 0,
            speed: DEFAULT_SPEED,
            last_move: Duration::ZERO,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.pos
    }

    /// Teleport to `p` and forget the current path.
    pub fn place(&mut self, p: Point) {
        self.pos = p;
        self.clear_path();
    }

    /// Follow `path` from its first element. The position is not changed;
    /// the first advance moves to `path[1]`.
    pub fn set_path(&mut self, path: Vec<Point>) {
        self.path = path;
        self.cursor = 0;
    }

    pub fn clear_path(&mut self) {
        self.path.clear();
        self.cursor = 0;
    }

    /// The path being followed, including cells already walked.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Number of steps left.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.path.len().saturating_sub(self.cursor + 1)
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.remaining() > 0
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Change the speed in cells per second. Non-finite or non-positive
    /// values are ignored.
    pub fn set_speed(&mut self, speed: f64) {
        if !speed.is_finite() || speed <= 0.0 {
            log::warn!("mover: ignoring invalid speed {speed}");
            return;
        }
        self.speed = speed;
    }

    /// Time between two steps at the current speed. Speeds too slow to
    /// express as a `Duration` never step.
    #[inline]
    pub fn step_interval(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.speed).unwrap_or(Duration::MAX)
    }

    /// Drop the part of the path from the first step `blocked` rejects.
    /// Cells already walked, including the current one, are kept.
    ///
    /// Returns the number of steps removed.
    pub fn cut_at(&mut self, blocked: impl Fn(Point) -> bool) -> usize {
        let ahead = self.path.get(self.cursor + 1..).unwrap_or(&[]);
        let Some(i) = ahead.iter().position(|&p| blocked(p)) else {
            return 0;
        };
        let keep = self.cursor + 1 + i;
        let removed = self.path.len() - keep;
        self.path.truncate(keep);
        removed
    }

    /// Advance at most one cell. Returns whether the position changed.
    ///
    /// While idle the step clock follows `now`, so the first step after a
    /// new path waits a full interval only if the mover moved recently.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.cursor + 1 >= self.path.len() {
            self.last_move = now;
            return false;
        }
        if now.saturating_sub(self.last_move) < self.step_interval() {
            return false;
        }
        self.cursor += 1;
        self.pos = self.path[self.cursor];
        self.last_move = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn line(n: i32) -> Vec<Point> {
        (0..n).map(|x| Point::new(x, 0)).collect()
    }

    #[test]
    fn steps_once_per_interval() {
        let mut m = Mover::new(Point::ZERO);
        m.tick(ms(0));
        m.set_path(line(4));
        assert_eq!(m.remaining(), 3);

        // 5 cells/s: one step every 200 ms.
        assert!(!m.tick(ms(100)));
        assert_eq!(m.position(), Point::ZERO);
        assert!(m.tick(ms(200)));
        assert_eq!(m.position(), Point::new(1, 0));
        assert!(!m.tick(ms(399)));
        assert!(m.tick(ms(400)));
        // A long gap still only moves one cell.
        assert!(m.tick(ms(5000)));
        assert_eq!(m.position(), Point::new(3, 0));
        assert!(!m.is_moving());
        assert!(!m.tick(ms(9000)));
    }

    #[test]
    fn idle_clock_follows_now() {
        let mut m = Mover::new(Point::ZERO);
        m.tick(ms(1000));
        m.set_path(line(2));
        assert!(!m.tick(ms(1100)));
        assert!(m.tick(ms(1200)));
    }

    #[test]
    fn set_path_does_not_teleport() {
        let mut m = Mover::new(Point::new(5, 5));
        m.set_path(vec![Point::new(5, 5), Point::new(5, 6)]);
        assert_eq!(m.position(), Point::new(5, 5));
        assert!(m.is_moving());
        m.clear_path();
        assert!(m.path().is_empty());
        assert_eq!(m.remaining(), 0);
        assert_eq!(m.position(), Point::new(5, 5));
    }

    #[test]
    fn speed_changes_take_effect_next_tick() {
        let mut m = Mover::new(Point::ZERO);
        m.tick(ms(0));
        m.set_path(line(5));
        m.set_speed(10.0);
        assert!(m.tick(ms(100)));
        m.set_speed(0.0);
        m.set_speed(f64::NAN);
        m.set_speed(-3.0);
        assert_eq!(m.speed(), 10.0);
        assert_eq!(m.step_interval(), ms(100));
    }

    #[test]
    fn place_teleports_and_stops() {
        let mut m = Mover::default();
        m.set_path(line(3));
        m.place(Point::new(7, 2));
        assert_eq!(m.position(), Point::new(7, 2));
        assert!(!m.is_moving());
        assert!(!m.tick(ms(10_000)));
    }

    #[test]
    fn absurdly_slow_speed_never_steps() {
        let mut m = Mover::new(Point::ZERO);
        m.set_speed(1e-20);
        assert_eq!(m.speed(), 1e-20);
        assert_eq!(m.step_interval(), Duration::MAX);
        m.set_path(line(2));
        assert!(!m.tick(ms(10)));
        assert!(!m.tick(Duration::from_secs(u64::MAX)));
        assert_eq!(m.position(), Point::ZERO);
    }

    #[test]
    fn cut_at_keeps_the_walked_prefix() {
        let mut m = Mover::new(Point::ZERO);
        m.tick(ms(0));
        m.set_path(line(6));
        assert!(m.tick(ms(200)));
        assert!(m.tick(ms(400)));
        assert_eq!(m.position(), Point::new(2, 0));

        // Cells behind the mover and the one it stands on never cut.
        assert_eq!(m.cut_at(|p| p.x <= 2), 0);
        assert_eq!(m.remaining(), 3);

        assert_eq!(m.cut_at(|p| p.x == 4), 2);
        assert_eq!(m.path(), &line(4)[..]);
        assert!(m.tick(ms(600)));
        assert_eq!(m.position(), Point::new(3, 0));
        assert!(!m.is_moving());
        assert!(!m.tick(ms(5000)));
    }

    #[test]
    fn single_cell_path_never_moves() {
        let mut m = Mover::new(Point::new(1, 1));
        m.set_path(vec![Point::new(1, 1)]);
        assert!(!m.is_moving());
        assert!(!m.tick(ms(1000)));
    }
}
