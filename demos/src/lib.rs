//! Shared helpers for the headless demos: ASCII frames of a session.

use std::time::Duration;

use follow_core::{Cell, Point};
use follow_sim::Session;
use rand::Rng;

/// Simulated frame length.
pub const FRAME: Duration = Duration::from_millis(50);

const WALL: char = '#';
const FLOOR: char = '.';
const PATH: char = '*';
const MOVER: char = '@';
const TARGET: char = 'X';

/// Draw the session as one line of text per grid row.
pub fn render<R: Rng>(session: &Session<R>) -> String {
    let grid = session.grid();
    let mut rows: Vec<Vec<char>> = (0..grid.height())
        .map(|_| vec![FLOOR; grid.width() as usize])
        .collect();
    let mut put = |p: Point, ch: char| {
        if grid.contains(p) {
            rows[p.y as usize][p.x as usize] = ch;
        }
    };
    for (p, c) in grid.iter() {
        if c == Cell::Blocked {
            put(p, WALL);
        }
    }
    for &p in session.path() {
        put(p, PATH);
    }
    if let Some(t) = session.target() {
        put(t, TARGET);
    }
    put(session.mover().position(), MOVER);

    let mut out = String::with_capacity(rows.len() * (grid.width() as usize + 1));
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Tick `session` one [`FRAME`] at a time from `start` until the mover
/// stops, calling `on_step` after every cell it advances. Gives up after
/// `max_frames`. Returns the time of the last frame.
pub fn walk<R: Rng>(
    session: &mut Session<R>,
    start: Duration,
    max_frames: usize,
    mut on_step: impl FnMut(&Session<R>),
) -> Duration {
    let mut now = start;
    for _ in 0..max_frames {
        now += FRAME;
        let report = session.tick(now);
        if report.moved {
            on_step(&*session);
        }
        if !session.mover().is_moving() {
            break;
        }
    }
    now
}
