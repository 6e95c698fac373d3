//! Scripted editing session: draw walls with pointer drags, one of them with
//! the axis lock engaged, and watch the follower re-route around them.
//!
//! Run: cargo run --bin draw-walls

use std::time::Duration;

use follow_core::Point;
use follow_demos::{FRAME, render, walk};
use follow_draw::Brush;
use follow_sim::{Session, Settings, UnreachablePolicy};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::default()
        .with_speed(10.0)
        .with_unreachable(UnreachablePolicy::KeepLast);
    let mut session = Session::new(1, 1, StdRng::seed_from_u64(1), settings)?;
    // A 480x240 px canvas at 20 px per cell.
    session.fit(480.0, 240.0);
    let target = Point::new(22, 2);
    session.set_target(Some(target));

    let mut now = Duration::ZERO;
    session.tick(now);
    println!("open field:");
    print!("{}", render(&session));

    // Free-hand diagonal stroke, in pixels as a pointer would report them.
    let grid = session.grid();
    let stroke: Vec<Point> = [(300.0, 20.0), (340.0, 90.0), (380.0, 170.0)]
        .into_iter()
        .map(|(x, y)| grid.cell_from_pixel(x, y))
        .collect();
    session.press(stroke[0], Brush::Wall);
    for &cell in &stroke[1..] {
        session.drag(cell);
    }
    session.release();

    // Wobbly vertical stroke kept straight by the axis lock.
    session.set_axis_lock(true);
    session.press(Point::new(8, 0), Brush::Wall);
    for cell in [Point::new(9, 3), Point::new(7, 6), Point::new(9, 9)] {
        session.drag(cell);
    }
    session.release();
    session.set_axis_lock(false);

    now += FRAME;
    let report = session.tick(now);
    println!(
        "\nafter drawing: reachable = {}, {} steps",
        report.reachable,
        session.path().len().saturating_sub(1)
    );
    print!("{}", render(&session));

    let now = walk(&mut session, now, 10_000, |_| {});
    println!("\nat {:.1}s:", now.as_secs_f64());
    print!("{}", render(&session));
    if session.mover().position() != target {
        return Err(format!("follower stopped at {}", session.mover().position()).into());
    }
    Ok(())
}
