//! Carve a maze, send the follower to the farthest reachable cell and print
//! a frame every few steps.
//!
//! Run: cargo run --bin maze-walk [seed]

use std::time::Duration;

use follow_demos::{render, walk};
use follow_gen::MAZE_START;
use follow_paths::reachable;
use follow_sim::{Session, Settings};
use rand::SeedableRng;
use rand::rngs::StdRng;

const WIDTH: i32 = 31;
const HEIGHT: i32 = 17;
const FRAME_EVERY: usize = 10;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let seed = match std::env::args().nth(1) {
        Some(s) => s.parse()?,
        None => 7,
    };
    let mut session = Session::new(
        WIDTH,
        HEIGHT,
        StdRng::seed_from_u64(seed),
        Settings::default().with_speed(20.0),
    )?;

    let open = session.generate_maze();
    println!("seed {seed}: {open} open cells");

    let grid = session.grid();
    let far = reachable(grid, grid.bounds(), MAZE_START)
        .last()
        .copied()
        .ok_or("maze has no open cells")?;
    // The centre sits between two corridor cells. If it was carved as a
    // wall, the follower steps off it on the first move.
    let centre = session.mover().position();
    session.set_target(Some(far));

    let report = session.tick(Duration::ZERO);
    if !report.reachable {
        return Err(format!("{far} is unreachable from {centre}").into());
    }
    println!(
        "{centre} -> {far}: {} steps, {} nodes expanded\n",
        session.path().len() - 1,
        session.stats().expanded
    );
    print!("{}", render(&session));

    let mut steps = 0;
    walk(&mut session, Duration::ZERO, 100_000, |s| {
        steps += 1;
        if steps % FRAME_EVERY == 0 {
            println!("\nstep {steps}");
            print!("{}", render(s));
        }
    });
    println!("\narrived at {} after {steps} steps", session.mover().position());
    Ok(())
}
