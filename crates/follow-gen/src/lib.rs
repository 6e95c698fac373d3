//! Grid generators for the follow editor.
//!
//! - **Maze**: recursive backtracking on the odd-coordinate corridor
//!   lattice, producing a perfect maze (one simple path between any two
//!   open cells).
//! - **Random obstacles**: an independent Bernoulli field.

pub mod mapgen;

pub use mapgen::{MAZE_START, MapGen};
