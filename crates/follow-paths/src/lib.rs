//! Pathfinding for 4-connected open/blocked grids.
//!
//! - **A\*** shortest-path search with a straight-line fast path
//!   ([`PathFinder::find_path`], [`find_path`])
//! - the fast path on its own ([`straight_path`])
//! - breadth-first **reachability** flood fill ([`reachable`])
//!
//! Movement is uniform-cost in the four cardinal directions and the search
//! heuristic is the Manhattan distance. Ties between equally good frontier
//! nodes are broken by lower heuristic, then by insertion order, so the
//! same input always yields the same path.
//!
//! All algorithms read the map through the [`Walkable`] trait. Positions
//! outside the search bounds are never walkable.

mod astar;
mod distance;
mod flood;
mod pathfinder;
mod straight;
mod traits;

pub use distance::manhattan;
pub use flood::reachable;
pub use pathfinder::{PathFinder, SearchStats, find_path};
pub use straight::straight_path;
pub use traits::{WalkFn, Walkable};
