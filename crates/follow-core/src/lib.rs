//! **follow-core**: grid model for the *follow* path editor.
//!
//! This crate provides the foundational types shared by the rest of the
//! workspace: geometry primitives, the two-state [`Cell`], and the editable
//! [`Grid`] with its change tracking and pixel/cell coordinate conversion.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use geom::{Point, Range};
pub use grid::Grid;
