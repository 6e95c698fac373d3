//! Turning pointer drags into cell edits.
//!
//! [`rasterize`] converts two cell positions into the gap-free set of cells
//! between them. [`LineRasterizer`] adds the per-drag axis lock, and
//! [`DrawingTool`] runs the press / drag / release cycle against a
//! [`Grid`](follow_core::Grid).

mod line;
mod tool;

pub use line::{Axis, LineRasterizer, rasterize};
pub use tool::{Brush, DrawingTool};
