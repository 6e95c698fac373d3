//! The follower simulation.
//!
//! [`Mover`] walks a path at a fixed speed in cells per second, driven by
//! the caller's clock. [`Session`] is the whole application loop state: the
//! grid, the editing tool, the generators, the path finder and the mover,
//! configured through [`Settings`].

pub mod mover;
pub mod session;
pub mod settings;

pub use mover::{DEFAULT_SPEED, Mover};
pub use session::{Session, TickReport};
pub use settings::{Settings, SettingsError, UnreachablePolicy};
