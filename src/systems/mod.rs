//! Systems that act on the grid each tick.

pub mod behaviors;
pub mod brushes;
pub mod explosions;
pub mod gravity;
