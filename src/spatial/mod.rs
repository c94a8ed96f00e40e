//! Spatial layer: the grid that owns every cell, plus the integer geometry
//! (visit order, lines, circles) the simulation walks it with.

pub mod geometry;
pub mod grid;
