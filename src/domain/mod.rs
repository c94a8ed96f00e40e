//! Domain types: what a cell is and what each material does.

pub mod cell;
pub mod materials;

pub use cell::{Cell, Flags, Material};
pub use materials::{material_by_name, props, MaterialProps};
