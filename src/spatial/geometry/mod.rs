//! Integer geometry helpers. All of them are pure and allocation-light.

pub mod circle;
pub mod interpolate;
pub mod stepper;

pub use circle::circle_points;
pub use interpolate::{interpolate, Line};
pub use stepper::{permutation, step_params, Permutation};
