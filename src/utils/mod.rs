//! Shared helpers. Loaded first in `lib.rs` so the macros are visible everywhere.

#[macro_use]
pub mod safety;
