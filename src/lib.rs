//! Dust Engine - falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - utils/       - `fast!` indexing macro
//! - spatial/     - Grid and geometry (stepper, line, circle)
//! - domain/      - Cells, flags and the material table
//! - systems/     - Rules, brushes, explosions, gravity
//! - simulation/  - Tick driver, commands, level I/O, wasm facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod utils;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

pub use domain::cell::{Cell, Flags, Material};
pub use spatial::grid::Grid;
pub use simulation::{material_color, PerfStats, SimConfig, SimulationCore, World};
pub use systems::brushes::Brush;

use wasm_bindgen::prelude::*;

use domain::cell::bits;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(target_arch = "wasm32", feature = "parallel"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize logging and the panic hook. Safe to call more than once.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        // Err only when a logger is already installed.
        let _ = console_log::init_with_level(log::Level::Info);
    }

    log::info!("dust engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Legacy material bits for the JS palette and saved levels
#[wasm_bindgen]
pub fn mat_space() -> u32 { bits::SPACE }
#[wasm_bindgen]
pub fn mat_sand() -> u32 { bits::SAND }
#[wasm_bindgen]
pub fn mat_oil() -> u32 { bits::OIL }
#[wasm_bindgen]
pub fn mat_fire() -> u32 { bits::FIRE }
#[wasm_bindgen]
pub fn mat_lava() -> u32 { bits::LAVA }
#[wasm_bindgen]
pub fn mat_water() -> u32 { bits::WATER }
#[wasm_bindgen]
pub fn mat_steam() -> u32 { bits::STEAM }
#[wasm_bindgen]
pub fn mat_solid() -> u32 { bits::SOLID }
#[wasm_bindgen]
pub fn mat_burning() -> u32 { bits::BURNING }
#[wasm_bindgen]
pub fn mat_life() -> u32 { bits::LIFE }
#[wasm_bindgen]
pub fn mat_infectant() -> u32 { bits::INFECTANT }
#[wasm_bindgen]
pub fn mat_c4() -> u32 { bits::C4 }
#[wasm_bindgen]
pub fn mat_fuse() -> u32 { bits::FUSE }
#[wasm_bindgen]
pub fn mat_spring() -> u32 { bits::SPRING }
#[wasm_bindgen]
pub fn mat_volcanic() -> u32 { bits::VOLCANIC }
#[wasm_bindgen]
pub fn mat_oil_well() -> u32 { bits::OIL_WELL }
