//! Simulation - owns the grid and drives one tick per host frame.
//!
//! `SimulationCore` is plain Rust and holds all state; `World` (facade.rs)
//! is the thin `wasm_bindgen` wrapper the JS host talks to. Work is split by
//! concern into the path modules below; this file only wires them together.

use rand_pcg::Pcg32;

use crate::domain::cell::Cell;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::{RuleLadder, RuleParams};
use crate::systems::brushes::{Brush, Brushes};
use crate::systems::explosions::{Explosion, Explosions};
use crate::systems::gravity::Gravity;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "level/level.rs"]
mod level;
#[path = "render/texture_fill.rs"]
mod texture_fill;
mod facade;

pub use config::SimConfig;
pub use facade::{material_color, World};
pub use perf_stats::PerfStats;
pub use texture_fill::fill_color_buffer;

use perf_timer::PerfTimer;

/// The simulation: grid, rule ladder and every piece of per-run state.
pub struct SimulationCore {
    config: SimConfig,
    params: RuleParams,
    grid: Grid,
    /// Snapshot for life generations; same size as `grid`.
    life_board: Grid,
    ladder: RuleLadder,
    explosions: Explosions,
    brushes: Brushes,

    // Settings
    gravity: Gravity,
    paused: bool,

    // State
    frame: u64,
    life_elapsed_ms: f64,
    rng: Pcg32,
    visit_ys: Vec<u32>,
    color_buffer: Vec<u8>,
    /// Counts buffer fills; seeds the flicker even while paused.
    render_frame: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Default configuration at the given size.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_core(SimConfig::with_size(width, height))
    }

    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        let mut config = SimConfig::with_size(width, height);
        config.seed = seed;
        init::create_core(config)
    }

    /// Validated construction from a full config.
    pub fn from_config(config: SimConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_core(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = SimConfig::from_json(json)?;
        Ok(init::create_core(config))
    }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Number of non-empty cells ("dust count").
    pub fn population(&self) -> u32 { self.grid.population() }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn explosions(&self) -> &[Explosion] { self.explosions.as_slice() }

    pub fn explosion_count(&self) -> usize { self.explosions.len() }

    // === Stepping ===

    /// Advance one frame of `frame_ms` simulated milliseconds.
    pub fn tick(&mut self) {
        let ms = self.config.frame_ms;
        step::step(self, ms);
    }

    /// Advance one frame, feeding the life clock a host-measured delta.
    pub fn tick_elapsed(&mut self, elapsed_ms: f64) {
        step::step(self, elapsed_ms);
    }

    // === Settings ===

    pub fn set_paused(&mut self, paused: bool) {
        settings::set_paused(self, paused);
    }

    pub fn is_paused(&self) -> bool { self.paused }

    /// Zero or non-finite vectors are ignored.
    pub fn set_gravity(&mut self, x: f32, y: f32) -> bool {
        settings::set_gravity(self, x, y)
    }

    pub fn set_gravity_angle(&mut self, degrees: f32) -> bool {
        settings::set_gravity_angle(self, degrees)
    }

    pub fn gravity(&self) -> &Gravity { &self.gravity }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Commands ===

    pub fn add_brush(&mut self, id: u32, brush: Brush) {
        commands::add_brush(self, id, brush);
    }

    pub fn remove_brush(&mut self, id: u32) -> Option<Brush> {
        commands::remove_brush(self, id)
    }

    pub fn brushes(&self) -> &Brushes { &self.brushes }

    /// Detonate at `(x, y)` with the configured force and radius.
    pub fn explode(&mut self, x: i32, y: i32) {
        commands::explode(self, x, y);
    }

    pub fn spawn(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        commands::spawn(self, x, y, cell)
    }

    pub fn destroy(&mut self, x: i32, y: i32) -> bool {
        commands::destroy(self, x, y)
    }

    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.grid.get(x, y)
    }

    /// Empty the grid, explosions and markers. Brushes stay registered.
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === Level I/O ===

    pub fn level_data(&self) -> Vec<u32> {
        level::level_data(self)
    }

    pub fn load_level_data(&mut self, data: &[u32]) -> Result<(), String> {
        level::load_level_data(self, data)
    }

    pub fn level_json(&self) -> Result<String, String> {
        level::level_json(self)
    }

    pub fn load_level_json(&mut self, json: &str) -> Result<(), String> {
        level::load_level_json(self, json)
    }

    // === Rendering ===

    /// Refresh and return the RGBA8 buffer (`width * height * 4` bytes).
    pub fn fill_color_buffer(&mut self) -> &[u8] {
        self.render_frame = self.render_frame.wrapping_add(1);
        let seed = self.render_frame.wrapping_mul(0x9E37_79B9) ^ 0x5EED;
        texture_fill::fill_color_buffer(&self.grid, &mut self.color_buffer, seed);
        &self.color_buffer
    }

    pub fn color_buffer(&self) -> &[u8] { &self.color_buffer }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
