use wasm_bindgen::prelude::*;

use crate::spatial::grid::OpCounts;

/// Snapshot of the last tick's work. All zeros while metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) brush_ms: f64,
    pub(super) explosion_ms: f64,
    pub(super) rules_ms: f64,
    pub(super) cells_visited: u32,
    pub(super) grains_painted: u32,
    pub(super) moves: u32,
    pub(super) swaps: u32,
    pub(super) spawns: u32,
    pub(super) destroys: u32,
    pub(super) explosions_active: u32,
    pub(super) life_generations: u32,
    pub(super) population: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_ops(&mut self, ops: OpCounts) {
        self.moves = ops.moves;
        self.swaps = ops.swaps;
        self.spawns = ops.spawns;
        self.destroys = ops.destroys;
    }
}

impl Default for PerfStats {
    fn default() -> Self {
        Self {
            step_ms: 0.0,
            brush_ms: 0.0,
            explosion_ms: 0.0,
            rules_ms: 0.0,
            cells_visited: 0,
            grains_painted: 0,
            moves: 0,
            swaps: 0,
            spawns: 0,
            destroys: 0,
            explosions_active: 0,
            life_generations: 0,
            population: 0,
        }
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn brush_ms(&self) -> f64 { self.brush_ms }
    #[wasm_bindgen(getter)]
    pub fn explosion_ms(&self) -> f64 { self.explosion_ms }
    #[wasm_bindgen(getter)]
    pub fn rules_ms(&self) -> f64 { self.rules_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_visited(&self) -> u32 { self.cells_visited }
    #[wasm_bindgen(getter)]
    pub fn grains_painted(&self) -> u32 { self.grains_painted }
    #[wasm_bindgen(getter)]
    pub fn moves(&self) -> u32 { self.moves }
    #[wasm_bindgen(getter)]
    pub fn swaps(&self) -> u32 { self.swaps }
    #[wasm_bindgen(getter)]
    pub fn spawns(&self) -> u32 { self.spawns }
    #[wasm_bindgen(getter)]
    pub fn destroys(&self) -> u32 { self.destroys }
    #[wasm_bindgen(getter)]
    pub fn explosions_active(&self) -> u32 { self.explosions_active }
    #[wasm_bindgen(getter)]
    pub fn life_generations(&self) -> u32 { self.life_generations }
    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.population }
}
