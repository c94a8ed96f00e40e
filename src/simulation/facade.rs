use wasm_bindgen::prelude::*;

use crate::domain::cell::Cell;
use crate::domain::materials::{material_by_name, props};
use crate::systems::brushes::Brush;

use super::perf_stats::PerfStats;
use super::SimulationCore;

#[wasm_bindgen]
pub struct World {
    core: SimulationCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with default settings. On wasm the RNG is seeded from
    /// `Math.random()`; natively the config's fixed seed is used.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        #[cfg(target_arch = "wasm32")]
        let core = SimulationCore::with_seed(width, height, host_seed());
        #[cfg(not(target_arch = "wasm32"))]
        let core = SimulationCore::new(width, height);
        Self { core }
    }

    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self {
            core: SimulationCore::with_seed(width, height, seed),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let core = SimulationCore::from_config_json(json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Non-empty cells ("dust count").
    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.core.population() }

    #[wasm_bindgen(getter)]
    pub fn explosion_count(&self) -> u32 { self.core.explosion_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.is_paused() }

    // === Stepping ===

    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Tick with a host-measured frame delta for the life clock.
    pub fn tick_elapsed(&mut self, elapsed_ms: f64) {
        self.core.tick_elapsed(elapsed_ms);
    }

    // === Settings ===

    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) -> bool {
        self.core.set_gravity(x, y)
    }

    pub fn set_gravity_angle(&mut self, degrees: f32) -> bool {
        self.core.set_gravity_angle(degrees)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    // === Commands ===

    /// Add or replace the brush for pointer `id`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_brush(&mut self, id: u32, x: i32, y: i32, kind: &str, size: i32, infect: bool, active: bool) {
        let mut brush = Brush::new(x, y, kind, size);
        brush.infect = infect;
        brush.active = active;
        self.core.add_brush(id, brush);
    }

    pub fn remove_brush(&mut self, id: u32) -> bool {
        self.core.remove_brush(id).is_some()
    }

    pub fn explode(&mut self, x: i32, y: i32) {
        self.core.explode(x, y);
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Place a material by palette name. Unknown names are rejected.
    pub fn spawn(&mut self, x: i32, y: i32, kind: &str) -> bool {
        match material_by_name(kind) {
            Some(m) => self.core.spawn(x, y, Cell::new(m)),
            None => false,
        }
    }

    pub fn destroy(&mut self, x: i32, y: i32) -> bool {
        self.core.destroy(x, y)
    }

    /// Cell at `(x, y)` in the legacy bitmask encoding (Solid off-grid).
    pub fn cell(&self, x: i32, y: i32) -> u32 {
        self.core.cell(x, y).to_bits()
    }

    // === Rendering ===

    /// Refresh the RGBA8 buffer; read it via `color_buffer_ptr`/`color_buffer_len`.
    pub fn fill_color_buffer(&mut self) {
        self.core.fill_color_buffer();
    }

    pub fn color_buffer_ptr(&self) -> *const u8 {
        self.core.color_buffer().as_ptr()
    }

    pub fn color_buffer_len(&self) -> usize {
        self.core.color_buffer().len()
    }

    // === Level I/O ===

    pub fn level_json(&self) -> Result<String, JsValue> {
        self.core.level_json().map_err(|e| JsValue::from_str(&e))
    }

    pub fn load_level_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.load_level_json(json).map_err(|e| JsValue::from_str(&e))
    }
}

impl World {
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SimulationCore {
        &mut self.core
    }
}

/// Packed `0xRRGGBB` palette colour for a material name, if known.
#[wasm_bindgen]
pub fn material_color(name: &str) -> Option<u32> {
    let [r, g, b] = props(material_by_name(name)?).color;
    Some(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
}

#[cfg(target_arch = "wasm32")]
fn host_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}
