//! Level save/load in the legacy bitmask encoding.
//!
//! Saved levels are a flat row-major array of cell bitmasks. Older saves
//! used a nested column-major `grid[x][y]` array; both load.

use serde::Deserialize;

use crate::domain::cell::Cell;

use super::SimulationCore;

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelPayload {
    Flat(Vec<u32>),
    Nested(Vec<Vec<u32>>),
}

pub(super) fn level_data(core: &SimulationCore) -> Vec<u32> {
    core.grid.cells().iter().map(|c| c.to_bits()).collect()
}

pub(super) fn load_level_data(core: &mut SimulationCore, data: &[u32]) -> Result<(), String> {
    let size = core.grid.size();
    if data.len() != size {
        return Err(format!("level has {} cells, grid has {}", data.len(), size));
    }
    for (slot, &bits) in core.grid.cells.iter_mut().zip(data) {
        *slot = Cell::from_bits(bits);
    }
    reset_after_load(core);
    Ok(())
}

pub(super) fn level_json(core: &SimulationCore) -> Result<String, String> {
    serde_json::to_string(&level_data(core)).map_err(|e| e.to_string())
}

pub(super) fn load_level_json(core: &mut SimulationCore, json: &str) -> Result<(), String> {
    let payload: LevelPayload = serde_json::from_str(json).map_err(|e| e.to_string())?;
    match payload {
        LevelPayload::Flat(data) => load_level_data(core, &data),
        LevelPayload::Nested(columns) => load_columns(core, &columns),
    }
}

fn load_columns(core: &mut SimulationCore, columns: &[Vec<u32>]) -> Result<(), String> {
    let (width, height) = (core.grid.width() as usize, core.grid.height() as usize);
    if columns.len() != width {
        return Err(format!("level has {} columns, grid has {}", columns.len(), width));
    }
    if let Some((x, col)) = columns.iter().enumerate().find(|(_, c)| c.len() != height) {
        return Err(format!("column {x} has {} rows, grid has {}", col.len(), height));
    }
    for (x, col) in columns.iter().enumerate() {
        for (y, &bits) in col.iter().enumerate() {
            fast!(core.grid.cells, [y * width + x] = Cell::from_bits(bits));
        }
    }
    reset_after_load(core);
    Ok(())
}

fn reset_after_load(core: &mut SimulationCore) {
    core.grid.recount_population();
    core.grid.reset_updated();
    core.explosions.clear();
    core.life_board.clear();
    core.life_elapsed_ms = 0.0;
    log::info!("dust: level loaded ({} grains)", core.grid.population());
}
