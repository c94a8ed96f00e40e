use crate::domain::cell::Cell;
use crate::systems::brushes::Brush;

use super::SimulationCore;

pub(super) fn add_brush(core: &mut SimulationCore, id: u32, brush: Brush) {
    core.brushes.add(id, brush);
}

pub(super) fn remove_brush(core: &mut SimulationCore, id: u32) -> Option<Brush> {
    core.brushes.remove(id)
}

pub(super) fn explode(core: &mut SimulationCore, x: i32, y: i32) {
    let (force, limit) = (core.config.explosion_force, core.config.explosion_radius);
    core.explosions.trigger(x, y, force, limit);
}

/// Host-side placement. Unlike rule spawns the cell is left unmarked so it
/// takes part in the next tick.
pub(super) fn spawn(core: &mut SimulationCore, x: i32, y: i32, cell: Cell) -> bool {
    if cell.is_empty() {
        return destroy(core, x, y);
    }
    if !core.grid.spawn(x, y, cell) {
        return false;
    }
    core.grid.set_updated(x, y, false);
    true
}

pub(super) fn destroy(core: &mut SimulationCore, x: i32, y: i32) -> bool {
    core.grid.destroy(x, y)
}

pub(super) fn clear(core: &mut SimulationCore) {
    core.grid.clear();
    core.life_board.clear();
    core.explosions.clear();
    core.life_elapsed_ms = 0.0;
    log::info!("dust: level cleared");
}
