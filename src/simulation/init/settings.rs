use crate::systems::gravity::Gravity;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn set_paused(core: &mut SimulationCore, paused: bool) {
    core.paused = paused;
}

pub(super) fn set_gravity(core: &mut SimulationCore, x: f32, y: f32) -> bool {
    match Gravity::new(x, y) {
        Some(g) => {
            core.gravity = g;
            true
        }
        None => {
            log::warn!("ignoring gravity vector ({x}, {y})");
            false
        }
    }
}

pub(super) fn set_gravity_angle(core: &mut SimulationCore, degrees: f32) -> bool {
    match Gravity::from_angle(degrees) {
        Some(g) => {
            core.gravity = g;
            true
        }
        None => {
            log::warn!("ignoring gravity angle {degrees}");
            false
        }
    }
}

pub(super) fn enable_perf_metrics(core: &mut SimulationCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &SimulationCore) -> PerfStats {
    core.perf_stats.clone()
}
