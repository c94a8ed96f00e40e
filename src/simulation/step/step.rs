use rand::Rng;

use crate::spatial::geometry::permutation;
use crate::systems::behaviors::UpdateContext;

use super::{PerfTimer, SimulationCore};

pub(super) fn step(core: &mut SimulationCore, elapsed_ms: f64) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === BRUSHES ===
    // Applied even while paused so the host can keep drawing.
    let brush_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let painted = core.brushes.apply_all(&mut core.grid, core.config.max_grains);
    if let Some(t0) = brush_start {
        core.perf_stats.brush_ms = t0.elapsed_ms();
        core.perf_stats.grains_painted = painted;
    }

    if core.paused {
        core.grid.reset_updated();
        finish(core, step_start);
        return;
    }

    // === LIFE CLOCK ===
    core.life_elapsed_ms += elapsed_ms.max(0.0);
    let life_due = core.life_elapsed_ms >= core.config.life_interval_ms;
    if life_due {
        core.life_board.copy_cells_from(&core.grid);
    }

    // === EXPLOSIONS ===
    if perf_on {
        let t0 = PerfTimer::start();
        core.explosions.propagate(&mut core.grid);
        core.perf_stats.explosion_ms = t0.elapsed_ms();
    } else {
        core.explosions.propagate(&mut core.grid);
    }

    // === CELL PASS ===
    let rules_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let lived = cell_pass(core, life_due);
    if let Some(t0) = rules_start {
        core.perf_stats.rules_ms = t0.elapsed_ms();
    }

    // === FRAME END ===
    core.grid.reset_updated();
    core.explosions.end_frame();
    if lived {
        log::debug!("dust: life generation at frame {}", core.frame);
        core.life_elapsed_ms = 0.0;
        if perf_on {
            core.perf_stats.life_generations = 1;
        }
    }
    core.frame += 1;
    finish(core, step_start);
}

/// One visit of every cell: x in permuted order, y from the bottom row up
/// through the permuted rows. Returns whether a life generation ran.
fn cell_pass(core: &mut SimulationCore, life_due: bool) -> bool {
    let width = core.grid.width();
    let height = core.grid.height();

    let mut ys = std::mem::take(&mut core.visit_ys);
    ys.clear();
    ys.extend(permutation(height, &mut core.rng));
    let xs = permutation(width, &mut core.rng);

    let (left, right) = core.gravity.sides();
    let mut visited = 0u32;
    let mut lived = false;

    for x in xs {
        for &y in ys.iter().rev() {
            let (x, y) = (x as i32, y as i32);
            let idx = core.grid.index(x, y);
            let cell = core.grid.get_idx(idx);
            if cell.is_empty() || core.grid.is_updated_idx(idx) {
                continue;
            }
            visited += 1;

            let lateral = if core.rng.random::<bool>() { left } else { right };
            let mut ctx = UpdateContext {
                grid: &mut core.grid,
                life_board: &core.life_board,
                explosions: &mut core.explosions,
                gravity: &core.gravity,
                params: &core.params,
                rng: &mut core.rng,
                life_due,
                lived: false,
                x,
                y,
                cell,
                lateral,
            };
            core.ladder.update(&mut ctx);
            lived |= ctx.lived;
        }
    }

    core.visit_ys = ys;
    if core.perf_enabled {
        core.perf_stats.cells_visited = visited;
    }
    lived
}

fn finish(core: &mut SimulationCore, step_start: Option<PerfTimer>) {
    let ops = core.grid.take_op_counts();
    if let Some(t0) = step_start {
        core.perf_stats.record_ops(ops);
        core.perf_stats.explosions_active = core.explosions.len() as u32;
        core.perf_stats.population = core.grid.population();
        core.perf_stats.step_ms = t0.elapsed_ms();
    }
}
