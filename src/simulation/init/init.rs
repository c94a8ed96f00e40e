use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::spatial::grid::Grid;
use crate::systems::behaviors::RuleLadder;
use crate::systems::brushes::Brushes;
use crate::systems::explosions::Explosions;
use crate::systems::gravity::Gravity;

use super::config::SimConfig;
use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_core(config: SimConfig) -> SimulationCore {
    let (width, height) = (config.width, config.height);
    log::info!("dust: creating {width}x{height} world (seed {:#x})", config.seed);

    SimulationCore {
        params: config.rule_params(),
        grid: Grid::new(width, height),
        life_board: Grid::new(width, height),
        ladder: RuleLadder::new(),
        explosions: Explosions::new(),
        brushes: Brushes::new(),
        gravity: Gravity::default(),
        paused: false,
        frame: 0,
        life_elapsed_ms: 0.0,
        rng: Pcg32::seed_from_u64(config.seed),
        visit_ys: Vec::with_capacity(height as usize),
        color_buffer: vec![0u8; (width as usize) * (height as usize) * 4],
        render_frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    }
}
