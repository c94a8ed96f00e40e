//! InfectionRule - infectant cells overwrite their neighbours with themselves.

use super::{Flow, Rule, UpdateContext};
use crate::spatial::grid::NEIGHBOURS;

/// Per-neighbour, per-tick takeover threshold (`random() > 0.91`).
const INFECT_THRESHOLD: f32 = 0.91;

pub struct InfectionRule;

impl Rule for InfectionRule {
    fn apply(&self, ctx: &mut UpdateContext) -> Flow {
        let cell = ctx.cell;
        if !cell.infectant() || ctx.grid.surrounded(ctx.x, ctx.y) {
            return Flow::Continue;
        }

        for (dx, dy) in NEIGHBOURS {
            let (nx, ny) = (ctx.x + dx, ctx.y + dy);
            if !ctx.grid.in_bounds(nx, ny) {
                continue;
            }
            let n = ctx.grid.get(nx, ny);
            if n.is_empty() || n.infectant() {
                continue;
            }
            if ctx.chance_above(INFECT_THRESHOLD) {
                ctx.grid.spawn(nx, ny, cell);
            }
        }
        Flow::Continue
    }
}
