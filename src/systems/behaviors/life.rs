//! LifeRule - Conway's Game of Life overlay.
//!
//! Only runs when the life clock is due. Counts come from `life_board`, a
//! snapshot of the grid taken when the generation started, so results do not
//! depend on visitation order.

use super::{Flow, Rule, UpdateContext};
use crate::domain::cell::{Cell, Material};
use crate::spatial::grid::NEIGHBOURS;

pub struct LifeRule;

impl Rule for LifeRule {
    fn apply(&self, ctx: &mut UpdateContext) -> Flow {
        if !ctx.cell.is(Material::Life) || !ctx.life_due {
            return Flow::Continue;
        }
        ctx.lived = true;

        let (x, y) = (ctx.x, ctx.y);
        let kin = ctx.life_board.count_neighbours(x, y, true);
        if kin < 2 || kin > 3 {
            ctx.grid.destroy(x, y);
        }

        for (dx, dy) in NEIGHBOURS {
            let (nx, ny) = (x + dx, y + dy);
            if !ctx.grid.in_bounds(nx, ny)
                || ctx.grid.is_updated(nx, ny)
                || !ctx.life_board.is_empty(nx, ny)
                || !ctx.grid.is_empty(nx, ny)
            {
                continue;
            }
            if ctx.life_board.count_neighbours(nx, ny, false) == 3 {
                ctx.grid.spawn(nx, ny, Cell::new(Material::Life));
            }
            // Examined once per generation, born or not.
            ctx.grid.set_updated(nx, ny, true);
        }
        Flow::Continue
    }
}
