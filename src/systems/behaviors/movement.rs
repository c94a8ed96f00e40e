//! MovementRule - liquid skim and powder sliding.
//!
//! Liquids that cannot fall spread sideways: they walk the interpolated line
//! toward an open side for up to `liquid_dispersal` cells, dropping into the
//! first gap below the path, else stopping on the last free cell. Everything
//! else tries a single diagonal step down.

use super::{Flow, Rule, UpdateContext};
use crate::domain::materials::props;
use crate::spatial::geometry::interpolate;
use crate::systems::gravity::{perp_dirs, slant};

pub struct MovementRule;

impl MovementRule {
    fn skim(&self, ctx: &mut UpdateContext, side: (i32, i32), down: (i32, i32)) -> Flow {
        let (x, y) = (ctx.x, ctx.y);
        let reach = ctx.params.liquid_dispersal.max(1);
        let (ex, ey) = (x + side.0 * reach, y + side.1 * reach);

        let mut last_free = None;
        for (px, py) in interpolate(x, y, ex, ey) {
            if !ctx.grid.is_empty(px, py) {
                break;
            }
            last_free = Some((px, py));
            let (gx, gy) = (px + down.0, py + down.1);
            if ctx.grid.is_empty(gx, gy) {
                ctx.grid.move_cell(x, y, gx, gy);
                return Flow::Done;
            }
        }

        if let Some((px, py)) = last_free {
            ctx.grid.move_cell(x, y, px, py);
        }
        Flow::Done
    }
}

impl Rule for MovementRule {
    fn apply(&self, ctx: &mut UpdateContext) -> Flow {
        let p = props(ctx.cell.material);
        if p.density.is_none() {
            return Flow::Continue;
        }
        let (x, y) = (ctx.x, ctx.y);
        let down = ctx.fall_dir();

        if p.liquid {
            let above = ctx.grid.get(x - down.0, y - down.1);
            let below = ctx.grid.get(x + down.0, y + down.1);
            if !above.is_empty() && !below.is_empty() {
                return Flow::Done;
            }

            let (left, right) = perp_dirs(down.0, down.1);
            let left_open = ctx.grid.is_empty(x + left.0, y + left.1);
            let right_open = ctx.grid.is_empty(x + right.0, y + right.1);
            let side = match (left_open, right_open) {
                (true, true) => ctx.lateral,
                (true, false) => left,
                (false, true) => right,
                (false, false) => return Flow::Done,
            };
            return self.skim(ctx, side, down);
        }

        let (sx, sy) = slant(down, ctx.lateral);
        let (tx, ty) = (x + sx, y + sy);
        if ctx.grid.is_empty(tx, ty) {
            ctx.grid.move_cell(x, y, tx, ty);
        }
        Flow::Done
    }
}
