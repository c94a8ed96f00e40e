//! FloatingRule - density-driven buoyancy.
//!
//! A cell lighter than the cell above it (relative to gravity) trades places
//! with it. Most of the time the trade is diagonal for a more turbulent rise;
//! fire always rises straight.

use super::{Flow, Rule, UpdateContext};
use crate::domain::cell::Material;
use crate::domain::materials::density;
use crate::systems::gravity::slant;

const DIAGONAL_CHANCE: f32 = 0.7;

pub struct FloatingRule;

impl Rule for FloatingRule {
    fn apply(&self, ctx: &mut UpdateContext) -> Flow {
        let cell = ctx.cell;
        let Some(mine) = density(cell.material) else {
            return Flow::Continue;
        };

        let (x, y) = (ctx.x, ctx.y);
        let (ux, uy) = ctx.gravity.up();
        let (ax, ay) = (x + ux, y + uy);
        // Off-grid reads as solid, which has no density.
        let Some(above) = density(ctx.grid.get(ax, ay).material) else {
            return Flow::Continue;
        };
        if mine >= above || ctx.grid.is_updated(ax, ay) {
            return Flow::Continue;
        }

        if !cell.is(Material::Fire) && ctx.chance_below(DIAGONAL_CHANCE) {
            let (sx, sy) = slant((ux, uy), ctx.lateral);
            let (dx, dy) = (x + sx, y + sy);
            let diagonal_ok = match density(ctx.grid.get(dx, dy).material) {
                Some(d) => d > mine && !ctx.grid.is_updated(dx, dy),
                None => false,
            };
            if diagonal_ok {
                ctx.grid.swap(x, y, dx, dy);
                return Flow::Done;
            }
        }

        ctx.grid.swap(x, y, ax, ay);
        Flow::Done
    }
}
