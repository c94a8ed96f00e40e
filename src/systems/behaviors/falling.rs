//! FallRule - one step along the fall direction into empty space.

use super::{Flow, Rule, UpdateContext};
use crate::domain::materials::density;

pub struct FallRule;

impl Rule for FallRule {
    fn apply(&self, ctx: &mut UpdateContext) -> Flow {
        if density(ctx.cell.material).is_none() {
            return Flow::Continue;
        }
        let (dx, dy) = ctx.fall_dir();
        let (tx, ty) = (ctx.x + dx, ctx.y + dy);
        if ctx.grid.is_empty(tx, ty) && ctx.grid.move_cell(ctx.x, ctx.y, tx, ty) {
            return Flow::Done;
        }
        Flow::Continue
    }
}
