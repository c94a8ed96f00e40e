//! SpringRule - composite sources leak their liquid into empty neighbours.

use super::{Flow, Rule, UpdateContext};
use crate::domain::cell::Cell;
use crate::spatial::grid::{Reach, Strain};

pub struct SpringRule;

impl Rule for SpringRule {
    fn apply(&self, ctx: &mut UpdateContext) -> Flow {
        let material = ctx.cell.material;
        if let Some(liquid) = material.leak() {
            ctx.grid.infect(ctx.x, ctx.y, Reach::Empty, Strain::Become(Cell::new(liquid)));
        }
        // Solids never move or react further.
        if material.is_solid() {
            Flow::Done
        } else {
            Flow::Continue
        }
    }
}
