//! WaterRule - steam condensation and extinguishing.

use super::{Flow, Rule, UpdateContext};
use crate::domain::cell::{Cell, Flags, Material};
use crate::spatial::grid::{Reach, Selector, Strain, NEIGHBOURS};

const CONDENSE_THRESHOLD: f32 = 0.9999;
const DOUSE_THRESHOLD: f32 = 0.5;

pub struct WaterRule;

impl Rule for WaterRule {
    fn apply(&self, ctx: &mut UpdateContext) -> Flow {
        let cell = ctx.cell;
        let (x, y) = (ctx.x, ctx.y);

        if cell.is(Material::Steam) {
            // Bulk steam (no boundary in sight) condenses right away.
            if ctx.chance_above(CONDENSE_THRESHOLD) || ctx.grid.surrounded(x, y) {
                ctx.grid.spawn(x, y, Cell::with_flags(Material::Water, cell.flags));
                return Flow::Done;
            }
        }

        if cell.is(Material::Water) && ctx.chance_above(DOUSE_THRESHOLD) {
            for (dx, dy) in NEIGHBOURS {
                if ctx.grid.get(x + dx, y + dy).is(Material::Fire) {
                    ctx.grid.destroy(x + dx, y + dy);
                }
            }
            ctx.grid.infect(
                x,
                y,
                Reach::Matching(Selector::Flag(Flags::BURNING)),
                Strain::RemoveFlags(Flags::BURNING),
            );
        }
        Flow::Continue
    }
}
