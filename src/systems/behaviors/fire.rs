//! FireRule - ignition, burn-out, detonation and heat contagion.
//! InertRule - life, C4 and fuse never move.

use super::{Flow, Rule, UpdateContext};
use crate::domain::cell::{Flags, Material};
use crate::spatial::grid::{Reach, Selector, Strain};

const IGNITE_THRESHOLD: f32 = 0.8;
const BURN_OUT_THRESHOLD: f32 = 0.8;
const BOIL_THRESHOLD: f32 = 0.5;

pub struct FireRule;

impl Rule for FireRule {
    fn apply(&self, ctx: &mut UpdateContext) -> Flow {
        let cell = ctx.cell;
        let (x, y) = (ctx.x, ctx.y);

        if cell.is(Material::Fire) && ctx.chance_above(IGNITE_THRESHOLD) {
            ctx.grid.spawn(x, y, cell.add_flags(Flags::BURNING));
        }

        if cell.burning() {
            if ctx.chance_above(BURN_OUT_THRESHOLD) && !ctx.grid.is_updated(x, y) {
                if cell.is(Material::C4) {
                    let (force, radius) = (ctx.params.explosion_force, ctx.params.explosion_radius);
                    ctx.explosions.trigger(x, y, force, radius);
                }
                ctx.grid.destroy(x, y);
                return Flow::Done;
            }
            ctx.grid.set_updated(x, y, true);
        }

        let hot = cell.is(Material::Fire) || cell.is(Material::Lava) || cell.burning();
        if hot {
            let burn = Strain::AddFlags(Flags::BURNING);
            for fuel in [Material::Life, Material::C4, Material::Fuse] {
                ctx.grid.infect(x, y, Reach::Matching(Selector::Material(fuel)), burn);
            }
            if ctx.chance_above(BOIL_THRESHOLD) {
                ctx.grid.infect(x, y, Reach::Matching(Selector::Material(Material::Oil)), burn);
                ctx.grid.infect(
                    x,
                    y,
                    Reach::Matching(Selector::Material(Material::Water)),
                    Strain::Transmute(Material::Steam),
                );
            }
        }
        Flow::Continue
    }
}

pub struct InertRule;

impl Rule for InertRule {
    fn apply(&self, ctx: &mut UpdateContext) -> Flow {
        match ctx.cell.material {
            Material::Life | Material::C4 | Material::Fuse => Flow::Done,
            _ => Flow::Continue,
        }
    }
}
