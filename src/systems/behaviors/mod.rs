//! Behaviors - the per-cell rule ladder.
//!
//! Each rule is a small `Rule` impl working through an explicit
//! `UpdateContext`. `RuleLadder` runs them in a fixed priority order; a rule
//! returning `Flow::Done` ends the cell's turn. Order matters: a cell that
//! burns out in `FireRule` never reaches `FloatingRule`.

mod springs;
mod infection;
mod life;
mod fire;
mod water;
mod floating;
mod falling;
mod movement;

pub use springs::SpringRule;
pub use infection::InfectionRule;
pub use life::LifeRule;
pub use fire::{FireRule, InertRule};
pub use water::WaterRule;
pub use floating::FloatingRule;
pub use falling::FallRule;
pub use movement::MovementRule;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::domain::cell::Cell;
use crate::domain::materials;
use crate::spatial::grid::Grid;
use crate::systems::explosions::Explosions;
use crate::systems::gravity::Gravity;

/// Tunables the rules read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleParams {
    /// Maximum lateral skim distance for liquids.
    pub liquid_dispersal: i32,
    pub explosion_force: i32,
    pub explosion_radius: i32,
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            liquid_dispersal: 7,
            explosion_force: 40,
            explosion_radius: 100,
        }
    }
}

/// Everything a rule may read or mutate while one cell takes its turn.
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    /// Snapshot taken when a life generation is due.
    pub life_board: &'a Grid,
    pub explosions: &'a mut Explosions,
    pub gravity: &'a Gravity,
    pub params: &'a RuleParams,
    pub rng: &'a mut Pcg32,
    pub life_due: bool,
    /// Set when a life cell was evaluated this tick.
    pub lived: bool,
    pub x: i32,
    pub y: i32,
    /// Cell value at the start of the current rule.
    pub cell: Cell,
    /// Random sideways step for this turn (one of gravity's perpendiculars).
    pub lateral: (i32, i32),
}

impl<'a> UpdateContext<'a> {
    /// `random() > threshold`, the form every probabilistic rule uses.
    #[inline]
    pub fn chance_above(&mut self, threshold: f32) -> bool {
        self.rng.random::<f32>() > threshold
    }

    #[inline]
    pub fn chance_below(&mut self, threshold: f32) -> bool {
        self.rng.random::<f32>() < threshold
    }

    /// Direction this cell falls in: up for buoyant (negative density) materials.
    #[inline]
    pub fn fall_dir(&self) -> (i32, i32) {
        match materials::density(self.cell.material) {
            Some(d) if d < 0.0 => self.gravity.up(),
            _ => self.gravity.down(),
        }
    }
}

/// Whether the ladder continues to the next rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Done,
}

/// One rung of the ladder.
pub trait Rule {
    fn apply(&self, ctx: &mut UpdateContext) -> Flow;
}

/// Fixed-order dispatch of every per-cell rule.
pub struct RuleLadder {
    springs: SpringRule,
    infection: InfectionRule,
    life: LifeRule,
    fire: FireRule,
    inert: InertRule,
    water: WaterRule,
    floating: FloatingRule,
    falling: FallRule,
    movement: MovementRule,
}

impl RuleLadder {
    pub fn new() -> Self {
        Self {
            springs: SpringRule,
            infection: InfectionRule,
            life: LifeRule,
            fire: FireRule,
            inert: InertRule,
            water: WaterRule,
            floating: FloatingRule,
            falling: FallRule,
            movement: MovementRule,
        }
    }

    /// Run the ladder for the cell at `(ctx.x, ctx.y)`. Stops early when a
    /// rule is done or the cell has been emptied.
    pub fn update(&self, ctx: &mut UpdateContext) -> Flow {
        let rungs: [&dyn Rule; 9] = [
            &self.springs,
            &self.infection,
            &self.life,
            &self.fire,
            &self.inert,
            &self.water,
            &self.floating,
            &self.falling,
            &self.movement,
        ];

        for rule in rungs {
            ctx.cell = ctx.grid.get(ctx.x, ctx.y);
            if ctx.cell.is_empty() {
                return Flow::Done;
            }
            if rule.apply(ctx) == Flow::Done {
                return Flow::Done;
            }
        }
        Flow::Continue
    }
}

impl Default for RuleLadder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
