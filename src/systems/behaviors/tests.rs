use rand::SeedableRng;

use super::*;
use crate::domain::cell::{Flags, Material};

struct Harness {
    grid: Grid,
    board: Grid,
    explosions: Explosions,
    gravity: Gravity,
    params: RuleParams,
    rng: Pcg32,
    life_due: bool,
}

impl Harness {
    fn new(w: u32, h: u32) -> Self {
        Self {
            grid: Grid::new(w, h),
            board: Grid::new(w, h),
            explosions: Explosions::new(),
            gravity: Gravity::default(),
            params: RuleParams::default(),
            rng: Pcg32::seed_from_u64(42),
            life_due: false,
        }
    }

    fn put(&mut self, x: i32, y: i32, m: Material) {
        self.grid.spawn(x, y, Cell::new(m));
    }

    /// Run one rule on `(x, y)` with the markers cleared first.
    fn run(&mut self, rule: &dyn Rule, x: i32, y: i32) -> Flow {
        self.grid.reset_updated();
        let mut ctx = UpdateContext {
            grid: &mut self.grid,
            life_board: &self.board,
            explosions: &mut self.explosions,
            gravity: &self.gravity,
            params: &self.params,
            rng: &mut self.rng,
            life_due: self.life_due,
            lived: false,
            x,
            y,
            cell: Cell::EMPTY,
            lateral: (1, 0),
        };
        ctx.cell = ctx.grid.get(x, y);
        rule.apply(&mut ctx)
    }

    fn ladder(&mut self, x: i32, y: i32) -> Flow {
        self.grid.reset_updated();
        let mut ctx = UpdateContext {
            grid: &mut self.grid,
            life_board: &self.board,
            explosions: &mut self.explosions,
            gravity: &self.gravity,
            params: &self.params,
            rng: &mut self.rng,
            life_due: self.life_due,
            lived: false,
            x,
            y,
            cell: Cell::EMPTY,
            lateral: (-1, 0),
        };
        RuleLadder::new().update(&mut ctx)
    }
}

#[test]
fn spring_leaks_into_air_and_stops() {
    let mut h = Harness::new(5, 5);
    h.put(2, 2, Material::Volcanic);
    assert_eq!(h.run(&SpringRule, 2, 2), Flow::Done);
    assert_eq!(h.grid.get(2, 3), Cell::new(Material::Lava));
    assert_eq!(h.grid.population(), 9);
}

#[test]
fn plain_solid_stops_the_ladder() {
    let mut h = Harness::new(5, 5);
    h.put(2, 2, Material::Solid);
    assert_eq!(h.ladder(2, 2), Flow::Done);
    assert_eq!(h.grid.population(), 1);
}

#[test]
fn empty_cell_ends_the_ladder() {
    let mut h = Harness::new(5, 5);
    assert_eq!(h.ladder(2, 2), Flow::Done);
}

#[test]
fn infectant_eventually_takes_over_neighbours() {
    let mut h = Harness::new(5, 5);
    let virus = Cell::with_flags(Material::Water, Flags::INFECTANT);
    h.grid.spawn(2, 2, virus);
    h.put(3, 2, Material::Sand);
    for _ in 0..300 {
        h.run(&InfectionRule, 2, 2);
    }
    assert_eq!(h.grid.get(3, 2), virus);
    // Air is never infected.
    assert!(h.grid.get(1, 1).is_empty());
}

#[test]
fn life_dies_of_loneliness_when_due() {
    let mut h = Harness::new(6, 6);
    h.put(2, 2, Material::Life);
    h.board.copy_cells_from(&h.grid);

    h.run(&LifeRule, 2, 2);
    assert_eq!(h.grid.get(2, 2), Cell::new(Material::Life), "clock not due");

    h.life_due = true;
    h.run(&LifeRule, 2, 2);
    assert!(h.grid.get(2, 2).is_empty());
}

#[test]
fn life_births_where_three_neighbours_meet() {
    let mut h = Harness::new(8, 8);
    h.put(2, 2, Material::Life);
    h.put(3, 2, Material::Life);
    h.put(4, 2, Material::Life);
    h.board.copy_cells_from(&h.grid);
    h.life_due = true;

    h.run(&LifeRule, 3, 2);
    assert_eq!(h.grid.get(3, 1), Cell::new(Material::Life));
    assert_eq!(h.grid.get(3, 3), Cell::new(Material::Life));
    assert_eq!(h.grid.get(3, 2), Cell::new(Material::Life));
}

#[test]
fn fire_sets_fuel_burning_by_adjacency() {
    let mut h = Harness::new(5, 5);
    h.put(2, 2, Material::Fire);
    h.put(1, 2, Material::C4);
    h.put(3, 2, Material::Fuse);
    h.put(2, 1, Material::Life);
    h.run(&FireRule, 2, 2);
    assert!(h.grid.get(1, 2).burning());
    assert!(h.grid.get(3, 2).burning());
    assert!(h.grid.get(2, 1).burning());
}

#[test]
fn lava_boils_water_into_steam_eventually() {
    let mut h = Harness::new(5, 5);
    h.put(2, 2, Material::Lava);
    h.put(2, 1, Material::Water);
    for _ in 0..100 {
        h.run(&FireRule, 2, 2);
    }
    assert_eq!(h.grid.get(2, 1), Cell::new(Material::Steam));
    assert_eq!(h.grid.get(2, 2), Cell::new(Material::Lava));
}

#[test]
fn burning_c4_detonates_with_configured_force() {
    let mut h = Harness::new(9, 9);
    h.grid.spawn(4, 4, Cell::with_flags(Material::C4, Flags::BURNING));
    for _ in 0..200 {
        if h.grid.get(4, 4).is_empty() {
            break;
        }
        h.run(&FireRule, 4, 4);
    }
    assert!(h.grid.get(4, 4).is_empty());
    assert_eq!(h.explosions.len(), 1);
    let exp = &h.explosions.as_slice()[0];
    assert_eq!((exp.x, exp.y, exp.force, exp.limit), (4, 4, 40, 100));
}

#[test]
fn life_c4_and_fuse_never_move() {
    let mut h = Harness::new(5, 5);
    for m in [Material::Life, Material::C4, Material::Fuse] {
        h.grid.clear();
        h.put(2, 0, m);
        h.ladder(2, 0);
        assert_eq!(h.grid.get(2, 0).material, m);
    }
}

#[test]
fn surrounded_steam_condenses() {
    let mut h = Harness::new(5, 5);
    for x in 1..4 {
        for y in 1..4 {
            h.put(x, y, Material::Steam);
        }
    }
    assert_eq!(h.run(&WaterRule, 2, 2), Flow::Done);
    assert_eq!(h.grid.get(2, 2), Cell::new(Material::Water));
}

#[test]
fn water_puts_out_fire_and_burning() {
    let mut h = Harness::new(5, 5);
    h.put(2, 2, Material::Water);
    h.put(1, 2, Material::Fire);
    h.grid.spawn(3, 2, Cell::with_flags(Material::Oil, Flags::BURNING));
    for _ in 0..100 {
        h.run(&WaterRule, 2, 2);
    }
    assert!(h.grid.get(1, 2).is_empty());
    assert_eq!(h.grid.get(3, 2), Cell::new(Material::Oil));
}

#[test]
fn lighter_cell_floats_through_heavier() {
    let mut h = Harness::new(5, 5);
    for x in 0..5 {
        h.put(x, 2, Material::Water);
    }
    h.put(2, 3, Material::Oil);
    assert_eq!(h.run(&FloatingRule, 2, 3), Flow::Done);
    assert_eq!(h.grid.get(2, 3), Cell::new(Material::Water));
    let risen = (1..=3).any(|x| h.grid.get(x, 2) == Cell::new(Material::Oil));
    assert!(risen);
}

#[test]
fn heavier_cell_does_not_float() {
    let mut h = Harness::new(5, 5);
    h.put(2, 2, Material::Oil);
    h.put(2, 3, Material::Sand);
    assert_eq!(h.run(&FloatingRule, 2, 3), Flow::Continue);
    assert_eq!(h.grid.get(2, 3), Cell::new(Material::Sand));
}

#[test]
fn sand_falls_one_cell() {
    let mut h = Harness::new(5, 5);
    h.put(2, 0, Material::Sand);
    assert_eq!(h.run(&FallRule, 2, 0), Flow::Done);
    assert_eq!(h.grid.get(2, 1), Cell::new(Material::Sand));
}

#[test]
fn steam_falls_upward() {
    let mut h = Harness::new(5, 5);
    h.put(2, 3, Material::Steam);
    assert_eq!(h.run(&FallRule, 2, 3), Flow::Done);
    assert_eq!(h.grid.get(2, 2), Cell::new(Material::Steam));
}

#[test]
fn sand_slides_diagonally_when_blocked() {
    let mut h = Harness::new(5, 5);
    h.put(2, 4, Material::Solid);
    h.put(2, 3, Material::Sand);
    h.run(&MovementRule, 2, 3);
    // Harness lateral is +x.
    assert_eq!(h.grid.get(3, 4), Cell::new(Material::Sand));
}

#[test]
fn liquid_skims_along_the_floor() {
    let mut h = Harness::new(20, 3);
    h.put(10, 2, Material::Water);
    h.run(&MovementRule, 10, 2);
    let moved_to = (0..20).find(|&x| h.grid.get(x, 2).is(Material::Water));
    assert_eq!(moved_to, Some(17));
    assert_eq!(h.grid.population(), 1);
}

#[test]
fn liquid_drops_into_a_gap_along_the_path() {
    let mut h = Harness::new(20, 4);
    for x in 0..20 {
        if x != 13 {
            h.put(x, 3, Material::Solid);
        }
    }
    h.put(10, 2, Material::Water);
    h.run(&MovementRule, 10, 2);
    assert_eq!(h.grid.get(13, 3), Cell::new(Material::Water));
}

#[test]
fn sandwiched_liquid_stays_put() {
    let mut h = Harness::new(5, 5);
    h.put(2, 1, Material::Water);
    h.put(2, 2, Material::Water);
    h.put(2, 3, Material::Water);
    assert_eq!(h.run(&MovementRule, 2, 2), Flow::Done);
    assert_eq!(h.grid.get(2, 2), Cell::new(Material::Water));
    assert!(h.grid.get(1, 2).is_empty() && h.grid.get(3, 2).is_empty());
}
