use dust_engine::{Cell, Flags, Material, SimulationCore};

#[test]
fn level_json_round_trips_through_a_fresh_world() {
    let mut a = SimulationCore::new(16, 8);
    a.spawn(0, 7, Cell::new(Material::OilWell));
    a.spawn(3, 2, Cell::with_flags(Material::Fuse, Flags::BURNING));
    a.spawn(15, 0, Cell::with_flags(Material::Water, Flags::INFECTANT));
    let json = a.level_json().unwrap();

    let mut b = SimulationCore::new(16, 8);
    b.load_level_json(&json).unwrap();
    assert_eq!(b.grid().cells(), a.grid().cells());
    assert_eq!(b.population(), 3);
}

#[test]
fn loading_replaces_previous_contents() {
    let mut core = SimulationCore::new(4, 4);
    for x in 0..4 {
        core.spawn(x, 0, Cell::new(Material::Sand));
    }
    core.explode(2, 2);
    core.load_level_data(&[0; 16]).unwrap();
    assert_eq!(core.population(), 0);
    assert_eq!(core.explosion_count(), 0);
}

#[test]
fn loaded_sand_falls() {
    let mut core = SimulationCore::new(3, 3);
    let mut data = vec![0u32; 9];
    data[1] = 1; // sand at (1, 0)
    core.load_level_data(&data).unwrap();
    core.tick();
    core.tick();
    assert_eq!(core.cell(1, 2), Cell::new(Material::Sand));
}

#[test]
fn mismatched_levels_leave_grid_untouched() {
    let mut core = SimulationCore::new(4, 4);
    core.spawn(1, 1, Cell::new(Material::Solid));
    assert!(core.load_level_json("[1, 2, 3]").is_err());
    assert!(core.load_level_json("not json").is_err());
    assert_eq!(core.population(), 1);
}
