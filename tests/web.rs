#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use dust_engine::World;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn world_ticks_in_the_browser() {
    dust_engine::init();
    let mut world = World::new(32, 32);
    world.add_brush(1, 16, 4, "sand", 3, false, true);
    world.tick();
    world.fill_color_buffer();
    assert!(world.population() > 0);
    assert_eq!(world.color_buffer_len(), 32 * 32 * 4);
}
