//! Persistence contract, exercised through the public facade.

use granula_engine::{Element, World};

#[test]
fn a_snapshot_moves_a_scene_between_worlds() {
    let mut source = World::new_with_seed(32, 32, 7);
    source.paint(8, 8, Element::Sand.id(), 3, true);
    source.paint(20, 10, Element::Water.id(), 3, true);
    source.paint(14, 24, Element::Stone.id(), 4, false);
    source.paint(26, 26, Element::Lamp.id(), 1, true);
    for _ in 0..25 {
        source.tick();
    }

    let json = source.save_state();

    let mut restored = World::new_with_seed(32, 32, 8);
    restored.load_state(json).expect("snapshot should load");

    for y in 0..32 {
        for x in 0..32 {
            assert_eq!(restored.cell_at(x, y), source.cell_at(x, y));
            // Overlays are transient and must come back zeroed.
            assert_eq!(restored.heat_at(x, y), 0);
            assert_eq!(restored.decay_at(x, y), 0);
            assert_eq!(restored.light_at(x, y), 0);
        }
    }
    assert_eq!(restored.explosion_count(), 0);
}

#[test]
fn a_failed_load_never_corrupts_the_live_grid() {
    let mut world = World::new(16, 16);
    world.paint(8, 8, Element::Gold.id(), 3, true);
    let before: Vec<u8> = (0..16)
        .flat_map(|y| (0..16).map(move |x| (x, y)))
        .map(|(x, y)| world.cell_at(x, y))
        .collect();

    assert!(world.load_state("{broken".to_string()).is_err());

    let other = World::new(24, 24).save_state();
    assert!(world.load_state(other).is_err());

    let after: Vec<u8> = (0..16)
        .flat_map(|y| (0..16).map(move |x| (x, y)))
        .map(|(x, y)| world.cell_at(x, y))
        .collect();
    assert_eq!(before, after);
}
