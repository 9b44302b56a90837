use super::*;
use crate::domain::elements::Element;
use crate::systems::explosions;

fn world(width: u32, height: u32) -> WorldCore {
    WorldCore::with_seed(width, height, 1234)
}

fn set_cell(world: &mut WorldCore, x: i32, y: i32, element: Element) {
    let idx = world.grid.index(x, y);
    world.grid.cells[idx] = element;
}

fn count_of(world: &WorldCore, element: Element) -> usize {
    world.grid.cells.iter().filter(|e| **e == element).count()
}

#[test]
fn sand_falls_exactly_one_row_per_tick_until_the_floor() {
    let mut w = world(16, 16);
    set_cell(&mut w, 8, 2, Element::Sand);

    for expected_y in 3..16 {
        w.step();
        assert_eq!(w.element_at(8, expected_y), Element::Sand);
        assert_eq!(w.element_at(8, expected_y - 1), Element::Empty);
    }

    // Resting on the bottom row it stays put.
    w.step();
    assert_eq!(w.element_at(8, 15), Element::Sand);
}

#[test]
fn sand_never_passes_through_occupied_cells() {
    let mut w = world(16, 16);
    // Block the straight drop and both diagonals.
    set_cell(&mut w, 7, 8, Element::Stone);
    set_cell(&mut w, 8, 8, Element::Stone);
    set_cell(&mut w, 9, 8, Element::Stone);
    set_cell(&mut w, 8, 6, Element::Sand);

    for _ in 0..50 {
        w.step();
    }
    assert_eq!(w.element_at(8, 7), Element::Sand);
    assert_eq!(w.element_at(8, 8), Element::Stone);
    assert_eq!(count_of(&w, Element::Sand), 1);
}

#[test]
fn dropped_sand_piles_instead_of_vanishing() {
    let mut w = world(16, 16);
    for y in 2..5 {
        set_cell(&mut w, 8, y, Element::Sand);
    }

    for _ in 0..100 {
        w.step();
    }

    assert_eq!(count_of(&w, Element::Sand), 3);
    for y in 0..16 {
        for x in 0..16 {
            if w.element_at(x, y) == Element::Sand {
                assert!(y >= 13, "settled sand should be near the floor");
            }
        }
    }
}

#[test]
fn water_column_levels_out_in_a_basin() {
    let mut w = world(20, 12);
    // Basin: floor at y=10 between walls at x=2 and x=12.
    for x in 2..=12 {
        set_cell(&mut w, x, 10, Element::Unbreakable);
    }
    for y in 5..=10 {
        set_cell(&mut w, 2, y, Element::Unbreakable);
        set_cell(&mut w, 12, y, Element::Unbreakable);
    }
    for y in 6..=9 {
        set_cell(&mut w, 7, y, Element::Water);
    }

    for _ in 0..500 {
        w.step();
    }

    assert_eq!(count_of(&w, Element::Water), 4);
    // Four cells over nine free columns settle into a single layer.
    for x in 3..12 {
        for y in 0..10 {
            if w.element_at(x, y) == Element::Water {
                assert_eq!(y, 9, "water should sit in one flat layer");
            }
        }
    }
}

#[test]
fn wood_catches_with_its_full_burn_budget() {
    let mut w = world(12, 12);
    // Sealed pocket: wood above a pinned flame, nowhere for either to go.
    for (x, y) in [
        (4, 4), (5, 4), (6, 4),
        (4, 5), (6, 5),
        (4, 6), (6, 6),
        (4, 7), (5, 7), (6, 7),
    ] {
        set_cell(&mut w, x, y, Element::Unbreakable);
    }
    set_cell(&mut w, 5, 5, Element::Wood);
    set_cell(&mut w, 5, 6, Element::Fire);
    let fire_idx = w.grid.index(5, 6);
    w.grid.fire_life[fire_idx] = 10_000;

    let mut ignited = false;
    for _ in 0..5000 {
        w.step();
        if w.element_at(5, 5) == Element::Fire {
            ignited = true;
            break;
        }
    }
    assert!(ignited, "wood next to flame must eventually catch");
    assert_eq!(w.grid.fire_life[w.grid.index(5, 5)], 80);

    // The budget guarantees at least 80 further ticks of flame before any
    // extinguish roll is even attempted.
    for _ in 0..80 {
        w.step();
        assert_eq!(w.element_at(5, 5), Element::Fire);
    }
}

#[test]
fn iron_beside_lava_heats_past_the_melt_threshold() {
    let mut w = world(12, 12);
    set_cell(&mut w, 5, 7, Element::Unbreakable);
    set_cell(&mut w, 5, 6, Element::Iron);

    let mut melted = false;
    for _ in 0..300 {
        // Keep a lava cell pressed against the iron for the whole run.
        set_cell(&mut w, 5, 5, Element::Lava);
        w.step();
        if w.element_at(5, 6) == Element::MoltenIron {
            melted = true;
            break;
        }
    }
    assert!(melted, "iron should melt under sustained lava contact");
    assert!(w.grid.heat[w.grid.index(5, 6)] > crate::systems::reactions::MELT_HEAT);
}

#[test]
fn molten_iron_freezes_back_near_liquid_nitrogen() {
    let mut w = world(12, 12);
    // Pin the molten puddle so it cannot flow away.
    for (x, y) in [(4, 6), (6, 6), (4, 7), (5, 7), (6, 7)] {
        set_cell(&mut w, x, y, Element::Unbreakable);
    }
    set_cell(&mut w, 5, 6, Element::MoltenIron);
    let __idx = w.grid.index(5, 6);
    w.grid.heat[__idx] = 40;

    let mut froze = false;
    for _ in 0..500 {
        set_cell(&mut w, 5, 5, Element::Nitrogen);
        w.step();
        if w.element_at(5, 6) == Element::Iron {
            froze = true;
            break;
        }
    }
    assert!(froze, "cryogenic contact should re-solidify molten iron");
    assert_eq!(w.grid.heat[w.grid.index(5, 6)], 0);
}

#[test]
fn explosion_clears_its_disc_but_spares_protected_kinds() {
    let mut w = world(40, 40);
    for y in 8..=28 {
        for x in 8..=28 {
            set_cell(&mut w, x, y, Element::Sand);
        }
    }
    let protected = [
        (16, 16, Element::Unbreakable),
        (17, 18, Element::Stone),
        (18, 16, Element::Iron),
        (15, 19, Element::Sandstone),
        (19, 19, Element::Gold),
        (14, 17, Element::Copper),
    ];
    for (x, y, el) in protected {
        set_cell(&mut w, x, y, el);
    }

    w.grid.begin_tick();
    explosions::create_explosion(&mut w.grid, &mut w.rng, &mut w.explosions, 18, 18, 8);
    w.grid.commit();

    for dy in -8..=8 {
        for dx in -8..=8 {
            if dx * dx + dy * dy > 64 {
                continue;
            }
            let x = 18 + dx;
            let y = 18 + dy;
            let el = w.element_at(x, y);
            if let Some((_, _, kind)) = protected.iter().find(|(px, py, _)| (*px, *py) == (x, y)) {
                assert_eq!(el, *kind, "protected cell at ({}, {}) must survive", x, y);
            } else {
                assert!(
                    matches!(el, Element::Empty | Element::Fire | Element::Smoke),
                    "cell at ({}, {}) should be cleared or ring-dressed, got {:?}",
                    x,
                    y,
                    el
                );
            }
        }
    }

    assert_eq!(w.explosions.len(), 1);
    assert_eq!(w.explosions[0].radius, 8);
    assert_eq!(w.explosions[0].life, explosions::EXPLOSION_LIFE);
}

#[test]
fn nuclear_explosion_spares_only_the_unbreakable_wall() {
    let mut w = world(48, 48);
    for y in 10..=34 {
        for x in 10..=34 {
            set_cell(&mut w, x, y, Element::Sand);
        }
    }
    set_cell(&mut w, 22, 24, Element::Unbreakable);
    set_cell(&mut w, 20, 18, Element::Stone);

    w.grid.begin_tick();
    explosions::create_nuclear_explosion(&mut w.grid, &mut w.rng, &mut w.explosions, 22, 22);
    w.grid.commit();

    assert_eq!(w.element_at(22, 24), Element::Unbreakable);
    // Stone is protected from chemical blasts but not from this one.
    assert_ne!(w.element_at(20, 18), Element::Stone);
    for dy in -10i32..=10 {
        for dx in -10i32..=10 {
            if dx * dx + dy * dy > 100 {
                continue;
            }
            let el = w.element_at(22 + dx, 22 + dy);
            assert!(
                matches!(
                    el,
                    Element::Empty | Element::Fire | Element::Smoke | Element::Unbreakable
                ),
                "unexpected survivor {:?} at ({}, {})",
                el,
                22 + dx,
                22 + dy
            );
        }
    }
    assert_eq!(w.explosions[0].radius, 15);
}

#[test]
fn overstoked_uranium_goes_critical() {
    let mut w = world(40, 40);
    set_cell(&mut w, 20, 20, Element::Uranium);
    let __idx = w.grid.index(20, 20);
    w.grid.heat[__idx] = 150;

    w.step();

    assert_eq!(w.element_at(20, 20), Element::Empty);
    assert_eq!(w.explosions.len(), 1);
    assert_eq!(w.explosions[0].radius, 15);
    // The record was aged once by the same step that created it.
    assert_eq!(w.explosions[0].life, explosions::EXPLOSION_LIFE - 1);
}

#[test]
fn dynamite_detonates_on_contact_with_flame() {
    let mut w = world(40, 40);
    // Flame pinned under the charge so the trigger is deterministic.
    for (x, y) in [(19, 20), (21, 20), (19, 21), (21, 21), (19, 22), (20, 22), (21, 22)] {
        set_cell(&mut w, x, y, Element::Unbreakable);
    }
    set_cell(&mut w, 20, 20, Element::Dynamite);
    set_cell(&mut w, 20, 21, Element::Fire);
    let __idx = w.grid.index(20, 21);
    w.grid.fire_life[__idx] = 10_000;

    w.step();

    assert_eq!(w.explosions.len(), 1);
    assert_eq!(w.explosions[0].radius, 8);
    assert_eq!(w.element_at(20, 20), Element::Empty);
    assert_eq!(w.element_at(19, 20), Element::Unbreakable);
}

#[test]
fn quenched_water_becomes_smoke_while_the_flame_escapes_upward() {
    let mut w = world(10, 10);
    for (x, y) in [(4, 6), (5, 6), (6, 6), (7, 6), (4, 5), (7, 5)] {
        set_cell(&mut w, x, y, Element::Unbreakable);
    }
    set_cell(&mut w, 5, 5, Element::Water);
    set_cell(&mut w, 6, 5, Element::Fire);
    let __idx = w.grid.index(6, 5);
    w.grid.fire_life[__idx] = 1000;

    w.step();

    // The water's pair rule turned both cells to smoke, then the flame's
    // own rule, scanned later in the same tick, saw that buffer state and
    // rose out of its slot. Both outcomes are only explicable by the
    // same-tick buffer visibility.
    assert_eq!(w.element_at(5, 5), Element::Smoke);
    assert_eq!(w.element_at(6, 5), Element::Empty);
    assert_eq!(w.element_at(6, 4), Element::Fire);
}

#[test]
fn snapshot_round_trip_restores_kinds_and_resets_overlays() {
    let mut w = world(24, 24);
    w.paint(5, 5, Element::Sand, 2, BrushShape::Round);
    w.paint(12, 12, Element::Water, 2, BrushShape::Square);
    w.paint(18, 6, Element::Wood, 1, BrushShape::Round);
    set_cell(&mut w, 3, 20, Element::Uranium);
    let __idx = w.grid.index(3, 20);
    w.grid.heat[__idx] = 40;
    for _ in 0..10 {
        w.step();
    }

    let saved_cells = w.grid.cells.clone();
    let json = w.save_state();

    // Keep simulating, then restore.
    w.paint(10, 10, Element::Lava, 4, BrushShape::Round);
    for _ in 0..5 {
        w.step();
    }
    w.load_state(&json).expect("snapshot should load");

    assert_eq!(w.grid.cells, saved_cells);
    assert!(w.grid.heat.iter().all(|v| *v == 0));
    assert!(w.grid.fire_life.iter().all(|v| *v == 0));
    assert!(w.grid.decay.iter().all(|v| *v == 0));
    assert!(w.grid.light.iter().all(|v| *v == 0));
    assert!(w.explosions.is_empty());
}

#[test]
fn failed_loads_leave_the_world_untouched() {
    let mut w = world(8, 8);
    w.paint(4, 4, Element::Sand, 2, BrushShape::Round);
    let before = w.grid.cells.clone();

    assert!(w.load_state("not json at all").is_err());
    assert_eq!(w.grid.cells, before);

    // Dimension mismatch.
    let other = world(9, 8).save_state();
    assert!(w.load_state(&other).is_err());
    assert_eq!(w.grid.cells, before);

    // Unassigned element id (the reserved eraser slot).
    let bad = serde_json::json!({
        "formatVersion": 1,
        "width": 8,
        "height": 8,
        "cells": vec![13u8; 64],
    });
    assert!(w.load_state(&bad.to_string()).is_err());
    assert_eq!(w.grid.cells, before);

    // Wrong format version.
    let versioned = serde_json::json!({
        "formatVersion": 99,
        "width": 8,
        "height": 8,
        "cells": vec![0u8; 64],
    });
    assert!(w.load_state(&versioned.to_string()).is_err());
    assert_eq!(w.grid.cells, before);
}

#[test]
fn acid_dissolves_stone_but_respects_its_immunity_list() {
    let mut w = world(10, 10);
    for (x, y) in [(4, 4), (6, 4), (4, 6), (6, 6), (4, 7), (5, 7), (6, 7)] {
        set_cell(&mut w, x, y, Element::Unbreakable);
    }
    set_cell(&mut w, 5, 4, Element::Stone);
    set_cell(&mut w, 4, 5, Element::Rubber);
    set_cell(&mut w, 6, 5, Element::Unbreakable);
    set_cell(&mut w, 5, 5, Element::Acid);
    set_cell(&mut w, 5, 6, Element::Acid);

    for _ in 0..300 {
        w.step();
    }

    assert_eq!(w.element_at(5, 4), Element::Empty, "stone should dissolve");
    assert_eq!(w.element_at(4, 5), Element::Rubber);
    assert_eq!(w.element_at(6, 5), Element::Unbreakable);
    assert_eq!(count_of(&w, Element::Acid), 2, "acid never eats acid");
}

#[test]
fn smoke_rises_then_thins_out_to_nothing() {
    let mut w = world(8, 24);
    set_cell(&mut w, 4, 20, Element::Smoke);

    for i in 1..=3 {
        w.step();
        assert_eq!(w.element_at(4, 20 - i), Element::Smoke);
    }

    let mut gone = false;
    for _ in 0..1000 {
        w.step();
        if count_of(&w, Element::Smoke) == 0 {
            gone = true;
            break;
        }
    }
    assert!(gone, "smoke should dissipate eventually");
}

#[test]
fn round_and_square_brushes_paint_their_footprints() {
    let mut w = world(24, 24);
    w.paint(10, 10, Element::Stone, 3, BrushShape::Round);
    assert_eq!(w.element_at(10, 13), Element::Stone);
    assert_eq!(w.element_at(12, 12), Element::Stone);
    assert_eq!(w.element_at(13, 11), Element::Empty);
    assert_eq!(w.element_at(13, 13), Element::Empty);

    w.paint(4, 18, Element::Wood, 2, BrushShape::Square);
    assert_eq!(w.element_at(2, 16), Element::Wood);
    assert_eq!(w.element_at(6, 20), Element::Wood);

    // Radii clamp instead of failing.
    w.paint(20, 4, Element::Glass, 0, BrushShape::Round);
    assert_eq!(w.element_at(20, 4), Element::Glass);
}

#[test]
fn brush_seeds_overlays_by_element_kind() {
    let mut w = world(12, 12);

    w.paint(5, 5, Element::Fire, 1, BrushShape::Round);
    assert_eq!(w.grid.fire_life[w.grid.index(5, 5)], 100);

    // A heat-bearing kind painted over a hot cell keeps the heat channel.
    let __idx = w.grid.index(8, 8);
    w.grid.heat[__idx] = 25;
    w.paint(8, 8, Element::Sand, 1, BrushShape::Round);
    assert_eq!(w.grid.heat[w.grid.index(8, 8)], 25);

    // A non-bearing kind resets it.
    w.paint(8, 8, Element::Water, 1, BrushShape::Round);
    assert_eq!(w.grid.heat[w.grid.index(8, 8)], 0);

    w.erase(5, 5, 1, BrushShape::Square);
    assert_eq!(w.element_at(5, 5), Element::Empty);
    assert_eq!(w.grid.fire_life[w.grid.index(5, 5)], 0);
}

#[test]
fn pause_blocks_ticks_and_speed_multiplies_them() {
    let mut w = world(8, 8);
    w.set_paused(true);
    w.tick();
    assert_eq!(w.frame(), 0);

    w.set_paused(false);
    w.set_speed(3);
    w.tick();
    assert_eq!(w.frame(), 3);

    // A single explicit step ignores the pause flag.
    w.set_paused(true);
    w.step();
    assert_eq!(w.frame(), 4);

    w.set_speed(99);
    assert_eq!(w.speed(), MAX_SIM_SPEED);
    w.set_speed(0);
    assert_eq!(w.speed(), 1);
}

#[test]
fn lamp_lights_its_surroundings_after_a_step() {
    let mut w = world(16, 16);
    set_cell(&mut w, 8, 8, Element::Lamp);
    w.step();

    assert_eq!(w.light_at(8, 8), 100);
    assert_eq!(w.light_at(8, 7), 85);
    assert_eq!(w.light_at(8, 9), 85);
}

#[test]
fn clear_resets_everything_together() {
    let mut w = world(16, 16);
    w.paint(8, 8, Element::Fire, 3, BrushShape::Round);
    set_cell(&mut w, 2, 2, Element::Uranium);
    let __idx = w.grid.index(2, 2);
    w.grid.heat[__idx] = 150;
    for _ in 0..10 {
        w.step();
    }
    assert!(!w.explosions.is_empty(), "the critical pile should have gone off");

    w.clear();

    assert!(w.grid.cells.iter().all(|e| *e == Element::Empty));
    assert!(w.grid.heat.iter().all(|v| *v == 0));
    assert!(w.grid.fire_life.iter().all(|v| *v == 0));
    assert!(w.grid.light.iter().all(|v| *v == 0));
    assert!(w.explosions.is_empty());
    assert_eq!(w.frame(), 0);
}
