//! Interaction helpers - neighborhood scanners shared by several rules.
//!
//! All of them operate on the write buffer, treat out-of-range neighbors
//! as no-match, and never fail: an absent precondition just means nothing
//! happens this tick.

use crate::core::random::Rng;
use crate::domain::elements::Element;
use crate::spatial::grid::SimGrid;

/// Accumulated heat above which a solid metal crosses into its molten kind.
pub const MELT_HEAT: u16 = 30;

/// Per-neighbor chance that open flame catches a flammable material.
const IGNITE_CHANCE: f32 = 0.1;

/// Symmetric pair rule: wherever `a` and `b` sit next to each other inside
/// the 3x3 around (x, y), both cells become `result`. The scanner does not
/// care which of the pair is at the scanned coordinate.
pub fn pair_interaction(
    grid: &mut SimGrid,
    x: i32,
    y: i32,
    a: Element,
    b: Element,
    result: Element,
) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            let nx = x + dx;
            let ny = y + dy;
            if !grid.in_bounds(nx, ny) {
                continue;
            }
            let here = grid.buf(x, y);
            let there = grid.buf(nx, ny);
            if (here == a && there == b) || (here == b && there == a) {
                grid.set_buf(x, y, result);
                grid.set_buf(nx, ny, result);
            }
        }
    }
}

/// Heat-source rule: any `solid` in the 3x3 around the source accumulates
/// heat at the material `rate`; past the melt threshold it converts to its
/// `molten` kind, carrying the accumulated heat along.
pub fn heat_metal(
    grid: &mut SimGrid,
    rng: &mut Rng,
    x: i32,
    y: i32,
    solid: Element,
    molten: Element,
    rate: f32,
) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            let nx = x + dx;
            let ny = y + dy;
            if grid.buf(nx, ny) == solid && rng.chance(rate) {
                let heat = grid.heat_at(nx, ny) + 1;
                grid.set_heat(nx, ny, heat);
                if heat > MELT_HEAT {
                    grid.set_buf(nx, ny, molten);
                }
            }
        }
    }
}

/// Flame catching: every flammable neighbor in the 3x3 has a chance of
/// turning into fire, with its material's guaranteed-burn budget.
pub fn ignite_flammables(grid: &mut SimGrid, rng: &mut Rng, x: i32, y: i32) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            let nx = x + dx;
            let ny = y + dy;
            if let Some(budget) = grid.buf(nx, ny).fire_life_budget() {
                if rng.chance(IGNITE_CHANCE) {
                    grid.set_buf(nx, ny, Element::Fire);
                    grid.set_fire_life(nx, ny, budget);
                }
            }
        }
    }
}

/// Scatter short-lived flames into empty 3x3 neighbors.
pub fn fire_ring(grid: &mut SimGrid, rng: &mut Rng, x: i32, y: i32) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            let nx = x + dx;
            let ny = y + dy;
            if grid.in_bounds(nx, ny) && grid.buf(nx, ny) == Element::Empty && rng.chance(0.3) {
                grid.set_buf(nx, ny, Element::Fire);
                grid.set_fire_life(nx, ny, 40);
            }
        }
    }
}

/// Puff smoke into empty 3x3 neighbors.
pub fn smoke_ring(grid: &mut SimGrid, rng: &mut Rng, x: i32, y: i32) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            let nx = x + dx;
            let ny = y + dy;
            if grid.in_bounds(nx, ny) && grid.buf(nx, ny) == Element::Empty && rng.chance(0.4) {
                grid.set_buf(nx, ny, Element::Smoke);
            }
        }
    }
}
