//! Light propagation - per-tick flood fill from emitting cells.
//!
//! Recomputed from scratch after every commit: reset the overlay, seed
//! each emitter at its strength, then spread through transmissive
//! materials with a fixed falloff per four-connected hop. A brighter
//! value already written by a nearer or stronger source is never lowered.
//! The spread uses an explicit frontier queue; falloff bounds it to a few
//! hops, but the queue keeps the worst case iterative rather than
//! recursive.

use std::collections::VecDeque;

use crate::domain::elements::Element;
use crate::spatial::grid::SimGrid;

/// Light lost per hop.
pub const LIGHT_FALLOFF: u8 = 15;

const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Emission strength of a committed cell. Uranium and coal only glow once
/// their heat channel is high enough.
fn emission(element: Element, heat: u16) -> u8 {
    match element {
        Element::Lamp => 100,
        Element::Fire => 60,
        Element::Lava => 40,
        Element::Uranium if heat > 50 => 30,
        Element::Coal if heat > 10 => 20,
        _ => 0,
    }
}

/// Rebuild the light overlay from the committed grid.
pub fn recompute(grid: &mut SimGrid) {
    grid.light.fill(0);

    let width = grid.width() as i32;
    let height = grid.height() as i32;

    let mut frontier: VecDeque<(i32, i32, u8)> = VecDeque::new();
    for y in 0..height {
        for x in 0..width {
            let idx = grid.index(x, y);
            let level = emission(grid.cells[idx], grid.heat[idx]);
            if level > grid.light[idx] {
                grid.light[idx] = level;
                frontier.push_back((x, y, level));
            }
        }
    }

    while let Some((x, y, level)) = frontier.pop_front() {
        // A stronger source may have overwritten this entry since it was
        // queued; its spread would be a no-op, skip it.
        if grid.light[grid.index(x, y)] != level {
            continue;
        }
        if level <= LIGHT_FALLOFF {
            continue;
        }
        let next = level - LIGHT_FALLOFF;
        for (dx, dy) in DIRECTIONS {
            let nx = x + dx;
            let ny = y + dy;
            if !grid.in_bounds(nx, ny) {
                continue;
            }
            let nidx = grid.index(nx, ny);
            if grid.cells[nidx].transmits_light() && next > grid.light[nidx] {
                grid.light[nidx] = next;
                frontier.push_back((nx, ny, next));
            }
        }
    }
}
