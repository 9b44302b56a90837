//! Brush commands - the input boundary writes cells directly.

use crate::domain::elements::{Element, PLACED_FIRE_LIFE};

use super::{WorldCore, MAX_BRUSH_RADIUS, MIN_BRUSH_RADIUS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrushShape {
    Round,
    Square,
}

pub(super) fn paint(
    world: &mut WorldCore,
    cx: i32,
    cy: i32,
    element: Element,
    radius: i32,
    shape: BrushShape,
) {
    stroke(world, cx, cy, radius, shape, Some(element));
}

pub(super) fn erase(world: &mut WorldCore, cx: i32, cy: i32, radius: i32, shape: BrushShape) {
    stroke(world, cx, cy, radius, shape, None);
}

fn stroke(
    world: &mut WorldCore,
    cx: i32,
    cy: i32,
    radius: i32,
    shape: BrushShape,
    element: Option<Element>,
) {
    let radius = radius.clamp(MIN_BRUSH_RADIUS, MAX_BRUSH_RADIUS);
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let covered = match shape {
                BrushShape::Round => dx * dx + dy * dy <= r2,
                BrushShape::Square => true,
            };
            if !covered {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if !world.grid.in_bounds(x, y) {
                continue;
            }
            let idx = world.grid.index(x, y);
            match element {
                Some(el) => {
                    // Unconditional write: a brush is input, not a rule,
                    // and never goes through try_move.
                    world.grid.cells[idx] = el;
                    // Heat-bearing kinds keep their accumulated heat.
                    if !el.keeps_heat_when_placed() {
                        world.grid.heat[idx] = 0;
                    }
                    world.grid.fire_life[idx] = if el == Element::Fire {
                        PLACED_FIRE_LIFE
                    } else {
                        0
                    };
                    world.grid.decay[idx] = 0;
                }
                None => {
                    world.grid.cells[idx] = Element::Empty;
                    world.grid.heat[idx] = 0;
                    world.grid.fire_life[idx] = 0;
                    world.grid.decay[idx] = 0;
                    world.grid.light[idx] = 0;
                }
            }
        }
    }
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.explosions.clear();
    world.frame = 0;
}
