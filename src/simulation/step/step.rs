//! The step driver: exactly one discrete tick per call.

use crate::domain::elements::Element;
use crate::systems::behaviors::{self, UpdateContext};
use crate::systems::{explosions, lighting};

use super::WorldCore;

pub(super) fn step(world: &mut WorldCore) {
    // 1. Snapshot: the buffer starts as a verbatim copy of the grid.
    world.grid.begin_tick();

    let width = world.grid.width() as i32;
    let height = world.grid.height() as i32;

    // 2. Dispatch. The bottom-to-top scan is load-bearing: a falling cell
    // and the slot it vacates are both already consistent for the rows
    // below, which ran earlier this tick. Rules scanned later in the tick
    // legitimately observe buffer mutations made by earlier ones; chained
    // combustion and the settling look depend on it.
    for y in (0..height).rev() {
        for x in 0..width {
            let element = world.grid.cell(x, y);
            if element == Element::Empty {
                continue;
            }
            let mut ctx = UpdateContext {
                grid: &mut world.grid,
                explosions: &mut world.explosions,
                rng: &mut world.rng,
                x,
                y,
            };
            behaviors::update_cell(&mut ctx, element);
        }
    }

    // 3. Commit the buffer back.
    world.grid.commit();

    // 4. Rebuild the derived light overlay from the new state.
    lighting::recompute(&mut world.grid);

    // 5. Age the cosmetic explosion records.
    explosions::age(&mut world.explosions);

    world.frame += 1;
}
