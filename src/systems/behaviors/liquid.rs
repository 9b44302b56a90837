//! Liquids - fall, then spread; each kind layers its own chemistry on top.

use super::UpdateContext;
use crate::domain::elements::Element;
use crate::systems::explosions::create_explosion;
use crate::systems::reactions::{fire_ring, heat_metal, pair_interaction, smoke_ring};

pub(super) fn update_water(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }
    if ctx.try_flow() {
        return;
    }

    // Contact with open flame quenches both cells into smoke. Cooling of
    // lava is handled from the lava side; the water survives it.
    pair_interaction(
        ctx.grid,
        ctx.x,
        ctx.y,
        Element::Water,
        Element::Fire,
        Element::Smoke,
    );
}

pub(super) fn update_lava(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }
    if ctx.rng.chance(0.3) && ctx.try_flow() {
        return;
    }

    if ctx.rng.chance(0.02) {
        fire_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
    }

    // Slow spontaneous solidification, sharply boosted by coolants.
    if ctx.rng.chance(0.005) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Stone);
    }

    heat_metal(ctx.grid, ctx.rng, ctx.x, ctx.y, Element::Iron, Element::MoltenIron, 0.8);
    heat_metal(ctx.grid, ctx.rng, ctx.x, ctx.y, Element::Gold, Element::MoltenGold, 0.7);
    heat_metal(ctx.grid, ctx.rng, ctx.x, ctx.y, Element::Copper, Element::MoltenCopper, 0.9);

    if ctx.near(Element::Nitrogen, 1) && ctx.rng.chance(0.8) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Stone);
    }

    if ctx.water_nearby() && ctx.rng.chance(0.5) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Stone);
    }
}

pub(super) fn update_oil(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }
    if ctx.try_flow() {
        return;
    }

    if ctx.heat_source_nearby() && ctx.rng.chance(0.3) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Fire);
        ctx.grid.set_fire_life(ctx.x, ctx.y, 40);
        smoke_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
        // The whole puddle in reach catches at once.
        for dy in -1..=1 {
            for dx in -1..=1 {
                let nx = ctx.x + dx;
                let ny = ctx.y + dy;
                if ctx.grid.buf(nx, ny) == Element::Oil {
                    ctx.grid.set_buf(nx, ny, Element::Fire);
                    ctx.grid.set_fire_life(nx, ny, 40);
                }
            }
        }
    }
}

pub(super) fn update_gasoline(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }
    if ctx.try_flow() {
        return;
    }

    if ctx.heat_source_nearby() && ctx.rng.chance(0.5) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Fire);
        ctx.grid.set_fire_life(ctx.x, ctx.y, 60);
        smoke_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
        // Gasoline flashes over a wider reach than oil.
        for dy in -2..=2 {
            for dx in -2..=2 {
                let nx = ctx.x + dx;
                let ny = ctx.y + dy;
                if ctx.grid.buf(nx, ny) == Element::Gasoline {
                    ctx.grid.set_buf(nx, ny, Element::Fire);
                    ctx.grid.set_fire_life(nx, ny, 60);
                }
            }
        }
    }
}

pub(super) fn update_crude_oil(ctx: &mut UpdateContext) {
    // Viscous: only sometimes willing to move at all.
    if ctx.rng.chance(0.7) && ctx.try_move(0, 1) {
        return;
    }
    if ctx.rng.chance(0.5) && ctx.try_flow() {
        return;
    }

    if ctx.heat_source_nearby() && ctx.rng.chance(0.4) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Fire);
        ctx.grid.set_fire_life(ctx.x, ctx.y, 80);
        smoke_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let nx = ctx.x + dx;
                let ny = ctx.y + dy;
                if ctx.grid.buf(nx, ny) == Element::CrudeOil && ctx.rng.chance(0.6) {
                    ctx.grid.set_buf(nx, ny, Element::Fire);
                    ctx.grid.set_fire_life(nx, ny, 80);
                }
            }
        }
    }

    // Sustained heat slowly cracks crude into gasoline.
    if ctx.heat_source_nearby() && ctx.rng.chance(0.01) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Gasoline);
    }
}

pub(super) fn update_mercury(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }
    if ctx.try_flow() {
        return;
    }

    // Denser than water: sinks through it.
    if ctx.grid.buf(ctx.x, ctx.y + 1) == Element::Water && ctx.rng.chance(0.1) {
        ctx.grid.swap_buf(ctx.x, ctx.y, ctx.x, ctx.y + 1);
    }
}

pub(super) fn update_nitrogen(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }
    if ctx.try_flow() {
        return;
    }

    // Cryogenic contact: quench lava, freeze molten metal back to solid,
    // ice over water and acid.
    for dy in -1..=1 {
        for dx in -1..=1 {
            let nx = ctx.x + dx;
            let ny = ctx.y + dy;
            if !ctx.grid.in_bounds(nx, ny) {
                continue;
            }
            match ctx.grid.buf(nx, ny) {
                Element::Lava if ctx.rng.chance(0.8) => {
                    ctx.grid.set_buf(nx, ny, Element::Stone);
                }
                Element::MoltenIron if ctx.rng.chance(0.1) => {
                    ctx.grid.set_buf(nx, ny, Element::Iron);
                    ctx.grid.set_heat(nx, ny, 0);
                }
                Element::MoltenGold if ctx.rng.chance(0.1) => {
                    ctx.grid.set_buf(nx, ny, Element::Gold);
                    ctx.grid.set_heat(nx, ny, 0);
                }
                Element::MoltenCopper if ctx.rng.chance(0.1) => {
                    ctx.grid.set_buf(nx, ny, Element::Copper);
                    ctx.grid.set_heat(nx, ny, 0);
                }
                Element::Water if ctx.rng.chance(0.1) => {
                    ctx.grid.set_buf(nx, ny, Element::Ice);
                }
                Element::Acid if ctx.rng.chance(0.05) => {
                    ctx.grid.set_buf(nx, ny, Element::Ice);
                }
                _ => {}
            }
        }
    }

    // Boils off on its own.
    if ctx.rng.chance(0.02) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Empty);
    }
}

pub(super) fn update_acid(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }
    if ctx.try_flow() {
        return;
    }

    // Dissolve whatever it touches, with a short immunity list.
    for dy in -1..=1 {
        for dx in -1..=1 {
            let nx = ctx.x + dx;
            let ny = ctx.y + dy;
            let target = ctx.grid.buf(nx, ny);
            if ctx.grid.in_bounds(nx, ny) && !target.acid_immune() && ctx.rng.chance(0.3) {
                ctx.grid.set_buf(nx, ny, Element::Empty);
            }
        }
    }
}

pub(super) fn update_juice(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }
    if ctx.try_flow() {
        return;
    }

    if ctx.rng.chance(0.001) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Empty);
    }
}

pub(super) fn update_liquefied_gas(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }
    if ctx.try_flow() {
        return;
    }

    if ctx.rng.chance(0.02) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Gas);
    }

    // Pressurized fuel: flame touching it is almost always a detonation.
    if ctx.heat_source_nearby() && ctx.rng.chance(0.9) {
        create_explosion(ctx.grid, ctx.rng, ctx.explosions, ctx.x, ctx.y, 8);
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Empty);
    }
}

/// Shared rule for the three molten metals; `solid` is the kind this one
/// freezes back into.
pub(super) fn update_molten_metal(ctx: &mut UpdateContext, solid: Element) {
    if ctx.try_move(0, 1) {
        return;
    }
    if ctx.try_flow() {
        return;
    }

    if ctx.near(Element::Nitrogen, 1) && ctx.rng.chance(0.1) {
        ctx.grid.set_buf(ctx.x, ctx.y, solid);
        ctx.grid.set_heat(ctx.x, ctx.y, 0);
    } else if ctx.rng.chance(0.001) {
        ctx.grid.set_buf(ctx.x, ctx.y, solid);
        ctx.grid.set_heat(ctx.x, ctx.y, 0);
    }
}
