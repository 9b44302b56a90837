//! Fire and the materials that make it interesting.

use super::UpdateContext;
use crate::domain::elements::Element;
use crate::systems::explosions::{create_explosion, create_nuclear_explosion};
use crate::systems::reactions::{fire_ring, heat_metal, ignite_flammables, smoke_ring};

/// Uranium heat past which the pile goes critical.
const URANIUM_CRITICAL_HEAT: u16 = 100;
/// Uranium heat past which it glows and spits flames.
const URANIUM_GLOW_HEAT: u16 = 50;

/// Base chance a flame with a spent burn budget goes out this tick.
const EXTINGUISH_CHANCE: f32 = 0.03;
/// Extinguish chance with liquid nitrogen adjacent.
const QUENCHED_EXTINGUISH_CHANCE: f32 = 0.5;

pub(super) fn update_fire(ctx: &mut UpdateContext) {
    // Rising flame carries its burn budget with it.
    if ctx.try_move(0, -1) {
        return;
    }
    if ctx.rng.chance(0.3) {
        let dx = ctx.rng.range_i32(-1, 1);
        if ctx.try_move(dx, -1) {
            return;
        }
    }

    ignite_flammables(ctx.grid, ctx.rng, ctx.x, ctx.y);

    if ctx.rng.chance(0.1) {
        smoke_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
    }

    heat_metal(ctx.grid, ctx.rng, ctx.x, ctx.y, Element::Iron, Element::MoltenIron, 0.3);
    heat_metal(ctx.grid, ctx.rng, ctx.x, ctx.y, Element::Gold, Element::MoltenGold, 0.2);
    heat_metal(ctx.grid, ctx.rng, ctx.x, ctx.y, Element::Copper, Element::MoltenCopper, 0.4);

    // Stoke any uranium in reach; an overstoked pile goes off right here.
    if ctx.near(Element::Uranium, 1) && ctx.rng.chance(0.1) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let nx = ctx.x + dx;
                let ny = ctx.y + dy;
                if ctx.grid.buf(nx, ny) == Element::Uranium {
                    let heat = ctx.grid.heat_at(nx, ny) + 1;
                    ctx.grid.set_heat(nx, ny, heat);
                    if heat > URANIUM_GLOW_HEAT {
                        create_nuclear_explosion(ctx.grid, ctx.rng, ctx.explosions, nx, ny);
                        ctx.grid.set_buf(nx, ny, Element::Empty);
                    }
                }
            }
        }
    }

    // Burn down: a positive budget guarantees another tick of flame; only
    // a spent one rolls to go out. Cryogenic contact quenches hard.
    let life = ctx.grid.fire_life_at(ctx.x, ctx.y);
    if life > 0 {
        ctx.grid.set_fire_life(ctx.x, ctx.y, life - 1);
    } else {
        let p = if ctx.near(Element::Nitrogen, 1) {
            QUENCHED_EXTINGUISH_CHANCE
        } else {
            EXTINGUISH_CHANCE
        };
        if ctx.rng.chance(p) {
            ctx.grid.set_buf(ctx.x, ctx.y, Element::Empty);
        }
    }
}

pub(super) fn update_dynamite(ctx: &mut UpdateContext) {
    // Inert until something hot touches it.
    if ctx.heat_source_nearby() {
        create_explosion(ctx.grid, ctx.rng, ctx.explosions, ctx.x, ctx.y, 8);
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Empty);
    }
}

pub(super) fn update_uranium(ctx: &mut UpdateContext) {
    // Self-decay needs no external trigger.
    if ctx.rng.chance(0.001) {
        let heat = ctx.grid.heat_at(ctx.x, ctx.y) + 1;
        ctx.grid.set_heat(ctx.x, ctx.y, heat);
    }

    let heat = ctx.grid.heat_at(ctx.x, ctx.y);
    if heat > URANIUM_CRITICAL_HEAT {
        create_nuclear_explosion(ctx.grid, ctx.rng, ctx.explosions, ctx.x, ctx.y);
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Empty);
        return;
    }

    // Visible precursor: a hot pile sheds flames before it blows.
    if heat > URANIUM_GLOW_HEAT && ctx.rng.chance(0.1) {
        fire_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
    }
}

pub(super) fn update_coal(ctx: &mut UpdateContext) {
    // Catching fire charges the heat channel; the ember then burns down
    // on its own clock.
    if ctx.heat_source_nearby() && ctx.rng.chance(0.02) {
        ctx.grid.set_heat(ctx.x, ctx.y, 100);
    }

    let heat = ctx.grid.heat_at(ctx.x, ctx.y);
    if heat > 0 {
        ctx.grid.set_heat(ctx.x, ctx.y, heat - 1);
        if heat - 1 == 0 {
            // Burned through.
            ctx.grid.set_buf(ctx.x, ctx.y, Element::Empty);
            if ctx.rng.chance(0.5) {
                smoke_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
            }
            return;
        }
        if ctx.rng.chance(0.01) {
            fire_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
        }
    }

    if heat > 50 {
        heat_metal(ctx.grid, ctx.rng, ctx.x, ctx.y, Element::Iron, Element::MoltenIron, 0.1);
        heat_metal(ctx.grid, ctx.rng, ctx.x, ctx.y, Element::Gold, Element::MoltenGold, 0.08);
        heat_metal(ctx.grid, ctx.rng, ctx.x, ctx.y, Element::Copper, Element::MoltenCopper, 0.12);
    }
}
