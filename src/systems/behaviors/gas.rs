//! Gases - rise, drift sideways, thin out over time.

use super::UpdateContext;
use crate::domain::elements::Element;
use crate::systems::explosions::create_explosion;

pub(super) fn update_smoke(ctx: &mut UpdateContext) {
    if ctx.try_move(0, -1) {
        return;
    }

    if ctx.rng.chance(0.4) {
        let dx = if ctx.rng.next_bool() { 1 } else { -1 };
        if ctx.try_move(dx, 0) {
            return;
        }
    }

    if ctx.rng.chance(0.03) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Empty);
    }
}

pub(super) fn update_gas(ctx: &mut UpdateContext) {
    if ctx.try_move(0, -1) {
        return;
    }

    if ctx.rng.chance(0.6) {
        let dx = ctx.rng.range_i32(-1, 1);
        if ctx.try_move(dx, -1) {
            return;
        }
    }

    // A spark anywhere nearby sets the whole pocket off.
    if ctx.heat_source_nearby() && ctx.rng.chance(0.8) {
        create_explosion(ctx.grid, ctx.rng, ctx.explosions, ctx.x, ctx.y, 5);
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Empty);
    }

    if ctx.rng.chance(0.05) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Empty);
    }

    // Condenses back under cryogenic contact.
    if ctx.near(Element::Nitrogen, 1) && ctx.rng.chance(0.1) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::LiquefiedGas);
    }
}
