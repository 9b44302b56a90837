//! Fixed solids that still react to their surroundings.

use super::UpdateContext;
use crate::domain::elements::Element;

pub(super) fn update_ice(ctx: &mut UpdateContext) {
    // Denser than the liquids below it: trade places and sink.
    if ctx.grid.buf(ctx.x, ctx.y + 1) == Element::Water && ctx.rng.chance(0.1) {
        ctx.grid.swap_buf(ctx.x, ctx.y, ctx.x, ctx.y + 1);
        return;
    }

    if ctx.heat_source_nearby() {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Water);
        return;
    }

    let below = ctx.grid.buf(ctx.x, ctx.y + 1);
    if (below == Element::Lava || below == Element::Oil) && ctx.rng.chance(0.05) {
        ctx.grid.swap_buf(ctx.x, ctx.y, ctx.x, ctx.y + 1);
    }
}

pub(super) fn update_glass(ctx: &mut UpdateContext) {
    if ctx.near(Element::Lava, 1) && ctx.rng.chance(0.05) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Lava);
    }
}

/// Solid iron, gold and copper share one rule: cryogenic contact slowly
/// bleeds off accumulated heat. Melting is driven from the heat-source
/// side (lava, flame, burning coal).
pub(super) fn update_metal(ctx: &mut UpdateContext) {
    if ctx.near(Element::Nitrogen, 1) && ctx.rng.chance(0.05) {
        let heat = ctx.grid.heat_at(ctx.x, ctx.y);
        if heat > 0 {
            ctx.grid.set_heat(ctx.x, ctx.y, heat - 1);
        }
    }
}
