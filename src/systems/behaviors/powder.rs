//! Granular solids - fall straight, then settle along the down diagonals.

use super::UpdateContext;
use crate::domain::elements::Element;

/// Accumulated heat at which baking sand vitrifies into sandstone.
const SAND_VITRIFY_HEAT: u16 = 50;
/// Chance per tick that sand next to flame scorches into gray sand.
const SAND_SCORCH_CHANCE: f32 = 0.0001;

pub(super) fn update_sand(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }
    if ctx.try_move_diagonal() {
        return;
    }

    // Resting sand bakes next to fire or lava and eventually vitrifies;
    // away from heat it cools back down.
    if ctx.heat_source_nearby() {
        let heat = ctx.grid.heat_at(ctx.x, ctx.y) + 1;
        ctx.grid.set_heat(ctx.x, ctx.y, heat);
        if heat > SAND_VITRIFY_HEAT {
            ctx.grid.set_buf(ctx.x, ctx.y, Element::Sandstone);
            ctx.grid.set_heat(ctx.x, ctx.y, 0);
        }
    } else {
        let heat = ctx.grid.heat_at(ctx.x, ctx.y);
        if heat > 0 {
            ctx.grid.set_heat(ctx.x, ctx.y, heat - 1);
        }
    }

    // Very slow scorching, distinct from vitrification.
    if ctx.heat_source_nearby() && ctx.rng.chance(SAND_SCORCH_CHANCE) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::GraySand);
    }
}

/// Scorched sand keeps the granular motion but none of the chemistry.
pub(super) fn update_gray_sand(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }
    ctx.try_move_diagonal();
}

pub(super) fn update_salt(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }
    if ctx.try_move_diagonal() {
        return;
    }

    if ctx.water_nearby() && ctx.rng.chance(0.1) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Empty);
    }
}

pub(super) fn update_cement(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }

    // Wet cement sets.
    if ctx.water_nearby() && ctx.rng.chance(0.01) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Stone);
    }
}

pub(super) fn update_earth(ctx: &mut UpdateContext) {
    ctx.try_move(0, 1);
}

pub(super) fn update_rubber(ctx: &mut UpdateContext) {
    ctx.try_move(0, 1);
}
