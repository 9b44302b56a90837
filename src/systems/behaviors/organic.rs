//! Living and once-living matter: growth chains, rot, and everything
//! that burns a little too easily.

use super::UpdateContext;
use crate::domain::elements::Element;
use crate::systems::reactions::smoke_ring;

/// Ticks of aging before meat starts rolling to rot.
const MEAT_DECAY_TICKS: u16 = 500;

pub(super) fn update_seed(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }

    // Germinates on soil; water in reach speeds it up.
    if ctx.grid.buf(ctx.x, ctx.y + 1) == Element::Earth {
        let growth_chance = if ctx.water_nearby() { 0.02 } else { 0.005 };
        if ctx.rng.chance(growth_chance) {
            ctx.grid.set_buf(ctx.x, ctx.y, Element::Grass);
        }
    }
}

pub(super) fn update_grass(ctx: &mut UpdateContext) {
    // Grow a blade upward when rooted and uncovered.
    if ctx.y > 0 {
        let below = ctx.grid.buf(ctx.x, ctx.y + 1);
        let rooted = below == Element::Earth || below == Element::Grass;
        if rooted && ctx.grid.buf(ctx.x, ctx.y - 1) == Element::Empty {
            let growth_chance = if ctx.water_nearby() { 0.001 } else { 0.0002 };
            if ctx.rng.chance(growth_chance) {
                ctx.grid.set_buf(ctx.x, ctx.y - 1, Element::Grass);
            }
        }
    }

    // Creep across bare soil.
    if ctx.rng.chance(0.001) {
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1)] {
            let nx = ctx.x + dx;
            let ny = ctx.y + dy;
            if ctx.grid.buf(nx, ny) == Element::Earth
                && (ctx.water_nearby_at(nx, ny) || ctx.rng.chance(0.3))
            {
                ctx.grid.set_buf(nx, ny, Element::Grass);
            }
        }
    }

    if ctx.heat_source_nearby() && ctx.rng.chance(0.02) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Fire);
        ctx.grid.set_fire_life(ctx.x, ctx.y, 30);
        smoke_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
    }
}

pub(super) fn update_wood(ctx: &mut UpdateContext) {
    if ctx.heat_source_nearby() && ctx.rng.chance(0.01) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Fire);
        ctx.grid.set_fire_life(ctx.x, ctx.y, 80);
        smoke_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
    }
}

pub(super) fn update_meat(ctx: &mut UpdateContext) {
    let decay = ctx.grid.decay_at(ctx.x, ctx.y);
    if decay < MEAT_DECAY_TICKS {
        ctx.grid.set_decay(ctx.x, ctx.y, decay + 1);
    } else if ctx.rng.chance(0.005) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::RottenMeat);
        if ctx.rng.chance(0.3) {
            smoke_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
        }
    }

    if ctx.heat_source_nearby() && ctx.rng.chance(0.01) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Fire);
        ctx.grid.set_fire_life(ctx.x, ctx.y, 50);
    }
}

pub(super) fn update_rotten_meat(ctx: &mut UpdateContext) {
    if ctx.heat_source_nearby() && ctx.rng.chance(0.05) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Fire);
        ctx.grid.set_fire_life(ctx.x, ctx.y, 60);
        smoke_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
    }

    // Eventually falls apart entirely.
    if ctx.rng.chance(0.001) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Empty);
        if ctx.rng.chance(0.5) {
            smoke_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
        }
    }
}

/// Pumpkins and watermelons burst under violence, leaving juice and a
/// scatter of their own seeds.
pub(super) fn update_fruit(ctx: &mut UpdateContext, seed_kind: Element) {
    let threatened = ctx.in_explosion()
        || ctx.heat_source_nearby()
        || ctx.near(Element::Acid, 1);
    if threatened && ctx.rng.chance(0.1) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Juice);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let nx = ctx.x + dx;
                let ny = ctx.y + dy;
                if ctx.grid.in_bounds(nx, ny)
                    && ctx.grid.buf(nx, ny) == Element::Empty
                    && ctx.rng.chance(0.3)
                {
                    ctx.grid.set_buf(nx, ny, seed_kind);
                }
            }
        }
    }
}

/// A fruit seed sprouts its fruit into the empty cell above and vacates
/// its own.
pub(super) fn update_fruit_seed(ctx: &mut UpdateContext, fruit: Element) {
    if ctx.try_move(0, 1) {
        return;
    }

    let below = ctx.grid.buf(ctx.x, ctx.y + 1);
    if below == Element::Earth || below == Element::Grass {
        let growth_chance = if ctx.water_nearby() { 0.01 } else { 0.002 };
        if ctx.rng.chance(growth_chance)
            && ctx.y > 0
            && ctx.grid.buf(ctx.x, ctx.y - 1) == Element::Empty
        {
            ctx.grid.set_buf(ctx.x, ctx.y - 1, fruit);
            ctx.grid.set_buf(ctx.x, ctx.y, Element::Empty);
        }
    }
}

pub(super) fn update_apple_seed(ctx: &mut UpdateContext) {
    if ctx.try_move(0, 1) {
        return;
    }

    let below = ctx.grid.buf(ctx.x, ctx.y + 1);
    if below == Element::Earth || below == Element::Grass {
        let growth_chance = if ctx.water_nearby() { 0.008 } else { 0.001 };
        if ctx.rng.chance(growth_chance) {
            ctx.grid.set_buf(ctx.x, ctx.y, Element::Wood);
        }
    }
}

pub(super) fn update_peat(ctx: &mut UpdateContext) {
    if ctx.heat_source_nearby() && ctx.rng.chance(0.005) {
        ctx.grid.set_buf(ctx.x, ctx.y, Element::Fire);
        ctx.grid.set_fire_life(ctx.x, ctx.y, 100);
        smoke_ring(ctx.grid, ctx.rng, ctx.x, ctx.y);
    }

    // A cell lit earlier in this same tick smolders into the deposit
    // around it; the same-tick buffer visibility is what spreads a peat
    // fire underground.
    if ctx.grid.buf(ctx.x, ctx.y) == Element::Fire && ctx.rng.chance(0.01) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let nx = ctx.x + dx;
                let ny = ctx.y + dy;
                if ctx.grid.buf(nx, ny) == Element::Peat && ctx.rng.chance(0.1) {
                    ctx.grid.set_buf(nx, ny, Element::Fire);
                    ctx.grid.set_fire_life(nx, ny, 80);
                }
            }
        }
    }
}
