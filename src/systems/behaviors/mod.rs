//! Behaviors - one update rule per element kind.
//!
//! Dispatch is a single match over the element tag; the rules are grouped
//! into modules by movement family. Every rule follows the same contract:
//! it is invoked for a non-empty cell of the committed grid, inspects and
//! mutates the write buffer for all spatial work, and silently does
//! nothing when its preconditions fail. No rule returns an error.

mod energy;
mod gas;
mod liquid;
mod organic;
mod powder;
mod solid;

use crate::core::random::Rng;
use crate::domain::elements::Element;
use crate::spatial::grid::SimGrid;
use crate::systems::explosions::{self, Explosion};

/// Mutable view of everything a rule may touch, centered on one cell.
pub struct UpdateContext<'a> {
    pub grid: &'a mut SimGrid,
    pub explosions: &'a mut Vec<Explosion>,
    pub rng: &'a mut Rng,
    pub x: i32,
    pub y: i32,
}

impl<'a> UpdateContext<'a> {
    // === Movement primitives ===

    /// Relocate this cell by (dx, dy) if the destination is an in-bounds
    /// empty buffer cell. The committed kind moves, the persistent
    /// overlays travel with it, and the origin's overlays reset.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let (x, y) = (self.x, self.y);
        let (nx, ny) = (x + dx, y + dy);
        if !self.grid.in_bounds(nx, ny) || self.grid.buf(nx, ny) != Element::Empty {
            return false;
        }
        let element = self.grid.cell(x, y);
        self.grid.set_buf(x, y, Element::Empty);
        self.grid.set_buf(nx, ny, element);
        let from = self.grid.index(x, y);
        let to = self.grid.index(nx, ny);
        self.grid.move_overlays(from, to);
        true
    }

    /// Granular settling: when both down-diagonals are free pick one
    /// uniformly at random, otherwise take whichever single one is free.
    pub fn try_move_diagonal(&mut self) -> bool {
        let left = self.grid.in_bounds(self.x - 1, self.y + 1)
            && self.grid.buf(self.x - 1, self.y + 1) == Element::Empty;
        let right = self.grid.in_bounds(self.x + 1, self.y + 1)
            && self.grid.buf(self.x + 1, self.y + 1) == Element::Empty;
        if left && right {
            if self.rng.next_bool() {
                self.try_move(-1, 1)
            } else {
                self.try_move(1, 1)
            }
        } else if left {
            self.try_move(-1, 1)
        } else if right {
            self.try_move(1, 1)
        } else {
            false
        }
    }

    /// Viscosity-free spreading: sideways in a randomly ordered left/right
    /// pair, then down-diagonally in the same order.
    pub fn try_flow(&mut self) -> bool {
        let first = if self.rng.next_bool() { 1 } else { -1 };
        let dirs = [first, -first];
        for dx in dirs {
            if self.try_move(dx, 0) {
                return true;
            }
        }
        for dx in dirs {
            if self.try_move(dx, 1) {
                return true;
            }
        }
        false
    }

    // === Neighborhood queries (write buffer, misses read as no-match) ===

    /// Is `element` present in the (2r+1)^2 neighborhood around this cell?
    pub fn near(&self, element: Element, radius: i32) -> bool {
        self.near_at(self.x, self.y, element, radius)
    }

    /// Same probe centered on an arbitrary coordinate.
    pub fn near_at(&self, cx: i32, cy: i32, element: Element, radius: i32) -> bool {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if self.grid.buf(cx + dx, cy + dy) == element {
                    return true;
                }
            }
        }
        false
    }

    /// Fire or lava in the 3x3: the common ignition-source probe.
    pub fn heat_source_nearby(&self) -> bool {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let e = self.grid.buf(self.x + dx, self.y + dy);
                if e == Element::Fire || e == Element::Lava {
                    return true;
                }
            }
        }
        false
    }

    /// Water anywhere in the wider 5x5 footprint.
    pub fn water_nearby(&self) -> bool {
        self.near(Element::Water, 2)
    }

    /// Same 5x5 water probe centered elsewhere.
    pub fn water_nearby_at(&self, cx: i32, cy: i32) -> bool {
        self.near_at(cx, cy, Element::Water, 2)
    }

    /// Is this cell inside any live explosion disc?
    pub fn in_explosion(&self) -> bool {
        explosions::any_contains(self.explosions.as_slice(), self.x, self.y)
    }
}

/// Run one element's rule for one cell. `element` is the committed kind
/// the step driver dispatched on.
pub fn update_cell(ctx: &mut UpdateContext, element: Element) {
    use Element::*;
    match element {
        Sand => powder::update_sand(ctx),
        GraySand => powder::update_gray_sand(ctx),
        Salt => powder::update_salt(ctx),
        Cement => powder::update_cement(ctx),
        Earth => powder::update_earth(ctx),
        Rubber => powder::update_rubber(ctx),

        Water => liquid::update_water(ctx),
        Lava => liquid::update_lava(ctx),
        Oil => liquid::update_oil(ctx),
        Gasoline => liquid::update_gasoline(ctx),
        CrudeOil => liquid::update_crude_oil(ctx),
        Mercury => liquid::update_mercury(ctx),
        Nitrogen => liquid::update_nitrogen(ctx),
        Acid => liquid::update_acid(ctx),
        Juice => liquid::update_juice(ctx),
        LiquefiedGas => liquid::update_liquefied_gas(ctx),
        MoltenIron => liquid::update_molten_metal(ctx, Iron),
        MoltenGold => liquid::update_molten_metal(ctx, Gold),
        MoltenCopper => liquid::update_molten_metal(ctx, Copper),

        Smoke => gas::update_smoke(ctx),
        Gas => gas::update_gas(ctx),

        Fire => energy::update_fire(ctx),
        Dynamite => energy::update_dynamite(ctx),
        Uranium => energy::update_uranium(ctx),
        Coal => energy::update_coal(ctx),

        Ice => solid::update_ice(ctx),
        Glass => solid::update_glass(ctx),
        Iron | Gold | Copper => solid::update_metal(ctx),

        Seed => organic::update_seed(ctx),
        Grass => organic::update_grass(ctx),
        Wood => organic::update_wood(ctx),
        Meat => organic::update_meat(ctx),
        RottenMeat => organic::update_rotten_meat(ctx),
        Pumpkin => organic::update_fruit(ctx, PumpkinSeed),
        Watermelon => organic::update_fruit(ctx, WatermelonSeed),
        PumpkinSeed => organic::update_fruit_seed(ctx, Pumpkin),
        WatermelonSeed => organic::update_fruit_seed(ctx, Watermelon),
        AppleSeed => organic::update_apple_seed(ctx),
        Peat => organic::update_peat(ctx),

        // Inert kinds: bare rock, walls, the lamp (its glow is the
        // lighting pass's business).
        Empty | Stone | Unbreakable | Sandstone | Lamp => {}
    }
}
