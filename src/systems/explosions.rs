//! Explosions - one-shot destructive bursts and their cosmetic afterglow.
//!
//! All destruction happens synchronously at creation time against the
//! write buffer. The `Explosion` records kept afterwards are read-only:
//! the renderer fades them out, and a few rules (fruit bursting) ask
//! whether a coordinate sits inside a live disc. They never touch the
//! grid again.

use crate::core::random::Rng;
use crate::domain::elements::Element;
use crate::spatial::grid::SimGrid;
use crate::systems::reactions::smoke_ring;

/// Render lifetime of the afterglow, in ticks.
pub const EXPLOSION_LIFE: u32 = 20;

/// Cosmetic radius of a nuclear burst.
const NUCLEAR_VISUAL_RADIUS: i32 = 15;
/// Radius actually cleared by a nuclear burst.
const NUCLEAR_BLAST_RADIUS: i32 = 10;
/// Squared inner edge of the nuclear fire ring.
const NUCLEAR_RING_D2: i32 = 64;

/// Transient visual record of a burst.
pub struct Explosion {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub life: u32,
}

impl Explosion {
    fn new(x: i32, y: i32, radius: i32) -> Self {
        Self {
            x,
            y,
            radius,
            life: EXPLOSION_LIFE,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Does (x, y) fall inside this burst's disc?
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Chemical burst: clear a disc of `radius`, sparing blast-resistant
/// materials, and dress the outer ring with flames and smoke. Ring
/// effects only land on cells the blast actually cleared; a protected
/// cell is never overwritten.
pub fn create_explosion(
    grid: &mut SimGrid,
    rng: &mut Rng,
    explosions: &mut Vec<Explosion>,
    x: i32,
    y: i32,
    radius: i32,
) {
    explosions.push(Explosion::new(x, y, radius));

    let r2 = radius * radius;
    let ring2 = (radius - 1) * (radius - 1);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let d2 = dx * dx + dy * dy;
            if d2 > r2 {
                continue;
            }
            let nx = x + dx;
            let ny = y + dy;
            if !grid.in_bounds(nx, ny) {
                continue;
            }
            if !grid.buf(nx, ny).blast_resistant() {
                grid.set_buf(nx, ny, Element::Empty);
            }
            if d2 >= ring2 {
                if rng.chance(0.3) && grid.buf(nx, ny) == Element::Empty {
                    grid.set_buf(nx, ny, Element::Fire);
                    grid.set_fire_life(nx, ny, 60);
                }
                if rng.chance(0.5) {
                    smoke_ring(grid, rng, nx, ny);
                }
            }
        }
    }
}

/// Nuclear burst: a wider, harsher disc that only the unbreakable wall
/// survives, ringed by long-lived fire. The visual record is larger than
/// the destruction.
pub fn create_nuclear_explosion(
    grid: &mut SimGrid,
    rng: &mut Rng,
    explosions: &mut Vec<Explosion>,
    x: i32,
    y: i32,
) {
    explosions.push(Explosion::new(x, y, NUCLEAR_VISUAL_RADIUS));

    let r = NUCLEAR_BLAST_RADIUS;
    for dy in -r..=r {
        for dx in -r..=r {
            let d2 = dx * dx + dy * dy;
            if d2 > r * r {
                continue;
            }
            let nx = x + dx;
            let ny = y + dy;
            if !grid.in_bounds(nx, ny) {
                continue;
            }
            if grid.buf(nx, ny) != Element::Unbreakable {
                grid.set_buf(nx, ny, Element::Empty);
            }
            if d2 >= NUCLEAR_RING_D2 {
                if rng.chance(0.5) && grid.buf(nx, ny) == Element::Empty {
                    grid.set_buf(nx, ny, Element::Fire);
                    grid.set_fire_life(nx, ny, 100);
                }
                if rng.chance(0.7) {
                    smoke_ring(grid, rng, nx, ny);
                }
            }
        }
    }
}

/// Age the afterglow list by one tick and drop spent records.
pub fn age(explosions: &mut Vec<Explosion>) {
    explosions.retain_mut(|e| {
        e.life = e.life.saturating_sub(1);
        e.is_alive()
    });
}

/// Is (x, y) inside any live burst disc?
pub fn any_contains(explosions: &[Explosion], x: i32, y: i32) -> bool {
    explosions
        .iter()
        .any(|e| e.is_alive() && e.contains(x, y))
}
