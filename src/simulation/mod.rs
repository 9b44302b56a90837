//! World - orchestration of the falling-sand simulation.
//!
//! `WorldCore` owns the grid store, the overlay arrays, the random source
//! and the explosion list for their whole lifetime; every rule gets them
//! by reference, never through globals. The public methods delegate to the
//! step driver, brush commands, snapshot codec and settings; the wasm
//! `World` facade wraps the whole thing for the embedder.

use crate::core::random::Rng;
use crate::domain::elements::Element;
use crate::spatial::grid::SimGrid;
use crate::systems::explosions::Explosion;

#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "snapshot/snapshot.rs"]
mod snapshot;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use commands::BrushShape;
pub use facade::World;

pub const MIN_BRUSH_RADIUS: i32 = 1;
pub const MAX_BRUSH_RADIUS: i32 = 15;
/// Upper bound on the steps-per-tick multiplier.
pub const MAX_SIM_SPEED: u32 = 10;

/// The simulation world.
pub struct WorldCore {
    grid: SimGrid,
    explosions: Vec<Explosion>,
    rng: Rng,

    // Control surface
    paused: bool,
    speed: u32,

    // State
    frame: u64,
}

impl WorldCore {
    /// Create a new world with given dimensions and the default seed.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height, init::DEFAULT_SEED)
    }

    /// Create a world with an explicit random seed; the same seed replays
    /// the same simulation.
    pub fn with_seed(width: u32, height: u32, seed: u32) -> Self {
        init::create_world_core(width, height, seed)
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    // === Control surface ===

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        settings::set_paused(self, paused);
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Steps run per `tick()` call; clamped to 1..=MAX_SIM_SPEED.
    pub fn set_speed(&mut self, speed: u32) {
        settings::set_speed(self, speed);
    }

    /// Advance exactly one tick, pause flag or not.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Advance `speed` ticks, unless paused. The pause flag is observed
    /// here, between ticks, never mid-tick.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        for _ in 0..self.speed {
            self.step();
        }
    }

    /// Reset the grid, every overlay and the explosion list together.
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === Input boundary ===

    /// Write `element` into every in-bounds cell of the brush footprint.
    /// A brush is input, not physics: it writes unconditionally.
    pub fn paint(&mut self, cx: i32, cy: i32, element: Element, radius: i32, shape: BrushShape) {
        commands::paint(self, cx, cy, element, radius, shape);
    }

    /// Clear kind and all overlays inside the brush footprint.
    pub fn erase(&mut self, cx: i32, cy: i32, radius: i32, shape: BrushShape) {
        commands::erase(self, cx, cy, radius, shape);
    }

    // === Persistence boundary ===

    /// Serialize the element-kind array. Overlays and explosions are
    /// transient and deliberately not part of the format.
    pub fn save_state(&self) -> String {
        snapshot::save_state(self)
    }

    /// Load a snapshot. Validation happens before any mutation: a failed
    /// load leaves the world untouched. A successful one resets all
    /// overlays and drops pending explosions.
    pub fn load_state(&mut self, json: &str) -> Result<(), String> {
        snapshot::load_state(self, json)
    }

    // === Render boundary (read-only views) ===

    pub fn element_at(&self, x: i32, y: i32) -> Element {
        self.grid.cell(x, y)
    }

    pub fn heat_at(&self, x: i32, y: i32) -> u16 {
        self.grid.heat_at(x, y)
    }

    pub fn decay_at(&self, x: i32, y: i32) -> u16 {
        self.grid.decay_at(x, y)
    }

    pub fn light_at(&self, x: i32, y: i32) -> u8 {
        self.grid.light_at(x, y)
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    /// Pointer to the committed element array (u8 ids), for zero-copy
    /// rendering.
    pub fn cells_ptr(&self) -> *const u8 {
        self.grid.cells_ptr()
    }

    pub fn heat_ptr(&self) -> *const u16 {
        self.grid.heat_ptr()
    }

    pub fn decay_ptr(&self) -> *const u16 {
        self.grid.decay_ptr()
    }

    pub fn light_ptr(&self) -> *const u8 {
        self.grid.light_ptr()
    }

    /// Length shared by all per-cell arrays.
    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
