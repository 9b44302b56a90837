use wasm_bindgen::prelude::*;

use crate::domain::elements::{self, Element};

use super::{BrushShape, WorldCore};

/// Wasm-facing wrapper around the simulation world. The embedder drives
/// `tick()` from its frame loop, paints with the brush methods, and reads
/// the grid and overlays zero-copy through the pointer accessors.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    /// Create a world with an explicit random seed (replayable runs).
    #[wasm_bindgen(js_name = newWithSeed)]
    pub fn new_with_seed(width: u32, height: u32, seed: u32) -> Self {
        Self {
            core: WorldCore::with_seed(width, height, seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.core.height()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    // === Control surface ===

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool {
        self.core.paused()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> u32 {
        self.core.speed()
    }

    /// Simulation speed multiplier: how many steps one `tick()` runs.
    pub fn set_speed(&mut self, speed: u32) {
        self.core.set_speed(speed);
    }

    /// Advance exactly one step, ignoring the pause flag.
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Advance `speed` steps, unless paused.
    pub fn tick(&mut self) {
        self.core.tick();
    }

    /// Reset grid, overlays and explosions.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === Input boundary ===

    /// Paint `element` with the brush. Returns false for an id that does
    /// not name a storable element (including the reserved eraser id).
    pub fn paint(&mut self, cx: i32, cy: i32, element: u8, radius: i32, round_brush: bool) -> bool {
        let Some(element) = Element::from_id(element) else {
            return false;
        };
        let shape = if round_brush {
            BrushShape::Round
        } else {
            BrushShape::Square
        };
        self.core.paint(cx, cy, element, radius, shape);
        true
    }

    /// Erase with the brush: clears kind and every overlay.
    pub fn erase(&mut self, cx: i32, cy: i32, radius: i32, round_brush: bool) {
        let shape = if round_brush {
            BrushShape::Round
        } else {
            BrushShape::Square
        };
        self.core.erase(cx, cy, radius, shape);
    }

    // === Persistence boundary ===

    /// Serialize the element grid (kinds only) to JSON.
    pub fn save_state(&self) -> String {
        self.core.save_state()
    }

    /// Load a snapshot; on error the current grid is untouched.
    pub fn load_state(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_state(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    // === Render boundary ===

    /// Element id at (x, y); out of range reads as empty.
    pub fn cell_at(&self, x: i32, y: i32) -> u8 {
        self.core.element_at(x, y).id()
    }

    pub fn heat_at(&self, x: i32, y: i32) -> u16 {
        self.core.heat_at(x, y)
    }

    pub fn decay_at(&self, x: i32, y: i32) -> u16 {
        self.core.decay_at(x, y)
    }

    pub fn light_at(&self, x: i32, y: i32) -> u8 {
        self.core.light_at(x, y)
    }

    /// Get pointer to the element id array (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.cells_ptr()
    }

    pub fn heat_ptr(&self) -> *const u16 {
        self.core.heat_ptr()
    }

    pub fn decay_ptr(&self) -> *const u16 {
        self.core.decay_ptr()
    }

    pub fn light_ptr(&self) -> *const u8 {
        self.core.light_ptr()
    }

    /// Length shared by every per-cell array.
    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    // === Explosion afterglow (cosmetic, for the renderer fade-out) ===

    pub fn explosion_count(&self) -> usize {
        self.core.explosions().len()
    }

    pub fn explosion_x(&self, idx: usize) -> i32 {
        self.core.explosions().get(idx).map_or(0, |e| e.x)
    }

    pub fn explosion_y(&self, idx: usize) -> i32 {
        self.core.explosions().get(idx).map_or(0, |e| e.y)
    }

    pub fn explosion_radius(&self, idx: usize) -> i32 {
        self.core.explosions().get(idx).map_or(0, |e| e.radius)
    }

    pub fn explosion_life(&self, idx: usize) -> u32 {
        self.core.explosions().get(idx).map_or(0, |e| e.life)
    }

    // === Palette metadata ===

    /// Base display color of an element id (ABGR), background for unknown
    /// ids.
    pub fn element_color(element: u8) -> u32 {
        Element::from_id(element)
            .unwrap_or(Element::Empty)
            .color()
    }

    pub fn element_name(element: u8) -> String {
        Element::from_id(element)
            .map(|e| e.name().to_string())
            .unwrap_or_default()
    }

    /// Palette manifest (id, name, color per element) as JSON.
    pub fn element_manifest_json() -> String {
        elements::manifest_json()
    }
}
