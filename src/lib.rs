//! Granula Engine - falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - core/        - random source
//! - domain/      - element definitions
//! - spatial/     - grid store and overlay channels
//! - systems/     - behaviors, reactions, lighting, explosions
//! - simulation/  - orchestration and the wasm facade

pub mod core;
pub mod domain;
pub mod simulation;
pub mod spatial;
pub mod systems;

// Short paths for the common types
pub use domain::elements;
pub use domain::elements::Element;
pub use simulation::{World, WorldCore};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Granula WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Export element ids for JS
#[wasm_bindgen]
pub fn el_empty() -> u8 { Element::Empty.id() }
#[wasm_bindgen]
pub fn el_sand() -> u8 { Element::Sand.id() }
#[wasm_bindgen]
pub fn el_water() -> u8 { Element::Water.id() }
#[wasm_bindgen]
pub fn el_lava() -> u8 { Element::Lava.id() }
#[wasm_bindgen]
pub fn el_fire() -> u8 { Element::Fire.id() }
#[wasm_bindgen]
pub fn el_earth() -> u8 { Element::Earth.id() }
#[wasm_bindgen]
pub fn el_stone() -> u8 { Element::Stone.id() }
#[wasm_bindgen]
pub fn el_smoke() -> u8 { Element::Smoke.id() }
#[wasm_bindgen]
pub fn el_seed() -> u8 { Element::Seed.id() }
#[wasm_bindgen]
pub fn el_grass() -> u8 { Element::Grass.id() }
#[wasm_bindgen]
pub fn el_wood() -> u8 { Element::Wood.id() }
#[wasm_bindgen]
pub fn el_ice() -> u8 { Element::Ice.id() }
#[wasm_bindgen]
pub fn el_oil() -> u8 { Element::Oil.id() }
#[wasm_bindgen]
pub fn el_iron() -> u8 { Element::Iron.id() }
#[wasm_bindgen]
pub fn el_nitrogen() -> u8 { Element::Nitrogen.id() }
#[wasm_bindgen]
pub fn el_unbreakable() -> u8 { Element::Unbreakable.id() }
#[wasm_bindgen]
pub fn el_acid() -> u8 { Element::Acid.id() }
#[wasm_bindgen]
pub fn el_glass() -> u8 { Element::Glass.id() }
#[wasm_bindgen]
pub fn el_dynamite() -> u8 { Element::Dynamite.id() }
#[wasm_bindgen]
pub fn el_gold() -> u8 { Element::Gold.id() }
#[wasm_bindgen]
pub fn el_copper() -> u8 { Element::Copper.id() }
#[wasm_bindgen]
pub fn el_salt() -> u8 { Element::Salt.id() }
#[wasm_bindgen]
pub fn el_cement() -> u8 { Element::Cement.id() }
#[wasm_bindgen]
pub fn el_rubber() -> u8 { Element::Rubber.id() }
#[wasm_bindgen]
pub fn el_gasoline() -> u8 { Element::Gasoline.id() }
#[wasm_bindgen]
pub fn el_mercury() -> u8 { Element::Mercury.id() }
#[wasm_bindgen]
pub fn el_uranium() -> u8 { Element::Uranium.id() }
#[wasm_bindgen]
pub fn el_molten_iron() -> u8 { Element::MoltenIron.id() }
#[wasm_bindgen]
pub fn el_molten_gold() -> u8 { Element::MoltenGold.id() }
#[wasm_bindgen]
pub fn el_molten_copper() -> u8 { Element::MoltenCopper.id() }
#[wasm_bindgen]
pub fn el_lamp() -> u8 { Element::Lamp.id() }
#[wasm_bindgen]
pub fn el_meat() -> u8 { Element::Meat.id() }
#[wasm_bindgen]
pub fn el_rotten_meat() -> u8 { Element::RottenMeat.id() }
#[wasm_bindgen]
pub fn el_pumpkin() -> u8 { Element::Pumpkin.id() }
#[wasm_bindgen]
pub fn el_watermelon() -> u8 { Element::Watermelon.id() }
#[wasm_bindgen]
pub fn el_juice() -> u8 { Element::Juice.id() }
#[wasm_bindgen]
pub fn el_pumpkin_seed() -> u8 { Element::PumpkinSeed.id() }
#[wasm_bindgen]
pub fn el_watermelon_seed() -> u8 { Element::WatermelonSeed.id() }
#[wasm_bindgen]
pub fn el_apple_seed() -> u8 { Element::AppleSeed.id() }
#[wasm_bindgen]
pub fn el_crude_oil() -> u8 { Element::CrudeOil.id() }
#[wasm_bindgen]
pub fn el_gas() -> u8 { Element::Gas.id() }
#[wasm_bindgen]
pub fn el_liquefied_gas() -> u8 { Element::LiquefiedGas.id() }
#[wasm_bindgen]
pub fn el_coal() -> u8 { Element::Coal.id() }
#[wasm_bindgen]
pub fn el_sandstone() -> u8 { Element::Sandstone.id() }
#[wasm_bindgen]
pub fn el_gray_sand() -> u8 { Element::GraySand.id() }
#[wasm_bindgen]
pub fn el_peat() -> u8 { Element::Peat.id() }
