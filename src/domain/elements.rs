//! Element definitions - every material the simulation knows about.
//!
//! Ids are stable: they are the snapshot wire format and the values the
//! embedder passes across the wasm boundary. Id 13 is a reserved gap; the
//! eraser is a brush mode, never a stored material.

use serde::Serialize;

pub type ElementId = u8;

/// Fire lifetime granted to a freshly painted flame.
pub const PLACED_FIRE_LIFE: u16 = 100;

/// Every storable cell kind.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    Empty = 0,
    Sand = 1,
    Water = 2,
    Lava = 3,
    Fire = 4,
    Earth = 5,
    Stone = 6,
    Smoke = 7,
    Seed = 8,
    Grass = 9,
    Wood = 10,
    Ice = 11,
    Oil = 12,
    Iron = 14,
    Nitrogen = 15,
    Unbreakable = 16,
    Acid = 17,
    Glass = 18,
    Dynamite = 19,
    Gold = 20,
    Copper = 21,
    Salt = 22,
    Cement = 23,
    Rubber = 24,
    Gasoline = 25,
    Mercury = 26,
    Uranium = 27,
    MoltenIron = 28,
    MoltenGold = 29,
    MoltenCopper = 30,
    Lamp = 31,
    Meat = 32,
    RottenMeat = 33,
    Pumpkin = 34,
    Watermelon = 35,
    Juice = 36,
    PumpkinSeed = 37,
    WatermelonSeed = 38,
    AppleSeed = 39,
    CrudeOil = 40,
    Gas = 41,
    LiquefiedGas = 42,
    Coal = 43,
    Sandstone = 44,
    GraySand = 45,
    Peat = 46,
}

/// Highest assigned element id (the id space has a gap at 13).
pub const MAX_ELEMENT_ID: ElementId = 46;

// ABGR packed color (little-endian bytes [R,G,B,A]) for direct canvas copy.
const fn abgr(r: u32, g: u32, b: u32, a: u32) -> u32 {
    (a << 24) | (b << 16) | (g << 8) | r
}

impl Element {
    #[inline]
    pub fn id(self) -> ElementId {
        self as ElementId
    }

    /// Decode a wire id. Unassigned ids (including the reserved 13) are
    /// rejected rather than mapped to anything.
    pub fn from_id(id: ElementId) -> Option<Element> {
        use Element::*;
        Some(match id {
            0 => Empty,
            1 => Sand,
            2 => Water,
            3 => Lava,
            4 => Fire,
            5 => Earth,
            6 => Stone,
            7 => Smoke,
            8 => Seed,
            9 => Grass,
            10 => Wood,
            11 => Ice,
            12 => Oil,
            14 => Iron,
            15 => Nitrogen,
            16 => Unbreakable,
            17 => Acid,
            18 => Glass,
            19 => Dynamite,
            20 => Gold,
            21 => Copper,
            22 => Salt,
            23 => Cement,
            24 => Rubber,
            25 => Gasoline,
            26 => Mercury,
            27 => Uranium,
            28 => MoltenIron,
            29 => MoltenGold,
            30 => MoltenCopper,
            31 => Lamp,
            32 => Meat,
            33 => RottenMeat,
            34 => Pumpkin,
            35 => Watermelon,
            36 => Juice,
            37 => PumpkinSeed,
            38 => WatermelonSeed,
            39 => AppleSeed,
            40 => CrudeOil,
            41 => Gas,
            42 => LiquefiedGas,
            43 => Coal,
            44 => Sandstone,
            45 => GraySand,
            46 => Peat,
            _ => return None,
        })
    }

    /// Iterate every assigned element kind in id order.
    pub fn all() -> impl Iterator<Item = Element> {
        (0..=MAX_ELEMENT_ID).filter_map(Element::from_id)
    }

    pub fn name(self) -> &'static str {
        use Element::*;
        match self {
            Empty => "Empty",
            Sand => "Sand",
            Water => "Water",
            Lava => "Lava",
            Fire => "Fire",
            Earth => "Earth",
            Stone => "Stone",
            Smoke => "Smoke",
            Seed => "Seed",
            Grass => "Grass",
            Wood => "Wood",
            Ice => "Ice",
            Oil => "Oil",
            Iron => "Iron",
            Nitrogen => "Liquid Nitrogen",
            Unbreakable => "Unbreakable Wall",
            Acid => "Acid",
            Glass => "Glass",
            Dynamite => "Dynamite",
            Gold => "Gold",
            Copper => "Copper",
            Salt => "Salt",
            Cement => "Cement",
            Rubber => "Rubber",
            Gasoline => "Gasoline",
            Mercury => "Mercury",
            Uranium => "Uranium",
            MoltenIron => "Molten Iron",
            MoltenGold => "Molten Gold",
            MoltenCopper => "Molten Copper",
            Lamp => "Lamp",
            Meat => "Meat",
            RottenMeat => "Rotten Meat",
            Pumpkin => "Pumpkin",
            Watermelon => "Watermelon",
            Juice => "Juice",
            PumpkinSeed => "Pumpkin Seed",
            WatermelonSeed => "Watermelon Seed",
            AppleSeed => "Apple Seed",
            CrudeOil => "Crude Oil",
            Gas => "Gas",
            LiquefiedGas => "Liquefied Gas",
            Coal => "Coal",
            Sandstone => "Sandstone",
            GraySand => "Gray Sand",
            Peat => "Peat",
        }
    }

    /// Base display color, ABGR packed. The renderer layers heat, decay and
    /// light shifts on top.
    pub fn color(self) -> u32 {
        use Element::*;
        match self {
            Empty => abgr(10, 10, 10, 255),
            Sand => abgr(240, 230, 140, 255),
            Water => abgr(30, 144, 255, 180),
            Lava => abgr(255, 69, 0, 255),
            Fire => abgr(255, 165, 0, 255),
            Earth => abgr(139, 69, 19, 255),
            Stone => abgr(128, 128, 128, 255),
            Smoke => abgr(105, 105, 105, 180),
            Seed => abgr(34, 139, 34, 255),
            Grass => abgr(50, 205, 50, 255),
            Wood => abgr(101, 67, 33, 255),
            Ice => abgr(200, 230, 255, 220),
            Oil => abgr(25, 25, 25, 255),
            Iron => abgr(192, 192, 192, 255),
            Nitrogen => abgr(70, 130, 180, 200),
            Unbreakable => abgr(50, 50, 50, 255),
            Acid => abgr(50, 255, 50, 200),
            Glass => abgr(200, 200, 255, 100),
            Dynamite => abgr(178, 34, 34, 255),
            Gold => abgr(255, 215, 0, 255),
            Copper => abgr(184, 115, 51, 255),
            Salt => abgr(255, 255, 255, 255),
            Cement => abgr(210, 210, 210, 255),
            Rubber => abgr(40, 40, 40, 255),
            Gasoline => abgr(255, 255, 0, 150),
            Mercury => abgr(220, 220, 220, 255),
            Uranium => abgr(0, 255, 0, 255),
            MoltenIron => abgr(255, 100, 0, 255),
            MoltenGold => abgr(255, 200, 0, 255),
            MoltenCopper => abgr(255, 150, 50, 255),
            Lamp => abgr(255, 255, 200, 255),
            Meat => abgr(200, 50, 50, 255),
            RottenMeat => abgr(100, 80, 50, 255),
            Pumpkin => abgr(255, 140, 0, 255),
            Watermelon => abgr(0, 150, 0, 255),
            Juice => abgr(255, 200, 100, 180),
            PumpkinSeed => abgr(150, 100, 50, 255),
            WatermelonSeed => abgr(100, 150, 50, 255),
            AppleSeed => abgr(120, 80, 40, 255),
            CrudeOil => abgr(20, 20, 20, 255),
            Gas => abgr(100, 100, 255, 150),
            LiquefiedGas => abgr(120, 120, 255, 255),
            Coal => abgr(30, 30, 30, 255),
            Sandstone => abgr(210, 180, 140, 255),
            GraySand => abgr(160, 160, 160, 255),
            Peat => abgr(80, 60, 40, 255),
        }
    }

    /// Burn budget granted when open flame catches this material: the
    /// number of guaranteed-burn ticks before any extinguish roll. `None`
    /// means flame cannot take the material directly.
    pub fn fire_life_budget(self) -> Option<u16> {
        use Element::*;
        match self {
            Grass => Some(30),
            Oil => Some(40),
            Seed | Meat => Some(50),
            Gasoline | RottenMeat => Some(60),
            Wood | CrudeOil => Some(80),
            Peat => Some(100),
            _ => None,
        }
    }

    /// Light passes through these; everything else absorbs it.
    pub fn transmits_light(self) -> bool {
        use Element::*;
        matches!(self, Empty | Glass | Water | Smoke | Nitrogen | Gas | Sand)
    }

    /// Survives an ordinary (chemical) blast. Nuclear blasts only spare
    /// the unbreakable wall.
    pub fn blast_resistant(self) -> bool {
        use Element::*;
        matches!(self, Unbreakable | Stone | Iron | Gold | Copper | Sandstone)
    }

    /// Acid cannot dissolve these.
    pub fn acid_immune(self) -> bool {
        use Element::*;
        matches!(self, Empty | Unbreakable | Rubber | Acid)
    }

    /// Kinds whose heat channel carries meaning while stationary; the
    /// brush leaves their accumulated heat alone instead of zeroing it.
    pub fn keeps_heat_when_placed(self) -> bool {
        use Element::*;
        matches!(self, Uranium | Iron | Gold | Copper | Coal | Sand)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ElementManifest {
    format_version: u32,
    elements: Vec<ElementManifestEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ElementManifestEntry {
    id: ElementId,
    name: &'static str,
    color: u32,
    hidden: bool,
}

/// Palette metadata for the embedder UI: id, display name and base color
/// per element. `Empty` is marked hidden.
pub fn manifest_json() -> String {
    let manifest = ElementManifest {
        format_version: 1,
        elements: Element::all()
            .map(|el| ElementManifestEntry {
                id: el.id(),
                name: el.name(),
                color: el.color(),
                hidden: el == Element::Empty,
            })
            .collect(),
    };
    serde_json::to_string(&manifest).unwrap_or_else(|_| "{}".to_string())
}
