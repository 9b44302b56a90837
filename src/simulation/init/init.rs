use crate::core::random::Rng;
use crate::spatial::grid::SimGrid;

use super::WorldCore;

pub(super) const DEFAULT_SEED: u32 = 0x5EED_5EED;

pub(super) fn create_world_core(width: u32, height: u32, seed: u32) -> WorldCore {
    WorldCore {
        grid: SimGrid::new(width, height),
        explosions: Vec::new(),
        rng: Rng::new(seed),
        paused: false,
        speed: 1,
        frame: 0,
    }
}
