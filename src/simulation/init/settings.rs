use super::{WorldCore, MAX_SIM_SPEED};

pub(super) fn set_paused(world: &mut WorldCore, paused: bool) {
    world.paused = paused;
}

pub(super) fn set_speed(world: &mut WorldCore, speed: u32) {
    world.speed = speed.clamp(1, MAX_SIM_SPEED);
}
