//! Snapshot codec - persistence of the element grid, and nothing else.
//!
//! The wire format deliberately carries only the element kinds. Heat,
//! fire lifetime, decay, light and the explosion list are transient; a
//! load resets them to zero. That reset is part of the contract, not an
//! omission.

use serde::{Deserialize, Serialize};

use crate::domain::elements::Element;

use super::WorldCore;

const SNAPSHOT_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GridSnapshot {
    format_version: u32,
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

pub(super) fn save_state(world: &WorldCore) -> String {
    let snapshot = GridSnapshot {
        format_version: SNAPSHOT_FORMAT_VERSION,
        width: world.grid.width(),
        height: world.grid.height(),
        cells: world.grid.cells.iter().map(|e| e.id()).collect(),
    };
    serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string())
}

pub(super) fn load_state(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let snapshot: GridSnapshot = serde_json::from_str(json).map_err(|e| e.to_string())?;

    if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
        return Err(format!(
            "unsupported snapshot version: {}",
            snapshot.format_version
        ));
    }
    if snapshot.width != world.grid.width() || snapshot.height != world.grid.height() {
        return Err(format!(
            "snapshot is {}x{}, world is {}x{}",
            snapshot.width,
            snapshot.height,
            world.grid.width(),
            world.grid.height()
        ));
    }
    if snapshot.cells.len() != world.grid.size() {
        return Err(format!(
            "snapshot cell count {} does not match grid size {}",
            snapshot.cells.len(),
            world.grid.size()
        ));
    }

    // Decode fully before touching the live grid; a bad id anywhere must
    // leave the current state intact.
    let mut cells = Vec::with_capacity(snapshot.cells.len());
    for (i, id) in snapshot.cells.iter().enumerate() {
        match Element::from_id(*id) {
            Some(el) => cells.push(el),
            None => return Err(format!("invalid element id {} at cell {}", id, i)),
        }
    }

    world.grid.cells.copy_from_slice(&cells);
    world.grid.buffer.copy_from_slice(&cells);
    world.grid.reset_overlays();
    world.explosions.clear();
    Ok(())
}
