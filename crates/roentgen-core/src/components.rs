//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::{GridId, MapId, TileCoord};

/// Radiation emitter. The pass reads this; the host owns the lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RadiationSource {
    /// Base intensity in rads at zero distance, before stack scaling.
    pub intensity: f64,
    /// Per-meter intensity loss, independent of occlusion.
    pub slope: f64,
}

/// Radiation receiver. `exposure` is fully overwritten each tick —
/// it is this tick's instantaneous dose, not an accumulator.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RadiationReceiver {
    pub exposure: f64,
}

/// Stacked-item count. Effective source intensity is `intensity * count`.
/// Absent component means a count of 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ItemStack {
    pub count: u32,
}

impl Default for ItemStack {
    fn default() -> Self {
        Self { count: 1 }
    }
}

/// Which map an entity is on.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MapMember {
    pub map: MapId,
}

/// Grid-membership hint: the grid an entity is parented to, if any.
/// Drives the simplified same-grid policy and the local-coordinate shortcut.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GridAttachment {
    pub grid: Option<GridId>,
}

/// A shielding entity contributing resistance to one grid tile.
/// Multiple blockers on the same tile stack additively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RadiationBlocker {
    pub resistance: f64,
}

/// Marks an entity as anchored to a specific tile of a grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Anchored {
    pub grid: GridId,
    pub tile: TileCoord,
}
