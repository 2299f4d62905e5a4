//! Collection phase: a read-only snapshot of sources and receivers.
//!
//! Positions and effective intensities are resolved exactly once per tick
//! here, so the trace loop never touches the world again. No side effects.

use hecs::{Entity, World};

use roentgen_core::components::{
    GridAttachment, ItemStack, MapMember, RadiationReceiver, RadiationSource,
};
use roentgen_core::types::{GridId, MapId, WorldPos};
use roentgen_grid::TileGrid;

/// One emitting entity, with stack scaling already applied.
#[derive(Debug, Clone, Copy)]
pub struct SourceSnap {
    pub entity: Entity,
    pub map: MapId,
    pub grid: Option<GridId>,
    /// Position in the parent grid's local space, when attached.
    pub grid_local: Option<WorldPos>,
    pub position: WorldPos,
    /// Base intensity × stack count.
    pub intensity: f64,
    pub slope: f64,
}

/// One receiving entity.
#[derive(Debug, Clone, Copy)]
pub struct ReceiverSnap {
    pub entity: Entity,
    pub map: MapId,
    pub grid: Option<GridId>,
    pub grid_local: Option<WorldPos>,
    pub position: WorldPos,
}

/// Snapshot all sources. Sources with a non-positive effective intensity
/// are dropped here — they cannot contribute.
pub fn collect_sources(world: &World, grids: &[TileGrid]) -> Vec<SourceSnap> {
    let mut sources = Vec::new();
    for (entity, (source, pos, member, attachment, stack)) in world
        .query::<(
            &RadiationSource,
            &WorldPos,
            &MapMember,
            Option<&GridAttachment>,
            Option<&ItemStack>,
        )>()
        .iter()
    {
        let count = stack.map_or(1, |s| s.count);
        let intensity = source.intensity * f64::from(count);
        if intensity <= 0.0 {
            continue;
        }
        let grid = attachment.and_then(|a| a.grid);
        sources.push(SourceSnap {
            entity,
            map: member.map,
            grid,
            grid_local: grid_local(grids, grid, *pos),
            position: *pos,
            intensity,
            slope: source.slope,
        });
    }
    sources
}

/// Snapshot all receivers.
pub fn collect_receivers(world: &World, grids: &[TileGrid]) -> Vec<ReceiverSnap> {
    let mut receivers = Vec::new();
    for (entity, (_receiver, pos, member, attachment)) in world
        .query::<(
            &RadiationReceiver,
            &WorldPos,
            &MapMember,
            Option<&GridAttachment>,
        )>()
        .iter()
    {
        let grid = attachment.and_then(|a| a.grid);
        receivers.push(ReceiverSnap {
            entity,
            map: member.map,
            grid,
            grid_local: grid_local(grids, grid, *pos),
            position: *pos,
        });
    }
    receivers
}

/// Local-space position within the attached grid, resolved once so the
/// trace loop can skip the inverse transform for that grid.
fn grid_local(grids: &[TileGrid], grid: Option<GridId>, pos: WorldPos) -> Option<WorldPos> {
    let id = grid?;
    grids
        .iter()
        .find(|g| g.id() == id)
        .map(|g| g.world_to_local(pos))
}
