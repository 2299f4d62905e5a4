//! Ray tracing: one source→receiver ray through the candidate grids.

use roentgen_core::config::RadiationConfig;
use roentgen_core::ray::RadiationRay;
use roentgen_core::types::{Aabb, WorldPos};
use roentgen_grid::{gridcast, TileGrid};

use crate::systems::collect::{ReceiverSnap, SourceSnap};

/// Trace a single ray. Returns None when the pair cannot contribute at all
/// (different maps, beyond the distance cutoff, or below the falloff floor)
/// — the cheap rejections happen before any grid work.
pub fn trace(
    source: &SourceSnap,
    receiver: &ReceiverSnap,
    grids: &[TileGrid],
    config: &RadiationConfig,
    record: bool,
) -> Option<RadiationRay> {
    // Radiation does not cross maps.
    if source.map != receiver.map {
        return None;
    }

    let distance = source.position.range_to(&receiver.position);
    if distance > config.max_distance {
        return None;
    }

    let rads = source.intensity - source.slope * distance;
    if rads <= config.min_intensity {
        return None;
    }

    let mut ray = RadiationRay::new(source.map, source.position, receiver.position, rads, record);

    // Same-grid shortcut: both endpoints live on one grid, test only it.
    if config.simplified_same_grid {
        if let (Some(sg), Some(rg)) = (source.grid, receiver.grid) {
            if sg == rg {
                if let Some(grid) = grids.iter().find(|g| g.id() == sg) {
                    ray = gridcast(
                        grid,
                        ray,
                        source.grid_local,
                        receiver.grid_local,
                        config.min_intensity,
                    );
                }
                ray.reached_destination = ray.rads > 0.0;
                return Some(ray);
            }
        }
    }

    // Candidate scan: every same-map grid whose bounds touch the ray's box.
    // Candidates are taken in list order, not sorted by distance along the
    // ray — total subtraction is order-independent. An occlusion model where
    // order matters would need to sort by intersection distance here.
    let ray_box = Aabb::from_points(source.position, receiver.position);
    for grid in grids {
        if grid.map() != source.map {
            continue;
        }
        let Some(bounds) = grid.world_bounds() else {
            continue;
        };
        if !bounds.intersects(&ray_box) {
            continue;
        }

        ray = gridcast(
            grid,
            ray,
            local_for(source.grid, source.grid_local, grid),
            local_for(receiver.grid, receiver.grid_local, grid),
            config.min_intensity,
        );
        if ray.is_depleted() {
            return Some(ray);
        }
    }

    ray.reached_destination = ray.rads > 0.0;
    Some(ray)
}

/// The precomputed local position is only valid for the grid the endpoint
/// is attached to.
fn local_for(
    attached: Option<roentgen_core::types::GridId>,
    local: Option<WorldPos>,
    grid: &TileGrid,
) -> Option<WorldPos> {
    if attached == Some(grid.id()) {
        local
    } else {
        None
    }
}
