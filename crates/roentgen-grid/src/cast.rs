//! Gridcast: walk one grid's tiles along a ray, subtracting resistance.

use roentgen_core::ray::RadiationRay;
use roentgen_core::types::WorldPos;

use crate::tiles::TileGrid;
use crate::traversal::TileLine;

/// Apply one grid's resistance to a ray and return the updated ray.
///
/// `source_local` / `destination_local` are the endpoints in this grid's
/// local space when already known (the endpoint is parented to this grid);
/// `None` falls back to the inverse world transform. Callers must only pass
/// local coordinates that belong to this grid.
///
/// Traversal stops as soon as the remaining intensity falls to or below
/// `min_intensity`: the ray is clamped to zero and later tiles on the line
/// are not evaluated.
pub fn gridcast(
    grid: &TileGrid,
    mut ray: RadiationRay,
    source_local: Option<WorldPos>,
    destination_local: Option<WorldPos>,
    min_intensity: f64,
) -> RadiationRay {
    // A grid with nothing in its resistance map is fully transparent.
    if grid.is_empty() {
        return ray;
    }

    let source = source_local.unwrap_or_else(|| grid.world_to_local(ray.source));
    let destination = destination_local.unwrap_or_else(|| grid.world_to_local(ray.destination));

    let from = grid.local_to_tile(source);
    let to = grid.local_to_tile(destination);

    for tile in TileLine::new(from, to) {
        let resistance = grid.resistance(tile);
        if resistance <= 0.0 {
            continue;
        }

        ray.rads -= resistance;
        if ray.rads <= min_intensity {
            ray.deplete();
            ray.record_blocker(grid.id(), tile);
            break;
        }
        ray.record_blocker(grid.id(), tile);
    }

    ray
}
