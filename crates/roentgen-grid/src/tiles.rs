//! TileGrid: a sparse resistance map with a world-space transform.

use std::collections::HashMap;

use glam::DAffine2;

use roentgen_core::types::{Aabb, GridId, MapId, TileCoord, WorldPos};

/// One tile grid: tile size, local→world transform, and the resistance map.
///
/// Only occluding tiles are present in the map; absence means zero
/// resistance. A grid with an empty map is fully transparent and is never a
/// ray candidate (its bounds are empty).
#[derive(Debug, Clone)]
pub struct TileGrid {
    id: GridId,
    map: MapId,
    /// World units per tile.
    tile_size: f64,
    /// Local→world transform.
    transform: DAffine2,
    /// World→local, cached at construction.
    inverse: DAffine2,
    resistance: HashMap<TileCoord, f64>,
    /// Tile-space bounds of occupied tiles, maintained on mutation.
    tile_bounds: Option<(TileCoord, TileCoord)>,
}

impl TileGrid {
    /// Create an empty grid.
    ///
    /// A non-invertible transform or non-positive tile size is normalized
    /// to identity / 1.0 at construction, so traversal never meets a
    /// degenerate transform.
    pub fn new(id: GridId, map: MapId, tile_size: f64, transform: DAffine2) -> Self {
        let transform = if transform.matrix2.determinant().abs() < 1e-12 {
            DAffine2::IDENTITY
        } else {
            transform
        };
        let tile_size = if tile_size > 0.0 { tile_size } else { 1.0 };
        Self {
            id,
            map,
            tile_size,
            transform,
            inverse: transform.inverse(),
            resistance: HashMap::new(),
            tile_bounds: None,
        }
    }

    pub fn id(&self) -> GridId {
        self.id
    }

    pub fn map(&self) -> MapId {
        self.map
    }

    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Resistance at a tile; absent tiles are transparent.
    pub fn resistance(&self, tile: TileCoord) -> f64 {
        self.resistance.get(&tile).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.resistance.is_empty()
    }

    pub fn occupied_tiles(&self) -> usize {
        self.resistance.len()
    }

    /// Overwrite a tile's resistance. Values at or below zero clear the tile.
    pub fn set_resistance(&mut self, tile: TileCoord, value: f64) {
        if value > 0.0 {
            self.resistance.insert(tile, value);
            self.expand_bounds(tile);
        } else if self.resistance.remove(&tile).is_some() {
            self.recompute_bounds();
        }
    }

    /// Accumulate resistance on a tile (blockers stack additively).
    /// A total at or below zero clears the tile.
    pub fn add_resistance(&mut self, tile: TileCoord, delta: f64) {
        let total = self.resistance(tile) + delta;
        self.set_resistance(tile, total);
    }

    /// Transform a world position into grid-local space.
    pub fn world_to_local(&self, pos: WorldPos) -> WorldPos {
        WorldPos::from_dvec2(self.inverse.transform_point2(pos.to_dvec2()))
    }

    /// Transform a grid-local position into world space.
    pub fn local_to_world(&self, pos: WorldPos) -> WorldPos {
        WorldPos::from_dvec2(self.transform.transform_point2(pos.to_dvec2()))
    }

    /// Tile containing a grid-local position (floor division by tile size).
    pub fn local_to_tile(&self, pos: WorldPos) -> TileCoord {
        TileCoord::new(
            (pos.x / self.tile_size).floor() as i32,
            (pos.y / self.tile_size).floor() as i32,
        )
    }

    /// Tile containing a world position.
    pub fn world_to_tile(&self, pos: WorldPos) -> TileCoord {
        self.local_to_tile(self.world_to_local(pos))
    }

    /// World position of a tile's center.
    pub fn tile_center_world(&self, tile: TileCoord) -> WorldPos {
        self.local_to_world(WorldPos::new(
            (tile.x as f64 + 0.5) * self.tile_size,
            (tile.y as f64 + 0.5) * self.tile_size,
        ))
    }

    /// World-space box around all occupied tiles. None while the grid is
    /// empty — an empty grid is never a ray candidate.
    pub fn world_bounds(&self) -> Option<Aabb> {
        let (min, max) = self.tile_bounds?;
        let ts = self.tile_size;
        let lo = WorldPos::new(min.x as f64 * ts, min.y as f64 * ts);
        let hi = WorldPos::new((max.x + 1) as f64 * ts, (max.y + 1) as f64 * ts);
        // Transform all four corners — the grid may be rotated.
        Aabb::of(&[
            self.local_to_world(lo),
            self.local_to_world(WorldPos::new(hi.x, lo.y)),
            self.local_to_world(WorldPos::new(lo.x, hi.y)),
            self.local_to_world(hi),
        ])
    }

    fn expand_bounds(&mut self, tile: TileCoord) {
        self.tile_bounds = Some(match self.tile_bounds {
            None => (tile, tile),
            Some((min, max)) => (
                TileCoord::new(min.x.min(tile.x), min.y.min(tile.y)),
                TileCoord::new(max.x.max(tile.x), max.y.max(tile.y)),
            ),
        });
    }

    fn recompute_bounds(&mut self) {
        self.tile_bounds = None;
        let tiles: Vec<TileCoord> = self.resistance.keys().copied().collect();
        for tile in tiles {
            self.expand_bounds(tile);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_grid(transform: DAffine2) -> TileGrid {
        TileGrid::new(GridId(0), MapId(0), 1.0, transform)
    }

    #[test]
    fn test_local_to_tile_floor_division() {
        let grid = make_grid(DAffine2::IDENTITY);
        assert_eq!(grid.local_to_tile(WorldPos::new(0.5, 0.5)), TileCoord::new(0, 0));
        assert_eq!(grid.local_to_tile(WorldPos::new(1.0, 0.0)), TileCoord::new(1, 0));
        assert_eq!(
            grid.local_to_tile(WorldPos::new(-0.5, -1.5)),
            TileCoord::new(-1, -2)
        );
    }

    #[test]
    fn test_tile_size_scales_conversion() {
        let grid = TileGrid::new(GridId(0), MapId(0), 2.0, DAffine2::IDENTITY);
        assert_eq!(grid.local_to_tile(WorldPos::new(3.0, 5.0)), TileCoord::new(1, 2));
        let center = grid.tile_center_world(TileCoord::new(1, 2));
        assert_eq!(center, WorldPos::new(3.0, 5.0));
    }

    #[test]
    fn test_world_local_round_trip_with_rotation() {
        let transform =
            DAffine2::from_angle_translation(std::f64::consts::FRAC_PI_2, glam::DVec2::new(10.0, 3.0));
        let grid = make_grid(transform);

        let world = WorldPos::new(7.0, 5.0);
        let local = grid.world_to_local(world);
        let back = grid.local_to_world(local);
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);
    }

    #[test]
    fn test_empty_grid_has_no_bounds() {
        let grid = make_grid(DAffine2::IDENTITY);
        assert!(grid.is_empty());
        assert!(grid.world_bounds().is_none());
    }

    #[test]
    fn test_bounds_track_set_and_clear() {
        let mut grid = make_grid(DAffine2::IDENTITY);
        grid.set_resistance(TileCoord::new(2, 3), 1.0);
        grid.set_resistance(TileCoord::new(-1, 0), 1.0);

        let bounds = grid.world_bounds().unwrap();
        assert_eq!(bounds.min, WorldPos::new(-1.0, 0.0));
        assert_eq!(bounds.max, WorldPos::new(3.0, 4.0));

        // Clearing the extreme tile shrinks the box.
        grid.set_resistance(TileCoord::new(2, 3), 0.0);
        let bounds = grid.world_bounds().unwrap();
        assert_eq!(bounds.max, WorldPos::new(0.0, 1.0));
    }

    #[test]
    fn test_bounds_follow_translation() {
        let transform = DAffine2::from_translation(glam::DVec2::new(100.0, -50.0));
        let mut grid = make_grid(transform);
        grid.set_resistance(TileCoord::new(0, 0), 1.0);

        let bounds = grid.world_bounds().unwrap();
        assert_eq!(bounds.min, WorldPos::new(100.0, -50.0));
        assert_eq!(bounds.max, WorldPos::new(101.0, -49.0));
    }

    #[test]
    fn test_resistance_stacking() {
        let mut grid = make_grid(DAffine2::IDENTITY);
        let tile = TileCoord::new(1, 1);

        grid.add_resistance(tile, 2.0);
        grid.add_resistance(tile, 3.5);
        assert_eq!(grid.resistance(tile), 5.5);

        grid.add_resistance(tile, -2.0);
        assert_eq!(grid.resistance(tile), 3.5);

        // Removing the rest clears the tile entirely.
        grid.add_resistance(tile, -3.5);
        assert_eq!(grid.resistance(tile), 0.0);
        assert!(grid.is_empty());
        assert!(grid.world_bounds().is_none());
    }

    #[test]
    fn test_degenerate_transform_normalized_to_identity() {
        let zero = DAffine2::from_mat2(glam::DMat2::ZERO);
        let grid = make_grid(zero);
        let p = WorldPos::new(4.0, -2.0);
        assert_eq!(grid.world_to_local(p), p);

        let grid = TileGrid::new(GridId(0), MapId(0), 0.0, DAffine2::IDENTITY);
        assert_eq!(grid.tile_size(), 1.0);
    }
}
