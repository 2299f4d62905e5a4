//! Scenario factories for demos and tests.
//!
//! Builds the shielded-reactor station with a docked ship, and scatters
//! debris-field sources with the engine rng (deterministic per seed).

use glam::{DAffine2, DVec2};
use hecs::Entity;
use rand::Rng;

use roentgen_core::components::ItemStack;
use roentgen_core::constants::*;
use roentgen_core::types::{GridId, MapId, TileCoord, WorldPos};

use crate::engine::SimulationEngine;

/// Handles to everything the station scenario spawned.
pub struct StationScenario {
    pub map: MapId,
    pub other_map: MapId,
    pub station: GridId,
    pub ship: GridId,
    /// Reactor core: stacked fuel rods behind the shield ring.
    pub reactor: Entity,
    /// Engineer on the station deck, outside the shield.
    pub engineer: Entity,
    /// Medic further out on the station deck.
    pub medic: Entity,
    /// Pilot aboard the docked ship, behind its hull.
    pub pilot: Entity,
    /// Receiver on a different map at reactor-adjacent coordinates.
    pub outsider: Entity,
}

/// Build the demo station:
///
/// - a station grid with a reactor at tile (0,0) inside a 5×5 shield ring,
/// - two crew receivers on the station deck,
/// - a ship grid docked to the east (rotated 90°), hull between it and the
///   reactor, with a pilot aboard,
/// - one receiver on a separate map that must never be dosed.
pub fn setup_station(engine: &mut SimulationEngine) -> StationScenario {
    let map = MapId(0);
    let other_map = MapId(1);

    let station = engine.add_grid(map, STATION_TILE_SIZE, DAffine2::IDENTITY);
    let ship = engine.add_grid(
        map,
        STATION_TILE_SIZE,
        DAffine2::from_angle_translation(std::f64::consts::FRAC_PI_2, DVec2::new(12.0, 0.0)),
    );

    // Shield ring: the perimeter of the 5×5 block around the reactor tile.
    for x in -2i32..=2 {
        for y in -2i32..=2 {
            if x.abs() == 2 || y.abs() == 2 {
                engine.spawn_blocker(station, TileCoord::new(x, y), SHIELD_RESISTANCE);
            }
        }
    }

    // Ship hull: a bulkhead column that sits at world x = 13, y ∈ [-1, 1].
    for y in -1..=1 {
        engine.spawn_blocker(ship, TileCoord::new(y, -2), HULL_RESISTANCE);
    }

    let reactor = engine.spawn_source(
        map,
        Some(station),
        WorldPos::new(0.5, 0.5),
        REACTOR_BASE_INTENSITY,
        REACTOR_FALLOFF_SLOPE,
    );
    engine
        .world_mut()
        .insert(
            reactor,
            (ItemStack {
                count: REACTOR_FUEL_STACK,
            },),
        )
        .expect("reactor entity was just spawned");

    let engineer = engine.spawn_receiver(map, Some(station), WorldPos::new(6.5, 0.5));
    let medic = engine.spawn_receiver(map, Some(station), WorldPos::new(0.5, -9.5));
    let pilot = engine.spawn_receiver(map, Some(ship), WorldPos::new(14.5, 0.5));
    let outsider = engine.spawn_receiver(other_map, None, WorldPos::new(0.5, 0.5));

    StationScenario {
        map,
        other_map,
        station,
        ship,
        reactor,
        engineer,
        medic,
        pilot,
        outsider,
    }
}

/// Scatter free-floating debris sources around the origin of `map`.
/// Placement is drawn from the engine rng, so the field is deterministic
/// for a given seed.
pub fn spawn_debris_field(engine: &mut SimulationEngine, map: MapId, count: usize) -> Vec<Entity> {
    let mut params = Vec::with_capacity(count);
    {
        let rng = engine.rng_mut();
        for _ in 0..count {
            let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let radius: f64 = rng.gen_range(5.0..DEBRIS_FIELD_RADIUS);
            let intensity: f64 = rng.gen_range(DEBRIS_MIN_INTENSITY..DEBRIS_MAX_INTENSITY);
            params.push((angle, radius, intensity));
        }
    }

    params
        .into_iter()
        .map(|(angle, radius, intensity)| {
            let position = WorldPos::new(radius * angle.cos(), radius * angle.sin());
            engine.spawn_source(map, None, position, intensity, DEBRIS_FALLOFF_SLOPE)
        })
        .collect()
}
