//! Simulation engine — owns the world, the grids, and the tick.
//!
//! `SimulationEngine` owns the hecs ECS world and the tile grids, runs the
//! radiation pass once per `tick()`, and produces `PulseReport`s. Completely
//! headless, enabling deterministic testing.

use std::time::Instant;

use glam::DAffine2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use roentgen_core::components::{
    Anchored, GridAttachment, MapMember, RadiationBlocker, RadiationReceiver, RadiationSource,
};
use roentgen_core::config::RadiationConfig;
use roentgen_core::events::SimEvent;
use roentgen_core::state::PulseReport;
use roentgen_core::types::{GridId, MapId, SimTime, TileCoord, WorldPos};
use roentgen_grid::TileGrid;

use crate::observer::PulseObserver;
use crate::systems;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for scenario generation. Same seed = same scenario.
    pub seed: u64,
    pub radiation: RadiationConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            radiation: RadiationConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    grids: Vec<TileGrid>,
    time: SimTime,
    config: RadiationConfig,
    rng: ChaCha8Rng,
    next_grid_id: u32,
    observer: Option<Box<dyn PulseObserver>>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            grids: Vec::new(),
            time: SimTime::default(),
            config: config.radiation,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_grid_id: 0,
            observer: None,
        }
    }

    /// Advance the simulation by one tick and return the resulting report.
    ///
    /// Runs the full radiation pass synchronously: snapshot → trace all
    /// source×receiver pairs → overwrite exposures → notify the observer.
    pub fn tick(&mut self) -> PulseReport {
        let record = self.observer.as_ref().is_some_and(|o| o.record_rays());

        let start = Instant::now();
        let outcome = systems::radiation::run(&mut self.world, &self.grids, &self.config, record);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        self.time.advance(self.config.tick_interval_secs);

        let mut events = outcome.events;
        events.push(SimEvent::PulseCompleted {
            tick: self.time.tick,
        });

        let report = PulseReport {
            time: self.time,
            tick_interval_secs: self.config.tick_interval_secs,
            elapsed_ms,
            source_count: outcome.source_count,
            receiver_count: outcome.receiver_count,
            grid_count: self.grids.len() as u32,
            exposures: outcome.exposures,
            rays: outcome.rays,
            events,
        };

        if let Some(observer) = self.observer.as_mut() {
            observer.pulse_completed(&report);
        }
        report
    }

    // --- World access ---

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for the host simulation (spawning, moving,
    /// despawning entities between ticks).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &RadiationConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RadiationConfig {
        &mut self.config
    }

    pub(crate) fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    // --- Grids ---

    /// Register a new, empty tile grid and return its id.
    pub fn add_grid(&mut self, map: MapId, tile_size: f64, transform: DAffine2) -> GridId {
        let id = GridId(self.next_grid_id);
        self.next_grid_id += 1;
        self.grids.push(TileGrid::new(id, map, tile_size, transform));
        id
    }

    pub fn grids(&self) -> &[TileGrid] {
        &self.grids
    }

    pub fn grid(&self, id: GridId) -> Option<&TileGrid> {
        self.grids.iter().find(|g| g.id() == id)
    }

    pub fn grid_mut(&mut self, id: GridId) -> Option<&mut TileGrid> {
        self.grids.iter_mut().find(|g| g.id() == id)
    }

    // --- Entity spawners ---

    /// Spawn a radiation source.
    pub fn spawn_source(
        &mut self,
        map: MapId,
        grid: Option<GridId>,
        position: WorldPos,
        intensity: f64,
        slope: f64,
    ) -> Entity {
        self.world.spawn((
            RadiationSource { intensity, slope },
            position,
            MapMember { map },
            GridAttachment { grid },
        ))
    }

    /// Spawn a radiation receiver with zero exposure.
    pub fn spawn_receiver(&mut self, map: MapId, grid: Option<GridId>, position: WorldPos) -> Entity {
        self.world.spawn((
            RadiationReceiver::default(),
            position,
            MapMember { map },
            GridAttachment { grid },
        ))
    }

    /// Spawn a shielding entity anchored to `tile` of `grid`, adding its
    /// resistance to that tile. Returns None for an unknown grid.
    pub fn spawn_blocker(
        &mut self,
        grid: GridId,
        tile: TileCoord,
        resistance: f64,
    ) -> Option<Entity> {
        self.grid_mut(grid)?.add_resistance(tile, resistance);
        Some(self.world.spawn((
            RadiationBlocker { resistance },
            Anchored { grid, tile },
        )))
    }

    /// Despawn a blocker, removing its resistance contribution from the
    /// grid tile it was anchored to. Returns false if the entity is not a
    /// blocker (nothing is touched).
    pub fn despawn_blocker(&mut self, entity: Entity) -> bool {
        let Ok(blocker) = self.world.get::<&RadiationBlocker>(entity).map(|b| *b) else {
            return false;
        };
        let Ok(anchored) = self.world.get::<&Anchored>(entity).map(|a| *a) else {
            return false;
        };
        if let Some(grid) = self.grid_mut(anchored.grid) {
            grid.add_resistance(anchored.tile, -blocker.resistance);
        }
        let _ = self.world.despawn(entity);
        true
    }

    /// Current exposure of a receiver, if the entity is one.
    pub fn receiver_exposure(&self, entity: Entity) -> Option<f64> {
        self.world
            .get::<&RadiationReceiver>(entity)
            .map(|r| r.exposure)
            .ok()
    }

    // --- Observer ---

    /// Attach the pulse observer, replacing any previous one. The observer
    /// decides once per tick whether rays are recorded.
    pub fn attach_observer(&mut self, observer: Box<dyn PulseObserver>) {
        self.observer = Some(observer);
    }

    pub fn detach_observer(&mut self) -> Option<Box<dyn PulseObserver>> {
        self.observer.take()
    }
}
