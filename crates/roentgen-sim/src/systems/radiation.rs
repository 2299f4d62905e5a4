//! The radiation pass: one full source×receiver sweep.
//!
//! Runs synchronously within the tick. Reads only the collected snapshots
//! and the grids; the single mutation is the exposure write-back at the end.

use std::collections::HashMap;

use hecs::World;

use roentgen_core::config::RadiationConfig;
use roentgen_core::events::SimEvent;
use roentgen_core::state::{ExposureView, RayView};
use roentgen_grid::TileGrid;

use crate::systems::{collect, exposure, trace};

/// Everything one pass produced, before report assembly.
pub struct PulseOutcome {
    pub source_count: u32,
    pub receiver_count: u32,
    pub exposures: Vec<ExposureView>,
    pub rays: Vec<RayView>,
    pub events: Vec<SimEvent>,
}

/// Run the pass. `record` enables per-ray trace capture for the report.
pub fn run(
    world: &mut World,
    grids: &[TileGrid],
    config: &RadiationConfig,
    record: bool,
) -> PulseOutcome {
    let sources = collect::collect_sources(world, grids);
    let receivers = collect::collect_receivers(world, grids);

    let mut rays = Vec::new();
    let mut totals = HashMap::with_capacity(receivers.len());
    let mut exposures = Vec::with_capacity(receivers.len());

    for receiver in &receivers {
        let mut dose = 0.0;
        for source in &sources {
            let Some(ray) = trace::trace(source, receiver, grids, config, record) else {
                continue;
            };
            if ray.reached_destination {
                dose += ray.rads;
            }
            if record {
                rays.push(RayView::from(ray));
            }
        }
        totals.insert(receiver.entity, dose);
        exposures.push(ExposureView {
            receiver: receiver.entity.to_bits().get(),
            position: receiver.position,
            exposure: dose,
        });
    }

    let mut events = Vec::new();
    exposure::apply(world, &totals, &mut events);

    PulseOutcome {
        source_count: sources.len() as u32,
        receiver_count: receivers.len() as u32,
        exposures,
        rays,
        events,
    }
}
