//! Exposure write-back: the only world mutation the pass performs.

use std::collections::HashMap;

use hecs::{Entity, World};

use roentgen_core::components::RadiationReceiver;
use roentgen_core::events::SimEvent;

/// Overwrite every receiver's exposure with this tick's total. Receivers
/// absent from `totals` (none of their rays survived, or no source was in
/// range) are zeroed — exposure is never carried across ticks.
pub fn apply(world: &mut World, totals: &HashMap<Entity, f64>, events: &mut Vec<SimEvent>) {
    for (entity, receiver) in world.query_mut::<&mut RadiationReceiver>() {
        let dose = totals.get(&entity).copied().unwrap_or(0.0);
        receiver.exposure = dose;
        if dose > 0.0 {
            events.push(SimEvent::ReceiverDosed {
                receiver: entity.to_bits().get(),
                exposure: dose,
            });
        }
    }
}
