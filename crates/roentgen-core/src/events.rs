//! Events emitted by the simulation for external collaborators.

use serde::{Deserialize, Serialize};

/// Simulation events, drained into each tick's pulse report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// This tick's radiation pass is done. No payload beyond "done" —
    /// collaborators re-read receiver state themselves.
    PulseCompleted { tick: u64 },
    /// A receiver accumulated a positive dose this tick. The hook that
    /// external status-effect systems listen on.
    ReceiverDosed { receiver: u64, exposure: f64 },
}
