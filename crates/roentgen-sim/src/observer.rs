//! Pulse observation — an optional debug-recording strategy.
//!
//! The observer is consulted once per tick, never per tile: when none is
//! attached (or it declines ray recording) the pass traces nothing and
//! allocates nothing for debugging.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use roentgen_core::constants::MAX_DEBUG_REPORTS;
use roentgen_core::state::PulseReport;

/// Strategy interface for per-tick pulse observation.
pub trait PulseObserver {
    /// Whether rays should capture per-tile blocker traces this tick.
    fn record_rays(&self) -> bool {
        false
    }

    /// Called after each pass with the finished report.
    fn pulse_completed(&mut self, report: &PulseReport);
}

/// Default observer: does nothing.
pub struct NoopObserver;

impl PulseObserver for NoopObserver {
    fn pulse_completed(&mut self, _report: &PulseReport) {}
}

/// Keeps the most recent pulse reports, ray traces included, in a bounded
/// ring. Clones share the ring, so a handle kept outside the engine reads
/// what the attached copy records.
#[derive(Clone, Default)]
pub struct DebugRecorder {
    reports: Arc<Mutex<VecDeque<PulseReport>>>,
}

impl DebugRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All retained reports, oldest first.
    pub fn reports(&self) -> Vec<PulseReport> {
        self.reports.lock().unwrap().iter().cloned().collect()
    }

    /// The most recent report, if any tick has run.
    pub fn latest(&self) -> Option<PulseReport> {
        self.reports.lock().unwrap().back().cloned()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().unwrap().is_empty()
    }
}

impl PulseObserver for DebugRecorder {
    fn record_rays(&self) -> bool {
        true
    }

    fn pulse_completed(&mut self, report: &PulseReport) {
        let mut reports = self.reports.lock().unwrap();
        reports.push_back(report.clone());
        while reports.len() > MAX_DEBUG_REPORTS {
            reports.pop_front();
        }
    }
}
