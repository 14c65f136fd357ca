//! Per-tick output handed to observers.

use rr_core::{Phase, SignalId, Tick, VehicleId};
use rr_signal::SignalSet;
use rr_vehicle::VehicleSet;

/// The state of every vehicle and signal at the end of one tick.
///
/// Both lists are in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// The tick that produced this state (0-based).
    pub tick:     Tick,
    pub vehicles: Vec<(VehicleId, u32)>,
    pub signals:  Vec<(SignalId, Phase)>,
}

impl TickReport {
    pub fn capture(tick: Tick, vehicles: &VehicleSet, signals: &SignalSet) -> Self {
        Self {
            tick,
            vehicles: vehicles.vehicles().iter().map(|v| (v.id, v.position)).collect(),
            signals:  signals.signals().iter().map(|s| (s.id, s.phase)).collect(),
        }
    }
}

/// Counters gathered while processing one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickStats {
    /// Worker threads the tick ran on.
    pub workers:     usize,
    /// Signals that changed phase.
    pub transitions: usize,
    /// Vehicles held in place by a RED or YELLOW signal.
    pub held:        usize,
}
