//! Per-vehicle state.

use rr_core::{VehicleId, road};
use rr_signal::SignalSnapshot;

/// One vehicle on the ring road.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id: VehicleId,

    /// Current cell, in `[0, road_length)`.
    pub position: u32,

    /// Cells advanced per unblocked tick.  Fixed at creation, at least 1.
    pub step: u32,
}

impl Vehicle {
    pub fn new(id: VehicleId, position: u32, step: u32) -> Self {
        Self { id, position, step }
    }

    /// The cell this vehicle would reach this tick if nothing stops it.
    #[inline]
    pub fn destination(&self, road_length: u32) -> u32 {
        road::advance(self.position, self.step, road_length)
    }

    /// Move one tick against `signals`.  Returns `false` if a RED or YELLOW
    /// signal at the destination held the vehicle in place.
    #[inline]
    pub fn step_against(&mut self, signals: &SignalSnapshot, road_length: u32) -> bool {
        let dest = self.destination(road_length);
        match signals.phase_at(dest) {
            Some(phase) if phase.is_stop() => false,
            _ => {
                self.position = dest;
                true
            }
        }
    }
}
