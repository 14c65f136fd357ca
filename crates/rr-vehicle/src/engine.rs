//! The vehicle movement engine.

use rayon::prelude::*;
use rr_signal::SignalSnapshot;

use crate::VehicleSet;

/// Move every vehicle one tick against `signals`.
///
/// Each vehicle reads only the shared, immutable snapshot and writes only
/// its own position, so the pass is split across the caller's Rayon pool
/// without locks.  Returns once every vehicle has moved, with the number of
/// vehicles a signal held in place.
pub fn move_all(set: &mut VehicleSet, signals: &SignalSnapshot) -> usize {
    let road_length = set.road_length();
    set.vehicles
        .par_iter_mut()
        .map(|vehicle| usize::from(!vehicle.step_against(signals, road_length)))
        .sum()
}
