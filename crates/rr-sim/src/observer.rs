//! Simulation observer trait for progress reporting and rendering.

use rr_core::Tick;

use crate::{TickReport, TickStats};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Hooks are called on the driver thread,
/// never from inside a parallel region.
///
/// # Example — held-vehicle counter
///
/// ```rust,ignore
/// struct Held(usize);
///
/// impl SimObserver for Held {
///     fn on_tick_end(&mut self, _tick: Tick, stats: &TickStats) {
///         self.0 += stats.held;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the pool is sized.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once both passes of the tick have joined.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called with the state every vehicle and signal ended the tick in.
    fn on_report(&mut self, _report: &TickReport) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
