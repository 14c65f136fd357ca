//! The `Sim` struct and its tick loop.

use std::thread;

use tracing::{info, trace};

use rr_core::{ExecutionPolicy, SimConfig, Tick};
use rr_signal::{SignalSet, advance_all};
use rr_vehicle::{VehicleSet, move_all};

use crate::workers::{WorkerPool, worker_count};
use crate::{SimObserver, SimResult, TickReport, TickStats};

/// The main simulation runner.
///
/// `Sim` owns the whole population for the lifetime of the run and drives
/// the per-tick sequence:
///
/// 1. **Size**: pick a worker count (fixed, or from [`worker_count`]) and
///    resize the pool.
/// 2. **Update**, per [`ExecutionPolicy`]:
///    - `Sequential`: run the phase engine to completion, snapshot the
///      signals, then run the movement engine.  Vehicles see this tick's
///      new phases.
///    - `Combined`: snapshot the signals first, then run the phase engine
///      and the movement engine as two concurrent regions.  Vehicles see
///      last tick's phases.
/// 3. **Report**: hand a [`TickReport`] to the observer.
///
/// The snapshot is a local of step 2 and is dropped before step 3.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (population sizes, ticks, policy, seed, …).
    pub config: SimConfig,

    /// The next tick to process.
    pub tick: Tick,

    /// Live vehicle state.  Mutated only by the movement engine.
    pub vehicles: VehicleSet,

    /// Live signal state.  Mutated only by the phase engine.
    pub signals: SignalSet,

    /// Pool both parallel regions run on.
    pub pool: WorkerPool,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            vehicles = self.vehicles.len(),
            signals = self.signals.len(),
            road_length = self.signals.road_length(),
            ticks = self.config.total_ticks,
            policy = %self.config.policy,
            "starting simulation"
        );

        while self.tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.tick);

        info!(final_tick = %self.tick, "simulation finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Worker count the next tick will request.
    pub fn target_workers(&self) -> usize {
        self.config
            .num_threads
            .unwrap_or_else(|| worker_count(self.vehicles.len(), self.signals.len()))
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.tick;

        observer.on_tick_start(now);
        let stats = self.process_tick()?;
        observer.on_tick_end(now, &stats);
        trace!(
            tick = now.0,
            workers = stats.workers,
            transitions = stats.transitions,
            held = stats.held,
            "tick complete"
        );

        observer.on_report(&TickReport::capture(now, &self.vehicles, &self.signals));

        let delay = self.config.tick_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        self.tick = now.next();
        Ok(())
    }

    fn process_tick(&mut self) -> SimResult<TickStats> {
        // ── Size the pool ─────────────────────────────────────────────────
        let workers = self.target_workers();
        self.pool.resize(workers)?;

        // Explicit field borrows so the borrow checker sees disjoint access.
        let signals  = &mut self.signals;
        let vehicles = &mut self.vehicles;
        let pool     = &self.pool;

        // ── Update ────────────────────────────────────────────────────────
        let (transitions, held) = match self.config.policy {
            ExecutionPolicy::Sequential => pool.install(move || {
                let transitions = advance_all(signals);
                let snapshot = signals.snapshot();
                let held = move_all(vehicles, &snapshot);
                (transitions, held)
            }),

            ExecutionPolicy::Combined => {
                let snapshot = signals.snapshot();
                pool.install(|| {
                    rayon::join(
                        move || advance_all(signals),
                        || move_all(vehicles, &snapshot),
                    )
                })
            }
        };

        Ok(TickStats { workers, transitions, held })
    }
}
