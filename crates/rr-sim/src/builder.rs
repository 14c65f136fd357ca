//! Fluent builder for constructing a [`Sim`].

use rr_core::{SimConfig, SimRng, Tick};
use rr_signal::SignalSet;
use rr_vehicle::VehicleSet;

use crate::workers::WorkerPool;
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — population sizes, road length, ticks, policy, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                              |
/// |------------------|------------------------------------------------------|
/// | `.vehicles(set)` | `VehicleSet::generate` seeded from `config.seed`     |
/// | `.signals(set)`  | `SignalSet::generate` from `config.cycle_length`     |
///
/// Supplied sets must be built for `config.road_length` and match the
/// configured counts.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .signals(hand_placed_signals)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    vehicles: Option<VehicleSet>,
    signals:  Option<SignalSet>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            vehicles: None,
            signals:  None,
        }
    }

    /// Use `vehicles` instead of generating a population.
    pub fn vehicles(mut self, vehicles: VehicleSet) -> Self {
        self.vehicles = Some(vehicles);
        self
    }

    /// Use `signals` instead of the default evenly spaced layout.
    pub fn signals(mut self, signals: SignalSet) -> Self {
        self.signals = Some(signals);
        self
    }

    /// Validate the configuration, resolve both populations, build the
    /// initial worker pool, and return a ready-to-run [`Sim`] at tick 0.
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config;
        config.validate()?;
        let road_length = config.road_length;

        // ── Resolve populations ───────────────────────────────────────────
        //
        // One owned RNG, seeded once, threaded through the initializer that
        // draws from it.  Nothing else holds random state.
        let mut rng = SimRng::new(config.seed);

        let vehicles = match self.vehicles {
            Some(v) => {
                check_road(road_length, v.road_length(), "vehicle set")?;
                check_count(config.vehicle_count, v.len(), "vehicle")?;
                v
            }
            None => VehicleSet::generate(config.vehicle_count, road_length, &mut rng)?,
        };

        let signals = match self.signals {
            Some(s) => {
                check_road(road_length, s.road_length(), "signal set")?;
                check_count(config.signal_count, s.len(), "signal")?;
                s
            }
            None => SignalSet::generate(config.signal_count, road_length, config.cycle_length)?,
        };

        // ── Build the pool at its first-tick size ─────────────────────────
        let threads = config
            .num_threads
            .unwrap_or_else(|| crate::worker_count(vehicles.len(), signals.len()));
        let pool = WorkerPool::new(threads)?;

        Ok(Sim {
            config,
            tick: Tick::ZERO,
            vehicles,
            signals,
            pool,
        })
    }
}

fn check_road(expected: u32, got: u32, what: &'static str) -> SimResult<()> {
    if expected != got {
        return Err(SimError::RoadLengthMismatch { expected, got, what });
    }
    Ok(())
}

fn check_count(expected: usize, got: usize, what: &'static str) -> SimResult<()> {
    if expected != got {
        return Err(SimError::CountMismatch { expected, got, what });
    }
    Ok(())
}
