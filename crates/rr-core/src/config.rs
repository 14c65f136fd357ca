//! Top-level simulation configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::{CoreError, CoreResult, Tick};

/// Shortest road the simulation accepts, in cells.
pub const MIN_ROAD_LENGTH: u32 = 6;

// ── ExecutionPolicy ──────────────────────────────────────────────────────────

/// How the signal pass and the vehicle pass of one tick are composed.
///
/// The two policies give different vehicle outcomes next to a signal that
/// changes phase on the tick a vehicle reaches it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionPolicy {
    /// Snapshot signals, then advance signals and move vehicles as two
    /// concurrent parallel regions.  Vehicles see the phases from *before*
    /// this tick's advance.
    #[default]
    Combined,

    /// Advance signals to completion, snapshot, then move vehicles.
    /// Vehicles see the phases from *after* this tick's advance.
    Sequential,
}

impl fmt::Display for ExecutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExecutionPolicy::Combined   => "combined",
            ExecutionPolicy::Sequential => "sequential",
        })
    }
}

impl FromStr for ExecutionPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "combined" | "1"   => Ok(ExecutionPolicy::Combined),
            "sequential" | "0" => Ok(ExecutionPolicy::Sequential),
            other => Err(CoreError::Config(format!("unknown execution policy `{other}`"))),
        }
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Everything needed to build and run one simulation.
///
/// Construct with struct-update syntax over [`SimConfig::default`] and call
/// [`validate`](Self::validate) before building any state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of vehicles created at start.
    pub vehicle_count: usize,

    /// Number of signals created at start.
    pub signal_count: usize,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Length of the circular road, in cells.  At least [`MIN_ROAD_LENGTH`].
    pub road_length: u32,

    /// Pause after each tick's report, in seconds.  0 = no pause.
    pub tick_delay_secs: u64,

    /// Full signal cycle in ticks, split 50% / 20% / 30% between GREEN,
    /// YELLOW and RED.
    pub cycle_length: u32,

    /// Composition of the signal and vehicle passes.
    pub policy: ExecutionPolicy,

    /// Master RNG seed.  The same seed always produces the same population.
    pub seed: u64,

    /// Fixed worker thread count.  `None` resizes the pool every tick from
    /// the population sizes.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            vehicle_count:   20,
            signal_count:    4,
            total_ticks:     5,
            road_length:     100,
            tick_delay_secs: 0,
            cycle_length:    9,
            policy:          ExecutionPolicy::Combined,
            seed:            42,
            num_threads:     None,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Inter-tick pause as a `Duration`.
    #[inline]
    pub fn tick_delay(&self) -> Duration {
        Duration::from_secs(self.tick_delay_secs)
    }

    /// Check every field.  Returns the first violation found.
    pub fn validate(&self) -> CoreResult<()> {
        if self.vehicle_count == 0 {
            return Err(CoreError::ZeroCount { what: "vehicle count" });
        }
        if self.signal_count == 0 {
            return Err(CoreError::ZeroCount { what: "signal count" });
        }
        if self.total_ticks == 0 {
            return Err(CoreError::ZeroCount { what: "iteration count" });
        }
        if self.road_length < MIN_ROAD_LENGTH {
            return Err(CoreError::RoadTooShort {
                length: self.road_length,
                min:    MIN_ROAD_LENGTH,
            });
        }
        if self.cycle_length == 0 {
            return Err(CoreError::ZeroCycle);
        }
        if self.signal_count > self.road_length as usize {
            return Err(CoreError::TooManySignals {
                signals:     self.signal_count,
                road_length: self.road_length,
            });
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::ZeroCount { what: "thread count" });
        }
        Ok(())
    }
}
