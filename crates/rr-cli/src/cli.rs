//! Command-line arguments.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use rr_core::{ExecutionPolicy, SimConfig};

#[derive(Parser, Debug)]
#[command(
    name = "ringroad",
    version,
    about = "Traffic signals and vehicles on a circular one-dimensional road"
)]
pub struct Cli {
    /// Number of vehicles.
    pub vehicles: usize,

    /// Number of traffic signals.
    pub signals: usize,

    /// Number of ticks to simulate.
    pub iterations: u64,

    /// Length of the circular road in cells (at least 6).
    pub road_length: u32,

    /// Seconds to pause after printing each tick.
    #[arg(long, default_value_t = 0)]
    pub delay: u64,

    /// Full signal cycle in ticks (GREEN 50%, YELLOW 20%, RED the rest).
    #[arg(long, default_value_t = 9)]
    pub cycle: u32,

    /// `combined` runs signals and vehicles concurrently against the
    /// previous phases; `sequential` advances signals first.
    #[arg(long, default_value = "combined")]
    pub mode: ExecutionPolicy,

    /// RNG seed for vehicle placement.  Defaults to the current Unix time.
    #[arg(long, env = "RINGROAD_SEED")]
    pub seed: Option<u64>,

    /// Fixed worker thread count.  Defaults to resizing from the population.
    #[arg(long)]
    pub threads: Option<usize>,
}

impl Cli {
    /// Plain simulation parameters.  Not yet validated.
    pub fn to_config(&self) -> SimConfig {
        SimConfig {
            vehicle_count:   self.vehicles,
            signal_count:    self.signals,
            total_ticks:     self.iterations,
            road_length:     self.road_length,
            tick_delay_secs: self.delay,
            cycle_length:    self.cycle,
            policy:          self.mode,
            seed:            self.seed.unwrap_or_else(clock_seed),
            num_threads:     self.threads,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
