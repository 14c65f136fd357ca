//! `rr-sim` — tick loop orchestrator for the ringroad simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Size     — worker_count(vehicles, signals), resize the Rayon pool.
//!   ② Update   — by ExecutionPolicy:
//!                  Sequential: advance signals ─▶ snapshot ─▶ move vehicles
//!                  Combined:   snapshot ─▶ (advance signals ‖ move vehicles)
//!   ③ Report   — TickReport (ids ascending) handed to the observer.
//!   ④ Pace     — optional inter-tick sleep.
//! ```
//!
//! Every parallel region joins before the next step starts, and tick `N`
//! completes before tick `N + 1` begins.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rr_core::SimConfig;
//! use rr_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;
pub mod workers;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{TickReport, TickStats};
pub use sim::Sim;
pub use workers::{WorkerPool, worker_count};
