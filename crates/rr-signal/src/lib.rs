//! `rr-signal` — traffic signals and their phase state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`signal`]    | `Signal`, `PhaseDurations`                                   |
//! | [`set`]       | `SignalSet` — validated, id-ordered signal population        |
//! | [`engine`]    | `advance_all` — the parallel per-tick phase engine           |
//! | [`snapshot`]  | `SignalSnapshot` — owned per-tick copy read by vehicles      |
//! | [`error`]     | `SignalError`, `SignalResult<T>`                             |
//!
//! # Per-tick model
//!
//! Every signal advances independently: its `elapsed` counter is
//! incremented, and once it reaches the duration of the current phase the
//! signal moves to the next phase of GREEN → YELLOW → RED → GREEN and the
//! counter restarts at 0.  No signal reads another, so the pass is split
//! across Rayon's current pool with no synchronisation.
//!
//! Vehicles never read the live [`SignalSet`].  They read a
//! [`SignalSnapshot`] taken at a fixed point of the tick, so no vehicle can
//! observe a signal in two different phases within one tick.

pub mod engine;
pub mod error;
pub mod set;
pub mod signal;
pub mod snapshot;


pub use engine::advance_all;
pub use error::{SignalError, SignalResult};
pub use set::SignalSet;
pub use signal::{PhaseDurations, Signal};
pub use snapshot::SignalSnapshot;
