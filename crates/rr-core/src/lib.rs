//! `rr-core` — foundational types for the `ringroad` traffic simulation.
//!
//! Every other `rr-*` crate depends on this one.  It has no `rr-*`
//! dependencies and only two external ones (`rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`, `SignalId`                               |
//! | [`phase`]       | `Phase` (RED / GREEN / YELLOW) and its fixed cycle    |
//! | [`time`]        | `Tick`                                                |
//! | [`config`]      | `SimConfig`, `ExecutionPolicy`, validation            |
//! | [`rng`]         | `SimRng` (explicitly owned, seeded generator)         |
//! | [`road`]        | modular position arithmetic, even spacing             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod phase;
pub mod rng;
pub mod road;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ExecutionPolicy, MIN_ROAD_LENGTH, SimConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{SignalId, VehicleId};
pub use phase::Phase;
pub use rng::SimRng;
pub use time::Tick;
