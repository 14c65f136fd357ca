//! `rr-vehicle` — vehicles on the ring road and how they move.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`vehicle`] | `Vehicle` — id, position, fixed step size                       |
//! | [`set`]     | `VehicleSet` — validated population + seeded generator          |
//! | [`engine`]  | `move_all` — parallel movement pass against a `SignalSnapshot`  |
//! | [`error`]   | `VehicleError`, `VehicleResult<T>`                              |
//!
//! # Movement model
//!
//! Each tick a vehicle at `p` with step `k` targets `d = (p + k) mod L`.
//! If the snapshot holds a RED or YELLOW signal at exactly `d` the vehicle
//! stays at `p`; otherwise it moves to `d`.  Cells in between are not
//! inspected and vehicles do not see each other, so two vehicles may share
//! a cell.

pub mod engine;
pub mod error;
pub mod set;
pub mod vehicle;


pub use engine::move_all;
pub use error::{VehicleError, VehicleResult};
pub use set::VehicleSet;
pub use vehicle::Vehicle;
