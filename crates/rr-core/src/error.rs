//! Configuration error type.
//!
//! Downstream crates keep their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Rejected simulation configuration.  Raised once, before any simulation
/// state is constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{what} must be greater than zero")]
    ZeroCount { what: &'static str },

    #[error("road length {length} is below the minimum of {min} cells")]
    RoadTooShort { length: u32, min: u32 },

    #[error("signal cycle length must be at least one tick")]
    ZeroCycle,

    #[error("{signals} signals cannot occupy distinct cells on a road of {road_length} cells")]
    TooManySignals { signals: usize, road_length: u32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
