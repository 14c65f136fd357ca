use rayon::ThreadPoolBuildError;
use rr_core::CoreError;
use rr_signal::SignalError;
use rr_vehicle::VehicleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("invalid signal population: {0}")]
    Signal(#[from] SignalError),

    #[error("invalid vehicle population: {0}")]
    Vehicle(#[from] VehicleError),

    #[error("{what} built for a road of {got} cells, configuration says {expected}")]
    RoadLengthMismatch {
        expected: u32,
        got:      u32,
        what:     &'static str,
    },

    #[error("{what} count {got} does not match configured count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
