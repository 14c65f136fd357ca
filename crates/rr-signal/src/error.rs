use rr_core::SignalId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignalError {
    #[error("{count} signals cannot occupy distinct cells on a road of {road_length} cells")]
    TooMany { count: usize, road_length: u32 },

    #[error("signal at index {index} has id {got}; ids must equal their index")]
    IdMismatch { index: usize, got: SignalId },

    #[error("{signal} at cell {position} lies outside a road of {road_length} cells")]
    OutOfRoad {
        signal:      SignalId,
        position:    u32,
        road_length: u32,
    },

    #[error("{first} and {second} both occupy cell {position}")]
    DuplicatePosition {
        position: u32,
        first:    SignalId,
        second:   SignalId,
    },

    #[error("{0} has a zero-length phase")]
    ZeroDuration(SignalId),

    #[error("{signal} has spent {elapsed} ticks in a phase lasting {duration}")]
    ElapsedOutOfRange {
        signal:   SignalId,
        elapsed:  u32,
        duration: u32,
    },
}

pub type SignalResult<T> = Result<T, SignalError>;
