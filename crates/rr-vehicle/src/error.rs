use rr_core::VehicleId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VehicleError {
    #[error("{0} vehicles exceed the id space")]
    TooMany(usize),

    #[error("vehicle at index {index} has id {got}; ids must equal their index")]
    IdMismatch { index: usize, got: VehicleId },

    #[error("{vehicle} at cell {position} lies outside a road of {road_length} cells")]
    OutOfRoad {
        vehicle:     VehicleId,
        position:    u32,
        road_length: u32,
    },

    #[error("cannot place {0} vehicles on a road with no cells")]
    EmptyRoad(usize),

    #[error("{0} has a step size of zero")]
    ZeroStep(VehicleId),
}

pub type VehicleResult<T> = Result<T, VehicleError>;
