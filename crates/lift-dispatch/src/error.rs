use lift_core::ElevatorId;
use lift_fleet::FleetError;
use thiserror::Error;

use crate::RequestError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error("{id} cannot board another rider (capacity {capacity})")]
    CapacityExceeded { id: ElevatorId, capacity: u32 },

    #[error("no elevator has free capacity")]
    NoEligibleElevator,

    #[error("fleet error: {0}")]
    Fleet(FleetError),
}

impl From<FleetError> for DispatchError {
    fn from(e: FleetError) -> Self {
        match e {
            FleetError::CapacityExceeded { id, capacity } => {
                DispatchError::CapacityExceeded { id, capacity }
            }
            other => DispatchError::Fleet(other),
        }
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;
