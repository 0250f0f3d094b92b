use lift_core::{ElevatorId, Floor};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    #[error("{0} does not exist")]
    UnknownElevator(ElevatorId),

    #[error("floor {floor} is outside the building (1..={floor_count})")]
    FloorOutOfRange { floor: Floor, floor_count: u32 },

    #[error("{id} is full ({capacity} riders)")]
    CapacityExceeded { id: ElevatorId, capacity: u32 },

    #[error("{0} has no riders to let off")]
    NoRiders(ElevatorId),

    #[error("{0} is not on a trip")]
    NotMoving(ElevatorId),

    #[error("{0} is already on a trip")]
    AlreadyMoving(ElevatorId),
}

pub type FleetResult<T> = Result<T, FleetError>;
