//! What a dispatch call reports back.

use lift_core::{ElevatorId, Floor};
use lift_fleet::{Elevator, ElevatorStatus};

/// A car's floor, status, and occupancy at one instant.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorSnapshot {
    pub floor:     Floor,
    pub status:    ElevatorStatus,
    pub occupancy: u32,
}

impl From<&Elevator> for ElevatorSnapshot {
    fn from(car: &Elevator) -> Self {
        Self {
            floor:     car.current_floor,
            status:    car.status,
            occupancy: car.occupancy,
        }
    }
}

/// Result of one successful assignment.  Used for reporting only.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentOutcome {
    /// The car chosen for the request.
    pub elevator: ElevatorId,

    /// The car as the caller saw it before this call.
    pub before: ElevatorSnapshot,

    /// Seconds for the car to reach the origin floor.
    pub estimated_arrival_secs: f64,

    /// Seconds from the origin floor to the destination.
    pub ride_secs: f64,

    /// Where the car ended up (the destination).
    pub final_floor: Floor,

    /// Always `Idle` for a completed ride.
    pub final_status: ElevatorStatus,
}

impl AssignmentOutcome {
    /// Estimated arrival rounded to one decimal place, as reported to riders.
    pub fn estimated_arrival_display(&self) -> f64 {
        (self.estimated_arrival_secs * 10.0).round() / 10.0
    }
}
