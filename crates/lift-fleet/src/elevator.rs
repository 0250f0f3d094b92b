//! One car's record.

use std::fmt;

use lift_core::{ElevatorId, Floor};

/// Whether a car is parked or part-way through a trip.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElevatorStatus {
    /// Parked at `current_floor` with no trip in progress.
    #[default]
    Idle,
    /// On a trip towards `destination`.
    Moving { destination: Floor },
}

impl ElevatorStatus {
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, ElevatorStatus::Moving { .. })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ElevatorStatus::Idle          => "idle",
            ElevatorStatus::Moving { .. } => "moving",
        }
    }
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single car.
///
/// Fields are readable by anyone holding a `&FleetState`; only
/// [`FleetState`][crate::FleetState] mutates them.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    pub id:            ElevatorId,
    pub current_floor: Floor,
    pub capacity:      u32,
    pub occupancy:     u32,
    pub status:        ElevatorStatus,
}

impl Elevator {
    /// An empty, idle car parked on the ground floor.
    pub fn new(id: ElevatorId, capacity: u32) -> Self {
        Self {
            id,
            current_floor: Floor::GROUND,
            capacity,
            occupancy:     0,
            status:        ElevatorStatus::Idle,
        }
    }

    /// `true` if at least one more rider fits.
    #[inline]
    pub fn has_room(&self) -> bool {
        self.occupancy < self.capacity
    }
}
