//! A rider's call: where they are, which button they pressed, and where they
//! are going.

use std::fmt;

use lift_core::{Direction, Floor, valid_directions};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("floor {floor} is outside the building (1..={floor_count})")]
    FloorOutOfRange { floor: Floor, floor_count: u32 },

    #[error("origin and destination are both floor {0}")]
    SameFloor(Floor),

    #[error("direction {direction} is not available at floor {floor}")]
    DirectionNotAvailable { floor: Floor, direction: Direction },

    #[error("direction {direction} does not lead from floor {origin} to floor {destination}")]
    DirectionMismatch {
        origin:      Floor,
        direction:   Direction,
        destination: Floor,
    },
}

/// One rider's request.  Consumed by a single dispatch call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub origin:      Floor,
    pub direction:   Direction,
    pub destination: Floor,
}

impl Request {
    pub fn new(origin: impl Into<Floor>, direction: Direction, destination: impl Into<Floor>) -> Self {
        Self {
            origin: origin.into(),
            direction,
            destination: destination.into(),
        }
    }

    /// Check the request against a building of `floor_count` floors.
    pub fn validate(&self, floor_count: u32) -> Result<(), RequestError> {
        for floor in [self.origin, self.destination] {
            if !floor.within(floor_count) {
                return Err(RequestError::FloorOutOfRange { floor, floor_count });
            }
        }
        if self.origin == self.destination {
            return Err(RequestError::SameFloor(self.origin));
        }
        if !valid_directions(self.origin, floor_count).contains(self.direction) {
            return Err(RequestError::DirectionNotAvailable {
                floor:     self.origin,
                direction: self.direction,
            });
        }
        if Direction::between(self.origin, self.destination) != Some(self.direction) {
            return Err(RequestError::DirectionMismatch {
                origin:      self.origin,
                direction:   self.direction,
                destination: self.destination,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} → {}", self.origin, self.direction, self.destination)
    }
}
