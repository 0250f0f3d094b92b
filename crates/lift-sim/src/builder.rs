//! Fluent builder for a [`Session`].

use lift_core::{ElevatorId, Floor, ValidationError};
use lift_dispatch::DispatchEngine;
use lift_estimate::{BuildingProfile, recommend};
use lift_fleet::FleetState;
use tracing::info;

use crate::{Session, SessionResult, SessionStats};

/// Fluent builder for [`Session`].
///
/// # Required inputs
///
/// - [`BuildingProfile`] — sized once by the estimation model.
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                 |
/// |-----------------------|-------------------------|
/// | `.initial_floors(v)`  | Every car on floor 1    |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(profile).build()?;
/// let outcome = session.dispatch(&Request::new(5u32, Direction::Up, 10u32))?;
/// ```
pub struct SessionBuilder {
    profile:        BuildingProfile,
    initial_floors: Option<Vec<Floor>>,
}

impl SessionBuilder {
    pub fn new(profile: BuildingProfile) -> Self {
        Self { profile, initial_floors: None }
    }

    /// Starting floor for each car, in id order.
    ///
    /// Must be as long as the recommended elevator count, which is only known
    /// once `build` has run the estimation; a mismatch fails there.
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.initial_floors = Some(floors);
        self
    }

    /// Size the fleet, build it and the engine, and return a ready session.
    pub fn build(self) -> SessionResult<Session> {
        let recommendation = recommend(&self.profile)?;
        let count = recommendation.elevator_count as usize;

        let mut fleet = FleetState::new(count, recommendation.capacity, self.profile.floors);

        if let Some(floors) = self.initial_floors {
            if floors.len() != count {
                return Err(ValidationError::CountMismatch {
                    expected: count,
                    got:      floors.len(),
                    what:     "initial floors",
                }
                .into());
            }
            for (i, floor) in floors.into_iter().enumerate() {
                fleet.place(ElevatorId::from_index(i), floor)?;
            }
        }

        info!(
            elevators = recommendation.elevator_count,
            capacity = recommendation.capacity,
            floors = self.profile.floors,
            "scheduling session started"
        );

        Ok(Session {
            engine:        DispatchEngine::new(self.profile.floor_height_m),
            fleet,
            stats:         SessionStats::default(),
            recommendation,
        })
    }
}
