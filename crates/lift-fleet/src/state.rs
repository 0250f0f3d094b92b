//! `FleetState` — the single owner of every car record.

use lift_core::{ElevatorId, Floor};
use tracing::trace;

use crate::{Elevator, ElevatorStatus, FleetError, FleetResult};

/// Holds every car for the lifetime of a scheduling session.
///
/// The `elevators` vector is indexed by `ElevatorId::index()` and is always
/// length `count`.  All mutation goes through the methods below, each of
/// which keeps `1 ≤ current_floor ≤ floor_count` and
/// `0 ≤ occupancy ≤ capacity`.
#[derive(Clone, Debug)]
pub struct FleetState {
    elevators:   Vec<Elevator>,
    capacity:    u32,
    floor_count: u32,
}

impl FleetState {
    /// Create `count` empty, idle cars on the ground floor, ids `1..=count`.
    ///
    /// A capacity of 0 is accepted so a degenerate fleet can be built
    /// directly; such a fleet never has an eligible car.  `floor_count` must
    /// be at least 2, matching a validated building profile.
    pub fn new(count: usize, capacity: u32, floor_count: u32) -> Self {
        debug_assert!(floor_count >= 2, "a fleet needs a building of at least 2 floors");
        Self {
            elevators: (0..count)
                .map(|i| Elevator::new(ElevatorId::from_index(i), capacity))
                .collect(),
            capacity,
            floor_count,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.elevators.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elevators.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline]
    pub fn floor_count(&self) -> u32 {
        self.floor_count
    }

    /// All cars in ascending id order.
    #[inline]
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn get(&self, id: ElevatorId) -> FleetResult<&Elevator> {
        id.index()
            .and_then(|i| self.elevators.get(i))
            .ok_or(FleetError::UnknownElevator(id))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Park an idle car at `floor` without simulating travel.
    pub fn place(&mut self, id: ElevatorId, floor: Floor) -> FleetResult<()> {
        self.check_floor(floor)?;
        let car = self.get_mut(id)?;
        if car.status.is_moving() {
            return Err(FleetError::AlreadyMoving(id));
        }
        car.current_floor = floor;
        Ok(())
    }

    /// Start a trip towards `destination`.  The car stays where it is until
    /// [`reach_destination`](Self::reach_destination) or
    /// [`complete_trip`](Self::complete_trip).
    pub fn begin_trip(&mut self, id: ElevatorId, destination: Floor) -> FleetResult<()> {
        self.check_floor(destination)?;
        let car = self.get_mut(id)?;
        if car.status.is_moving() {
            return Err(FleetError::AlreadyMoving(id));
        }
        car.status = ElevatorStatus::Moving { destination };
        trace!(elevator = id.0, from = car.current_floor.0, to = destination.0, "trip started");
        Ok(())
    }

    /// Point a moving car at a new destination.
    pub fn retarget(&mut self, id: ElevatorId, destination: Floor) -> FleetResult<()> {
        self.check_floor(destination)?;
        let car = self.get_mut(id)?;
        match car.status {
            ElevatorStatus::Moving { .. } => {
                car.status = ElevatorStatus::Moving { destination };
                Ok(())
            }
            ElevatorStatus::Idle => Err(FleetError::NotMoving(id)),
        }
    }

    /// Move a car to its current trip destination.  It stays `Moving`.
    pub fn reach_destination(&mut self, id: ElevatorId) -> FleetResult<Floor> {
        let car = self.get_mut(id)?;
        match car.status {
            ElevatorStatus::Moving { destination } => {
                car.current_floor = destination;
                Ok(destination)
            }
            ElevatorStatus::Idle => Err(FleetError::NotMoving(id)),
        }
    }

    /// Park the car at `final_floor` and mark it idle.
    ///
    /// Also used to roll a trip back: completing at the car's current floor
    /// leaves its position untouched.
    pub fn complete_trip(&mut self, id: ElevatorId, final_floor: Floor) -> FleetResult<()> {
        self.check_floor(final_floor)?;
        let car = self.get_mut(id)?;
        if !car.status.is_moving() {
            return Err(FleetError::NotMoving(id));
        }
        car.current_floor = final_floor;
        car.status        = ElevatorStatus::Idle;
        trace!(elevator = id.0, floor = final_floor.0, "trip complete");
        Ok(())
    }

    /// Fail with `CapacityExceeded` unless one more rider fits.
    pub fn ensure_room(&self, id: ElevatorId) -> FleetResult<()> {
        let car = self.get(id)?;
        if !car.has_room() {
            return Err(FleetError::CapacityExceeded { id, capacity: car.capacity });
        }
        Ok(())
    }

    /// Add one rider.  Fails without side effects if the car is full.
    pub fn board(&mut self, id: ElevatorId) -> FleetResult<u32> {
        let car = self.get_mut(id)?;
        if !car.has_room() {
            return Err(FleetError::CapacityExceeded { id, capacity: car.capacity });
        }
        car.occupancy += 1;
        Ok(car.occupancy)
    }

    /// Remove one rider.  Fails without side effects if the car is empty.
    pub fn alight(&mut self, id: ElevatorId) -> FleetResult<u32> {
        let car = self.get_mut(id)?;
        if car.occupancy == 0 {
            return Err(FleetError::NoRiders(id));
        }
        car.occupancy -= 1;
        Ok(car.occupancy)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn get_mut(&mut self, id: ElevatorId) -> FleetResult<&mut Elevator> {
        id.index()
            .and_then(|i| self.elevators.get_mut(i))
            .ok_or(FleetError::UnknownElevator(id))
    }

    fn check_floor(&self, floor: Floor) -> FleetResult<()> {
        if !floor.within(self.floor_count) {
            return Err(FleetError::FloorOutOfRange { floor, floor_count: self.floor_count });
        }
        Ok(())
    }
}
