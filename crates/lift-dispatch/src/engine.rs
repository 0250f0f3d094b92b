//! Nearest-car selection and the synchronous pickup/transit simulation.

use lift_core::assumptions::SPEED_MPS;
use lift_core::{ElevatorId, Floor};
use lift_fleet::FleetState;
use tracing::{debug, warn};

use crate::{
    AssignmentOutcome, DispatchError, DispatchObserver, DispatchResult, ElevatorSnapshot,
    NoopObserver, Request,
};

/// Assigns requests to cars in a [`FleetState`] it borrows per call.
///
/// The engine holds only the building geometry; it never keeps a copy of any
/// car.  Floor bounds come from the fleet being dispatched.
#[derive(Clone, Debug)]
pub struct DispatchEngine {
    floor_height_m: f64,
    speed_mps:      f64,
}

impl DispatchEngine {
    /// Engine for a building with the given floor-to-floor height, using the
    /// model's constant car speed.
    pub fn new(floor_height_m: f64) -> Self {
        Self { floor_height_m, speed_mps: SPEED_MPS }
    }

    #[inline]
    pub fn floor_height_m(&self) -> f64 {
        self.floor_height_m
    }

    /// Seconds to travel between two floors at constant speed.
    #[inline]
    pub fn travel_secs(&self, from: Floor, to: Floor) -> f64 {
        from.travel_secs(to, self.floor_height_m, self.speed_mps)
    }

    /// The car that would serve a call at `origin`, with its travel time.
    ///
    /// Considers only cars with room.  Minimises travel time; exact ties go to
    /// the lowest id.  Returns `None` if every car is full.
    pub fn select(&self, fleet: &FleetState, origin: Floor) -> Option<(ElevatorId, f64)> {
        fleet
            .elevators()
            .iter()
            .filter(|car| car.has_room())
            .map(|car| (car.id, self.travel_secs(car.current_floor, origin)))
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
    }

    /// Serve `request` to completion and report what happened.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` — bad floors or direction; the fleet is untouched.
    /// - `NoEligibleElevator` — every car is full.
    /// - `CapacityExceeded` — the chosen car has no room; it is left idle at
    ///   its original floor.
    pub fn assign(&self, fleet: &mut FleetState, request: &Request) -> DispatchResult<AssignmentOutcome> {
        self.assign_observed(fleet, request, &mut NoopObserver)
    }

    /// [`assign`](Self::assign) with phase callbacks delivered to `observer`.
    pub fn assign_observed<O: DispatchObserver>(
        &self,
        fleet:    &mut FleetState,
        request:  &Request,
        observer: &mut O,
    ) -> DispatchResult<AssignmentOutcome> {
        let result = self.run(fleet, request, observer);
        if let Err(e) = &result {
            warn!(request = %request, error = %e, "request rejected");
            observer.on_rejected(request, e);
        }
        result
    }

    fn run<O: DispatchObserver>(
        &self,
        fleet:    &mut FleetState,
        request:  &Request,
        observer: &mut O,
    ) -> DispatchResult<AssignmentOutcome> {
        request.validate(fleet.floor_count())?;

        let (id, eta_secs) = self
            .select(fleet, request.origin)
            .ok_or(DispatchError::NoEligibleElevator)?;

        let car    = fleet.get(id)?;
        let before = ElevatorSnapshot::from(car);
        observer.on_selected(car, request, eta_secs);
        debug!(elevator = id.0, from = before.floor.0, origin = request.origin.0, eta_secs, "car selected");

        // A car that cannot board never leaves its floor.
        fleet.ensure_room(id)?;

        // ── Pickup ────────────────────────────────────────────────────────
        fleet.begin_trip(id, request.origin)?;
        fleet.reach_destination(id)?;

        // ── Boarding ──────────────────────────────────────────────────────
        let occupancy = fleet.board(id)?;
        observer.on_boarded(id, request.origin, occupancy);

        // ── Transit ───────────────────────────────────────────────────────
        fleet.retarget(id, request.destination)?;
        fleet.reach_destination(id)?;
        fleet.alight(id)?;
        fleet.complete_trip(id, request.destination)?;
        observer.on_arrived(id, request.destination);

        let after = fleet.get(id)?;
        debug!(elevator = id.0, floor = after.current_floor.0, "ride complete");

        Ok(AssignmentOutcome {
            elevator:               id,
            before,
            estimated_arrival_secs: eta_secs,
            ride_secs:              self.travel_secs(request.origin, request.destination),
            final_floor:            after.current_floor,
            final_status:           after.status,
        })
    }
}
