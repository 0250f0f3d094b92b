//! Hooks into the phases of an assignment.

use lift_core::{ElevatorId, Floor};
use lift_fleet::Elevator;

use crate::{DispatchError, Request};

/// Callbacks invoked by [`DispatchEngine::assign_observed`][crate::DispatchEngine::assign_observed]
/// as a request moves through selection, boarding, and arrival.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  A real-time front end can use these to
/// drive a clock; the engine itself never waits.
///
/// # Example — wait tally
///
/// ```rust,ignore
/// struct WaitTally { total: f64 }
///
/// impl DispatchObserver for WaitTally {
///     fn on_selected(&mut self, _car: &Elevator, _req: &Request, eta_secs: f64) {
///         self.total += eta_secs;
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// A car was chosen.  `car` is its state before it moves.
    fn on_selected(&mut self, _car: &Elevator, _request: &Request, _eta_secs: f64) {}

    /// The rider boarded at `floor`; `occupancy` includes them.
    fn on_boarded(&mut self, _id: ElevatorId, _floor: Floor, _occupancy: u32) {}

    /// The rider got off at `floor` and the car is idle again.
    fn on_arrived(&mut self, _id: ElevatorId, _floor: Floor) {}

    /// The request failed; the fleet is unchanged apart from any rollback.
    fn on_rejected(&mut self, _request: &Request, _error: &DispatchError) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
