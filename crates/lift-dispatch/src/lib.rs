//! `lift-dispatch` — assigns one rider request at a time to a car and
//! simulates the ride.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`request`]  | `Request`, `RequestError` — a rider's call and its checks  |
//! | [`engine`]   | `DispatchEngine` — selection + two-phase movement          |
//! | [`outcome`]  | `AssignmentOutcome`, `ElevatorSnapshot`                    |
//! | [`observer`] | `DispatchObserver` hooks, `NoopObserver`                   |
//! | [`error`]    | `DispatchError`, `DispatchResult<T>`                       |
//!
//! # Assignment
//!
//! ```text
//! assign(fleet, request):
//!   ① Validate  — floors in range, origin ≠ destination, direction matches
//!                 and is offered at the origin floor.
//!   ② Select    — among cars with room, minimise |floor − origin| × h / v;
//!                 ties go to the lowest id.
//!   ③ Room      — the chosen car must fit one more rider, else it is left
//!                 untouched at its floor.
//!   ④ Pickup    — car → Moving, moves to the origin floor; occupancy + 1.
//!   ⑤ Transit   — car moves to the destination, rider alights, car → Idle.
//! ```
//!
//! Every step runs synchronously inside one call; between calls every car is
//! idle.  There is no queue of outstanding requests, so the heuristic never
//! has to reserve or divert a car.

pub mod engine;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod request;


pub use engine::DispatchEngine;
pub use error::{DispatchError, DispatchResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use outcome::{AssignmentOutcome, ElevatorSnapshot};
pub use request::{Request, RequestError};
