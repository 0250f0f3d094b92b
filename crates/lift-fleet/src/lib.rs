//! `lift-fleet` — the fleet of cars and their mutable state.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`elevator`] | `Elevator`, `ElevatorStatus` — one car's record           |
//! | [`state`]    | `FleetState` — owns every `Elevator` and its invariants   |
//! | [`error`]    | `FleetError`, `FleetResult<T>`                            |
//!
//! # Trip lifecycle
//!
//! ```text
//! Idle ──begin_trip(a)──▶ Moving{a} ──reach_destination──▶ at a, Moving{a}
//!                                                              │
//!                                                  retarget(b) │
//!                                                              ▼
//!        Idle at b ◀──complete_trip(b)── at a, Moving{b} ──reach_destination──▶ at b
//! ```
//!
//! `board` / `alight` adjust occupancy at any point in the lifecycle and
//! refuse to leave `[0, capacity]`.  The fleet size and capacity are fixed at
//! construction; cars are never added or removed afterwards.

pub mod elevator;
pub mod error;
pub mod state;


pub use elevator::{Elevator, ElevatorStatus};
pub use error::{FleetError, FleetResult};
pub use state::FleetState;
