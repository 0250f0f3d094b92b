//! `lift-core` — foundational types for the lift fleet planner.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`                                          |
//! | [`floor`]       | `Floor`, floor-range helpers                          |
//! | [`direction`]   | `Direction`, `DirectionSet`, `valid_directions`       |
//! | [`assumptions`] | `Assumptions` — fixed constants of the model          |
//! | [`rng`]         | `LiftRng` (seeded, deterministic)                     |
//! | [`error`]       | `ValidationError`, `ValidationResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod assumptions;
pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use assumptions::Assumptions;
pub use direction::{Direction, DirectionSet, valid_directions};
pub use error::{ValidationError, ValidationResult};
pub use floor::Floor;
pub use ids::ElevatorId;
pub use rng::LiftRng;
