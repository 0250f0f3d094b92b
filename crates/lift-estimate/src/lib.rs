//! `lift-estimate` — peak-traffic fleet sizing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`profile`] | `BuildingProfile` — validated building parameters          |
//! | [`model`]   | `recommend`, `FleetRecommendation`                         |
//!
//! # Model
//!
//! ```text
//! round_trip     = 2 × (floors − 1) × floor_height / speed + ⌊floors / 2⌋ × dwell
//! trips_per_car  = peak_window / round_trip
//! riders_per_car = trips_per_car × capacity
//! elevators      = max(1, ⌈peak_riders / riders_per_car⌉)
//! ```
//!
//! A round trip runs from the ground floor to the top and back, stopping at
//! half the floors on average.  The capacity is echoed from the profile (or
//! the default of 12); the max-wait target is carried for reporting and does
//! not constrain the result.

pub mod model;
pub mod profile;

#[cfg(test)]
mod tests;

pub use model::{FleetRecommendation, recommend};
pub use profile::BuildingProfile;
