//! The fleet sizing formula.

use lift_core::{Assumptions, ValidationError, ValidationResult};
use tracing::debug;

use crate::BuildingProfile;

/// Recommended fleet plus the intermediate figures that produced it.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetRecommendation {
    /// Number of cars to install.  Always at least 1.
    pub elevator_count: u32,

    /// Riders per car.  Echoes the preferred or default capacity.
    pub capacity: u32,

    /// Seconds for one ground → top → ground cycle including stops.
    pub round_trip_secs: f64,

    /// Round trips one car completes inside the peak window (not rounded).
    pub trips_per_car: f64,

    /// Riders one car carries inside the peak window.
    pub riders_per_car: f64,

    /// Max-wait target from the profile, carried for reporting.
    pub max_wait_secs: f64,

    /// Constants the figures were computed with.
    pub assumptions: Assumptions,
}

/// Size a fleet for `profile` using the standard operating assumptions.
///
/// Pure and deterministic.
///
/// # Errors
///
/// Returns a `ValidationError` before any arithmetic if a parameter is
/// non-positive, non-finite, or the building has fewer than two floors, and
/// `FleetTooLarge` if the car count does not fit in a `u32`.
pub fn recommend(profile: &BuildingProfile) -> ValidationResult<FleetRecommendation> {
    profile.validate()?;
    let a = Assumptions::STANDARD;

    let capacity = profile.preferred_capacity.unwrap_or(a.default_capacity);

    let travel_secs     = 2.0 * (profile.floors - 1) as f64 * profile.floor_height_m / a.speed_mps;
    let stops           = (profile.floors / 2) as f64;
    let round_trip_secs = travel_secs + stops * a.dwell_secs;

    let trips_per_car  = a.peak_window_secs / round_trip_secs;
    let riders_per_car = trips_per_car * capacity as f64;

    let required = (profile.peak_riders as f64 / riders_per_car).ceil();
    if required > u32::MAX as f64 {
        return Err(ValidationError::FleetTooLarge { required });
    }
    let elevator_count = (required as u32).max(1);

    debug!(
        floors = profile.floors,
        round_trip_secs,
        trips_per_car,
        riders_per_car,
        elevator_count,
        capacity,
        "fleet recommendation computed"
    );

    Ok(FleetRecommendation {
        elevator_count,
        capacity,
        round_trip_secs,
        trips_per_car,
        riders_per_car,
        max_wait_secs: profile.max_wait_secs,
        assumptions: a,
    })
}
