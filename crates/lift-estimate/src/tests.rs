//! Unit tests for lift-estimate.

use lift_core::ValidationError;

use crate::{BuildingProfile, recommend};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Ten floors of 4 m, 100 peak riders, default capacity.
fn ten_floor_profile() -> BuildingProfile {
    BuildingProfile {
        floors:             10,
        peak_riders:        100,
        max_wait_secs:      60.0,
        floor_height_m:     4.0,
        preferred_capacity: None,
    }
}

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

// ── Formula ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod formula {
    use super::*;

    #[test]
    fn ten_floor_worked_example() {
        let rec = recommend(&ten_floor_profile()).unwrap();
        assert!(approx(rec.round_trip_secs, 98.0, 1e-9), "got {}", rec.round_trip_secs);
        assert!(approx(rec.trips_per_car, 3.06, 0.005), "got {}", rec.trips_per_car);
        assert!(approx(rec.riders_per_car, 36.73, 0.005), "got {}", rec.riders_per_car);
        assert_eq!(rec.elevator_count, 3);
        assert_eq!(rec.capacity, 12);
    }

    #[test]
    fn odd_floor_count_rounds_stops_down() {
        // 5 floors: travel 2×4×3/1.5 = 16 s, plus ⌊5/2⌋ stops × 10 s = 20 s.
        let profile = BuildingProfile {
            floors:             5,
            floor_height_m:     3.0,
            ..ten_floor_profile()
        };
        let rec = recommend(&profile).unwrap();
        assert!(approx(rec.round_trip_secs, 36.0, 1e-9), "got {}", rec.round_trip_secs);
    }

    #[test]
    fn small_demand_still_gets_one_car() {
        let profile = BuildingProfile { peak_riders: 1, ..ten_floor_profile() };
        assert_eq!(recommend(&profile).unwrap().elevator_count, 1);
    }

    #[test]
    fn assumptions_and_wait_target_echoed() {
        let rec = recommend(&ten_floor_profile()).unwrap();
        assert_eq!(rec.assumptions, lift_core::Assumptions::STANDARD);
        assert_eq!(rec.max_wait_secs, 60.0);
    }

    #[test]
    fn deterministic() {
        let p = ten_floor_profile();
        assert_eq!(recommend(&p).unwrap(), recommend(&p).unwrap());
    }
}

// ── Capacity echo ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod capacity {
    use super::*;

    #[test]
    fn preferred_capacity_is_echoed() {
        let profile = BuildingProfile { preferred_capacity: Some(20), ..ten_floor_profile() };
        let rec = recommend(&profile).unwrap();
        assert_eq!(rec.capacity, 20);
        // 300/98 × 20 ≈ 61.2 riders per car → 2 cars for 100 riders.
        assert_eq!(rec.elevator_count, 2);
    }

    #[test]
    fn default_capacity_when_omitted() {
        assert_eq!(recommend(&ten_floor_profile()).unwrap().capacity, 12);
    }

    #[test]
    fn zero_preferred_capacity_rejected() {
        let profile = BuildingProfile { preferred_capacity: Some(0), ..ten_floor_profile() };
        assert_eq!(
            recommend(&profile),
            Err(ValidationError::NotPositive { field: "preferred capacity" })
        );
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn single_floor_rejected() {
        let profile = BuildingProfile { floors: 1, ..ten_floor_profile() };
        assert_eq!(recommend(&profile), Err(ValidationError::TooFewFloors(1)));
    }

    #[test]
    fn zero_riders_rejected() {
        let profile = BuildingProfile { peak_riders: 0, ..ten_floor_profile() };
        assert!(matches!(
            recommend(&profile),
            Err(ValidationError::NotPositive { field: "peak riders" })
        ));
    }

    #[test]
    fn non_positive_wait_rejected() {
        let profile = BuildingProfile { max_wait_secs: 0.0, ..ten_floor_profile() };
        assert!(matches!(
            recommend(&profile),
            Err(ValidationError::NotPositiveNumber { field: "max wait time", .. })
        ));
    }

    #[test]
    fn negative_floor_height_rejected() {
        let profile = BuildingProfile { floor_height_m: -3.0, ..ten_floor_profile() };
        assert!(matches!(
            recommend(&profile),
            Err(ValidationError::NotPositiveNumber { field: "floor height", .. })
        ));
    }

    #[test]
    fn car_count_beyond_u32_rejected() {
        // ~1.6e14 cars: tall floors, one-rider cars, four billion riders.
        let profile = BuildingProfile {
            peak_riders:        4_000_000_000,
            floor_height_m:     1.0e6,
            preferred_capacity: Some(1),
            ..ten_floor_profile()
        };
        match recommend(&profile) {
            Err(ValidationError::FleetTooLarge { required }) => {
                assert!(required > u32::MAX as f64, "got {required}");
            }
            other => panic!("expected FleetTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn nan_floor_height_rejected() {
        let profile = BuildingProfile { floor_height_m: f64::NAN, ..ten_floor_profile() };
        assert!(recommend(&profile).is_err());
    }
}
