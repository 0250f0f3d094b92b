use lift_estimate::{BuildingProfile, recommend};
use proptest::prelude::*;

fn profile(floors: u32, riders: u32, height: f64, capacity: Option<u32>) -> BuildingProfile {
    BuildingProfile {
        floors,
        peak_riders: riders,
        max_wait_secs: 45.0,
        floor_height_m: height,
        preferred_capacity: capacity,
    }
}

proptest! {
    #[test]
    fn recommend_is_deterministic(
        floors in 2u32..80,
        riders in 1u32..5_000,
        height in 2.5f64..6.0,
        capacity in proptest::option::of(1u32..30),
    ) {
        let p = profile(floors, riders, height, capacity);
        prop_assert_eq!(recommend(&p).unwrap(), recommend(&p).unwrap());
    }

    #[test]
    fn more_riders_never_fewer_cars(
        floors in 2u32..80,
        riders in 1u32..5_000,
        extra in 0u32..5_000,
        height in 2.5f64..6.0,
    ) {
        let low  = recommend(&profile(floors, riders, height, None)).unwrap();
        let high = recommend(&profile(floors, riders + extra, height, None)).unwrap();
        prop_assert!(
            high.elevator_count >= low.elevator_count,
            "{} riders → {} cars, {} riders → {} cars",
            riders, low.elevator_count, riders + extra, high.elevator_count
        );
    }

    #[test]
    fn capacity_is_echoed(
        floors in 2u32..80,
        riders in 1u32..5_000,
        capacity in proptest::option::of(1u32..30),
    ) {
        let rec = recommend(&profile(floors, riders, 4.0, capacity)).unwrap();
        prop_assert_eq!(rec.capacity, capacity.unwrap_or(12));
        prop_assert!(rec.elevator_count >= 1);
    }
}
