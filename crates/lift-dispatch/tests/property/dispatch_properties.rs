use lift_core::{Direction, ElevatorId, Floor, valid_directions};
use lift_dispatch::{DispatchEngine, DispatchError, Request};
use lift_fleet::{ElevatorStatus, FleetState};
use proptest::prelude::*;

/// Any request shape, valid or not, over floors 0..=floors+1.
fn any_request(floors: u32) -> impl Strategy<Value = Request> {
    (0..=floors + 1, any::<bool>(), 0..=floors + 1).prop_map(|(o, up, d)| {
        let direction = if up { Direction::Up } else { Direction::Down };
        Request::new(o, direction, d)
    })
}

proptest! {
    #[test]
    fn invariants_hold_over_any_request_sequence(
        floors   in 2u32..30,
        cars     in 1usize..6,
        capacity in 0u32..4,
        height   in 2.5f64..5.0,
        seq      in proptest::collection::vec(any_request(30), 0..60),
    ) {
        let mut fleet = FleetState::new(cars, capacity, floors);
        let engine    = DispatchEngine::new(height);

        for req in &seq {
            let _ = engine.assign(&mut fleet, req);
            prop_assert_eq!(fleet.len(), cars);
            for car in fleet.elevators() {
                prop_assert!(car.occupancy <= car.capacity);
                prop_assert!(car.current_floor.within(floors), "car at {}", car.current_floor);
                prop_assert_eq!(car.status, ElevatorStatus::Idle);
                prop_assert_eq!(car.occupancy, 0);
            }
        }
    }

    #[test]
    fn valid_requests_end_at_destination(
        floors in 2u32..30,
        origin in 1u32..30,
        dest   in 1u32..30,
    ) {
        prop_assume!(origin <= floors && dest <= floors && origin != dest);
        let direction = if dest > origin { Direction::Up } else { Direction::Down };
        prop_assert!(valid_directions(Floor(origin), floors).contains(direction));

        let mut fleet = FleetState::new(2, 8, floors);
        let out = DispatchEngine::new(4.0)
            .assign(&mut fleet, &Request::new(origin, direction, dest))
            .unwrap();
        prop_assert_eq!(out.final_floor, Floor(dest));
        prop_assert_eq!(fleet.get(out.elevator).unwrap().current_floor, Floor(dest));
    }

    #[test]
    fn chosen_car_is_never_farther_than_another(
        positions in proptest::collection::vec(1u32..=12, 1..6),
        origin    in 1u32..12,
    ) {
        let mut fleet = FleetState::new(positions.len(), 4, 12);
        for (i, &p) in positions.iter().enumerate() {
            fleet.place(ElevatorId::from_index(i), Floor(p)).unwrap();
        }
        let (id, _) = DispatchEngine::new(3.0).select(&fleet, Floor(origin)).unwrap();
        let chosen = fleet.get(id).unwrap().current_floor.distance(Floor(origin));
        for car in fleet.elevators() {
            let d = car.current_floor.distance(Floor(origin));
            prop_assert!(chosen < d || (chosen == d && id <= car.id));
        }
    }

    #[test]
    fn zero_capacity_never_assigns(floors in 2u32..20, cars in 1usize..5) {
        let mut fleet = FleetState::new(cars, 0, floors);
        let result = DispatchEngine::new(4.0).assign(&mut fleet, &Request::new(1u32, Direction::Up, floors));
        prop_assert_eq!(result, Err(DispatchError::NoEligibleElevator));
    }
}
