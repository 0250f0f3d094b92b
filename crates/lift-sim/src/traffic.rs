//! Synthetic rider traffic.

use lift_core::{Direction, Floor, LiftRng, valid_directions};
use lift_dispatch::Request;

/// Endless, seed-deterministic stream of valid requests for a building.
///
/// Each request picks a uniform origin floor, one of the directions offered
/// there, and a uniform destination on that side of the origin.
pub struct TrafficGenerator {
    rng:         LiftRng,
    floor_count: u32,
}

impl TrafficGenerator {
    /// # Panics
    ///
    /// Panics if `floor_count < 2`: no valid request exists.
    pub fn new(seed: u64, floor_count: u32) -> Self {
        assert!(floor_count >= 2, "traffic needs at least two floors");
        Self { rng: LiftRng::new(seed), floor_count }
    }

    pub fn next_request(&mut self) -> Request {
        let origin = Floor(self.rng.gen_range(1..=self.floor_count));
        let offered: Vec<Direction> = valid_directions(origin, self.floor_count).iter().collect();
        // Every floor of a 2+ floor building offers at least one direction.
        let direction = self.rng.choose(&offered).copied().unwrap_or(Direction::Up);
        let destination = match direction {
            Direction::Up   => self.rng.gen_range(origin.0 + 1..=self.floor_count),
            Direction::Down => self.rng.gen_range(1..origin.0),
        };
        Request::new(origin, direction, destination)
    }
}

impl Iterator for TrafficGenerator {
    type Item = Request;

    fn next(&mut self) -> Option<Request> {
        Some(self.next_request())
    }
}
