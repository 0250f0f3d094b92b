//! Travel direction and the per-floor direction-eligibility rule.
//!
//! A rider on the ground floor can only go up and a rider on the top floor
//! can only go down; everywhere in between both buttons exist.  The prompt
//! layer uses [`valid_directions`] to decide which buttons to offer, and the
//! dispatch engine re-checks it before touching the fleet.

use std::fmt;
use std::str::FromStr;

use crate::Floor;

/// Direction a rider wants to travel from the origin floor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction implied by travelling from `origin` to `destination`, or
    /// `None` when they are the same floor.
    pub fn between(origin: Floor, destination: Floor) -> Option<Direction> {
        match origin.cmp(&destination) {
            std::cmp::Ordering::Less    => Some(Direction::Up),
            std::cmp::Ordering::Greater => Some(Direction::Down),
            std::cmp::Ordering::Equal   => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "up"   => Ok(Direction::Up),
            "d" | "down" => Ok(Direction::Down),
            other        => Err(format!("unknown direction {other:?}")),
        }
    }
}

// ── DirectionSet ──────────────────────────────────────────────────────────────

/// The set of directions a rider may request at some floor: `{up}`,
/// `{down}`, `{up, down}`, or empty for a floor outside the building.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionSet {
    up:   bool,
    down: bool,
}

impl DirectionSet {
    pub const NONE: DirectionSet = DirectionSet { up: false, down: false };
    pub const UP:   DirectionSet = DirectionSet { up: true,  down: false };
    pub const DOWN: DirectionSet = DirectionSet { up: false, down: true };
    pub const BOTH: DirectionSet = DirectionSet { up: true,  down: true };

    #[inline]
    pub fn contains(self, direction: Direction) -> bool {
        match direction {
            Direction::Up   => self.up,
            Direction::Down => self.down,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        !self.up && !self.down
    }

    /// Members in display order (up before down).
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        [(self.up, Direction::Up), (self.down, Direction::Down)]
            .into_iter()
            .filter_map(|(present, d)| present.then_some(d))
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Direction::as_str).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// Directions a rider may request at `floor` in a building of `floor_count`
/// floors.
pub fn valid_directions(floor: Floor, floor_count: u32) -> DirectionSet {
    if floor_count < 2 || !floor.within(floor_count) {
        return DirectionSet::NONE;
    }
    if floor == Floor::GROUND {
        DirectionSet::UP
    } else if floor.0 == floor_count {
        DirectionSet::DOWN
    } else {
        DirectionSet::BOTH
    }
}
