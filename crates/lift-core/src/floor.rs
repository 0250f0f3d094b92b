//! Building floors.
//!
//! Floors are numbered from 1 (the ground floor) up to the building's floor
//! count.  There are no basements in this model.

use std::fmt;

/// A floor number, `1..=floor_count`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    pub const GROUND: Floor = Floor(1);

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// `true` if the floor exists in a building of `floor_count` floors.
    #[inline]
    pub fn within(self, floor_count: u32) -> bool {
        (1..=floor_count).contains(&self.0)
    }

    /// Seconds needed to cover the distance to `other` at constant `speed_mps`.
    #[inline]
    pub fn travel_secs(self, other: Floor, floor_height_m: f64, speed_mps: f64) -> f64 {
        self.distance(other) as f64 * floor_height_m / speed_mps
    }
}

impl Default for Floor {
    fn default() -> Self {
        Floor::GROUND
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Floor {
    #[inline]
    fn from(n: u32) -> Floor {
        Floor(n)
    }
}
