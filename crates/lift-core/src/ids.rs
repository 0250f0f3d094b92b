//! Strongly typed elevator identifier.
//!
//! Elevator ids are 1-based (`1..=N`) because they are shown to riders.  The
//! fleet stores cars in a `Vec`, so `.index()` converts to the 0-based slot
//! and `from_index` goes the other way.

use std::fmt;

/// Identifier of a car in the fleet, assigned at fleet creation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorId(pub u32);

impl ElevatorId {
    /// Sentinel meaning "no valid ID".  Ids start at 1, so 0 is never issued.
    pub const INVALID: ElevatorId = ElevatorId(0);

    /// Id of the car stored in `Vec` slot `index`.
    #[inline(always)]
    pub fn from_index(index: usize) -> Self {
        ElevatorId(index as u32 + 1)
    }

    /// 0-based `Vec` slot, or `None` for the `INVALID` sentinel.
    #[inline(always)]
    pub fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl Default for ElevatorId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Elevator {}", self.0)
    }
}

impl From<u32> for ElevatorId {
    #[inline(always)]
    fn from(n: u32) -> ElevatorId {
        ElevatorId(n)
    }
}
