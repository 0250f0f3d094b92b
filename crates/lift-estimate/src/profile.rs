//! Building parameters fed to the sizing model.

use lift_core::error::{positive_int, positive_number};
use lift_core::{ValidationError, ValidationResult};

/// Building parameters for one sizing run.
///
/// Immutable input to [`recommend`][crate::recommend]; nothing keeps it
/// afterwards.  Construct freely and call [`validate`](Self::validate) (the
/// model does so itself before running the formula).
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingProfile {
    /// Number of floors, ground floor included.  At least 2.
    pub floors: u32,

    /// Riders arriving during the peak window.
    pub peak_riders: u32,

    /// Longest acceptable wait for a car, in seconds.
    pub max_wait_secs: f64,

    /// Floor-to-floor height in metres.
    pub floor_height_m: f64,

    /// Car capacity requested by the caller; `None` uses the model default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred_capacity: Option<u32>,
}

impl BuildingProfile {
    /// Reject any non-positive (or non-finite) parameter.  No clamping.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.floors < 2 {
            return Err(ValidationError::TooFewFloors(self.floors));
        }
        positive_int("peak riders", self.peak_riders)?;
        positive_number("max wait time", self.max_wait_secs)?;
        positive_number("floor height", self.floor_height_m)?;
        if let Some(capacity) = self.preferred_capacity {
            positive_int("preferred capacity", capacity)?;
        }
        Ok(())
    }
}
