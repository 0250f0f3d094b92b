//! Fixed operating assumptions of the planning model.
//!
//! These are constants of the model, not user settings.  They are grouped in
//! a struct so a recommendation can echo exactly which figures produced it.

/// Average time a car spends stopped at a floor (doors plus boarding).
pub const DWELL_SECS: f64 = 10.0;

/// Constant car speed; acceleration is not modelled.
pub const SPEED_MPS: f64 = 1.5;

/// Length of the peak observation window (5 minutes).
pub const PEAK_WINDOW_SECS: f64 = 300.0;

/// Capacity used when the caller does not supply a preferred one.
pub const DEFAULT_CAPACITY: u32 = 12;

/// The operating assumptions a recommendation was computed with.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assumptions {
    pub dwell_secs:       f64,
    pub speed_mps:        f64,
    pub peak_window_secs: f64,
    pub default_capacity: u32,
}

impl Assumptions {
    pub const STANDARD: Assumptions = Assumptions {
        dwell_secs:       DWELL_SECS,
        speed_mps:        SPEED_MPS,
        peak_window_secs: PEAK_WINDOW_SECS,
        default_capacity: DEFAULT_CAPACITY,
    };
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::STANDARD
    }
}
