//! `lift-sim` — a scheduling session from building profile to served riders.
//!
//! # Session lifecycle
//!
//! ```text
//! SessionBuilder::new(profile)
//!   ① Estimate  — lift_estimate::recommend(profile), exactly once.
//!   ② Fleet     — FleetState::new(count, capacity, floors), optional
//!                 initial placement.
//!   ③ Engine    — DispatchEngine::new(floor_height).
//! Session::dispatch(request)  (repeat until the caller stops)
//!   ④ Assign    — engine.assign(&mut fleet, request); stats updated on
//!                 success and on rejection.  No error ends the session.
//! ```
//!
//! The session owns the fleet; nothing lives in statics, so dropping the
//! session tears the fleet down with it.
//!
//! [`TrafficGenerator`] produces a deterministic stream of valid requests from
//! a seed, for batch runs and tests.

pub mod builder;
pub mod error;
pub mod session;
pub mod traffic;


pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use session::{Session, SessionStats};
pub use traffic::TrafficGenerator;
