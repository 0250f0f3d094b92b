//! The `Session` struct and its serial dispatch loop.

use lift_dispatch::{
    AssignmentOutcome, DispatchEngine, DispatchObserver, DispatchResult, NoopObserver, Request,
};
use lift_estimate::FleetRecommendation;
use lift_fleet::FleetState;

/// Running totals over every request a session has seen.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionStats {
    /// Requests that completed a ride.
    pub served: u64,

    /// Requests rejected for any reason.
    pub rejected: u64,

    /// Sum of estimated arrival times over served requests.
    pub total_wait_secs: f64,

    /// Longest estimated arrival time seen.
    pub longest_wait_secs: f64,

    /// Served requests whose estimated arrival exceeded the max-wait target.
    pub over_target: u64,
}

impl SessionStats {
    /// Mean estimated arrival over served requests, `0.0` if none.
    pub fn mean_wait_secs(&self) -> f64 {
        if self.served == 0 {
            0.0
        } else {
            self.total_wait_secs / self.served as f64
        }
    }

    fn record(&mut self, result: &DispatchResult<AssignmentOutcome>, target_secs: f64) {
        match result {
            Ok(outcome) => {
                let wait = outcome.estimated_arrival_secs;
                self.served += 1;
                self.total_wait_secs += wait;
                self.longest_wait_secs = self.longest_wait_secs.max(wait);
                if wait > target_secs {
                    self.over_target += 1;
                }
            }
            Err(_) => self.rejected += 1,
        }
    }
}

/// One scheduling session: a sized fleet and the engine that dispatches it.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct Session {
    /// The sizing the fleet was built from.  Fixed for the session.
    pub recommendation: FleetRecommendation,

    /// Every car.  Read freely; mutate only through [`dispatch`](Self::dispatch).
    pub(crate) fleet: FleetState,

    pub(crate) engine: DispatchEngine,

    pub(crate) stats: SessionStats,
}

impl Session {
    #[inline]
    pub fn fleet(&self) -> &FleetState {
        &self.fleet
    }

    #[inline]
    pub fn engine(&self) -> &DispatchEngine {
        &self.engine
    }

    #[inline]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Serve one request to completion.  Errors are returned to the caller
    /// and counted; the session stays usable.
    pub fn dispatch(&mut self, request: &Request) -> DispatchResult<AssignmentOutcome> {
        self.dispatch_observed(request, &mut NoopObserver)
    }

    /// [`dispatch`](Self::dispatch) with phase callbacks delivered to `observer`.
    pub fn dispatch_observed<O: DispatchObserver>(
        &mut self,
        request:  &Request,
        observer: &mut O,
    ) -> DispatchResult<AssignmentOutcome> {
        let result = self.engine.assign_observed(&mut self.fleet, request, observer);
        self.stats.record(&result, self.recommendation.max_wait_secs);
        result
    }

    /// Feed `requests` through [`dispatch`](Self::dispatch) in order and
    /// return the stats afterwards.
    pub fn run<I>(&mut self, requests: I) -> &SessionStats
    where
        I: IntoIterator<Item = Request>,
    {
        for request in requests {
            let _ = self.dispatch(&request);
        }
        &self.stats
    }
}
