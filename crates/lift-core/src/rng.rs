//! Deterministic, seedable RNG for synthetic rider traffic.
//!
//! The same seed always yields the same request stream, so a batch run can
//! be replayed exactly when a result looks suspicious.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded `SmallRng` wrapper.  Not `Sync`; give each consumer its own.
pub struct LiftRng(SmallRng);

impl LiftRng {
    pub fn new(seed: u64) -> Self {
        LiftRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice, `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
