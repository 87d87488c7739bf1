//! Deterministic RNG wrappers for the two random streams of the solver.
//!
//! # Determinism strategy
//!
//! The solver draws randomness for two unrelated purposes:
//!
//! - **Search** — β draws, quasi-geometric index selection, and the customer
//!   shuffle of the time-window pre-pass ([`SearchRng`]).
//! - **Simulation** — stochastic travel times in the Monte-Carlo route
//!   scorer ([`SimRng`]).
//!
//! Each stream has its own seed, so changing the simulation replication
//! count never perturbs the sequence of constructed solutions and vice
//! versa.  Given both seeds, a full solver run is reproducible bit-for-bit.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── SearchRng ─────────────────────────────────────────────────────────────────

/// RNG for the construction side of the search: β draws, biased index
/// selection, shuffles.
pub struct SearchRng(SmallRng);

impl SearchRng {
    pub fn new(seed: u64) -> Self {
        SearchRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
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

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// RNG for the Monte-Carlo simulator.
///
/// The driver owns one root `SimRng` and threads it through every
/// simulation call.  When the final elite rescoring fans out over worker
/// threads, each worker gets its own stream via [`SimRng::child`] so the
/// results stay independent of scheduling.
pub struct SimRng {
    rng: SmallRng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }

    /// Fork the stream for worker `index`.
    ///
    /// The child seed runs the parent's next draw and the index through a
    /// splitmix64 round, so sibling streams stay uncorrelated however many
    /// are forked.
    pub fn child(&mut self, index: u64) -> SimRng {
        SimRng::new(splitmix64(self.rng.r#gen::<u64>() ^ index))
    }

    /// The raw generator, for `rand_distr` distribution sampling.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.rng
    }

    /// One draw of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.rng.r#gen()
    }
}

/// One round of the splitmix64 mixer.
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}
