//! Search configuration.
//!
//! One struct carries every tunable the solver recognizes.  Applications
//! typically build it from CLI flags (or deserialize it from JSON with the
//! `serde` feature) and pass it to the search driver, which calls
//! [`SearchConfig::validate`] once up front.

use std::time::Duration;

use crate::{VrpError, VrpResult};

/// Bias parameter that makes the quasi-geometric sampler effectively greedy.
pub const BETA_DETERMINISTIC: f64 = 0.999_999_9;

/// Top-level solver configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Upper bound on the number of routes in a feasible solution (K).
    pub n_vehicles: usize,

    /// Per-route travel-time ceiling (T_max).
    pub max_travel_time: f64,

    /// Bounds for the per-iteration β draw of the biased sampler.
    pub beta_range: (f64, f64),

    /// Constructor invocations per search.
    pub maxiter: u64,

    /// Capacity of the elite queue (FIFO eviction).
    pub n_elites: usize,

    /// Replications for the fast in-loop simulation.
    pub sim_trials_inner: u32,

    /// Replications for the final elite rescoring.
    pub sim_trials_final: u32,

    /// Proportional-variance factor: an arc of length d gets variance (p·d)².
    pub pvariance: f64,

    /// γ-escalation step during the feasibility bootstrap.
    pub gamma_step: f64,

    /// Upper bound for the γ escalation; beyond it the instance is reported
    /// infeasible.
    pub gamma_cap: f64,

    /// Seed for the construction-side RNG (β draws, sampler, shuffles).
    pub seed_search: u64,

    /// Seed for the Monte-Carlo simulation RNG.
    pub seed_sim: u64,

    /// Optional wall-clock budget.  Checked between constructions; an
    /// in-flight construction is never interrupted.
    pub deadline: Option<Duration>,
}

impl SearchConfig {
    /// Configuration with stock defaults for everything except the two
    /// quantities that have no sensible default: the fleet size and the
    /// travel-time ceiling.
    pub fn new(n_vehicles: usize, max_travel_time: f64) -> Self {
        Self {
            n_vehicles,
            max_travel_time,
            beta_range: (0.1, 0.3),
            maxiter: 3_000,
            n_elites: 5,
            sim_trials_inner: 50,
            sim_trials_final: 10_000,
            pvariance: 0.25,
            gamma_step: 10.0,
            gamma_cap: 10_000.0,
            seed_search: 42,
            seed_sim: 43,
            deadline: None,
        }
    }

    /// Reject configurations the search cannot run with.
    pub fn validate(&self) -> VrpResult<()> {
        if self.n_vehicles == 0 {
            return Err(VrpError::Config("n_vehicles must be at least 1".into()));
        }
        if !(self.max_travel_time > 0.0) {
            return Err(VrpError::Config(format!(
                "max_travel_time must be positive, got {}",
                self.max_travel_time
            )));
        }
        let (lo, hi) = self.beta_range;
        if !(0.0 < lo && lo <= hi && hi < 1.0) {
            return Err(VrpError::Config(format!(
                "beta_range must satisfy 0 < min <= max < 1, got ({lo}, {hi})"
            )));
        }
        if self.n_elites == 0 {
            return Err(VrpError::Config("n_elites must be at least 1".into()));
        }
        if self.sim_trials_inner == 0 || self.sim_trials_final == 0 {
            return Err(VrpError::Config("simulation trial counts must be at least 1".into()));
        }
        if !(self.pvariance >= 0.0) {
            return Err(VrpError::Config(format!(
                "pvariance must be non-negative, got {}",
                self.pvariance
            )));
        }
        if !(self.gamma_step > 0.0) {
            return Err(VrpError::Config(format!(
                "gamma_step must be positive, got {}",
                self.gamma_step
            )));
        }
        if !(self.gamma_cap >= 0.0) {
            return Err(VrpError::Config(format!(
                "gamma_cap must be non-negative, got {}",
                self.gamma_cap
            )));
        }
        Ok(())
    }
}
