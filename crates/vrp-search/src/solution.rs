//! A complete solution: one route per vehicle.

use vrp_core::SimRng;
use vrp_model::Instance;

use crate::Route;

/// A tuple of routes covering every customer exactly once.
///
/// Carries its own deterministic/stochastic cost caches with validity flags,
/// mirroring [`Route`].  Reading a cost before scoring panics.
#[derive(Clone, Debug)]
pub struct Solution {
    routes: Vec<Route>,
    deterministic_cost: f64,
    evaluated: bool,
    stochastic_cost: f64,
    simulated: bool,
}

impl Solution {
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            routes,
            deterministic_cost: 0.0,
            evaluated: false,
            stochastic_cost: 0.0,
            simulated: false,
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[inline]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    #[inline]
    pub fn is_simulated(&self) -> bool {
        self.simulated
    }

    /// True when any route's simulation discarded all of its replications.
    pub fn is_degenerate(&self) -> bool {
        self.routes.iter().any(Route::is_degenerate)
    }

    /// # Panics
    /// Panics when the solution has not been evaluated.
    #[inline]
    pub fn deterministic_cost(&self) -> f64 {
        assert!(self.evaluated, "solution cost read before evaluation");
        self.deterministic_cost
    }

    /// # Panics
    /// Panics when the solution has not been simulated.
    #[inline]
    pub fn stochastic_cost(&self) -> f64 {
        assert!(self.simulated, "solution cost read before simulation");
        self.stochastic_cost
    }

    /// Sum of the routes' deterministic costs; evaluates any route whose
    /// cache is stale.
    pub fn evaluate(&mut self, instance: &Instance) -> f64 {
        for route in &mut self.routes {
            if !route.is_evaluated() {
                route.evaluate(instance);
            }
        }
        self.deterministic_cost = self.routes.iter().map(Route::deterministic_cost).sum();
        self.evaluated = true;
        self.deterministic_cost
    }

    /// Sum of the routes' Monte-Carlo delay costs.  A degenerate route
    /// contributes the +∞ sentinel, which demotes the whole solution.
    pub fn simulate(
        &mut self,
        instance: &Instance,
        replications: u32,
        max_travel_time: f64,
        rng: &mut SimRng,
    ) -> f64 {
        self.stochastic_cost = self
            .routes
            .iter_mut()
            .map(|r| r.simulate(instance, replications, max_travel_time, rng))
            .sum();
        self.simulated = true;
        self.stochastic_cost
    }
}
