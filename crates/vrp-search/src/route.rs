//! The route container: an ordered edge sequence with merge and reverse.

use thiserror::Error;
use vrp_core::{EdgeId, NodeId, RouteId, SimRng};
use vrp_model::{Instance, evaluate_edges};

use crate::sim::simulate_edges;
use crate::state::WorkingState;

/// A merge was requested on routes that were not prepared for it: the
/// connecting edge must leave the customer end of the first route's trailing
/// depot arc and enter the customer end of the second route's leading depot
/// arc.
#[derive(Debug, Error)]
#[error("routes not prepared for merging through arc ({origin} → {end})")]
pub struct MergeError {
    pub origin: NodeId,
    pub end: NodeId,
}

/// One vehicle's tour: depot → customers → depot as a chained edge sequence.
///
/// Costs are cached with explicit validity flags.  Reading a cost before the
/// corresponding `evaluate`/`simulate` call is a programming error and
/// panics.
#[derive(Clone, Debug)]
pub struct Route {
    edges: Vec<EdgeId>,
    travel_time: f64,
    deterministic_cost: f64,
    evaluated: bool,
    stochastic_cost: f64,
    simulated: bool,
    degenerate: bool,
}

impl Route {
    pub fn new(edges: Vec<EdgeId>) -> Self {
        Self {
            edges,
            travel_time: 0.0,
            deterministic_cost: 0.0,
            evaluated: false,
            stochastic_cost: 0.0,
            simulated: false,
            degenerate: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Cumulative deterministic travel time, valid after [`evaluate`].
    ///
    /// [`evaluate`]: Route::evaluate
    #[inline]
    pub fn travel_time(&self) -> f64 {
        self.travel_time
    }

    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    #[inline]
    pub fn is_simulated(&self) -> bool {
        self.simulated
    }

    /// True when every simulation replication blew past the travel-time
    /// ceiling; the stochastic cost is then the +∞ sentinel.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// # Panics
    /// Panics when the route has not been evaluated.
    #[inline]
    pub fn deterministic_cost(&self) -> f64 {
        assert!(self.evaluated, "route cost read before evaluation");
        self.deterministic_cost
    }

    /// # Panics
    /// Panics when the route has not been simulated.
    #[inline]
    pub fn stochastic_cost(&self) -> f64 {
        assert!(self.simulated, "route cost read before simulation");
        self.stochastic_cost
    }

    // ── Scoring ───────────────────────────────────────────────────────────

    /// Deterministic evaluation; refreshes the travel-time and cost caches.
    pub fn evaluate(&mut self, instance: &Instance) -> (f64, f64) {
        let (tt, cost) = evaluate_edges(instance, self.edges.iter().copied(), 0.0, 0.0);
        self.travel_time = tt;
        self.deterministic_cost = cost;
        self.evaluated = true;
        (tt, cost)
    }

    /// Monte-Carlo estimation of the delay cost under travel-time noise.
    ///
    /// Trials whose cumulative travel time exceeds `max_travel_time` are
    /// discarded; the cache holds the mean over completed trials.  When every
    /// trial is discarded the route is flagged degenerate and the cache gets
    /// a +∞ sentinel, which demotes it in every comparison.
    pub fn simulate(
        &mut self,
        instance: &Instance,
        replications: u32,
        max_travel_time: f64,
        rng: &mut SimRng,
    ) -> f64 {
        match simulate_edges(instance, &self.edges, replications, max_travel_time, rng) {
            Some(cost) => {
                self.stochastic_cost = cost;
                self.degenerate = false;
            }
            None => {
                self.stochastic_cost = f64::INFINITY;
                self.degenerate = true;
            }
        }
        self.simulated = true;
        self.stochastic_cost
    }

    // ── Structure ─────────────────────────────────────────────────────────

    /// Reverse the route in place: the edge list becomes the inverses in
    /// reverse order.  A route of at most two edges is a palindrome (depot →
    /// customer → depot), so its caches stay valid; longer routes are
    /// re-evaluated.
    pub fn reverse(&mut self, instance: &Instance) {
        self.edges = self.edges.iter().rev().map(|&id| instance.edge(id).inverse).collect();
        if self.edges.len() > 2 {
            self.evaluate(instance);
        }
    }

    /// In-place join of two routes through the connecting edge `by`.
    ///
    /// Drops this route's trailing depot arc and `other`'s leading depot arc,
    /// splices `by` plus the remainder of `other`, marks the joined endpoints
    /// interior where they lose depot adjacency, retargets the route
    /// back-pointer of every node of the appended segment to `self_id`, and
    /// refreshes the caches by evaluating only the appended suffix.
    ///
    /// The caller must have oriented both routes (see the merge planner) so
    /// that `by.origin` is the customer end of this route's trailing depot
    /// arc and `by.end` the customer end of `other`'s leading depot arc;
    /// anything else is a [`MergeError`].
    pub fn merge(
        &mut self,
        mut other: Route,
        by: EdgeId,
        instance: &Instance,
        state: &mut WorkingState,
        self_id: RouteId,
    ) -> Result<(), MergeError> {
        let by_edge = instance.edge(by);
        let tail = *self.edges.last().expect("merge on an empty route");
        let head = *other.edges.first().expect("merge with an empty route");
        if by_edge.origin != instance.edge(tail).origin || by_edge.end != instance.edge(head).end {
            return Err(MergeError { origin: by_edge.origin, end: by_edge.end });
        }

        // Drop this route's trailing depot arc.
        self.travel_time -= instance.edge(tail).travel_time;
        self.edges.pop();
        if self.edges.len() > 1 {
            state.set_interior(by_edge.origin, true);
        }

        // Drop the other route's leading depot arc.
        other.edges.remove(0);
        if other.edges.len() > 1 {
            state.set_interior(by_edge.end, true);
        }

        // Re-score only the appended suffix, resuming from the cached
        // accumulators.
        let suffix = std::iter::once(by).chain(other.edges.iter().copied());
        let (tt, cost) = evaluate_edges(instance, suffix, self.travel_time, self.deterministic_cost);
        self.travel_time = tt;
        self.deterministic_cost = cost;

        self.edges.push(by);
        self.edges.extend_from_slice(&other.edges);

        // Retarget the back-pointers of the absorbed segment (the final edge
        // ends at the depot, which carries no state).
        state.set_route(by_edge.end, self_id);
        for &id in &other.edges[..other.edges.len().saturating_sub(1)] {
            state.set_route(instance.edge(id).end, self_id);
        }

        Ok(())
    }
}
