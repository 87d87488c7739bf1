//! One full solution construction from the savings list.

use vrp_core::SearchRng;
use vrp_model::Instance;

use crate::planner::prepare_merge;
use crate::sampler::biased_index;
use crate::state::{RouteArena, WorkingState};
use crate::{Route, Solution};

/// Build one solution with the biased-randomized Clarke–Wright heuristic.
///
/// Starts from one evaluated singleton route per customer, then repeatedly
/// draws an arc from a working copy of the savings list (β-biased toward the
/// highest savings), asks the merge planner for a feasible orientation, and
/// applies the merge.  The construction succeeds the moment at most
/// `n_vehicles` routes remain; if the savings list runs dry first, no
/// feasible solution exists for this (γ, β) draw and `None` is returned.
///
/// Resets `state` on entry, so the same `WorkingState` can be threaded
/// through every construction of a search.
pub fn build_solution(
    instance: &Instance,
    state: &mut WorkingState,
    n_vehicles: usize,
    gamma: f64,
    max_travel_time: f64,
    beta: f64,
    rng: &mut SearchRng,
) -> Option<Solution> {
    state.reset();
    let mut arena = RouteArena::new();

    for node in instance.customers() {
        let mut route = Route::new(vec![node.from_depot, node.to_depot]);
        route.evaluate(instance);
        let id = arena.insert(route);
        state.set_route(node.id, id);
    }

    // Few enough customers for the fleet already.
    if arena.live() <= n_vehicles {
        return Some(arena.into_solution());
    }

    let mut savings = instance.savings().to_vec();
    while !savings.is_empty() {
        let index = biased_index(beta, savings.len(), rng);
        let edge = savings.remove(index);
        let e = instance.edge(edge);

        let first = state.route_of(e.origin);
        let second = state.route_of(e.end);

        if let Some(plan) = prepare_merge(
            instance,
            edge,
            first,
            second,
            &mut arena,
            state,
            gamma,
            max_travel_time,
        ) {
            let absorbed = arena.take(plan.second);
            arena
                .get_mut(plan.first)
                .merge(absorbed, plan.edge, instance, state, plan.first)
                .expect("merge planner prepared an unmergeable orientation");
        }

        if arena.live() <= n_vehicles {
            return Some(arena.into_solution());
        }
    }

    None
}
