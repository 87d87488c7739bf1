//! Merge feasibility and orientation selection.
//!
//! For each savings arc drawn by the sampler, the planner decides whether
//! the two routes holding its endpoints may be joined, and in which
//! direction.  Both orientations of the candidate joint route are scored
//! with the deterministic evaluator; the lower-delay one wins, and the
//! planner reverses routes in the arena so that the caller can apply
//! [`Route::merge`] directly.
//!
//! [`Route::merge`]: crate::Route::merge

use std::mem;

use vrp_core::{EdgeId, RouteId};
use vrp_model::{Instance, evaluate_edges};

use crate::state::{RouteArena, WorkingState};

/// A merge the planner has accepted and oriented.
///
/// `edge` runs from the tail customer of `first` to the head customer of
/// `second`; both routes have already been reversed as needed.
#[derive(Clone, Copy, Debug)]
pub struct PreparedMerge {
    pub edge: EdgeId,
    pub first: RouteId,
    pub second: RouteId,
}

/// Check whether `edge` may merge the routes holding its endpoints, and if
/// so, orient everything for the merge.
///
/// Rejections (`None`):
/// - both endpoints sit in the same route;
/// - either endpoint is interior (not depot-adjacent) in its route;
/// - the projected travel time `tt₁ + tt₂ − saving` exceeds `max_travel_time`;
/// - the cumulated delay of **both** orientations exceeds the budget `gamma`.
///
/// On a tie between orientations the forward one wins.
pub fn prepare_merge(
    instance: &Instance,
    edge: EdgeId,
    first: RouteId,
    second: RouteId,
    arena: &mut RouteArena,
    state: &WorkingState,
    gamma: f64,
    max_travel_time: f64,
) -> Option<PreparedMerge> {
    if first == second {
        return None;
    }

    let e = instance.edge(edge);
    if state.is_interior(e.origin) || state.is_interior(e.end) {
        return None;
    }

    let r1 = arena.get(first);
    let r2 = arena.get(second);
    if r1.travel_time() + r2.travel_time() - e.saving > max_travel_time {
        return None;
    }

    // Lay out both routes in both directions.  When the joining endpoint
    // sits at the head of its route, the route must run inverted for that
    // endpoint to reach the joint, so the two layouts swap roles.
    let mut fwd1: Vec<EdgeId> = r1.edges().to_vec();
    let mut rev1 = inverted(instance, r1.edges());
    let origin_at_head = instance.edge(r1.edges()[0]).end == e.origin;
    if origin_at_head {
        mem::swap(&mut fwd1, &mut rev1);
    }

    let mut fwd2: Vec<EdgeId> = r2.edges().to_vec();
    let mut rev2 = inverted(instance, r2.edges());
    let end_at_tail = instance.edge(*r2.edges().last().expect("empty route")).origin == e.end;
    if end_at_tail {
        mem::swap(&mut fwd2, &mut rev2);
    }

    // Forward: r1 minus its trailing depot arc, the edge, r2 minus its
    // leading depot arc.  Backward: the same construction fully inverted.
    let forward = fwd1[..fwd1.len() - 1]
        .iter()
        .copied()
        .chain(std::iter::once(edge))
        .chain(fwd2[1..].iter().copied());
    let (_, delay_fwd) = evaluate_edges(instance, forward, 0.0, 0.0);

    let backward = rev2[..rev2.len() - 1]
        .iter()
        .copied()
        .chain(std::iter::once(e.inverse))
        .chain(rev1[1..].iter().copied());
    let (_, delay_bwd) = evaluate_edges(instance, backward, 0.0, 0.0);

    if delay_fwd > gamma && delay_bwd > gamma {
        return None;
    }

    if delay_fwd <= delay_bwd {
        if origin_at_head {
            arena.get_mut(first).reverse(instance);
        }
        if end_at_tail {
            arena.get_mut(second).reverse(instance);
        }
        Some(PreparedMerge { edge, first, second })
    } else {
        let inverse = instance.edge(e.inverse);
        if instance.edge(arena.get(second).edges()[0]).end == inverse.origin {
            arena.get_mut(second).reverse(instance);
        }
        let r1_tail = *arena.get(first).edges().last().expect("empty route");
        if instance.edge(r1_tail).origin == inverse.end {
            arena.get_mut(first).reverse(instance);
        }
        Some(PreparedMerge { edge: e.inverse, first: second, second: first })
    }
}

/// The inverse arcs of a sequence, in reverse order.
fn inverted(instance: &Instance, edges: &[EdgeId]) -> Vec<EdgeId> {
    edges.iter().rev().map(|&id| instance.edge(id).inverse).collect()
}
