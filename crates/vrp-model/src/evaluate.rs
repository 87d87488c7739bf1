//! Deterministic route evaluation.

use vrp_core::EdgeId;

use crate::{Instance, penalty::predict};

/// Traverse `edges` in order, accumulating travel time and soft delay cost.
///
/// `start_time`/`start_cost` seed the accumulators so a merge can re-score
/// only the suffix it appended.  Total and side-effect-free: the result is a
/// function of the arguments alone.
pub fn evaluate_edges<I>(instance: &Instance, edges: I, start_time: f64, start_cost: f64) -> (f64, f64)
where
    I: IntoIterator<Item = EdgeId>,
{
    let mut travel_time = start_time;
    let mut delay_cost = start_cost;
    for id in edges {
        let edge = instance.edge(id);
        let node = instance.node(edge.end);
        travel_time += edge.travel_time;
        let delay = (travel_time - node.close).max(0.0);
        delay_cost += predict(delay, node.importance);
    }
    (travel_time, delay_cost)
}
