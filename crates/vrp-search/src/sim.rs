//! Monte-Carlo estimation of route delay cost under travel-time noise.

use vrp_core::{EdgeId, SimRng};
use vrp_model::{Instance, predict};

/// Run `replications` independent trials over the edge sequence.
///
/// Each trial draws stochastic travel times arc by arc; a trial whose
/// cumulative travel time exceeds `max_travel_time` is discarded and does
/// not enter the mean.  Returns the arithmetic mean of the completed trials'
/// delay costs, or `None` when every trial was discarded — the route is then
/// effectively infeasible under noise and the caller records a sentinel.
pub fn simulate_edges(
    instance: &Instance,
    edges: &[EdgeId],
    replications: u32,
    max_travel_time: f64,
    rng: &mut SimRng,
) -> Option<f64> {
    let mut completed = 0u32;
    let mut total_cost = 0.0;

    for _ in 0..replications {
        let mut travel_time = 0.0;
        let mut delay_cost = 0.0;
        let mut exceeded = false;

        for &id in edges {
            let edge = instance.edge(id);
            travel_time += edge.stochastic_travel_time(rng);
            if travel_time > max_travel_time {
                exceeded = true;
                break;
            }
            let node = instance.node(edge.end);
            let delay = (travel_time - node.close).max(0.0);
            delay_cost += predict(delay, node.importance);
        }

        if !exceeded {
            completed += 1;
            total_cost += delay_cost;
        }
    }

    (completed > 0).then(|| total_cost / f64::from(completed))
}
