//! small — smallest example for the vrp simheuristic solver.
//!
//! Solves a synthetic 10-customer instance with all three driver variants
//! and prints a comparison.  Swap the node table for a benchmark file read
//! via `vrp-io` to run at full scale.

use anyhow::Result;

use vrp_core::{NodeId, Point, SearchConfig};
use vrp_model::{Instance, Node};
use vrp_search::{NoopObserver, Search, SearchMode};

// ── Constants ─────────────────────────────────────────────────────────────────

const N_VEHICLES:      usize = 3;
const MAX_TRAVEL_TIME: f64   = 150.0;
const MAXITER:         u64   = 500;
const SEED_SEARCH:     u64   = 42;
const SEED_SIM:        u64   = 43;

/// (x, y, demand, close) per customer; windows are already tight enough to
/// make the stochastic scoring matter.
const CUSTOMERS: [(i64, i64, i64, f64); 10] = [
    (12, 4, 10, 30.0),
    (15, -3, 20, 40.0),
    (9, 11, 15, 35.0),
    (-4, 13, 10, 45.0),
    (-12, 6, 25, 50.0),
    (-14, -5, 10, 55.0),
    (-6, -12, 20, 45.0),
    (3, -15, 15, 60.0),
    (10, -10, 10, 50.0),
    (-2, 8, 5, 40.0),
];

fn build_instance() -> Result<Instance> {
    let total_demand: i64 = CUSTOMERS.iter().map(|&(_, _, d, _)| d).sum();
    let mut nodes = vec![Node::new(NodeId(0), Point::new(0, 0), 0.0, f64::INFINITY, 0, 0.0)];
    for (i, &(x, y, demand, close)) in CUSTOMERS.iter().enumerate() {
        nodes.push(Node::new(
            NodeId(i as u32 + 1),
            Point::new(x, y),
            0.0,
            close,
            demand,
            demand as f64 / total_demand as f64,
        ));
    }
    Ok(Instance::build(nodes, 0.25)?)
}

fn main() -> Result<()> {
    let instance = build_instance()?;
    println!(
        "instance: {} customers, {} savings arcs\n",
        instance.customer_count(),
        instance.savings().len()
    );

    let mut config = SearchConfig::new(N_VEHICLES, MAX_TRAVEL_TIME);
    config.maxiter = MAXITER;
    config.seed_search = SEED_SEARCH;
    config.seed_sim = SEED_SIM;

    for (label, mode) in [
        ("heuristic", SearchMode::Heuristic),
        ("bra", SearchMode::BiasedRandom),
        ("simheuristic", SearchMode::Simheuristic),
    ] {
        let mut search = Search::new(&instance, config.clone())?;
        let outcome = search.run(mode, &mut NoopObserver)?;

        let deterministic = outcome.deterministic_best.deterministic_cost();
        match &outcome.stochastic_best {
            Some(stochastic) => println!(
                "{label:>12}: deterministic {deterministic:>8.2}  stochastic {:>8.2}  \
                 ({} iterations, gamma {:.0}, {:.2?})",
                stochastic.stochastic_cost(),
                outcome.iterations,
                outcome.gamma,
                outcome.elapsed,
            ),
            None => println!(
                "{label:>12}: deterministic {deterministic:>8.2}  \
                 ({} iterations, gamma {:.0}, {:.2?})",
                outcome.iterations,
                outcome.gamma,
                outcome.elapsed,
            ),
        }

        for (i, route) in outcome.deterministic_best.routes().iter().enumerate() {
            let stops: Vec<String> = route
                .edges()
                .iter()
                .map(|&id| instance.edge(id).end)
                .filter(|&n| n != NodeId::DEPOT)
                .map(|n| n.0.to_string())
                .collect();
            println!(
                "              route {i}: {} (travel time {:.0})",
                stops.join(" -> "),
                route.travel_time()
            );
        }
        println!();
    }

    Ok(())
}
