//! CSV solution export.

use std::path::Path;

use vrp_model::Instance;
use vrp_search::Solution;

use crate::error::IoResult;

/// Write one row per visited customer: route index, position in the route,
/// node id, coordinates, deterministic arrival time, closing time, delay.
pub fn write_solution_csv(path: &Path, instance: &Instance, solution: &Solution) -> IoResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["route", "seq", "node", "x", "y", "arrival", "close", "delay"])?;

    for (route_index, route) in solution.routes().iter().enumerate() {
        let mut arrival = 0.0;
        let mut seq = 0;
        for &id in route.edges() {
            let edge = instance.edge(id);
            arrival += edge.travel_time;
            let node = instance.node(edge.end);
            if node.is_depot() {
                continue;
            }
            let delay = (arrival - node.close).max(0.0);
            writer.write_record(&[
                route_index.to_string(),
                seq.to_string(),
                node.id.0.to_string(),
                node.position.x.to_string(),
                node.position.y.to_string(),
                arrival.to_string(),
                node.close.to_string(),
                delay.to_string(),
            ])?;
            seq += 1;
        }
    }

    writer.flush()?;
    Ok(())
}
