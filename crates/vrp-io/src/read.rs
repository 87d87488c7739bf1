//! Instance file parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use vrp_core::{NodeId, Point};
use vrp_model::{Instance, Node};

use crate::error::{IoError, IoResult};

/// Read a five-column instance file into a node list.
///
/// Row order assigns node ids; the first row is the depot.  Coordinates and
/// demand are parsed as floats and truncated to integers (benchmark files
/// write `12.0`); `open`/`close` stay real-valued, and `inf` is accepted.
/// The depot's closing time is forced to +∞.  Importance is derived from the
/// demand column: `demand_i / Σ demand`.
pub fn read_nodes(path: &Path) -> IoResult<Vec<Node>> {
    let file = File::open(path)?;
    let mut nodes = Vec::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() < 5 {
            return Err(IoError::Parse {
                line: index + 1,
                message: format!("expected `x y demand open close`, found {} columns", tokens.len()),
            });
        }

        let id = NodeId(nodes.len() as u32);
        let x = parse_int(tokens[0], index, "x")?;
        let y = parse_int(tokens[1], index, "y")?;
        let demand = parse_int(tokens[2], index, "demand")?;
        let open = parse_float(tokens[3], index, "open")?;
        let close = parse_float(tokens[4], index, "close")?;
        nodes.push(Node::new(id, Point::new(x, y), open, close, demand, 0.0));
    }

    if nodes.is_empty() {
        return Err(IoError::Parse { line: 0, message: "instance file is empty".into() });
    }

    nodes[0].close = f64::INFINITY;
    derive_importance(&mut nodes);
    Ok(nodes)
}

/// Read an instance file and build the full arc set in one go.
pub fn load_instance(path: &Path, pvariance: f64) -> IoResult<Instance> {
    let nodes = read_nodes(path)?;
    Ok(Instance::build(nodes, pvariance)?)
}

/// `importance_i = demand_i / Σ demand`, summed over every row (the depot's
/// zero demand included).
pub(crate) fn derive_importance(nodes: &mut [Node]) {
    let total: i64 = nodes.iter().map(|n| n.demand).sum();
    if total > 0 {
        for node in nodes.iter_mut() {
            node.importance = node.demand as f64 / total as f64;
        }
    }
}

pub(crate) fn parse_int(token: &str, index: usize, column: &str) -> IoResult<i64> {
    let value: f64 = token.parse().map_err(|_| IoError::Parse {
        line: index + 1,
        message: format!("invalid {column} value {token:?}"),
    })?;
    Ok(value.trunc() as i64)
}

pub(crate) fn parse_float(token: &str, index: usize, column: &str) -> IoResult<f64> {
    token.parse().map_err(|_| IoError::Parse {
        line: index + 1,
        message: format!("invalid {column} value {token:?}"),
    })
}
