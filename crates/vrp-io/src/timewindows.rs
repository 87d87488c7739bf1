//! Time-window synthesis for raw instances.
//!
//! Classical CVRP benchmark files carry no time windows.  This pre-pass
//! invents plausible ones: customers are shuffled, partitioned into one
//! cluster per vehicle, each cluster's tour is locally optimized with 2-opt,
//! and every customer's window is centered on its arrival time along the
//! optimized tour.  The file is rewritten in the five-column format that
//! [`read_nodes`](crate::read_nodes) expects.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use vrp_core::{Point, SearchRng};

use crate::error::{IoError, IoResult};
use crate::read::parse_int;

/// Synthesize time windows for a raw `x y demand` instance and rewrite the
/// file as `x y demand open close`.
///
/// `window_width` is the full width W of each window: a customer arrived at
/// time t gets `open = max(t − W/2, 0)` and `close = t + W/2` (integer
/// halving).  The depot row is written with an infinite closing time.
/// Deterministic for a fixed `rng` seed.
pub fn synthesize_time_windows(
    path: &Path,
    n_vehicles: usize,
    window_width: u32,
    rng: &mut SearchRng,
) -> IoResult<()> {
    let (points, demands) = read_raw(path)?;
    let n = points.len();
    if n < 2 {
        return Err(IoError::Parse { line: 0, message: "instance has no customers".into() });
    }

    let dist: Vec<Vec<f64>> =
        (0..n).map(|i| (0..n).map(|j| points[i].distance(points[j])).collect()).collect();

    let mut customers: Vec<usize> = (1..n).collect();
    rng.shuffle(&mut customers);
    let clusters = split_clusters(&customers, n_vehicles);

    let half = f64::from(window_width / 2);
    let mut open = vec![0.0; n];
    let mut close = vec![0.0; n];

    for cluster in &clusters {
        let tour = two_opt(cluster.clone(), &dist);

        let mut arrival = 0.0;
        let mut current = 0;
        for &node in &tour {
            arrival += dist[current][node];
            open[node] = (arrival - half).max(0.0);
            close[node] = arrival + half;
            current = node;
        }
    }

    close[0] = f64::INFINITY;
    let mut out = File::create(path)?;
    for i in 0..n {
        writeln!(
            out,
            "{}  {}  {}  {}  {}",
            points[i].x, points[i].y, demands[i], open[i], close[i]
        )?;
    }
    Ok(())
}

/// Read the first three columns of every row.
fn read_raw(path: &Path) -> IoResult<(Vec<Point>, Vec<i64>)> {
    let file = File::open(path)?;
    let mut points = Vec::new();
    let mut demands = Vec::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() < 3 {
            return Err(IoError::Parse {
                line: index + 1,
                message: format!("expected `x y demand`, found {} columns", tokens.len()),
            });
        }
        points.push(Point::new(
            parse_int(tokens[0], index, "x")?,
            parse_int(tokens[1], index, "y")?,
        ));
        demands.push(parse_int(tokens[2], index, "demand")?);
    }

    if points.is_empty() {
        return Err(IoError::Parse { line: 0, message: "instance file is empty".into() });
    }
    Ok((points, demands))
}

/// Partition into `k` contiguous clusters; the first `len mod k` clusters
/// get one extra element.
fn split_clusters(customers: &[usize], k: usize) -> Vec<Vec<usize>> {
    let base = customers.len() / k;
    let extra = customers.len() % k;
    let mut clusters = Vec::with_capacity(k);
    let mut offset = 0;
    for i in 0..k {
        let size = base + usize::from(i < extra);
        clusters.push(customers[offset..offset + size].to_vec());
        offset += size;
    }
    clusters
}

/// 2-opt to a local optimum: scan every cut pair, apply the first improving
/// reversal, restart the scan, stop when a full scan finds none.
fn two_opt(mut tour: Vec<usize>, dist: &[Vec<f64>]) -> Vec<usize> {
    let cuts: Vec<(usize, usize)> = (0..tour.len())
        .flat_map(|a| ((a + 1)..tour.len()).map(move |b| (a, b)))
        .collect();

    let mut best_cost = closed_tour_cost(&tour, dist);
    let mut i = 0;
    while i < cuts.len() {
        let (a, b) = cuts[i];
        let mut candidate = tour.clone();
        candidate[a..b].reverse();
        let cost = closed_tour_cost(&candidate, dist);
        if cost < best_cost {
            tour = candidate;
            best_cost = cost;
            i = 0;
            continue;
        }
        i += 1;
    }
    tour
}

/// Cost of the closed tour depot → nodes → depot.
fn closed_tour_cost(tour: &[usize], dist: &[Vec<f64>]) -> f64 {
    let mut cost = 0.0;
    let mut current = 0;
    for &node in tour {
        cost += dist[current][node];
        current = node;
    }
    cost + dist[current][0]
}
