//! Unit tests for the instance model and cost kernel.

#[cfg(test)]
mod helpers {
    use vrp_core::{NodeId, Point};

    use crate::{Instance, Node};

    /// Depot at the origin plus customers at the given coordinates, all with
    /// unit demand and no effective time window (close = +∞).
    pub fn open_instance(customers: &[(i64, i64)]) -> Instance {
        let mut nodes = vec![Node::new(NodeId(0), Point::new(0, 0), 0.0, f64::INFINITY, 0, 0.0)];
        let importance = 1.0 / customers.len() as f64;
        for (i, &(x, y)) in customers.iter().enumerate() {
            nodes.push(Node::new(
                NodeId(i as u32 + 1),
                Point::new(x, y),
                0.0,
                f64::INFINITY,
                1,
                importance,
            ));
        }
        Instance::build(nodes, 0.25).unwrap()
    }
}

#[cfg(test)]
mod instance {
    use vrp_core::{NodeId, Point};

    use super::helpers::open_instance;
    use crate::{Instance, Node};

    #[test]
    fn arc_counts() {
        // n customers → 2n depot arcs + n(n-1) pair arcs.
        let inst = open_instance(&[(1, 0), (2, 0), (3, 0)]);
        assert_eq!(inst.customer_count(), 3);
        assert_eq!(inst.edge_count(), 2 * 3 + 3 * 2);
        // one savings representative per unordered pair
        assert_eq!(inst.savings().len(), 3);
    }

    #[test]
    fn inverse_edge_involution() {
        let inst = open_instance(&[(3, 4), (6, 0)]);
        for id in 0..inst.edge_count() {
            let e = inst.edge(vrp_core::EdgeId(id as u32));
            let inv = inst.edge(e.inverse);
            assert_eq!(inv.inverse, vrp_core::EdgeId(id as u32));
            assert_eq!(e.travel_time, inv.travel_time);
            assert_eq!(e.variance, inv.variance);
            assert_eq!(e.saving, inv.saving);
            assert_eq!(e.origin, inv.end);
            assert_eq!(e.end, inv.origin);
        }
    }

    #[test]
    fn saving_identity() {
        let inst = open_instance(&[(3, 4), (0, 7), (-5, 0)]);
        let depot = inst.node(NodeId(0)).position;
        for &id in inst.savings() {
            let e = inst.edge(id);
            let i = inst.node(e.origin).position;
            let j = inst.node(e.end).position;
            let expected = i.distance(depot) + depot.distance(j) - i.distance(j);
            assert_eq!(e.saving, expected);
        }
    }

    #[test]
    fn savings_sorted_descending() {
        let inst = open_instance(&[(10, 0), (11, 0), (-10, 0), (0, 10)]);
        let list = inst.savings();
        for pair in list.windows(2) {
            assert!(inst.edge(pair[0]).saving >= inst.edge(pair[1]).saving);
        }
        // (10,0)-(11,0) are adjacent and far from the depot — highest saving.
        let top = inst.edge(list[0]);
        let ends = [top.origin.0, top.end.0];
        assert!(ends.contains(&1) && ends.contains(&2), "top saving should join customers 1 and 2");
    }

    #[test]
    fn depot_arcs_wired_per_customer() {
        let inst = open_instance(&[(3, 4)]);
        let customer = inst.node(NodeId(1));
        let dn = inst.edge(customer.from_depot);
        let nd = inst.edge(customer.to_depot);
        assert_eq!(dn.origin, NodeId(0));
        assert_eq!(dn.end, NodeId(1));
        assert_eq!(nd.origin, NodeId(1));
        assert_eq!(nd.end, NodeId(0));
        assert_eq!(dn.inverse, customer.to_depot);
        assert_eq!(nd.inverse, customer.from_depot);
        assert_eq!(dn.travel_time, 5.0);
    }

    #[test]
    fn variance_is_squared_proportional_distance() {
        let inst = open_instance(&[(3, 4)]);
        let dn = inst.edge(inst.node(NodeId(1)).from_depot);
        assert_eq!(dn.variance, (0.25 * 5.0_f64).powi(2));
    }

    #[test]
    fn depot_close_forced_to_infinity() {
        let nodes = vec![
            Node::new(NodeId(0), Point::new(0, 0), 0.0, 100.0, 0, 0.0),
            Node::new(NodeId(1), Point::new(1, 0), 0.0, 50.0, 1, 1.0),
        ];
        let inst = Instance::build(nodes, 0.25).unwrap();
        assert_eq!(inst.node(NodeId(0)).close, f64::INFINITY);
        assert_eq!(inst.node(NodeId(1)).close, 50.0);
    }

    #[test]
    fn rejects_empty_and_misnumbered() {
        assert!(Instance::build(vec![], 0.25).is_err());
        let nodes = vec![Node::new(NodeId(3), Point::new(0, 0), 0.0, 0.0, 0, 0.0)];
        assert!(Instance::build(nodes, 0.25).is_err());
    }
}

#[cfg(test)]
mod penalty {
    use crate::predict;

    #[test]
    fn on_time_is_free() {
        assert_eq!(predict(0.0, 0.5), 0.0);
        assert_eq!(predict(-3.0, 1.0), 0.0);
    }

    #[test]
    fn reference_coefficients() {
        // 5.42 + 0.98·delay + 452.25·importance
        let cost = predict(10.0, 0.2);
        assert!((cost - (5.42 + 9.8 + 90.45)).abs() < 1e-9);
    }

    #[test]
    fn memo_returns_identical_values() {
        let a = predict(7.25, 0.125);
        let b = predict(7.25, 0.125);
        assert_eq!(a, b);
        // hammer the cache past its capacity, then re-query
        for i in 0..1000 {
            predict(i as f64 + 0.5, 0.001);
        }
        assert_eq!(predict(7.25, 0.125), a);
    }
}

#[cfg(test)]
mod edge {
    use vrp_core::{NodeId, SimRng};

    use crate::Edge;

    #[test]
    fn zero_travel_time_is_noiseless() {
        let e = Edge::new(NodeId(1), NodeId(2), 0.0, 0.0).unwrap();
        let mut rng = SimRng::new(1);
        for _ in 0..100 {
            assert_eq!(e.stochastic_travel_time(&mut rng), 0.0);
        }
    }

    #[test]
    fn samples_are_positive_and_seeded() {
        let e = Edge::new(NodeId(1), NodeId(2), 10.0, 6.25).unwrap();
        let mut a = SimRng::new(5);
        let mut b = SimRng::new(5);
        for _ in 0..100 {
            let s = e.stochastic_travel_time(&mut a);
            assert!(s > 0.0);
            assert_eq!(s, e.stochastic_travel_time(&mut b));
        }
    }

    #[test]
    fn noise_concentrates_on_the_deterministic_travel_time() {
        // m = 10, v = 1: the empirical mode of the travel-time noise must
        // sit within ±0.3 of the deterministic time
        let e = Edge::new(NodeId(1), NodeId(2), 10.0, 1.0).unwrap();
        let mut rng = SimRng::new(2024);

        let mut histogram = [0u32; 100]; // 0.1-wide bins over [5, 15)
        let mut sum = 0.0;
        let n = 1_000_000;
        for _ in 0..n {
            let s = e.stochastic_travel_time(&mut rng);
            sum += s;
            let bin = ((s - 5.0) / 0.1).floor();
            if (0.0..100.0).contains(&bin) {
                histogram[bin as usize] += 1;
            }
        }

        let (mode_bin, _) =
            histogram.iter().enumerate().max_by_key(|&(_, &count)| count).unwrap();
        let mode = 5.0 + (mode_bin as f64 + 0.5) * 0.1;
        assert!((mode - 10.0).abs() <= 0.3, "empirical mode {mode}");
        assert!((sum / n as f64 - 10.0).abs() < 0.05, "empirical mean {}", sum / n as f64);
    }
}

#[cfg(test)]
mod evaluate {
    use vrp_core::{NodeId, Point};

    use super::helpers::open_instance;
    use crate::{Instance, Node, evaluate_edges, predict};

    #[test]
    fn no_delay_when_windows_open() {
        let inst = open_instance(&[(3, 4)]);
        let c = inst.node(NodeId(1));
        let (tt, cost) = evaluate_edges(&inst, [c.from_depot, c.to_depot], 0.0, 0.0);
        assert_eq!(tt, 10.0);
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn delay_accumulates_per_visit() {
        // customer at distance 5 closing at 3 → delay 2 on arrival
        let nodes = vec![
            Node::new(NodeId(0), Point::new(0, 0), 0.0, f64::INFINITY, 0, 0.0),
            Node::new(NodeId(1), Point::new(3, 4), 0.0, 3.0, 1, 1.0),
        ];
        let inst = Instance::build(nodes, 0.25).unwrap();
        let c = inst.node(NodeId(1));
        let (tt, cost) = evaluate_edges(&inst, [c.from_depot, c.to_depot], 0.0, 0.0);
        assert_eq!(tt, 10.0);
        assert_eq!(cost, predict(2.0, 1.0));
    }

    #[test]
    fn seeded_accumulators_resume() {
        let inst = open_instance(&[(3, 4)]);
        let c = inst.node(NodeId(1));
        let (tt, cost) = evaluate_edges(&inst, [c.to_depot], 5.0, 1.5);
        assert_eq!(tt, 10.0);
        assert_eq!(cost, 1.5);
    }

    #[test]
    fn purity() {
        let inst = open_instance(&[(3, 4), (6, 8)]);
        let c = inst.node(NodeId(1));
        let edges = [c.from_depot, c.to_depot];
        let first = evaluate_edges(&inst, edges, 0.0, 0.0);
        let second = evaluate_edges(&inst, edges, 0.0, 0.0);
        assert_eq!(first, second);
    }
}
