//! The immutable problem instance.
//!
//! Cyclic node ↔ edge ↔ route references collapse to an arena-plus-index
//! design: one owning `Vec` for nodes, one for edges, with all cross-links
//! expressed as typed IDs.  The instance outlives every solution and is
//! read-only after [`Instance::build`].

use vrp_core::{EdgeId, NodeId, VrpError, VrpResult};

use crate::{Edge, Node};

/// Nodes, arcs, and the Clarke–Wright savings list of one problem.
#[derive(Debug)]
pub struct Instance {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    /// One representative per unordered customer pair, sorted by saving
    /// descending (stable: ties keep insertion order).
    savings: Vec<EdgeId>,
}

impl Instance {
    /// Build the full arc set from a node list.
    ///
    /// Creates the two depot arcs of every customer and the two inverse arcs
    /// of every unordered customer pair; each arc's variance is
    /// `(pvariance · d)²` for Euclidean distance `d`.  Node 0 is the depot;
    /// its closing time is forced to +∞ regardless of the input.
    pub fn build(mut nodes: Vec<Node>, pvariance: f64) -> VrpResult<Instance> {
        if nodes.is_empty() {
            return Err(VrpError::Instance("instance has no depot".into()));
        }
        for (i, node) in nodes.iter().enumerate() {
            if node.id.index() != i {
                return Err(VrpError::Instance(format!(
                    "node ids must be consecutive from 0, found {} at position {i}",
                    node.id
                )));
            }
        }
        nodes[0].close = f64::INFINITY;

        let depot = nodes[0].position;
        let mut edges: Vec<Edge> = Vec::new();

        // Depot arcs, one inverse pair per customer.
        for i in 1..nodes.len() {
            let node = &nodes[i];
            let d = depot.distance(node.position);
            let variance = (pvariance * d).powi(2);
            let (dn, nd) = push_pair(&mut edges, NodeId::DEPOT, node.id, d, variance)?;
            nodes[i].from_depot = dn;
            nodes[i].to_depot = nd;
        }

        // Customer-pair arcs plus savings.
        let mut savings: Vec<EdgeId> = Vec::new();
        for i in 1..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let d = nodes[i].position.distance(nodes[j].position);
                let variance = (pvariance * d).powi(2);
                let (ij, ji) = push_pair(&mut edges, nodes[i].id, nodes[j].id, d, variance)?;
                let saving = edges[nodes[i].to_depot.index()].travel_time
                    + edges[nodes[j].from_depot.index()].travel_time
                    - d;
                edges[ij.index()].saving = saving;
                edges[ji.index()].saving = saving;
                // one representative per unordered pair
                savings.push(ij);
            }
        }

        savings.sort_by(|&a, &b| edges[b.index()].saving.total_cmp(&edges[a.index()].saving));

        Ok(Instance { nodes, edges, savings })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All non-depot nodes, in id order.
    pub fn customers(&self) -> impl Iterator<Item = &Node> {
        self.nodes[1..].iter()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn customer_count(&self) -> usize {
        self.nodes.len() - 1
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The savings list: one arc per unordered customer pair, saving
    /// descending.
    pub fn savings(&self) -> &[EdgeId] {
        &self.savings
    }
}

/// Push an inverse arc pair and cross-link it.
fn push_pair(
    edges: &mut Vec<Edge>,
    a: NodeId,
    b: NodeId,
    travel_time: f64,
    variance: f64,
) -> VrpResult<(EdgeId, EdgeId)> {
    let ab = EdgeId::try_from(edges.len())
        .map_err(|_| VrpError::Instance("edge count exceeds u32 range".into()))?;
    let ba = EdgeId(ab.0 + 1);
    let mut fwd = Edge::new(a, b, travel_time, variance)?;
    let mut bwd = Edge::new(b, a, travel_time, variance)?;
    fwd.inverse = ba;
    bwd.inverse = ab;
    edges.push(fwd);
    edges.push(bwd);
    Ok((ab, ba))
}
