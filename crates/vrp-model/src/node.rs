//! Customer and depot records.

use vrp_core::{EdgeId, NodeId, Point};

/// A node of the instance: the depot (id 0) or a customer to be visited.
///
/// Nodes are immutable once the instance is built.  The two depot arcs are
/// created once per instance and reused across all constructions; for the
/// depot itself both fields stay [`EdgeId::INVALID`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub position: Point,

    /// Opening time of the delivery window.  Carried for completeness; only
    /// `close` enters the cost model.
    pub open: f64,

    /// Closing time.  Arrivals after it incur a soft delay penalty.  The
    /// depot's closing time is always +∞.
    pub close: f64,

    /// Quantity of products sold to this customer.
    pub demand: i64,

    /// Relative weight of the customer in [0, 1]: its share of the total
    /// demand of the instance.
    pub importance: f64,

    /// The depot → node arc.
    pub from_depot: EdgeId,

    /// The node → depot arc.
    pub to_depot: EdgeId,
}

impl Node {
    pub fn new(id: NodeId, position: Point, open: f64, close: f64, demand: i64, importance: f64) -> Self {
        Self {
            id,
            position,
            open,
            close,
            demand,
            importance,
            from_depot: EdgeId::INVALID,
            to_depot: EdgeId::INVALID,
        }
    }

    #[inline]
    pub fn is_depot(&self) -> bool {
        self.id == NodeId::DEPOT
    }
}
