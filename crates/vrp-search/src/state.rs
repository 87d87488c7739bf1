//! Per-construction working state.
//!
//! The instance itself is read-only; everything a construction mutates lives
//! here.  [`WorkingState`] holds the per-node route back-pointer and interior
//! flag in SoA arrays keyed by node index, and [`RouteArena`] owns the routes
//! being assembled.  Both are reset/rebuilt at the start of every
//! construction, which is the only synchronization point of the sequential
//! search.

use vrp_core::{NodeId, RouteId};

use crate::{Route, Solution};

// ── WorkingState ──────────────────────────────────────────────────────────────

/// Mutable per-node search state.
///
/// The route back-pointer is an index, not an owning reference: it never
/// keeps a dead route alive and is refreshed wholesale by [`reset`].
///
/// [`reset`]: WorkingState::reset
pub struct WorkingState {
    route: Vec<RouteId>,
    interior: Vec<bool>,
}

impl WorkingState {
    pub fn new(node_count: usize) -> Self {
        Self {
            route: vec![RouteId::INVALID; node_count],
            interior: vec![false; node_count],
        }
    }

    /// Forget everything from the previous construction.
    pub fn reset(&mut self) {
        self.route.fill(RouteId::INVALID);
        self.interior.fill(false);
    }

    /// The route the node currently sits in.
    #[inline]
    pub fn route_of(&self, node: NodeId) -> RouteId {
        self.route[node.index()]
    }

    #[inline]
    pub fn set_route(&mut self, node: NodeId, route: RouteId) {
        self.route[node.index()] = route;
    }

    /// True iff the node is not adjacent to the depot in its current route,
    /// which makes it ineligible as a merge endpoint.
    #[inline]
    pub fn is_interior(&self, node: NodeId) -> bool {
        self.interior[node.index()]
    }

    #[inline]
    pub fn set_interior(&mut self, node: NodeId, interior: bool) {
        self.interior[node.index()] = interior;
    }
}

// ── RouteArena ────────────────────────────────────────────────────────────────

/// Slot arena for the routes of one construction.
///
/// Merging absorbs a route: its slot is vacated but never reused, so every
/// issued [`RouteId`] stays stable for the lifetime of the construction.
pub struct RouteArena {
    slots: Vec<Option<Route>>,
    live: usize,
}

impl RouteArena {
    pub fn new() -> Self {
        Self { slots: Vec::new(), live: 0 }
    }

    pub fn insert(&mut self, route: Route) -> RouteId {
        let id = RouteId(self.slots.len() as u32);
        self.slots.push(Some(route));
        self.live += 1;
        id
    }

    /// Number of routes still alive.
    #[inline]
    pub fn live(&self) -> usize {
        self.live
    }

    /// # Panics
    /// Panics if the slot was vacated — referencing an absorbed route is a
    /// bookkeeping bug in the caller.
    #[inline]
    pub fn get(&self, id: RouteId) -> &Route {
        self.slots[id.index()].as_ref().expect("route was absorbed by an earlier merge")
    }

    /// # Panics
    /// See [`get`](RouteArena::get).
    #[inline]
    pub fn get_mut(&mut self, id: RouteId) -> &mut Route {
        self.slots[id.index()].as_mut().expect("route was absorbed by an earlier merge")
    }

    /// Remove and return a route, vacating its slot.
    ///
    /// # Panics
    /// See [`get`](RouteArena::get).
    pub fn take(&mut self, id: RouteId) -> Route {
        let route = self.slots[id.index()].take().expect("route was absorbed by an earlier merge");
        self.live -= 1;
        route
    }

    /// Collect the surviving routes into a [`Solution`].
    pub fn into_solution(self) -> Solution {
        Solution::new(self.slots.into_iter().flatten().collect())
    }
}

impl Default for RouteArena {
    fn default() -> Self {
        Self::new()
    }
}
