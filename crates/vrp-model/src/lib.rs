//! `vrp-model` — the read-only problem instance and its cost model.
//!
//! An [`Instance`] owns the node set and every directed arc, including the
//! Clarke–Wright savings list.  It is built once and never mutated: all
//! per-construction state (which route a node currently sits in, whether it
//! is interior) lives in `vrp-search`, keyed by node index.
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`node`]     | `Node` — customer record with derived importance     |
//! | [`edge`]     | `Edge` — directed arc, inverse link, noise model     |
//! | [`instance`] | `Instance` — arena of nodes/edges, savings list      |
//! | [`penalty`]  | `predict` — memoized soft delay-cost kernel          |
//! | [`evaluate`] | `evaluate_edges` — deterministic traversal cost      |

pub mod edge;
pub mod evaluate;
pub mod instance;
pub mod node;
pub mod penalty;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use edge::Edge;
pub use evaluate::evaluate_edges;
pub use instance::Instance;
pub use node::Node;
pub use penalty::predict;
