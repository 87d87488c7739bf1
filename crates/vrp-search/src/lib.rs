//! `vrp-search` — the simheuristic search engine.
//!
//! A biased-randomized Clarke–Wright savings heuristic wrapped in an
//! iterated driver, with Monte-Carlo rescoring of candidate solutions under
//! travel-time noise.
//!
//! # One construction
//!
//! ```text
//! reset per-node state → one singleton route per customer
//! while the savings list is non-empty:
//!   ① Draw    — quasi-geometric index into the savings list (β-biased).
//!   ② Plan    — feasibility checks + orientation selection (merge planner).
//!   ③ Merge   — in-place route join, absorbed route leaves the arena.
//!   ④ Accept  — as soon as ≤ K routes remain, the solution is complete.
//! ```
//!
//! The driver repeats constructions with β drawn per iteration, keeps
//! separate deterministic and stochastic incumbents, and finishes by
//! re-simulating a bounded elite set at high replication count.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Final elite rescoring runs on Rayon's thread pool.      |

pub mod construct;
pub mod driver;
pub mod error;
pub mod observer;
pub mod planner;
pub mod route;
pub mod sampler;
pub mod sim;
pub mod solution;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use construct::build_solution;
pub use driver::{Search, SearchMode, SearchOutcome};
pub use error::{SearchError, SearchResult};
pub use observer::{NoopObserver, SearchObserver};
pub use planner::{PreparedMerge, prepare_merge};
pub use route::{MergeError, Route};
pub use sampler::biased_index;
pub use sim::simulate_edges;
pub use solution::Solution;
pub use state::{RouteArena, WorkingState};
