//! `vrp-core` — foundational types for the vrp simheuristic solver.
//!
//! This crate is a dependency of every other `vrp-*` crate.  It intentionally
//! has no `vrp-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`ids`]    | `NodeId`, `EdgeId`, `RouteId`                       |
//! | [`point`]  | `Point`, truncated Euclidean distance               |
//! | [`rng`]    | `SearchRng` (construction), `SimRng` (simulation)   |
//! | [`config`] | `SearchConfig`                                      |
//! | [`error`]  | `VrpError`, `VrpResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod point;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SearchConfig, BETA_DETERMINISTIC};
pub use error::{VrpError, VrpResult};
pub use ids::{EdgeId, NodeId, RouteId};
pub use point::Point;
pub use rng::{SearchRng, SimRng};
