//! `vrp-io` — file interfaces of the solver.
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`read`]        | whitespace-delimited instance parsing               |
//! | [`timewindows`] | time-window synthesis pre-pass for raw instances    |
//! | [`export`]      | per-stop CSV dump of a solution                     |
//!
//! # Instance file format
//!
//! One node per row, whitespace-delimited: `x  y  demand  open  close`.
//! Node 0 is the depot; its `close` is treated as +∞ whatever the file
//! says.  Customer importance is derived, not read:
//! `importance_i = demand_i / Σ demand`.

pub mod error;
pub mod export;
pub mod read;
pub mod timewindows;


pub use error::{IoError, IoResult};
pub use export::write_solution_csv;
pub use read::{load_instance, read_nodes};
pub use timewindows::synthesize_time_windows;
