use thiserror::Error;
use vrp_core::VrpError;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The γ escalation hit its cap without a single feasible deterministic
    /// construction: the instance cannot be served by the configured fleet.
    #[error(
        "no feasible solution: delay budget escalated to {gamma:.1} (cap {cap:.1}) \
         without a feasible construction"
    )]
    NoFeasibleSolution { gamma: f64, cap: f64 },

    #[error(transparent)]
    Core(#[from] VrpError),
}

pub type SearchResult<T> = Result<T, SearchError>;
