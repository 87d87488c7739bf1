//! Search observer trait for progress reporting.

/// Callbacks invoked by [`Search::run`][crate::Search::run] at key points of
/// the search.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SearchObserver for ProgressPrinter {
///     fn on_new_best(&mut self, iteration: u64, cost: f64) {
///         println!("iter {iteration}: new best {cost:.2}");
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called after each bootstrap construction attempt with the γ it used.
    fn on_bootstrap(&mut self, _gamma: f64, _feasible: bool) {}

    /// Called once per search iteration; `deterministic_cost` is `None` when
    /// the construction was infeasible.
    fn on_iteration(&mut self, _iteration: u64, _deterministic_cost: Option<f64>) {}

    /// Called when a construction takes over as the deterministic incumbent.
    fn on_new_best(&mut self, _iteration: u64, _deterministic_cost: f64) {}

    /// Called when a solution enters the elite queue (simheuristic only).
    fn on_elite_admitted(&mut self, _iteration: u64, _stochastic_cost: f64) {}

    /// Called once after the last iteration, before the final elite
    /// rescoring results are folded into the outcome.
    fn on_search_end(&mut self, _iterations: u64) {}
}

/// A [`SearchObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
