//! The iterated search drivers.
//!
//! Three variants share one construction path:
//!
//! - **Heuristic** — a single deterministic construction with escalating γ.
//! - **BiasedRandom** — `maxiter` β-randomized constructions, keeping the
//!   lowest-deterministic-cost incumbent.
//! - **Simheuristic** — as BiasedRandom, but every new deterministic
//!   incumbent is Monte-Carlo scored with a small replication budget; if it
//!   also beats the stochastic incumbent it enters a FIFO-bounded elite
//!   queue.  After the iteration budget, every elite is re-simulated at high
//!   replication count and the best one is the stochastic answer.
//!
//! Constructions mutate shared per-node state, so iterations are sequential
//! by design; the only parallel axis is the final elite rescoring (see the
//! `parallel` cargo feature), whose per-elite child seeds keep the outcome
//! reproducible.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use vrp_core::{BETA_DETERMINISTIC, SearchConfig, SearchRng, SimRng, VrpResult};
use vrp_model::Instance;

use crate::construct::build_solution;
use crate::error::{SearchError, SearchResult};
use crate::observer::SearchObserver;
use crate::solution::Solution;
use crate::state::WorkingState;

// ── Mode & outcome ────────────────────────────────────────────────────────────

/// Which driver variant to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchMode {
    /// One deterministic construction with escalating γ.
    Heuristic,
    /// Biased-randomized search on the deterministic cost alone.
    BiasedRandom,
    /// Biased-randomized search with Monte-Carlo rescoring and elites.
    Simheuristic,
}

/// What a finished search hands back.
#[derive(Debug)]
pub struct SearchOutcome {
    /// Lowest deterministic cost seen.
    pub deterministic_best: Solution,

    /// Lowest stochastic cost among the rescored elites.  `None` unless the
    /// mode was [`SearchMode::Simheuristic`].
    pub stochastic_best: Option<Solution>,

    /// The delay budget the bootstrap settled on; frozen during the search.
    pub gamma: f64,

    /// Iterations actually run (may undershoot `maxiter` on deadline).
    pub iterations: u64,

    pub elapsed: Duration,
}

// ── Search ────────────────────────────────────────────────────────────────────

/// The search driver.  Owns both RNG streams and the per-construction
/// working state; borrows the instance, which stays read-only throughout.
pub struct Search<'a> {
    instance: &'a Instance,
    config: SearchConfig,
    search_rng: SearchRng,
    sim_rng: SimRng,
    state: WorkingState,
}

impl<'a> Search<'a> {
    /// Validate the configuration and seed both RNG streams.
    pub fn new(instance: &'a Instance, config: SearchConfig) -> VrpResult<Self> {
        config.validate()?;
        Ok(Self {
            search_rng: SearchRng::new(config.seed_search),
            sim_rng: SimRng::new(config.seed_sim),
            state: WorkingState::new(instance.node_count()),
            instance,
            config,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the selected driver variant to completion.
    pub fn run<O: SearchObserver>(
        &mut self,
        mode: SearchMode,
        observer: &mut O,
    ) -> SearchResult<SearchOutcome> {
        let start = Instant::now();
        let (gamma, mut seed) = self.bootstrap(observer)?;
        seed.evaluate(self.instance);

        match mode {
            SearchMode::Heuristic => {
                observer.on_search_end(0);
                Ok(SearchOutcome {
                    deterministic_best: seed,
                    stochastic_best: None,
                    gamma,
                    iterations: 0,
                    elapsed: start.elapsed(),
                })
            }
            SearchMode::BiasedRandom => self.run_biased(gamma, seed, observer, start),
            SearchMode::Simheuristic => self.run_simheuristic(gamma, seed, observer, start),
        }
    }

    // ── γ bootstrap ───────────────────────────────────────────────────────

    /// Escalate γ by `gamma_step` until one deterministic construction is
    /// feasible; that γ is frozen for the whole search.
    fn bootstrap<O: SearchObserver>(
        &mut self,
        observer: &mut O,
    ) -> SearchResult<(f64, Solution)> {
        let mut gamma = -self.config.gamma_step;
        loop {
            gamma += self.config.gamma_step;
            if gamma > self.config.gamma_cap {
                return Err(SearchError::NoFeasibleSolution { gamma, cap: self.config.gamma_cap });
            }
            let solution = build_solution(
                self.instance,
                &mut self.state,
                self.config.n_vehicles,
                gamma,
                self.config.max_travel_time,
                BETA_DETERMINISTIC,
                &mut self.search_rng,
            );
            observer.on_bootstrap(gamma, solution.is_some());
            if let Some(solution) = solution {
                return Ok((gamma, solution));
            }
        }
    }

    // ── Shared iteration plumbing ─────────────────────────────────────────

    fn deadline_reached(&self, start: Instant) -> bool {
        self.config.deadline.is_some_and(|d| start.elapsed() >= d)
    }

    fn draw_beta(&mut self) -> f64 {
        let (lo, hi) = self.config.beta_range;
        self.search_rng.gen_range(lo..=hi)
    }

    fn construct(&mut self, gamma: f64, beta: f64) -> Option<Solution> {
        build_solution(
            self.instance,
            &mut self.state,
            self.config.n_vehicles,
            gamma,
            self.config.max_travel_time,
            beta,
            &mut self.search_rng,
        )
    }

    // ── BiasedRandom ──────────────────────────────────────────────────────

    fn run_biased<O: SearchObserver>(
        &mut self,
        gamma: f64,
        seed: Solution,
        observer: &mut O,
        start: Instant,
    ) -> SearchResult<SearchOutcome> {
        let mut best = seed;
        let mut best_cost = best.deterministic_cost();
        let mut iterations = 0;

        for iteration in 0..self.config.maxiter {
            if self.deadline_reached(start) {
                break;
            }
            iterations = iteration + 1;

            let beta = self.draw_beta();
            let Some(mut solution) = self.construct(gamma, beta) else {
                observer.on_iteration(iteration, None);
                continue;
            };
            let cost = solution.evaluate(self.instance);
            observer.on_iteration(iteration, Some(cost));

            if cost < best_cost {
                observer.on_new_best(iteration, cost);
                best = solution;
                best_cost = cost;
            }
        }

        observer.on_search_end(iterations);
        Ok(SearchOutcome {
            deterministic_best: best,
            stochastic_best: None,
            gamma,
            iterations,
            elapsed: start.elapsed(),
        })
    }

    // ── Simheuristic ──────────────────────────────────────────────────────

    fn run_simheuristic<O: SearchObserver>(
        &mut self,
        gamma: f64,
        mut seed: Solution,
        observer: &mut O,
        start: Instant,
    ) -> SearchResult<SearchOutcome> {
        let t_max = self.config.max_travel_time;
        let inner_trials = self.config.sim_trials_inner;

        seed.simulate(self.instance, inner_trials, t_max, &mut self.sim_rng);

        let mut elites: VecDeque<Solution> = VecDeque::with_capacity(self.config.n_elites);
        elites.push_back(seed.clone());

        let mut best_cost = seed.deterministic_cost();
        let mut best_stochastic = seed.stochastic_cost();
        let mut best = seed;
        let mut iterations = 0;

        for iteration in 0..self.config.maxiter {
            if self.deadline_reached(start) {
                break;
            }
            iterations = iteration + 1;

            let beta = self.draw_beta();
            let Some(mut solution) = self.construct(gamma, beta) else {
                observer.on_iteration(iteration, None);
                continue;
            };
            let cost = solution.evaluate(self.instance);
            observer.on_iteration(iteration, Some(cost));

            if cost <= best_cost {
                observer.on_new_best(iteration, cost);
                let stochastic =
                    solution.simulate(self.instance, inner_trials, t_max, &mut self.sim_rng);
                if stochastic <= best_stochastic {
                    best_stochastic = stochastic;
                    if elites.len() == self.config.n_elites {
                        elites.pop_front();
                    }
                    elites.push_back(solution.clone());
                    observer.on_elite_admitted(iteration, stochastic);
                }
                best = solution;
                best_cost = cost;
            }
        }

        observer.on_search_end(iterations);
        self.rescore_elites(&mut elites);

        let stochastic_best = elites
            .iter()
            .min_by(|a, b| a.stochastic_cost().total_cmp(&b.stochastic_cost()))
            .cloned();

        Ok(SearchOutcome {
            deterministic_best: best,
            stochastic_best,
            gamma,
            iterations,
            elapsed: start.elapsed(),
        })
    }

    /// Re-simulate every elite at the final (high) replication count.
    #[cfg(not(feature = "parallel"))]
    fn rescore_elites(&mut self, elites: &mut VecDeque<Solution>) {
        let trials = self.config.sim_trials_final;
        let t_max = self.config.max_travel_time;
        for solution in elites.iter_mut() {
            solution.simulate(self.instance, trials, t_max, &mut self.sim_rng);
        }
    }

    /// Re-simulate every elite at the final (high) replication count, fanned
    /// out over Rayon with one deterministic child seed per elite.
    #[cfg(feature = "parallel")]
    fn rescore_elites(&mut self, elites: &mut VecDeque<Solution>) {
        use rayon::prelude::*;

        let trials = self.config.sim_trials_final;
        let t_max = self.config.max_travel_time;
        let instance = self.instance;
        let seeds: Vec<u64> = (0..elites.len() as u64)
            .map(|i| {
                let mut child = self.sim_rng.child(i);
                child.random()
            })
            .collect();
        elites
            .make_contiguous()
            .par_iter_mut()
            .zip(seeds)
            .for_each(|(solution, seed)| {
                let mut rng = SimRng::new(seed);
                solution.simulate(instance, trials, t_max, &mut rng);
            });
    }
}
