//! `vrp` — solve a VRP instance with soft time windows and stochastic
//! travel times.
//!
//! ```text
//! vrp data/A-n32-k5_input_nodes.txt -k 5 --max-travel-time 200
//! vrp raw.txt -k 5 --max-travel-time 200 --synthesize-windows --output routes.csv
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use vrp_core::{SearchConfig, SearchRng};
use vrp_io::{load_instance, synthesize_time_windows, write_solution_csv};
use vrp_search::{Search, SearchMode, SearchObserver, Solution};

// ── CLI definition ────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    /// One deterministic construction with escalating delay budget.
    Heuristic,
    /// Biased-randomized search on the deterministic cost.
    Bra,
    /// Biased-randomized search with Monte-Carlo rescoring and elites.
    Simheuristic,
}

impl From<Mode> for SearchMode {
    fn from(mode: Mode) -> SearchMode {
        match mode {
            Mode::Heuristic => SearchMode::Heuristic,
            Mode::Bra => SearchMode::BiasedRandom,
            Mode::Simheuristic => SearchMode::Simheuristic,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "vrp", version, about = "Simheuristic VRP solver with soft time windows")]
struct Cli {
    /// Instance file: one `x y demand open close` row per node, depot first.
    instance: PathBuf,

    #[arg(long, value_enum, default_value_t = Mode::Simheuristic)]
    mode: Mode,

    /// Fleet size K.
    #[arg(short = 'k', long)]
    vehicles: usize,

    /// Per-route travel-time ceiling T_max.
    #[arg(long)]
    max_travel_time: f64,

    /// Lower bound of the β draw.
    #[arg(long, default_value_t = 0.1)]
    beta_min: f64,

    /// Upper bound of the β draw.
    #[arg(long, default_value_t = 0.3)]
    beta_max: f64,

    /// Constructor invocations per search.
    #[arg(long, default_value_t = 3_000)]
    maxiter: u64,

    /// Elite queue capacity.
    #[arg(long, default_value_t = 5)]
    elites: usize,

    /// Replications for the fast in-loop simulation.
    #[arg(long, default_value_t = 50)]
    trials_inner: u32,

    /// Replications for the final elite rescoring.
    #[arg(long, default_value_t = 10_000)]
    trials_final: u32,

    /// Proportional-variance factor for arc travel times.
    #[arg(long, default_value_t = 0.25)]
    pvariance: f64,

    /// Delay-budget escalation step.
    #[arg(long, default_value_t = 10.0)]
    gamma_step: f64,

    /// Give up once the delay budget exceeds this cap.
    #[arg(long, default_value_t = 10_000.0)]
    gamma_cap: f64,

    /// Seed for the construction-side RNG.
    #[arg(long, default_value_t = 42)]
    seed_search: u64,

    /// Seed for the simulation RNG.
    #[arg(long, default_value_t = 43)]
    seed_sim: u64,

    /// Wall-clock budget in seconds; unlimited when absent.
    #[arg(long)]
    deadline_secs: Option<f64>,

    /// Treat the instance as raw `x y demand` rows: synthesize time windows
    /// first and rewrite the file in place.
    #[arg(long)]
    synthesize_windows: bool,

    /// Full width of each synthesized time window.
    #[arg(long, default_value_t = 100)]
    window_width: u32,

    /// Write the best solution as CSV (one row per visited customer).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print a progress line every N iterations (0 = quiet).
    #[arg(long, default_value_t = 500)]
    progress_every: u64,
}

impl Cli {
    fn config(&self) -> SearchConfig {
        let mut config = SearchConfig::new(self.vehicles, self.max_travel_time);
        config.beta_range = (self.beta_min, self.beta_max);
        config.maxiter = self.maxiter;
        config.n_elites = self.elites;
        config.sim_trials_inner = self.trials_inner;
        config.sim_trials_final = self.trials_final;
        config.pvariance = self.pvariance;
        config.gamma_step = self.gamma_step;
        config.gamma_cap = self.gamma_cap;
        config.seed_search = self.seed_search;
        config.seed_sim = self.seed_sim;
        config.deadline = self.deadline_secs.map(Duration::from_secs_f64);
        config
    }
}

// ── Progress observer ─────────────────────────────────────────────────────────

struct Progress {
    every: u64,
}

impl SearchObserver for Progress {
    fn on_bootstrap(&mut self, gamma: f64, feasible: bool) {
        if self.every > 0 && !feasible {
            println!("bootstrap: gamma {gamma:.0} infeasible, escalating");
        }
    }

    fn on_iteration(&mut self, iteration: u64, _deterministic_cost: Option<f64>) {
        if self.every > 0 && iteration > 0 && iteration % self.every == 0 {
            println!("iteration {iteration}");
        }
    }

    fn on_new_best(&mut self, iteration: u64, deterministic_cost: f64) {
        if self.every > 0 {
            println!("iteration {iteration}: new best deterministic cost {deterministic_cost:.2}");
        }
    }

    fn on_elite_admitted(&mut self, iteration: u64, stochastic_cost: f64) {
        if self.every > 0 {
            println!("iteration {iteration}: elite admitted (stochastic cost {stochastic_cost:.2})");
        }
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_solution(label: &str, instance: &vrp_model::Instance, solution: &Solution) {
    println!("{label}:");
    for (i, route) in solution.routes().iter().enumerate() {
        let stops: Vec<String> = route
            .edges()
            .iter()
            .map(|&id| instance.edge(id).end)
            .filter(|&n| n != vrp_core::NodeId::DEPOT)
            .map(|n| n.0.to_string())
            .collect();
        println!(
            "  route {i}: depot -> {} -> depot  (travel time {:.0})",
            stops.join(" -> "),
            route.travel_time()
        );
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.synthesize_windows {
        let mut rng = SearchRng::new(cli.seed_search);
        synthesize_time_windows(&cli.instance, cli.vehicles, cli.window_width, &mut rng)
            .with_context(|| format!("synthesizing time windows for {}", cli.instance.display()))?;
        println!("time windows synthesized into {}", cli.instance.display());
    }

    let instance = load_instance(&cli.instance, cli.pvariance)
        .with_context(|| format!("loading {}", cli.instance.display()))?;
    println!(
        "instance: {} customers, {} savings arcs",
        instance.customer_count(),
        instance.savings().len()
    );

    let mut search = Search::new(&instance, cli.config())?;
    let mut progress = Progress { every: cli.progress_every };
    let outcome = search.run(cli.mode.into(), &mut progress)?;

    println!(
        "finished: {} iterations in {:.2?}, delay budget gamma {:.0}",
        outcome.iterations, outcome.elapsed, outcome.gamma
    );
    println!(
        "deterministic best: cost {:.2} over {} routes",
        outcome.deterministic_best.deterministic_cost(),
        outcome.deterministic_best.route_count()
    );
    print_solution("deterministic best", &instance, &outcome.deterministic_best);

    let best = match &outcome.stochastic_best {
        Some(stochastic) => {
            if stochastic.is_degenerate() {
                println!("warning: best elite is degenerate under travel-time noise");
            }
            println!("stochastic best: cost {:.2}", stochastic.stochastic_cost());
            print_solution("stochastic best", &instance, stochastic);
            stochastic
        }
        None => &outcome.deterministic_best,
    };

    if let Some(path) = &cli.output {
        write_solution_csv(path, &instance, best)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("solution written to {}", path.display());
    }

    Ok(())
}
