//! Colony coordinator: runs ACO iterations, hosts the stopping rule, the
//! pheromone-update strategy variants, and the parallel scheduler.
//!
//! Each iteration runs four phases in order: construct every ant's tour (in
//! parallel), optionally improve all of them, track the iteration/global
//! best, then evaporate and deposit pheromone according to the configured
//! deposit variant (all / iteration-best / global-best / rank, with an
//! optional elitist top-up). Construct, the all-tours improve pass, and the
//! per-tour deposit variants (`all`/`rank`) are all dispatched across a
//! `rayon` thread pool, one `ChaCha8Rng` per worker thread, lazily seeded
//! from entropy at first use.

use crate::ant::Ant;
use crate::distance::DistanceMatrix;
use crate::error::{Result, SolverError};
use crate::local_search;
use crate::pheromone::{PheromoneBounds, PheromoneMatrix};
use crate::tour::Tour;

use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How many ants must be present before the construct/deposit phases are
/// actually dispatched to the rayon pool. Below this, the per-task overhead
/// of spinning up the pool outweighs the parallelism.
const SERIAL_BELOW_ANTS: usize = 8;

thread_local! {
    /// One PRNG per worker thread, lazily seeded from a process-wide entropy
    /// source at first use. Plain `for` loops on the coordinator thread also
    /// go through this, which just means the coordinator thread gets its own
    /// lazily-seeded RNG the first time it needs one.
    static WORKER_RNG: RefCell<Option<ChaCha8Rng>> = RefCell::new(None);
}

fn with_worker_rng<R>(f: impl FnOnce(&mut ChaCha8Rng) -> R) -> R {
    WORKER_RNG.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(ChaCha8Rng::from_entropy());
        }
        f(slot.as_mut().expect("just initialized"))
    })
}

/// Tagged stopping rule: either a fixed iteration count, or run until the
/// global best stalls for `ColonyConfig::convergence_threshold` consecutive
/// iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum IterationBudget {
    /// Run exactly this many iterations.
    Finite(usize),
    /// Run until `convergence_threshold` consecutive iterations produce no
    /// strict improvement in the global best.
    Converge,
}

/// Which ants deposit pheromone at the end of an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PheromoneMode {
    /// Every ant deposits along its own tour.
    All,
    /// Only the ant whose tour is the shortest this iteration deposits.
    IterationBest,
    /// Only the global best-so-far deposits.
    GlobalBest,
    /// The top `rank_size` ants deposit, weighted by rank.
    Rank,
}

/// Where the local-search improver is applied within an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LocalSearchMode {
    /// Never apply local search.
    None,
    /// Apply only to the (updated) global-best tour once per iteration.
    Best,
    /// Apply to every ant's tour before best-tracking and deposit.
    All,
}

/// Parallel execution configuration.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallelConfig {
    pub enabled: bool,
    /// 0 = auto (rayon default), 1 = serial, ≥2 = explicit worker count.
    pub num_threads: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        ParallelConfig {
            enabled: true,
            num_threads: 0,
        }
    }
}

/// The exhaustive colony configuration record: every ACO/local-search/
/// parallelism knob in one `Serialize`/`Deserialize`/`Default` struct.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ColonyConfig {
    pub num_ants: usize,
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub q: f64,
    pub distinct_starts: bool,
    pub pheromone_mode: PheromoneMode,
    pub elitist: bool,
    pub elitist_weight: Option<f64>,
    pub rank_size: Option<usize>,
    pub local_search: LocalSearchMode,
    pub use_3opt: bool,
    pub parallel: ParallelConfig,
    pub convergence_threshold: usize,
    pub callback_interval: usize,
    pub tau_bounds: Option<PheromoneBounds>,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        ColonyConfig {
            num_ants: 20,
            alpha: 1.0,
            beta: 2.0,
            rho: 0.5,
            q: 100.0,
            distinct_starts: false,
            pheromone_mode: PheromoneMode::All,
            elitist: false,
            elitist_weight: None,
            rank_size: None,
            local_search: LocalSearchMode::None,
            use_3opt: false,
            parallel: ParallelConfig::default(),
            convergence_threshold: 200,
            callback_interval: 10,
            tau_bounds: None,
        }
    }
}

impl ColonyConfig {
    fn validate(&self, n: usize) -> Result<()> {
        if self.num_ants < 1 {
            return Err(SolverError::InvalidInput(
                "num_ants must be >= 1".to_string(),
            ));
        }
        if self.alpha < 0.0 {
            return Err(SolverError::InvalidInput("alpha must be >= 0".to_string()));
        }
        if self.beta < 0.0 {
            return Err(SolverError::InvalidInput("beta must be >= 0".to_string()));
        }
        if !(self.rho > 0.0 && self.rho <= 1.0) {
            return Err(SolverError::InvalidInput(
                "rho must be in (0, 1]".to_string(),
            ));
        }
        if self.q <= 0.0 {
            return Err(SolverError::InvalidInput("Q must be > 0".to_string()));
        }
        if let Some(w) = self.elitist_weight {
            if w < 0.0 {
                return Err(SolverError::InvalidInput(
                    "elitist_weight must be >= 0".to_string(),
                ));
            }
        }
        if let Some(k) = self.rank_size {
            if k > self.num_ants {
                return Err(SolverError::InvalidInput(format!(
                    "rank_size {k} exceeds num_ants {}",
                    self.num_ants
                )));
            }
        }
        if self.convergence_threshold < 1 {
            return Err(SolverError::InvalidInput(
                "convergence_threshold must be >= 1".to_string(),
            ));
        }
        if self.callback_interval < 1 {
            return Err(SolverError::InvalidInput(
                "callback_interval must be >= 1".to_string(),
            ));
        }
        if n == 0 {
            return Err(SolverError::InvalidInput(
                "distance matrix must have at least one city".to_string(),
            ));
        }
        Ok(())
    }

    fn elitist_weight_or_default(&self) -> f64 {
        self.elitist_weight.unwrap_or(self.num_ants as f64)
    }

    fn rank_size_or_default(&self) -> usize {
        self.rank_size.unwrap_or(self.num_ants / 2)
    }
}

/// Progress event payload: 1-indexed iteration, the current global best's
/// length and sequence, and the iteration-best trace collected so far
/// (exactly `iteration` entries).
pub struct ProgressEvent<'a> {
    pub iteration: usize,
    pub best_length: f64,
    pub best_sequence: &'a [usize],
    pub iteration_best_trace: &'a [f64],
}

/// What `solve` returns: the best tour found, and whether a cooperative
/// cancel was observed before the configured budget was exhausted. A cancel
/// is not an error — it's this flag on an otherwise-successful outcome.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SolveOutcome {
    pub best_tour: Tour,
    pub cancelled: bool,
}

/// A handle that can be cloned out to another thread and used to request
/// cooperative cancellation. Safe to call from any thread.
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Fresh → Initialized → (IterationN)* → Terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColonyState {
    Fresh,
    Initialized,
    Terminated,
}

/// Runs ACO iterations over a distance oracle, owning the pheromone matrix
/// and the iteration-best trace. Created once, may be solved multiple times;
/// each `solve` re-initializes both so repeated calls don't accumulate
/// state from a previous run.
pub struct Colony {
    distances: Arc<DistanceMatrix>,
    config: ColonyConfig,
    pheromone: PheromoneMatrix,
    best: Option<Tour>,
    trace: Vec<f64>,
    cancel_flag: Arc<AtomicBool>,
    state: ColonyState,
    pool: Option<rayon::ThreadPool>,
}

impl Colony {
    pub fn new(distances: Arc<DistanceMatrix>, config: ColonyConfig) -> Result<Self> {
        let n = distances.num_cities();
        config.validate(n)?;

        let pool = build_pool(&config);
        let pheromone = PheromoneMatrix::new(n, 1.0, config.tau_bounds);

        Ok(Colony {
            distances,
            config,
            pheromone,
            best: None,
            trace: Vec::new(),
            cancel_flag: Arc::new(AtomicBool::new(false)),
            state: ColonyState::Fresh,
            pool,
        })
    }

    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    pub fn convergence_trace(&self) -> &[f64] {
        &self.trace
    }

    pub fn best_tour(&self) -> Option<&Tour> {
        self.best.as_ref()
    }

    /// A handle that can be cloned out and used from any thread to request
    /// cooperative cancellation of the currently-running (or a future) solve.
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(Arc::clone(&self.cancel_flag))
    }

    /// Re-initializes τ to τ₀ = m / C^nn (falling back to 1.0 if C^nn is
    /// non-positive or non-finite), clears the trace, and resets the global
    /// best. Fresh → Initialized.
    fn init(&mut self) {
        let n = self.distances.num_cities();
        let m = self.config.num_ants as f64;
        let c_nn = self.distances.nearest_neighbor_tour_length(0);
        let tau0 = if c_nn.is_finite() && c_nn > 0.0 {
            m / c_nn
        } else {
            1.0
        };

        self.pheromone = PheromoneMatrix::new(n, tau0, self.config.tau_bounds);
        self.trace.clear();
        self.best = None;
        self.cancel_flag.store(false, Ordering::SeqCst);
        self.state = ColonyState::Initialized;

        log::debug!("colony initialized: n={n}, m={}, tau0={tau0:.6}", self.config.num_ants);
    }

    /// Run `budget` iterations (or until convergence), invoking `callback`
    /// every `callback_interval` iterations. Re-initializes the colony
    /// before the first iteration.
    pub fn solve(
        &mut self,
        budget: IterationBudget,
        mut callback: Option<&mut dyn FnMut(ProgressEvent)>,
    ) -> Result<SolveOutcome> {
        self.init();

        let mut iteration = 0usize;
        let mut stalled = 0usize;
        let mut cancelled = false;

        loop {
            if self.cancel_flag.load(Ordering::SeqCst) {
                cancelled = true;
                break;
            }

            let done = match budget {
                IterationBudget::Finite(n) => iteration >= n,
                IterationBudget::Converge => stalled >= self.config.convergence_threshold,
            };
            if done {
                break;
            }

            let improved = self.run_iteration().map_err(|e| {
                log::error!("iteration {} aborted solve: {e}", iteration + 1);
                e
            })?;
            iteration += 1;
            if improved {
                stalled = 0;
            } else {
                stalled += 1;
            }

            if iteration % self.config.callback_interval == 0 {
                if let Some(cb) = callback.as_deref_mut() {
                    let best = self
                        .best
                        .as_ref()
                        .expect("best is always Some after at least one iteration");
                    cb(ProgressEvent {
                        iteration,
                        best_length: best.length(),
                        best_sequence: best.sequence(),
                        iteration_best_trace: &self.trace,
                    });
                }
            }
        }

        self.state = ColonyState::Terminated;

        let best_tour = self.best.clone().unwrap_or_else(|| {
            // n >= 1 is guaranteed by validate(); a single city has a
            // trivially complete, zero-length tour even with zero iterations.
            Tour::from_sequence((0..self.distances.num_cities()).collect(), &self.distances)
        });

        log::info!(
            "solve finished: iterations={iteration}, best_length={:.6}, cancelled={cancelled}",
            best_tour.length()
        );

        Ok(SolveOutcome {
            best_tour,
            cancelled,
        })
    }

    /// Cooperative cancellation: safe to call from any thread. Observed
    /// between iterations only; an in-flight iteration always completes.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
    }

    /// Construct → Improve(all) → Track-best → Evaporate/Deposit, in that
    /// order. Returns whether the global best improved this iteration.
    fn run_iteration(&mut self) -> Result<bool> {
        let n = self.distances.num_cities();
        let m = self.config.num_ants;

        // Phase 1: Construct. Ants are independent; relative ordering across
        // workers is unspecified.
        let mut tours = self.construct_ants(n, m)?;

        // Phase 2: Improve (mode=all). The improved tours are what both
        // best-tracking and deposit use for the rest of this iteration —
        // never regenerate from the raw ants afterward.
        if self.config.local_search == LocalSearchMode::All {
            self.run_parallel(&mut tours, |tour| {
                local_search::improve(tour, &self.distances, self.config.use_3opt)
            });
        }

        // Phase 3: Track best.
        let iteration_best_idx = tours
            .iter()
            .enumerate()
            .min_by_key(|(_, t)| OrderedFloat(t.length()))
            .map(|(i, _)| i)
            .expect("num_ants >= 1 guarantees at least one tour");
        let iteration_best_length = tours[iteration_best_idx].length();
        self.trace.push(iteration_best_length);

        let mut improved = false;
        if self.best.as_ref().map_or(true, |b| iteration_best_length < b.length()) {
            self.best = Some(tours[iteration_best_idx].clone());
            improved = true;
        }

        if self.config.local_search == LocalSearchMode::Best {
            if let Some(best) = self.best.as_mut() {
                local_search::improve(best, &self.distances, self.config.use_3opt);
            }
        }

        // Phase 4: Deposit (evaporate first, then deposit, then clamp).
        self.pheromone.evaporate(self.config.rho);
        self.deposit(&tours);
        self.pheromone.clamp();

        Ok(improved)
    }

    fn construct_ants(&self, n: usize, m: usize) -> Result<Vec<Tour>> {
        let build_one = |i: usize| -> Result<Tour> {
            let start = if self.config.distinct_starts {
                i % n
            } else {
                with_worker_rng(|rng| rng.gen_range(0..n))
            };
            let ant = Ant::new(n, start);
            with_worker_rng(|rng| {
                ant.construct_tour(&self.distances, &self.pheromone, self.config.alpha, self.config.beta, rng)
            })
        };

        if self.use_parallel(m) {
            let results: Vec<Result<Tour>> = self
                .pool
                .as_ref()
                .expect("parallel path implies a pool was built")
                .install(|| (0..m).into_par_iter().map(build_one).collect());
            results.into_iter().collect()
        } else {
            (0..m).map(build_one).collect()
        }
    }

    fn run_parallel(&self, tours: &mut [Tour], f: impl Fn(&mut Tour) + Sync) {
        if self.use_parallel(tours.len()) {
            self.pool
                .as_ref()
                .expect("parallel path implies a pool was built")
                .install(|| tours.par_iter_mut().for_each(|t| f(t)));
        } else {
            tours.iter_mut().for_each(|t| f(t));
        }
    }

    /// Read-only counterpart of `run_parallel`, used by the deposit phase:
    /// every item is dispatched independently across the same pool, relying
    /// on `PheromoneMatrix`'s atomic cells to absorb concurrent writes.
    fn for_each_parallel<T: Sync>(&self, items: &[T], f: impl Fn(&T) + Sync) {
        if self.use_parallel(items.len()) {
            self.pool
                .as_ref()
                .expect("parallel path implies a pool was built")
                .install(|| items.par_iter().for_each(|t| f(t)));
        } else {
            items.iter().for_each(|t| f(t));
        }
    }

    fn use_parallel(&self, count: usize) -> bool {
        self.config.parallel.enabled && self.pool.is_some() && count >= SERIAL_BELOW_ANTS
    }

    /// Deposit according to `pheromone_mode`, then the elitist top-up if
    /// configured. The `All` and `Rank` variants touch every tour's edges and
    /// are dispatched across the same pool construct/improve use, so deposit
    /// is a genuine fork-join phase rather than a single-threaded pass over
    /// an atomic matrix built for concurrent writers.
    fn deposit(&self, tours: &[Tour]) {
        let q = self.config.q;
        match self.config.pheromone_mode {
            PheromoneMode::All => {
                self.for_each_parallel(tours, |tour| {
                    self.pheromone.deposit_tour(tour.sequence(), q, tour.length());
                });
            }
            PheromoneMode::IterationBest => {
                if let Some(best) = tours.iter().min_by_key(|t| OrderedFloat(t.length())) {
                    self.pheromone.deposit_tour(best.sequence(), q, best.length());
                }
            }
            PheromoneMode::GlobalBest => {
                if let Some(best) = &self.best {
                    self.pheromone.deposit_tour(best.sequence(), q, best.length());
                }
            }
            PheromoneMode::Rank => {
                let k = self.config.rank_size_or_default();
                let mut ranked: Vec<&Tour> = tours.iter().collect();
                ranked.sort_by_key(|t| OrderedFloat(t.length()));
                let weighted: Vec<(f64, &Tour)> = ranked
                    .iter()
                    .take(k)
                    .enumerate()
                    .map(|(rank, &tour)| ((k - rank) as f64, tour))
                    .collect();
                self.for_each_parallel(&weighted, |&(weight, tour)| {
                    self.pheromone.deposit_tour(tour.sequence(), weight * q, tour.length());
                });
            }
        }

        if self.config.elitist {
            if let Some(best) = &self.best {
                let amount = self.config.elitist_weight_or_default() * q;
                self.pheromone.deposit_tour(best.sequence(), amount, best.length());
            }
        }
    }
}

fn build_pool(config: &ColonyConfig) -> Option<rayon::ThreadPool> {
    if !config.parallel.enabled || config.parallel.num_threads == 1 {
        return None;
    }
    // Cap worker count to roughly 2*m to avoid pathological atomic
    // contention on the pheromone matrix when m is small relative to
    // hardware parallelism.
    let cap = (2 * config.num_ants).max(1);
    let mut builder = rayon::ThreadPoolBuilder::new();
    if config.parallel.num_threads == 0 {
        // auto: let rayon pick, but still respect the contention cap.
        let auto = rayon::current_num_threads();
        builder = builder.num_threads(auto.min(cap));
    } else {
        builder = builder.num_threads(config.parallel.num_threads.min(cap));
    }
    builder.build().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::City;

    fn triangle() -> Arc<DistanceMatrix> {
        Arc::new(
            DistanceMatrix::from_coordinates(vec![
                City::new(0.0, 0.0),
                City::new(3.0, 0.0),
                City::new(0.0, 4.0),
            ])
            .unwrap(),
        )
    }

    fn square() -> Arc<DistanceMatrix> {
        Arc::new(
            DistanceMatrix::from_coordinates(vec![
                City::new(0.0, 0.0),
                City::new(1.0, 0.0),
                City::new(1.0, 1.0),
                City::new(0.0, 1.0),
            ])
            .unwrap(),
        )
    }

    fn base_config() -> ColonyConfig {
        ColonyConfig {
            num_ants: 20,
            alpha: 1.0,
            beta: 2.0,
            rho: 0.5,
            q: 100.0,
            ..Default::default()
        }
    }

    #[test]
    fn single_city_solves_to_zero_length() {
        let dm = Arc::new(DistanceMatrix::from_coordinates(vec![City::new(0.0, 0.0)]).unwrap());
        let mut colony = Colony::new(dm, base_config()).unwrap();
        let outcome = colony.solve(IterationBudget::Finite(100), None).unwrap();
        assert_eq!(outcome.best_tour.length(), 0.0);
        assert_eq!(outcome.best_tour.sequence(), &[0]);
        assert_eq!(colony.convergence_trace().len(), 100);
    }

    #[test]
    fn two_cities_solves_to_double_edge() {
        let dm = Arc::new(
            DistanceMatrix::from_coordinates(vec![City::new(0.0, 0.0), City::new(5.0, 0.0)]).unwrap(),
        );
        let mut colony = Colony::new(dm, base_config()).unwrap();
        let outcome = colony.solve(IterationBudget::Finite(50), None).unwrap();
        assert_eq!(outcome.best_tour.length(), 10.0);
    }

    #[test]
    fn triangle_converges_near_optimum() {
        let dm = triangle();
        let mut colony = Colony::new(dm, base_config()).unwrap();
        let outcome = colony.solve(IterationBudget::Finite(100), None).unwrap();
        assert!((outcome.best_tour.length() - 12.0).abs() < 0.01);
    }

    #[test]
    fn unit_square_converges_near_four() {
        let dm = square();
        let mut config = base_config();
        config.num_ants = 30;
        let mut colony = Colony::new(dm, config).unwrap();
        let outcome = colony.solve(IterationBudget::Finite(200), None).unwrap();
        assert!((outcome.best_tour.length() - 4.0).abs() < 0.1);
    }

    #[test]
    fn global_best_is_monotonically_non_increasing() {
        let dm = square();
        let mut colony = Colony::new(dm, base_config()).unwrap();

        let mut lengths = Vec::new();
        colony
            .solve(
                IterationBudget::Finite(50),
                Some(&mut |ev: ProgressEvent| lengths.push(ev.best_length)),
            )
            .unwrap();

        for w in lengths.windows(2) {
            assert!(w[1] <= w[0] + 1e-9);
        }
    }

    #[test]
    fn converge_budget_stops_after_stall_threshold() {
        let dm = triangle();
        let mut config = base_config();
        config.convergence_threshold = 50;
        let mut colony = Colony::new(dm, config).unwrap();
        colony.solve(IterationBudget::Converge, None).unwrap();
        assert!(colony.convergence_trace().len() >= 50);
    }

    #[test]
    fn init_sets_every_cell_to_m_over_c_nn() {
        let dm = triangle();
        let config = base_config();
        let m = config.num_ants as f64;
        let mut colony = Colony::new(dm.clone(), config).unwrap();
        colony.init();
        let c_nn = dm.nearest_neighbor_tour_length(0);
        let expected = m / c_nn;
        for i in 0..3 {
            for j in 0..3 {
                assert!((colony.pheromone.get(i, j) - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn cancel_stops_before_budget_exhausted() {
        let dm = square();
        let mut colony = Colony::new(dm, base_config()).unwrap();
        let handle = colony.cancel_handle();
        handle.cancel();
        let outcome = colony.solve(IterationBudget::Finite(1000), None).unwrap();
        assert!(outcome.cancelled);
        assert!(colony.convergence_trace().len() < 1000);
    }

    #[test]
    fn rejects_invalid_rho() {
        let dm = triangle();
        let mut config = base_config();
        config.rho = 0.0;
        assert!(matches!(
            Colony::new(dm, config).unwrap_err(),
            SolverError::InvalidInput(_)
        ));
    }

    #[test]
    fn local_search_best_never_worsens_triangle() {
        let dm = triangle();
        let mut config = base_config();
        config.local_search = LocalSearchMode::Best;
        config.use_3opt = true;
        let mut colony = Colony::new(dm, config).unwrap();
        let outcome = colony.solve(IterationBudget::Finite(100), None).unwrap();
        assert!((outcome.best_tour.length() - 12.0).abs() < 0.01);
    }

    #[test]
    fn rank_mode_runs_to_completion() {
        let dm = square();
        let mut config = base_config();
        config.pheromone_mode = PheromoneMode::Rank;
        config.rank_size = Some(5);
        let mut colony = Colony::new(dm, config).unwrap();
        let outcome = colony.solve(IterationBudget::Finite(30), None).unwrap();
        assert!(outcome.best_tour.validate(4));
    }

    #[test]
    fn elitist_mode_runs_to_completion() {
        let dm = square();
        let mut config = base_config();
        config.elitist = true;
        let mut colony = Colony::new(dm, config).unwrap();
        let outcome = colony.solve(IterationBudget::Finite(30), None).unwrap();
        assert!(outcome.best_tour.validate(4));
    }
}
