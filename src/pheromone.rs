//! Pheromone matrix: symmetric n×n floating-point state with atomic deposit.
//!
//! `evaporate` multiplies every cell, `deposit` adds along both directions of
//! a tour edge, `clamp` enforces an optional [τ_min, τ_max] bound pass after
//! deposit. Deposit must survive concurrent calls from many rayon workers, so
//! each cell is an independent atomic accumulator rather than a plain `f64`
//! behind one lock.

use std::sync::atomic::{AtomicU64, Ordering};

/// A single pheromone cell, stored as the bit pattern of an `f64` inside an
/// `AtomicU64`. `fetch_add` is a compare-and-swap retry loop; `load`/`store`
/// are plain atomic ops. `Ordering::Relaxed` is sufficient everywhere here:
/// cells are independent accumulators and the only cross-thread ordering
/// that matters (evaporate completes before deposit) is already enforced by
/// the phase fence in the colony coordinator, not by atomic ordering.
#[derive(Debug)]
struct AtomicCell(AtomicU64);

impl AtomicCell {
    fn new(value: f64) -> Self {
        AtomicCell(AtomicU64::new(value.to_bits()))
    }

    fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    fn store(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }

    /// Atomically add `delta`, retrying the compare-and-swap until it wins.
    fn fetch_add(&self, delta: f64) {
        let mut current = self.0.load(Ordering::Relaxed);
        loop {
            let new_value = f64::from_bits(current) + delta;
            match self.0.compare_exchange_weak(
                current,
                new_value.to_bits(),
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return,
                Err(observed) => current = observed,
            }
        }
    }
}

impl Clone for AtomicCell {
    fn clone(&self) -> Self {
        AtomicCell::new(self.load())
    }
}

/// Optional [τ_min, τ_max] clamp window.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PheromoneBounds {
    pub tau_min: f64,
    pub tau_max: f64,
}

/// Symmetric n×n pheromone matrix. Every cell is an atomic accumulator so
/// `deposit` is safe under concurrent calls from many workers touching
/// overlapping edges. `evaporate` writes disjoint cells and needs no
/// synchronization beyond the phase fence the colony coordinator already
/// enforces: evaporate must complete before any deposit in the same
/// iteration.
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    n: usize,
    cells: Vec<AtomicCell>,
    bounds: Option<PheromoneBounds>,
}

impl PheromoneMatrix {
    /// Build an n×n matrix initialized to `value`, with optional bounds.
    pub fn new(n: usize, value: f64, bounds: Option<PheromoneBounds>) -> Self {
        let cells = (0..n * n).map(|_| AtomicCell::new(value)).collect();
        PheromoneMatrix { n, cells, bounds }
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        i * self.n + j
    }

    /// Set every entry to `value`.
    pub fn init(&self, value: f64) {
        for cell in &self.cells {
            cell.store(value);
        }
    }

    /// Read; symmetry lets callers query either direction.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[self.index(i, j)].load()
    }

    /// Write both (i,j) and (j,i).
    pub fn set(&self, i: usize, j: usize, v: f64) {
        self.cells[self.index(i, j)].store(v);
        self.cells[self.index(j, i)].store(v);
    }

    /// Multiply every entry by (1 − rho).
    pub fn evaporate(&self, rho: f64) {
        let retain = 1.0 - rho;
        for cell in &self.cells {
            let v = cell.load();
            cell.store(v * retain);
        }
    }

    /// Atomically add `amount` to both (i,j) and (j,i).
    pub fn deposit(&self, i: usize, j: usize, amount: f64) {
        self.cells[self.index(i, j)].fetch_add(amount);
        self.cells[self.index(j, i)].fetch_add(amount);
    }

    /// Deposit `q / length` along every edge of `seq` (including the closing
    /// edge), the shared building block every deposit variant uses.
    pub fn deposit_tour(&self, seq: &[usize], q: f64, length: f64) {
        if length <= 0.0 || !length.is_finite() || seq.len() < 2 {
            return;
        }
        let amount = q / length;
        for w in 0..seq.len() {
            let from = seq[w];
            let to = seq[(w + 1) % seq.len()];
            self.deposit(from, to, amount);
        }
    }

    /// Enforce (tau_min, tau_max) if configured.
    pub fn clamp(&self) {
        if let Some(bounds) = self.bounds {
            for cell in &self.cells {
                let v = cell.load();
                cell.store(v.clamp(bounds.tau_min, bounds.tau_max));
            }
        }
    }

    pub fn bounds(&self) -> Option<PheromoneBounds> {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Option<PheromoneBounds>) {
        self.bounds = bounds;
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// True iff every cell is non-negative and τ[i][j] == τ[j][i] for all i,j.
    /// Used by tests; not needed on the hot path since `set`/`deposit` always
    /// mirror both directions by construction.
    pub fn is_consistent(&self) -> bool {
        for i in 0..self.n {
            for j in 0..self.n {
                let v = self.get(i, j);
                if v < 0.0 || (v - self.get(j, i)).abs() > 1e-9 {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_fills_every_cell() {
        let m = PheromoneMatrix::new(4, 2.5, None);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m.get(i, j), 2.5);
            }
        }
    }

    #[test]
    fn deposit_mirrors_both_directions() {
        let m = PheromoneMatrix::new(3, 0.0, None);
        m.deposit(0, 1, 5.0);
        assert_eq!(m.get(0, 1), 5.0);
        assert_eq!(m.get(1, 0), 5.0);
    }

    #[test]
    fn evaporate_scales_every_cell() {
        let m = PheromoneMatrix::new(2, 10.0, None);
        m.evaporate(0.1);
        assert!((m.get(0, 1) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn clamp_enforces_bounds() {
        let m = PheromoneMatrix::new(
            2,
            100.0,
            Some(PheromoneBounds {
                tau_min: 1.0,
                tau_max: 10.0,
            }),
        );
        m.clamp();
        assert_eq!(m.get(0, 1), 10.0);

        m.init(0.0);
        m.clamp();
        assert_eq!(m.get(0, 1), 1.0);
    }

    #[test]
    fn stays_symmetric_and_nonnegative_after_operations() {
        let m = PheromoneMatrix::new(5, 1.0, None);
        m.deposit(2, 4, 3.0);
        m.evaporate(0.3);
        m.deposit(0, 1, 1.0);
        assert!(m.is_consistent());
    }

    #[test]
    fn concurrent_deposits_on_overlapping_edges_dont_lose_updates() {
        use std::sync::Arc;
        use std::thread;

        let m = Arc::new(PheromoneMatrix::new(4, 0.0, None));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let m = Arc::clone(&m);
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    m.deposit(0, 1, 1.0);
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(m.get(0, 1), 8000.0);
        assert_eq!(m.get(1, 0), 8000.0);
    }
}
