//! Single-agent tour construction by roulette-wheel selection.
//!
//! At each step, weighs every unvisited city by τ(i,j)^α · η(i,j)^β and
//! draws one by roulette wheel, falling back to a uniform choice if every
//! weight collapses to zero.

use crate::distance::DistanceMatrix;
use crate::error::{Result, SolverError};
use crate::pheromone::PheromoneMatrix;
use crate::tour::Tour;
use rand::Rng;

/// ε floor on distance, avoiding a division by zero when two cities coincide.
const SELECTION_EPS: f64 = 1e-10;

/// A single ant's in-progress tour. Created fresh for each iteration and
/// discarded once `complete_tour` succeeds — ants carry no cross-iteration
/// state.
pub struct Ant {
    visited: Vec<bool>,
    seq: Vec<usize>,
    current: usize,
}

impl Ant {
    /// Start a fresh ant at `start_city`.
    pub fn new(n: usize, start_city: usize) -> Self {
        let mut visited = vec![false; n];
        visited[start_city] = true;
        Ant {
            visited,
            seq: vec![start_city],
            current: start_city,
        }
    }

    /// Mark `city` visited and move there. Fails with `ProtocolError` if
    /// `city` was already visited.
    pub fn visit(&mut self, city: usize) -> Result<()> {
        if self.visited[city] {
            return Err(SolverError::ProtocolError(format!(
                "ant asked to visit already-visited city {city}"
            )));
        }
        self.visited[city] = true;
        self.seq.push(city);
        self.current = city;
        Ok(())
    }

    /// Select the next city by roulette wheel over the unvisited set,
    /// weighted by τ(i,j)^α · (1 / max(d(i,j), ε))^β. Returns `None` only if
    /// every city is already visited.
    pub fn select_next(
        &self,
        distances: &DistanceMatrix,
        pheromone: &PheromoneMatrix,
        alpha: f64,
        beta: f64,
        rng: &mut impl Rng,
    ) -> Option<usize> {
        let n = self.visited.len();
        let unvisited: Vec<usize> = (0..n).filter(|&j| !self.visited[j]).collect();
        if unvisited.is_empty() {
            return None;
        }

        let weights: Vec<f64> = unvisited
            .iter()
            .map(|&j| {
                let tau = pheromone.get(self.current, j).powf(alpha);
                let eta = (1.0 / distances.distance(self.current, j).max(SELECTION_EPS)).powf(beta);
                tau * eta
            })
            .collect();

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            let idx = rng.gen_range(0..unvisited.len());
            return Some(unvisited[idx]);
        }

        let mut r = rng.gen::<f64>() * total;
        for (&city, &w) in unvisited.iter().zip(weights.iter()) {
            r -= w;
            if r <= 0.0 {
                return Some(city);
            }
        }
        // Floating-point rounding can leave a tiny positive remainder; fall
        // back to the last candidate rather than panicking.
        unvisited.last().copied()
    }

    /// Drive this ant to a complete tour, selecting one city at a time until
    /// every city has been visited.
    pub fn construct_tour(
        mut self,
        distances: &DistanceMatrix,
        pheromone: &PheromoneMatrix,
        alpha: f64,
        beta: f64,
        rng: &mut impl Rng,
    ) -> Result<Tour> {
        let n = self.visited.len();
        while self.seq.len() < n {
            match self.select_next(distances, pheromone, alpha, beta, rng) {
                Some(next) => self.visit(next)?,
                None => {
                    return Err(SolverError::IncompleteTour(format!(
                        "ant stuck after visiting {} of {} cities",
                        self.seq.len(),
                        n
                    )))
                }
            }
        }
        self.complete_tour(distances)
    }

    /// Finalize the tour. Fails with `IncompleteTour` if not every city has
    /// been visited yet.
    pub fn complete_tour(self, distances: &DistanceMatrix) -> Result<Tour> {
        let n = self.visited.len();
        if self.seq.len() != n {
            return Err(SolverError::IncompleteTour(format!(
                "tour has {} of {} cities",
                self.seq.len(),
                n
            )));
        }
        Ok(Tour::from_sequence(self.seq, distances))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::City;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_coordinates(vec![
            City::new(0.0, 0.0),
            City::new(3.0, 0.0),
            City::new(0.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn construct_tour_visits_every_city_exactly_once() {
        let dm = triangle();
        let pheromone = PheromoneMatrix::new(3, 1.0, None);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let ant = Ant::new(3, 0);
        let tour = ant.construct_tour(&dm, &pheromone, 1.0, 2.0, &mut rng).unwrap();
        assert!(tour.validate(3));
    }

    #[test]
    fn visiting_twice_is_a_protocol_error() {
        let mut ant = Ant::new(3, 0);
        ant.visit(1).unwrap();
        let err = ant.visit(1).unwrap_err();
        assert!(matches!(err, SolverError::ProtocolError(_)));
    }

    #[test]
    fn complete_tour_before_fully_visited_is_incomplete() {
        let dm = triangle();
        let ant = Ant::new(3, 0);
        let err = ant.complete_tour(&dm).unwrap_err();
        assert!(matches!(err, SolverError::IncompleteTour(_)));
    }

    #[test]
    fn zero_weight_selection_falls_back_to_uniform_choice() {
        // alpha = 0 and beta = 0 makes every weight exactly 1, never zero;
        // drive pheromone to zero directly to exercise the `total <= 0` path.
        let dm = triangle();
        let pheromone = PheromoneMatrix::new(3, 0.0, None);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let ant = Ant::new(3, 0);
        // alpha > 0 with tau == 0 everywhere forces every weight to 0.
        let next = ant.select_next(&dm, &pheromone, 1.0, 2.0, &mut rng);
        assert!(next.is_some());
    }
}
