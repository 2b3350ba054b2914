//! Ant Colony Optimization engine for the symmetric Euclidean Travelling
//! Salesman Problem, with 2-opt/3-opt local search and a parallel colony
//! scheduler.
//!
//! # Example
//!
//! ```no_run
//! use aco_tsp_engine::{City, Colony, ColonyConfig, DistanceMatrix, IterationBudget};
//! use std::sync::Arc;
//!
//! let cities = vec![City::new(0.0, 0.0), City::new(3.0, 0.0), City::new(0.0, 4.0)];
//! let distances = Arc::new(DistanceMatrix::from_coordinates(cities).unwrap());
//!
//! let mut colony = Colony::new(distances, ColonyConfig::default()).unwrap();
//! let outcome = colony.solve(IterationBudget::Finite(100), None).unwrap();
//! println!("best tour length: {:.2}", outcome.best_tour.length());
//! ```

pub mod ant;
pub mod colony;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod pheromone;
pub mod tour;

pub use ant::Ant;
pub use colony::{
    CancelHandle, Colony, ColonyConfig, IterationBudget, LocalSearchMode, ParallelConfig,
    PheromoneMode, ProgressEvent, SolveOutcome,
};
pub use distance::{City, DistanceMatrix};
pub use error::{Result, SolverError};
pub use pheromone::{PheromoneBounds, PheromoneMatrix};
pub use tour::Tour;
