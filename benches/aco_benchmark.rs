//! Benchmarks for the two hot paths in the engine: pheromone deposit under
//! contention, and a full small-instance solve.

use aco_tsp_engine::{City, Colony, ColonyConfig, DistanceMatrix, IterationBudget, PheromoneMatrix};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn ring_cities(n: usize) -> Vec<City> {
    (0..n)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
            City::new(theta.cos() * 100.0, theta.sin() * 100.0)
        })
        .collect()
}

fn pheromone_deposit_benchmark(c: &mut Criterion) {
    let matrix = PheromoneMatrix::new(50, 1.0, None);
    let tour: Vec<usize> = (0..50).collect();
    c.bench_function("pheromone deposit_tour (n=50)", |b| {
        b.iter(|| matrix.deposit_tour(black_box(&tour), black_box(100.0), black_box(1234.5)))
    });
}

fn solve_small_instance_benchmark(c: &mut Criterion) {
    let distances = Arc::new(DistanceMatrix::from_coordinates(ring_cities(30)).unwrap());
    let config = ColonyConfig {
        num_ants: 20,
        ..Default::default()
    };

    c.bench_function("solve ring(30) / 50 iterations", |b| {
        b.iter(|| {
            let mut colony = Colony::new(distances.clone(), config.clone()).unwrap();
            let outcome = colony.solve(black_box(IterationBudget::Finite(50)), None).unwrap();
            black_box(outcome.best_tour.length())
        })
    });
}

criterion_group!(benches, pheromone_deposit_benchmark, solve_small_instance_benchmark);
criterion_main!(benches);
