//! Tour representation: an ordered permutation of cities plus its cached
//! cycle length.
//!
//! Value-typed: mutation happens only through the explicit "replace
//! sequence+length" operation, never piecemeal.

use crate::distance::DistanceMatrix;
use std::collections::HashSet;

/// An ordered permutation of `0..n` plus its total cycle length.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tour {
    seq: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Build from a sequence and its already-computed length. Callers that
    /// don't have the length handy should use [`Tour::from_sequence`] instead.
    pub fn new(seq: Vec<usize>, length: f64) -> Self {
        Tour { seq, length }
    }

    /// Build from a sequence, computing the length against `distances`.
    pub fn from_sequence(seq: Vec<usize>, distances: &DistanceMatrix) -> Self {
        let length = distances.tour_length(&seq);
        Tour { seq, length }
    }

    pub fn sequence(&self) -> &[usize] {
        &self.seq
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Replace both the sequence and the length in one atomic-looking write —
    /// the only way this value-typed record is mutated.
    pub fn replace(&mut self, seq: Vec<usize>, length: f64) {
        self.seq = seq;
        self.length = length;
    }

    /// Recompute and store the length from the current sequence.
    pub fn recompute_length(&mut self, distances: &DistanceMatrix) {
        self.length = distances.tour_length(&self.seq);
    }

    /// True iff `seq` has exactly `n` entries, each in `[0, n)`, with no repeats.
    pub fn validate(&self, n: usize) -> bool {
        if self.seq.len() != n {
            return false;
        }
        let mut seen = HashSet::with_capacity(n);
        for &city in &self.seq {
            if city >= n || !seen.insert(city) {
                return false;
            }
        }
        true
    }
}

impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tour(length={:.4}, seq={:?})", self.length, self.seq)
    }
}
