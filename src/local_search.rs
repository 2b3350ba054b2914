//! 2-opt and 3-opt local search, refining a [`Tour`] in place.
//!
//! Both run a best-improvement sweep to a local optimum: scan all candidate
//! moves, apply the single best improving one, repeat until a sweep finds
//! none. 3-opt enumerates four of the seven classical reconnection patterns
//! (reverse first segment, reverse second, reverse both, swap segments); see
//! DESIGN.md for why the other three are omitted.

use crate::distance::DistanceMatrix;
use crate::tour::Tour;

const EPS: f64 = 1e-9;

/// Run 2-opt to a local optimum, then 3-opt if `use_3opt`. Recomputes the
/// tour's stored length from the sequence after each stage.
pub fn improve(tour: &mut Tour, distances: &DistanceMatrix, use_3opt: bool) {
    two_opt(tour, distances);
    if use_3opt {
        three_opt(tour, distances);
    }
}

/// Repeatedly scan all pairs (i,j) with 0 ≤ i < j−1 ≤ n−2 (skipping the
/// wraparound pair i=0, j=n−1); apply the best improving reversal found in a
/// sweep, repeat until a sweep finds none. No-op below n=4.
pub fn two_opt(tour: &mut Tour, distances: &DistanceMatrix) {
    let mut seq = tour.sequence().to_vec();
    let n = seq.len();
    if n < 4 {
        return;
    }

    loop {
        let mut best_delta = -EPS;
        let mut best_move: Option<(usize, usize)> = None;

        for i in 0..n - 2 {
            let j_start = i + 2;
            for j in j_start..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let a = seq[i];
                let b = seq[i + 1];
                let c = seq[j];
                let d = seq[(j + 1) % n];
                let delta = distances.distance(a, c) + distances.distance(b, d)
                    - distances.distance(a, b)
                    - distances.distance(c, d);
                if delta < best_delta {
                    best_delta = delta;
                    best_move = Some((i, j));
                }
            }
        }

        match best_move {
            Some((i, j)) => seq[i + 1..=j].reverse(),
            None => break,
        }
    }

    let length = distances.tour_length(&seq);
    tour.replace(seq, length);
}

/// For every triple i < j < k of edge positions (skipping the wrap triple),
/// evaluate the four reconnection patterns (reverse first segment, reverse
/// second segment, reverse both, swap segments) and apply the best
/// improvement found in a sweep; repeat until a sweep finds none. No-op
/// below n=6.
pub fn three_opt(tour: &mut Tour, distances: &DistanceMatrix) {
    let mut seq = tour.sequence().to_vec();
    let n = seq.len();
    if n < 6 {
        return;
    }

    loop {
        let mut best_delta = -EPS;
        let mut best_seq: Option<Vec<usize>> = None;

        for i in 0..n - 2 {
            for j in i + 1..n - 1 {
                for k in j + 1..n {
                    if i == 0 && k == n - 1 {
                        continue;
                    }

                    let base = segment_cost(&seq, i, j, k, distances);
                    for candidate in reconnections(&seq, i, j, k) {
                        let new_cost = segment_cost(&candidate, i, j, k, distances);
                        let delta = new_cost - base;
                        if delta < best_delta {
                            best_delta = delta;
                            best_seq = Some(candidate);
                        }
                    }
                }
            }
        }

        match best_seq {
            Some(next) => seq = next,
            None => break,
        }
    }

    let length = distances.tour_length(&seq);
    tour.replace(seq, length);
}

/// Cost of the three edges removed/reconnected at positions (i,i+1), (j,j+1),
/// (k,k+1) for `seq` in its current arrangement — used to compare a
/// reconnection candidate against the original without recomputing the whole
/// tour length.
fn segment_cost(seq: &[usize], i: usize, j: usize, k: usize, distances: &DistanceMatrix) -> f64 {
    let n = seq.len();
    distances.distance(seq[i], seq[i + 1])
        + distances.distance(seq[j], seq[j + 1])
        + distances.distance(seq[k], seq[(k + 1) % n])
}

/// The four non-trivial reconnections of the three segments created by
/// removing edges (i,i+1), (j,j+1), (k,k+1): reverse the first segment,
/// reverse the second, reverse both, or swap the two middle segments.
fn reconnections(seq: &[usize], i: usize, j: usize, k: usize) -> [Vec<usize>; 4] {
    let prefix = &seq[..=i];
    let seg1 = &seq[i + 1..=j];
    let seg2 = &seq[j + 1..=k];
    let suffix = &seq[k + 1..];

    let mut rev_seg1 = prefix.to_vec();
    rev_seg1.extend(seg1.iter().rev());
    rev_seg1.extend(seg2);
    rev_seg1.extend(suffix);

    let mut rev_seg2 = prefix.to_vec();
    rev_seg2.extend(seg1);
    rev_seg2.extend(seg2.iter().rev());
    rev_seg2.extend(suffix);

    let mut rev_both = prefix.to_vec();
    rev_both.extend(seg1.iter().rev());
    rev_both.extend(seg2.iter().rev());
    rev_both.extend(suffix);

    let mut swapped = prefix.to_vec();
    swapped.extend(seg2);
    swapped.extend(seg1);
    swapped.extend(suffix);

    [rev_seg1, rev_seg2, rev_both, swapped]
}
