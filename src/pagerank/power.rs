//! Power iteration ranker
//!
//! Repeats `p = normalize(Mᵀ·p)` from a uniform start. Unlike PageRank there
//! is no damping factor and no teleport term, so on some graph topologies the
//! vector oscillates instead of settling. The iteration cap bounds that case
//! and the result reports `converged = false`.

use super::RankResult;
use crate::graph::similarity::SimilarityMatrix;

/// Undamped power iteration over a similarity matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerIterationRanker {
    /// Stop once the L1 distance between successive vectors is below this
    pub epsilon: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
}

impl Default for PowerIterationRanker {
    fn default() -> Self {
        Self {
            epsilon: 1e-4,
            max_iterations: 100,
        }
    }
}

impl PowerIterationRanker {
    /// Create a ranker with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the convergence threshold
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Rank the sentences of a similarity matrix.
    ///
    /// A step whose product sums to exactly zero leaves the vector unchanged,
    /// which also ends the loop since the distance is then zero.
    pub fn run(&self, matrix: &SimilarityMatrix) -> RankResult {
        let n = matrix.len();
        if n == 0 {
            return RankResult::new(vec![], 0, 0.0, true);
        }

        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations {
            iterations += 1;

            // next = Mᵀ · scores
            next.fill(0.0);
            for (row, &weight) in matrix.rows().zip(scores.iter()) {
                for (cell, &value) in next.iter_mut().zip(row) {
                    *cell += value * weight;
                }
            }

            let sum: f64 = next.iter().sum();
            if sum == 0.0 {
                next.copy_from_slice(&scores);
            } else {
                for value in &mut next {
                    *value /= sum;
                }
            }

            delta = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);

            if delta < self.epsilon {
                break;
            }
        }

        RankResult::new(scores, iterations, delta, delta < self.epsilon)
    }
}
