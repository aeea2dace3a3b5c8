//! Sentence centrality ranking
//!
//! This module provides power iteration over the sentence similarity graph.

pub mod power;

/// Result of a ranking run
#[derive(Debug, Clone, PartialEq)]
pub struct RankResult {
    /// Scores for each sentence (indexed by position)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final L1 distance between successive vectors
    pub delta: f64,
    /// Whether the run stopped below the threshold rather than at the cap
    pub converged: bool,
}

impl RankResult {
    /// Create a new rank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Top N sentence indices by score, ties by ascending index
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a sentence
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(index).copied().unwrap_or(0.0)
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }
}
