//! PageRank over the link graph
//!
//! This module provides the power-iteration solver and its result type.

pub mod observer;
pub mod standard;

/// Result of a PageRank computation
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest per-node change in the final iteration
    pub delta: f64,
    /// Whether the algorithm converged before hitting the iteration limit
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get top N nodes by score, ties broken by node ID
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        indexed.truncate(n);
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> Option<f64> {
        self.scores.get(node as usize).copied()
    }

    /// Sum of all scores (1.0 up to rounding for a non-empty graph)
    pub fn mass(&self) -> f64 {
        self.scores.iter().sum()
    }
}

/// Largest absolute per-node difference between two distributions
pub(crate) fn max_abs_diff(old: &[f64], new: &[f64]) -> f64 {
    old.iter()
        .zip(new.iter())
        .map(|(o, n)| (o - n).abs())
        .fold(0.0, f64::max)
}
