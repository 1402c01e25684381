//! Standard PageRank algorithm
//!
//! Implements damped power iteration with uniform teleportation and
//! proper handling of dangling nodes: a page without outgoing links spreads
//! its followed mass evenly over every page in the graph.

use rayon::prelude::*;

use super::observer::{NoopObserver, RankObserver};
use super::{max_abs_diff, PageRankResult};
use crate::graph::csr::CsrGraph;
use crate::types::PageRankConfig;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Probability of following a link rather than teleporting (typically 0.85)
    pub decay: f64,
    /// Convergence threshold on the largest per-node change
    pub epsilon: f64,
    /// Maximum number of iterations
    pub limit: usize,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self::from_config(&PageRankConfig::default())
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the numeric settings from a [`PageRankConfig`]
    pub fn from_config(config: &PageRankConfig) -> Self {
        Self {
            decay: config.decay,
            epsilon: config.epsilon,
            limit: config.limit,
        }
    }

    /// Set the decay factor
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Set the convergence threshold
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the maximum iterations
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Run PageRank on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        self.run_observed(graph, &mut NoopObserver)
    }

    /// Run PageRank, reporting every iteration to `observer`
    pub fn run_observed<O>(&self, graph: &CsrGraph, observer: &mut O) -> PageRankResult
    where
        O: RankObserver + ?Sized,
    {
        let n_f64 = graph.num_nodes as f64;
        let decay = self.decay;
        let teleport = (1.0 - decay) / n_f64;
        let dangling_nodes = graph.dangling_nodes();

        self.iterate(graph, observer, |scores, next| {
            // Dangling pages scatter to every page, including themselves
            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            next.fill(decay * dangling_mass / n_f64);

            // Propagate scores through links
            for (node, &score) in scores.iter().enumerate() {
                let degree = graph.degree(node as u32);
                if degree > 0 {
                    let share = decay * score / degree as f64;
                    for target in graph.neighbors(node as u32) {
                        next[target as usize] += share;
                    }
                }
            }

            for value in next.iter_mut() {
                *value += teleport;
            }
        })
    }

    /// Run PageRank with the per-node update spread across the rayon pool
    ///
    /// Pull-based: each node sums the shares of its in-links, so no two
    /// workers ever write the same slot.
    pub fn run_parallel(&self, graph: &CsrGraph) -> PageRankResult {
        self.run_parallel_observed(graph, &mut NoopObserver)
    }

    /// Parallel variant of [`StandardPageRank::run_observed`]
    pub fn run_parallel_observed<O>(&self, graph: &CsrGraph, observer: &mut O) -> PageRankResult
    where
        O: RankObserver + ?Sized,
    {
        let n_f64 = graph.num_nodes as f64;
        let decay = self.decay;
        let teleport = (1.0 - decay) / n_f64;
        let dangling_nodes = graph.dangling_nodes();
        let inbound = graph.transpose();
        let mut shares = vec![0.0; graph.num_nodes];

        self.iterate(graph, observer, |scores, next| {
            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            let dangling_share = decay * dangling_mass / n_f64;

            shares.par_iter_mut().enumerate().for_each(|(node, share)| {
                let degree = graph.degree(node as u32);
                *share = if degree > 0 {
                    decay * scores[node] / degree as f64
                } else {
                    0.0
                };
            });

            let shares = &shares;
            next.par_iter_mut().enumerate().for_each(|(node, value)| {
                let linked: f64 = inbound
                    .neighbors(node as u32)
                    .map(|source| shares[source as usize])
                    .sum();
                *value = dangling_share + linked + teleport;
            });
        })
    }

    /// Shared power-iteration loop
    ///
    /// `step` fills the next distribution from the current one. Buffers are
    /// swapped after every iteration; the current one is never written.
    fn iterate<O, F>(&self, graph: &CsrGraph, observer: &mut O, mut step: F) -> PageRankResult
    where
        O: RankObserver + ?Sized,
        F: FnMut(&[f64], &mut [f64]),
    {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        // Initialize scores uniformly
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];

        let mut iterations = 0;
        let mut delta = f64::INFINITY;
        let mut converged = false;

        while iterations < self.limit {
            iterations += 1;

            step(&scores, &mut next);
            delta = max_abs_diff(&scores, &next);
            observer.on_iteration(iterations, delta, &next);

            #[cfg(feature = "tracing")]
            tracing::debug!(iteration = iterations, delta, "pagerank iteration");

            // Swap buffers
            std::mem::swap(&mut scores, &mut next);

            // A change of exactly epsilon is not converged
            if delta < self.epsilon {
                converged = true;
                break;
            }
        }

        #[cfg(feature = "tracing")]
        if converged {
            tracing::info!(iterations, delta, nodes = n, "pagerank converged");
        } else {
            tracing::warn!(
                iterations,
                delta,
                epsilon = self.epsilon,
                "pagerank hit iteration limit before converging"
            );
        }

        PageRankResult::new(scores, iterations, delta, converged)
    }
}
