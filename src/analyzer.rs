//! Page importance for a crawled collection.
//!
//! [`PageRankAnalyzer`] runs the whole computation in one blocking call:
//! build the link graph, iterate to a rank distribution, then drop the
//! graph and keep only the per-page scores.

use rustc_hash::FxHashMap;

use crate::errors::{Error, Result};
use crate::graph::builder::{build_graph_parallel, GraphBuilder};
use crate::graph::csr::CsrGraph;
use crate::pagerank::observer::{NoopObserver, RankObserver};
use crate::pagerank::standard::StandardPageRank;
use crate::types::{LinkedPage, PageRankConfig};

/// Final page ranks for a page collection.
#[derive(Debug, Clone)]
pub struct PageRankAnalyzer {
    ranks: FxHashMap<String, f64>,
    iterations: usize,
    delta: f64,
    converged: bool,
}

impl PageRankAnalyzer {
    /// Rank every page in `pages`.
    ///
    /// Fails only if `config` is invalid. Hitting the iteration limit is not
    /// an error; check [`converged`](Self::converged).
    pub fn new<I, P>(pages: I, config: &PageRankConfig) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: LinkedPage + Sync,
    {
        Self::with_observer(pages, config, &mut NoopObserver)
    }

    /// Like [`new`](Self::new), reporting each solver iteration to `observer`.
    pub fn with_observer<I, P, O>(pages: I, config: &PageRankConfig, observer: &mut O) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: LinkedPage + Sync,
        O: RankObserver + ?Sized,
    {
        config.validate()?;
        let pages: Vec<P> = pages.into_iter().collect();

        let (ids, result) = {
            let graph = {
                trace_stage!("graph");
                let builder = if config.parallel {
                    build_graph_parallel(&pages)
                } else {
                    GraphBuilder::from_pages(&pages)
                };
                CsrGraph::from_builder(&builder)
            };

            trace_stage!("rank");
            let solver = StandardPageRank::from_config(config);
            let result = if config.parallel {
                solver.run_parallel_observed(&graph, observer)
            } else {
                solver.run_observed(&graph, observer)
            };
            (graph.ids, result)
        };

        let ranks = ids.into_iter().zip(result.scores).collect();

        Ok(Self {
            ranks,
            iterations: result.iterations,
            delta: result.delta,
            converged: result.converged,
        })
    }

    /// Rank of the given page.
    ///
    /// The page must have been part of the ranked collection; any other id
    /// yields [`Error::UnknownPage`].
    pub fn score(&self, page_id: &str) -> Result<f64> {
        self.get(page_id)
            .ok_or_else(|| Error::UnknownPage(page_id.to_string()))
    }

    pub fn get(&self, page_id: &str) -> Option<f64> {
        self.ranks.get(page_id).copied()
    }

    /// Number of ranked pages.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Iterate over (page id, rank) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ranks.iter().map(|(id, &rank)| (id.as_str(), rank))
    }

    /// Highest-ranked pages, best first; ties broken by page id.
    pub fn top_n(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Solver iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Largest per-page change in the final iteration.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Whether the ranks converged before the iteration limit.
    pub fn converged(&self) -> bool {
        self.converged
    }
}
