//! # linkrank
//!
//! Link-structure importance scores for a closed collection of crawled
//! pages, computed with damped PageRank power iteration.
//!
//! ```text
//! pages → GraphBuilder → CsrGraph → StandardPageRank → PageRankAnalyzer::score
//! ```
//!
//! ```
//! use linkrank::{Page, PageRankAnalyzer, PageRankConfig};
//!
//! let pages = vec![
//!     Page::with_links("https://a.example", ["https://b.example"]),
//!     Page::with_links("https://b.example", ["https://a.example", "https://c.example"]),
//!     Page::new("https://c.example"),
//! ];
//! let analyzer = PageRankAnalyzer::new(&pages, &PageRankConfig::default())?;
//! let rank = analyzer.score("https://a.example")?;
//! assert!(rank > 0.0 && rank < 1.0);
//! # Ok::<(), linkrank::Error>(())
//! ```
//!
//! Guarantees:
//! - every link in the graph points at a page of the collection, and no page
//!   links to itself;
//! - ranks sum to 1.0 after every iteration;
//! - results do not depend on the order pages are supplied.

/// Enter a tracing span for a computation stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("linkrank", stage = $name).entered();
    };
}

pub mod analyzer;
pub mod errors;
pub mod graph;
pub mod pagerank;
pub mod types;

pub use analyzer::PageRankAnalyzer;
pub use errors::{Error, Result};
pub use graph::builder::{build_graph_parallel, GraphBuilder};
pub use graph::csr::CsrGraph;
pub use pagerank::observer::{IterationLog, IterationReport, NoopObserver, RankObserver};
pub use pagerank::standard::StandardPageRank;
pub use pagerank::PageRankResult;
pub use types::{LinkedPage, Page, PageRankConfig};
