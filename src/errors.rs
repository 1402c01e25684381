//! Crate error type.

/// Errors surfaced by the analyzer and configuration layer.
///
/// The solver itself never fails: non-convergence is reported through
/// [`PageRankResult::converged`](crate::pagerank::PageRankResult::converged).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("unknown page: {0}")]
    UnknownPage(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
