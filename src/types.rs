//! Core input and configuration types.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Read-only view of a crawled page: its identifier and outgoing links.
///
/// The crawler owns the page records; the graph builder only needs these two
/// accessors, so any record type can be ranked without being converted.
pub trait LinkedPage {
    /// Unique identifier of the page (typically its URI).
    fn page_id(&self) -> &str;

    /// Outgoing link targets, in document order. May contain duplicates,
    /// self-links and links to pages outside the collection.
    fn links(&self) -> &[String];
}

/// A crawled page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub links: Vec<String>,
}

impl Page {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            links: Vec::new(),
        }
    }

    /// Create a page with the given outgoing links.
    pub fn with_links<I, S>(id: impl Into<String>, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            links: links.into_iter().map(Into::into).collect(),
        }
    }
}

impl LinkedPage for Page {
    fn page_id(&self) -> &str {
        &self.id
    }

    fn links(&self) -> &[String] {
        &self.links
    }
}

impl<P: LinkedPage + ?Sized> LinkedPage for &P {
    fn page_id(&self) -> &str {
        (**self).page_id()
    }

    fn links(&self) -> &[String] {
        (**self).links()
    }
}

/// Configuration for ranking a page collection.
///
/// # JSON shape
///
/// ```json
/// { "decay": 0.85, "epsilon": 0.00015, "limit": 50, "parallel": false }
/// ```
///
/// Omitted fields take their defaults; unrecognized fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageRankConfig {
    /// Probability that the surfer follows a link instead of teleporting.
    pub decay: f64,
    /// Per-page change below which the distribution counts as converged.
    pub epsilon: f64,
    /// Maximum number of iterations.
    pub limit: usize,
    /// Use the rayon-backed solver.
    pub parallel: bool,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            decay: 0.85,
            epsilon: 0.00015,
            limit: 50,
            parallel: false,
        }
    }
}

impl PageRankConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parse a JSON config document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the solver cannot give a meaningful answer for.
    pub fn validate(&self) -> Result<()> {
        if !self.decay.is_finite() || !(0.0..=1.0).contains(&self.decay) {
            return Err(Error::InvalidParameter(format!(
                "decay must be in [0,1], got {}",
                self.decay
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "epsilon must be finite and > 0, got {}",
                self.epsilon
            )));
        }
        if self.limit == 0 {
            return Err(Error::InvalidParameter("limit must be > 0".to_string()));
        }
        Ok(())
    }
}
