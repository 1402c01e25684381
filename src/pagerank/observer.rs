//! Solver observer: per-iteration hooks for logging and debugging.
//!
//! Observers see every intermediate distribution without coupling to the
//! solver loop. The default [`NoopObserver`] compiles away entirely.

/// Receives a callback after each completed iteration.
pub trait RankObserver {
    /// `scores` is the freshly computed distribution, teleport included.
    /// `delta` is the largest per-node change from the previous iteration.
    fn on_iteration(&mut self, iteration: usize, delta: f64, scores: &[f64]);
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RankObserver for NoopObserver {
    #[inline]
    fn on_iteration(&mut self, _iteration: usize, _delta: f64, _scores: &[f64]) {}
}

/// Summary of one solver iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationReport {
    pub iteration: usize,
    pub delta: f64,
    /// Total probability mass of the distribution after this iteration.
    pub mass: f64,
}

/// Observer that records an [`IterationReport`] for every iteration.
#[derive(Debug, Clone, Default)]
pub struct IterationLog {
    pub reports: Vec<IterationReport>,
}

impl IterationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest deviation of any recorded iteration's mass from 1.0.
    pub fn max_mass_error(&self) -> f64 {
        self.reports
            .iter()
            .map(|r| (r.mass - 1.0).abs())
            .fold(0.0, f64::max)
    }
}

impl RankObserver for IterationLog {
    fn on_iteration(&mut self, iteration: usize, delta: f64, scores: &[f64]) {
        self.reports.push(IterationReport {
            iteration,
            delta,
            mass: scores.iter().sum(),
        });
    }
}
