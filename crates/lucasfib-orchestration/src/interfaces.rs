//! Orchestration interfaces.

use std::time::Duration;

use num_bigint::BigUint;

use lucasfib_core::calculator::FibError;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present a successful calculation.
    fn present_result(
        &mut self,
        n: u64,
        value: &BigUint,
        duration: Duration,
    ) -> std::io::Result<()>;

    /// Present a failed calculation.
    fn present_error(&mut self, n: u64, error: &FibError) -> std::io::Result<()>;

    /// Present the totals after all results.
    fn present_summary(&mut self, summary: &Summary) -> std::io::Result<()>;
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Requested index.
    pub n: u64,
    /// The computed value or a structured error.
    pub outcome: Result<BigUint, FibError>,
    /// Computation duration.
    pub duration: Duration,
}

impl CalculationResult {
    /// Send this result to the matching presenter method.
    pub fn present(&self, presenter: &mut dyn ResultPresenter) -> std::io::Result<()> {
        match &self.outcome {
            Ok(value) => presenter.present_result(self.n, value, self.duration),
            Err(e) => presenter.present_error(self.n, e),
        }
    }
}

/// Totals over a batch of results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of indices computed.
    pub succeeded: usize,
    /// Number of indices that failed.
    pub failed: usize,
    /// Sum of the per-index durations.
    pub total_duration: Duration,
    /// Sum of the result bit lengths.
    pub total_bits: u64,
}
