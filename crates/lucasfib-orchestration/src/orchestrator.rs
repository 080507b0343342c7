//! Core orchestration: running a calculator over a batch of indices.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, warn};

use lucasfib_core::calculator::Calculator;
use lucasfib_core::options::Options;

use crate::interfaces::{CalculationResult, Summary};

/// How a batch of indices is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One index after another, in input order.
    #[default]
    Sequential,
    /// Indices spread over the rayon pool. Each evaluation still runs on
    /// a single thread.
    Parallel,
}

/// Run `calculator` once for each index.
///
/// Results come back in the order of `indices` regardless of `mode`.
pub fn execute_indices(
    calculator: &dyn Calculator,
    indices: &[u64],
    opts: &Options,
    mode: ExecutionMode,
) -> Vec<CalculationResult> {
    info!(
        count = indices.len(),
        algorithm = calculator.name(),
        ?mode,
        "starting batch"
    );

    match mode {
        ExecutionMode::Sequential => indices
            .iter()
            .map(|&n| execute_one(calculator, n, opts))
            .collect(),
        ExecutionMode::Parallel => indices
            .par_iter()
            .map(|&n| execute_one(calculator, n, opts))
            .collect(),
    }
}

fn execute_one(calculator: &dyn Calculator, n: u64, opts: &Options) -> CalculationResult {
    let start = Instant::now();
    let outcome = calculator.calculate(n, opts);
    let duration = start.elapsed();

    match &outcome {
        Ok(value) => info!(n, bits = value.bits(), ?duration, "computed"),
        Err(e) => warn!(n, error = %e, "calculation failed"),
    }

    CalculationResult {
        n,
        outcome,
        duration,
    }
}

/// Aggregate a batch of results.
#[must_use]
pub fn summarize(results: &[CalculationResult]) -> Summary {
    results.iter().fold(Summary::default(), |mut acc, r| {
        acc.total_duration += r.duration;
        match &r.outcome {
            Ok(value) => {
                acc.succeeded += 1;
                acc.total_bits += value.bits();
            }
            Err(_) => acc.failed += 1,
        }
        acc
    })
}
