//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration.
//! `CoreCalculator` is the internal trait implemented by the engine.
//! `FibCalculator` is a decorator that adds the base-case fast path
//! (n <= 3) and the memory budget check.

use std::sync::Arc;

use num_bigint::BigUint;
use tracing::debug;

use crate::constants::{BASE_CASES, MAX_BASE_CASE};
use crate::memory_budget::MemoryEstimate;
use crate::options::Options;

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The index is negative or not a number.
    #[error("invalid index: {0}")]
    InvalidIndex(String),

    /// The result would not fit in the allowed memory.
    #[error("resource exhaustion: F(n) needs about {required} bytes, limit is {limit} bytes")]
    ResourceExhaustion {
        /// Estimated bytes needed.
        required: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Public trait for Fibonacci calculators, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Calculate F(n) with the given options.
    fn calculate(&self, n: u64, opts: &Options) -> Result<BigUint, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `FibCalculator`, which answers the base cases itself.
pub trait CoreCalculator: Send + Sync {
    /// Compute F(n) for n > [`MAX_BASE_CASE`].
    fn calculate_core(&self, n: u64) -> BigUint;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreCalculator` with the base cases and the
/// memory budget check.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn calculate_small(n: u64) -> BigUint {
        BigUint::from(BASE_CASES[n as usize])
    }
}

impl Calculator for FibCalculator {
    fn calculate(&self, n: u64, opts: &Options) -> Result<BigUint, FibError> {
        if n <= MAX_BASE_CASE {
            return Ok(Self::calculate_small(n));
        }

        let estimate = MemoryEstimate::estimate(n);
        if !estimate.fits_in(opts.memory_limit) {
            debug!(
                n,
                required = estimate.total_bytes,
                "memory estimate exceeds limit"
            );
            return Err(FibError::ResourceExhaustion {
                required: estimate.total_bytes,
                limit: opts.memory_limit.unwrap_or(usize::MAX),
            });
        }

        Ok(self.inner.calculate_core(n))
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
