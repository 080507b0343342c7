//! # lucasfib-core
//!
//! Core library for the lucasfib Fibonacci calculator.
//! Implements fast doubling over the odd part of the index followed by
//! Lucas-sequence doubling for its trailing power of two.

pub mod calculator;
pub mod constants;
pub mod index;
pub mod lucas;
pub mod memory_budget;
pub mod options;
pub mod pair;

// Re-exports
pub use calculator::{Calculator, CoreCalculator, FibCalculator, FibError};
pub use constants::{exit_codes, BASE_CASES, LOG2_PHI, MAX_BASE_CASE};
pub use index::{parse_index, Decomposition};
pub use lucas::{evaluate, LucasDoubling};
pub use memory_budget::{parse_memory_limit, MemoryEstimate};
pub use options::Options;
pub use pair::{FibonacciPair, LucasPair};

use num_bigint::BigUint;

/// Compute F(n) using fast doubling with the Lucas shortcut.
///
/// This is a convenience function for simple use cases. For the memory
/// budget check, use the `Calculator` trait with [`FibCalculator`].
///
/// # Example
/// ```
/// assert_eq!(lucasfib_core::fibonacci(10).to_string(), "55");
/// assert_eq!(lucasfib_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    evaluate(n)
}

/// Build the default calculator: [`LucasDoubling`] behind [`FibCalculator`].
#[must_use]
pub fn default_calculator() -> std::sync::Arc<dyn Calculator> {
    std::sync::Arc::new(FibCalculator::new(std::sync::Arc::new(LucasDoubling::new())))
}
