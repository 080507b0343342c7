//! Constants shared by the engine, the memory budget, and the binary.

/// Fibonacci values answered without entering the doubling loop.
///
/// F(0) through F(3). Every index from 4 upward goes through the
/// general path.
pub const BASE_CASES: [u64; 4] = [0, 1, 1, 2];

/// Largest index answered from [`BASE_CASES`].
pub const MAX_BASE_CASE: u64 = 3;

/// log2 of the golden ratio, the growth rate of F(n) in bits per index.
pub const LOG2_PHI: f64 = 0.694_241_913_630_617_3;

/// Number of big integers alive at the widest point of an evaluation
/// (pair, two squares, and the product being built).
pub const LIVE_TEMPORARIES: usize = 4;

/// Exit codes used by the `lucasfib` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// An index could not be parsed.
    pub const ERROR_INVALID_INDEX: i32 = 2;
    /// The memory estimate exceeded the configured limit.
    pub const ERROR_RESOURCE_EXHAUSTION: i32 = 3;
}
