//! Fast doubling with a Lucas-sequence tail.
//!
//! The index is split as `n = s * 2^k`. A left-to-right double-and-add
//! scan over the bits of `s` produces `(F(s-1), F(s))`. If `k > 0` the
//! pair is turned into `(F(s), L(s))` and doubled `k` times using
//!   F(2m) = F(m) * L(m)
//!   L(2m) = L(m)^2 - 2 * (-1)^m
//! which costs two multiplications per step instead of three.

use num_bigint::BigUint;
use tracing::debug;

use crate::calculator::CoreCalculator;
use crate::constants::{BASE_CASES, MAX_BASE_CASE};
use crate::index::Decomposition;
use crate::pair::{FibonacciPair, LucasPair};

/// Compute F(n).
///
/// Allocation failure inside `num-bigint` aborts the process; there is
/// no partial result.
///
/// # Example
/// ```
/// use lucasfib_core::lucas::evaluate;
///
/// assert_eq!(evaluate(17).to_string(), "1597");
/// assert_eq!(evaluate(100).to_string(), "354224848179261915075");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn evaluate(n: u64) -> BigUint {
    if n <= MAX_BASE_CASE {
        return BigUint::from(BASE_CASES[n as usize]);
    }

    let decomposition = Decomposition::of(n);
    debug!(
        n,
        odd_part = decomposition.odd_part,
        shift = decomposition.shift,
        "decomposed index"
    );

    let pair = odd_part_pair(&decomposition);
    if decomposition.shift == 0 {
        return pair.into_parts().1;
    }

    lucas_tail(pair, &decomposition)
}

/// Double-and-add over the bits of the odd part, giving
/// `(F(s-1), F(s))`.
fn odd_part_pair(decomposition: &Decomposition) -> FibonacciPair {
    let mut pair = FibonacciPair::new();
    for (_, set) in decomposition.scan_bits() {
        pair.double();
        if set {
            pair.advance();
        }
    }
    pair
}

/// Advance `(F(s-1), F(s))` from index `s` to `s * 2^k`, `k >= 1`.
fn lucas_tail(pair: FibonacciPair, decomposition: &Decomposition) -> BigUint {
    let mut lucas = LucasPair::from_fibonacci_pair(pair, decomposition.odd_part);
    debug!(
        bits = lucas.lucas.bits(),
        steps = decomposition.shift,
        "entering lucas phase"
    );
    for _ in 1..decomposition.shift {
        lucas.double();
    }
    lucas.into_doubled_fib()
}

/// Fast doubling calculator with the Lucas shortcut for even indices.
///
/// # Example
/// ```
/// use lucasfib_core::calculator::CoreCalculator;
/// use lucasfib_core::lucas::LucasDoubling;
///
/// let calc = LucasDoubling::new();
/// assert_eq!(calc.calculate_core(1000).to_string().len(), 209);
/// ```
pub struct LucasDoubling;

impl LucasDoubling {
    /// Create a new `LucasDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LucasDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for LucasDoubling {
    fn calculate_core(&self, n: u64) -> BigUint {
        evaluate(n)
    }

    fn name(&self) -> &'static str {
        "LucasDoubling"
    }
}
