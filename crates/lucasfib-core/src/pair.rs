//! Loop-carried state of the two evaluation phases.
//!
//! `FibonacciPair` holds `(F(m-1), F(m))` during the bit-scanning phase:
//!   F(2m-1) = F(m-1)^2 + F(m)^2
//!   F(2m)   = (F(m-1) + F(m))^2 - F(m-1)^2
//!
//! `LucasPair` holds `(F(m), L(m))` during the power-of-two phase:
//!   F(2m) = F(m) * L(m)
//!   L(2m) = L(m)^2 - 2 * (-1)^m

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

/// Consecutive Fibonacci values `(F(m-1), F(m))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FibonacciPair {
    /// F(m-1).
    pub prev: BigUint,
    /// F(m).
    pub curr: BigUint,
}

impl FibonacciPair {
    /// The pair at m = 1: `(F(0), F(1)) = (0, 1)`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prev: BigUint::ZERO,
            curr: BigUint::one(),
        }
    }

    /// Move from index m to 2m.
    ///
    /// `t = a^2` and `u = (a+b)^2` are both taken from the old pair before
    /// either field is overwritten.
    pub fn double(&mut self) {
        let t = &self.prev * &self.prev;
        let sum = &self.prev + &self.curr;
        let u = &sum * &sum;
        let next_prev = &self.curr * &self.curr + &t;
        self.curr = u - t;
        self.prev = next_prev;
    }

    /// Move from index m to m+1: `(a, b) <- (b, a+b)`.
    pub fn advance(&mut self) {
        self.prev += &self.curr;
        std::mem::swap(&mut self.prev, &mut self.curr);
    }

    /// Consume the pair, returning `(F(m-1), F(m))`.
    #[must_use]
    pub fn into_parts(self) -> (BigUint, BigUint) {
        (self.prev, self.curr)
    }
}

impl Default for FibonacciPair {
    fn default() -> Self {
        Self::new()
    }
}

/// `(F(m), L(m))` together with the parity of m.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LucasPair {
    /// F(m).
    pub fib: BigUint,
    /// L(m).
    pub lucas: BigUint,
    odd: bool,
}

impl LucasPair {
    /// Build `(F(m), L(m))` from `(F(m-1), F(m))`.
    ///
    /// `L(m) = 2*F(m+1) - F(m)` with `F(m+1) = F(m-1) + F(m)`.
    #[must_use]
    pub fn from_fibonacci_pair(pair: FibonacciPair, m: u64) -> Self {
        let (prev, fib) = pair.into_parts();
        let next = prev + &fib;
        let lucas = (next << 1u32) - &fib;
        Self {
            fib,
            lucas,
            odd: m.is_odd(),
        }
    }

    /// Whether the current index is odd.
    #[must_use]
    pub fn index_is_odd(&self) -> bool {
        self.odd
    }

    /// Move from index m to 2m.
    pub fn double(&mut self) {
        self.fib *= &self.lucas;
        self.lucas = &self.lucas * &self.lucas;
        // L(m)^2 > 2 for even m > 0
        if self.odd {
            self.lucas += 2u32;
        } else {
            self.lucas -= 2u32;
        }
        self.odd = false;
    }

    /// Final doubling: only F(2m) is needed, so L(2m) is never formed.
    #[must_use]
    pub fn into_doubled_fib(self) -> BigUint {
        self.fib * self.lucas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(prev: u64, curr: u64) -> FibonacciPair {
        FibonacciPair {
            prev: BigUint::from(prev),
            curr: BigUint::from(curr),
        }
    }

    #[test]
    fn new_pair_is_f0_f1() {
        assert_eq!(FibonacciPair::new(), pair(0, 1));
    }

    #[test]
    fn double_from_one() {
        // m = 1 -> 2: (F(1), F(2)) = (1, 1)
        let mut p = FibonacciPair::new();
        p.double();
        assert_eq!(p, pair(1, 1));
    }

    #[test]
    fn double_from_five() {
        // (F(4), F(5)) = (3, 5) -> (F(9), F(10)) = (34, 55)
        let mut p = pair(3, 5);
        p.double();
        assert_eq!(p, pair(34, 55));
    }

    #[test]
    fn advance_steps_once() {
        let mut p = pair(8, 13);
        p.advance();
        assert_eq!(p, pair(13, 21));
    }

    #[test]
    fn double_then_advance() {
        // m = 3 -> 6 -> 7
        let mut p = pair(1, 2);
        p.double();
        assert_eq!(p, pair(5, 8));
        p.advance();
        assert_eq!(p, pair(8, 13));
    }

    #[test]
    fn lucas_from_pair() {
        // s = 5: F(5) = 5, L(5) = 11
        let l = LucasPair::from_fibonacci_pair(pair(3, 5), 5);
        assert_eq!(l.fib, BigUint::from(5u32));
        assert_eq!(l.lucas, BigUint::from(11u32));
        assert!(l.index_is_odd());
    }

    #[test]
    fn lucas_double_from_odd_adds_two() {
        // L(1) = 1 -> L(2) = 1 + 2 = 3
        let mut l = LucasPair::from_fibonacci_pair(FibonacciPair::new(), 1);
        assert_eq!(l.lucas, BigUint::from(1u32));
        l.double();
        assert_eq!(l.fib, BigUint::from(1u32));
        assert_eq!(l.lucas, BigUint::from(3u32));
        assert!(!l.index_is_odd());
    }

    #[test]
    fn lucas_double_from_even_subtracts_two() {
        // m = 2 -> 4 -> 8: L(4) = 7, L(8) = 47, F(8) = 21
        let mut l = LucasPair::from_fibonacci_pair(FibonacciPair::new(), 1);
        l.double();
        l.double();
        assert_eq!(l.fib, BigUint::from(3u32));
        assert_eq!(l.lucas, BigUint::from(7u32));
        assert_eq!(l.into_doubled_fib(), BigUint::from(21u32));
    }

    #[test]
    fn lucas_from_three() {
        // s = 3: doubling twice gives F(6) = 8, then F(12) = 144
        let mut l = LucasPair::from_fibonacci_pair(pair(1, 2), 3);
        assert_eq!(l.lucas, BigUint::from(4u32));
        l.double();
        assert_eq!(l.fib, BigUint::from(8u32));
        assert_eq!(l.lucas, BigUint::from(18u32));
        assert_eq!(l.into_doubled_fib(), BigUint::from(144u32));
    }
}
