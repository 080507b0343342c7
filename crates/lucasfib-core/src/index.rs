//! Index handling: parsing user input and splitting `n = s * 2^k`.

use crate::calculator::FibError;

/// Split of an index into its odd part and trailing power of two.
///
/// `n == odd_part << shift`. `odd_part` is odd unless `n == 0`, in which
/// case both fields are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposition {
    /// `n` with its trailing zero bits removed.
    pub odd_part: u64,
    /// Number of trailing zero bits of `n`.
    pub shift: u32,
}

impl Decomposition {
    /// Decompose `n` into `(odd_part, shift)`.
    #[must_use]
    pub fn of(n: u64) -> Self {
        if n == 0 {
            return Self {
                odd_part: 0,
                shift: 0,
            };
        }
        let shift = n.trailing_zeros();
        Self {
            odd_part: n >> shift,
            shift,
        }
    }

    /// Bit positions of the odd part consumed by the doubling loop,
    /// highest first. The leading 1 is excluded: it is implicit in the
    /// starting pair `(F(0), F(1))`.
    pub fn scan_bits(&self) -> impl Iterator<Item = (u32, bool)> {
        let odd = self.odd_part;
        let top = u64::BITS - odd.leading_zeros();
        (0..top.saturating_sub(1))
            .rev()
            .map(move |bit| (bit, (odd >> bit) & 1 == 1))
    }
}

/// Parse a Fibonacci index from user input.
///
/// Accepts decimal, `0x` hexadecimal, `0o` octal and `0b` binary, with
/// optional `_` separators. Negative values and anything else are
/// rejected with [`FibError::InvalidIndex`].
///
/// # Example
/// ```
/// use lucasfib_core::index::parse_index;
///
/// assert_eq!(parse_index("1000").unwrap(), 1000);
/// assert_eq!(parse_index("0x10").unwrap(), 16);
/// assert_eq!(parse_index("1_000_000").unwrap(), 1_000_000);
/// assert!(parse_index("-5").is_err());
/// ```
pub fn parse_index(input: &str) -> Result<u64, FibError> {
    let trimmed = input.trim();
    if trimmed.starts_with('-') {
        return Err(FibError::InvalidIndex(format!(
            "{trimmed}: index must be non-negative"
        )));
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let lower = unsigned.to_ascii_lowercase();
    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else {
        (lower.as_str(), 10)
    };

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if cleaned.is_empty() {
        return Err(FibError::InvalidIndex(format!("{trimmed}: no digits")));
    }

    u64::from_str_radix(&cleaned, radix)
        .map_err(|e| FibError::InvalidIndex(format!("{trimmed}: {e}")))
}
