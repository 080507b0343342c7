//! Memory budget estimation and validation.

use crate::constants::{LIVE_TEMPORARIES, LOG2_PHI};

/// Memory estimate for a Fibonacci computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEstimate {
    /// Estimated memory for the result itself (in bytes).
    pub result_bytes: usize,
    /// Estimated memory for temporaries (in bytes).
    pub temp_bytes: usize,
    /// Total estimated memory (in bytes).
    pub total_bytes: usize,
}

impl MemoryEstimate {
    /// Estimate memory usage for computing F(n).
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn estimate(n: u64) -> Self {
        // F(n) has about n * log2(phi) bits; the float cast saturates for
        // indices whose result could never be allocated anyway.
        let result_bits = (n as f64 * LOG2_PHI).ceil() as usize;
        let result_bytes = result_bits.div_ceil(8);

        // The widest point of either phase holds the pair and two
        // squares of result size.
        let temp_bytes = result_bytes.saturating_mul(LIVE_TEMPORARIES);

        Self {
            result_bytes,
            temp_bytes,
            total_bytes: result_bytes.saturating_add(temp_bytes),
        }
    }

    /// Check if the computation fits within the given memory limit.
    ///
    /// `None` means unlimited (always fits).
    #[must_use]
    pub fn fits_in(&self, limit: Option<usize>) -> bool {
        match limit {
            None => true,
            Some(l) => self.total_bytes <= l,
        }
    }
}

/// Parse a memory limit string (e.g., "8G", "512M", "1024K").
///
/// An empty string means "no limit" and yields 0.
///
/// # Errors
///
/// Returns an error string if the format is invalid or the value overflows.
pub fn parse_memory_limit(s: &str) -> Result<usize, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    let upper = s.to_ascii_uppercase();
    let (num_str, multiplier): (&str, usize) = if let Some(n) = upper.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = upper.strip_suffix('B') {
        (n, 1)
    } else {
        (upper.as_str(), 1)
    };

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid memory limit {s:?}: {e}"))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("memory limit {s:?} is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_zero() {
        let est = MemoryEstimate::estimate(0);
        assert_eq!(est.total_bytes, 0);
    }

    #[test]
    fn estimate_small() {
        let est = MemoryEstimate::estimate(100);
        // F(100) has 69 bits
        assert_eq!(est.result_bytes, 9);
        assert_eq!(est.temp_bytes, 9 * LIVE_TEMPORARIES);
        assert!(est.total_bytes > est.result_bytes);
    }

    #[test]
    fn estimate_large() {
        let est = MemoryEstimate::estimate(10_000_000);
        // F(10M) ≈ 10M * 0.694 bits ≈ 868KB result
        assert!(est.result_bytes > 800_000);
        assert!(est.result_bytes < 1_000_000);
    }

    #[test]
    fn estimate_saturates() {
        let est = MemoryEstimate::estimate(u64::MAX);
        assert!(est.total_bytes >= est.result_bytes);
        assert!(!est.fits_in(Some(1 << 40)));
    }

    #[test]
    fn fits_in_unlimited() {
        let est = MemoryEstimate::estimate(100_000_000);
        assert!(est.fits_in(None));
    }

    #[test]
    fn fits_in_limit() {
        let est = MemoryEstimate::estimate(1000);
        assert!(est.fits_in(Some(est.total_bytes)));
        assert!(!est.fits_in(Some(est.total_bytes - 1)));
    }

    #[test]
    fn parse_memory_limit_values() {
        assert_eq!(parse_memory_limit("8G").unwrap(), 8 * 1024 * 1024 * 1024);
        assert_eq!(parse_memory_limit("512M").unwrap(), 512 * 1024 * 1024);
        assert_eq!(parse_memory_limit("1024K").unwrap(), 1024 * 1024);
        assert_eq!(parse_memory_limit("64k").unwrap(), 64 * 1024);
        assert_eq!(parse_memory_limit("100B").unwrap(), 100);
        assert_eq!(parse_memory_limit("4096").unwrap(), 4096);
        assert_eq!(parse_memory_limit("").unwrap(), 0);
    }

    #[test]
    fn parse_memory_limit_invalid() {
        assert!(parse_memory_limit("abc").is_err());
        assert!(parse_memory_limit("12X").is_err());
        assert!(parse_memory_limit("-1G").is_err());
    }
}
