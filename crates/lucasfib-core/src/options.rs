//! Calculation options.

/// Options for Fibonacci calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Memory limit in bytes (`None` = unlimited).
    pub memory_limit: Option<usize>,
}

impl Options {
    /// Build options from a raw limit where 0 means unlimited.
    #[must_use]
    pub fn with_memory_limit(limit: usize) -> Self {
        Self {
            memory_limit: (limit > 0).then_some(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited() {
        assert_eq!(Options::default().memory_limit, None);
    }

    #[test]
    fn zero_limit_means_unlimited() {
        assert_eq!(Options::with_memory_limit(0).memory_limit, None);
        assert_eq!(Options::with_memory_limit(4096).memory_limit, Some(4096));
    }
}
