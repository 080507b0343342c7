//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use num_bigint::BigUint;
use tracing::debug;

use lucasfib_orchestration::interfaces::CalculationResult;

/// Format a duration as milliseconds with three decimals.
#[must_use]
pub fn format_duration_ms(d: Duration) -> String {
    format!("{:.3}", d.as_secs_f64() * 1000.0)
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Number of decimal digits of `value`.
#[must_use]
pub fn digit_count(value: &BigUint) -> usize {
    value.to_str_radix(10).len()
}

/// Write `F(n) = value` lines for every successful result.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, results: &[CalculationResult]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    let mut written = 0usize;
    for result in results {
        if let Ok(value) = &result.outcome {
            writeln!(file, "F({}) = {value}", result.n)?;
            written += 1;
        }
    }
    file.flush()?;
    debug!(path = %path.display(), written, "wrote results");
    Ok(())
}
