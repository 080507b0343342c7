//! CLI result presenters.
//!
//! `TextPresenter` prints the classic per-index lines:
//!
//! ```text
//! F(         100) -->        0.012 msecs (          69 bits)
//! F(100) = 354224848179261915075
//! ```
//!
//! `JsonPresenter` buffers `ResultRecord`s and writes one JSON document
//! when [`JsonPresenter::finish`] is called.

use std::io::{self, Write};
use std::time::Duration;

use num_bigint::BigUint;
use serde::Serialize;

use lucasfib_core::calculator::FibError;
use lucasfib_orchestration::interfaces::{ResultPresenter, Summary};

use crate::output::{digit_count, format_duration_ms, format_number};

/// What each presenter shows per index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Elapsed time and bit length.
    pub time: bool,
    /// Decimal value.
    pub number: bool,
}

/// Plain-text presenter.
pub struct TextPresenter<W: Write> {
    out: W,
    display: DisplayOptions,
}

impl<W: Write> TextPresenter<W> {
    #[must_use]
    pub fn new(out: W, display: DisplayOptions) -> Self {
        Self { out, display }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultPresenter for TextPresenter<W> {
    fn present_result(&mut self, n: u64, value: &BigUint, duration: Duration) -> io::Result<()> {
        if self.display.time {
            writeln!(
                self.out,
                "F({n:>12}) --> {:>12} msecs ({:>12} bits)",
                format_duration_ms(duration),
                value.bits()
            )?;
        }
        if self.display.number {
            writeln!(self.out, "F({n}) = {value}")?;
        }
        Ok(())
    }

    fn present_error(&mut self, n: u64, error: &FibError) -> io::Result<()> {
        writeln!(self.out, "F({n}) failed: {error}")
    }

    fn present_summary(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(
            self.out,
            "{} computed, {} failed, {} bits in {} msecs",
            summary.succeeded,
            summary.failed,
            format_number(summary.total_bits),
            format_duration_ms(summary.total_duration)
        )
    }
}

/// One result, as serialized by [`JsonPresenter`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub n: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digits: Option<usize>,
    pub duration_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct SummaryRecord {
    succeeded: usize,
    failed: usize,
    total_bits: u64,
    total_ms: f64,
}

#[derive(Serialize)]
struct Document<'a> {
    results: &'a [ResultRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a SummaryRecord>,
}

/// JSON presenter.
pub struct JsonPresenter<W: Write> {
    out: W,
    display: DisplayOptions,
    records: Vec<ResultRecord>,
    summary: Option<SummaryRecord>,
}

impl<W: Write> JsonPresenter<W> {
    #[must_use]
    pub fn new(out: W, display: DisplayOptions) -> Self {
        Self {
            out,
            display,
            records: Vec::new(),
            summary: None,
        }
    }

    /// Records collected so far.
    #[must_use]
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Write the collected document and return the writer.
    pub fn finish(mut self) -> io::Result<W> {
        let doc = Document {
            results: &self.records,
            summary: self.summary.as_ref(),
        };
        serde_json::to_writer_pretty(&mut self.out, &doc)?;
        writeln!(self.out)?;
        Ok(self.out)
    }
}

impl<W: Write> ResultPresenter for JsonPresenter<W> {
    fn present_result(&mut self, n: u64, value: &BigUint, duration: Duration) -> io::Result<()> {
        let time = self.display.time;
        self.records.push(ResultRecord {
            n,
            bits: time.then(|| value.bits()),
            digits: time.then(|| digit_count(value)),
            duration_ms: duration.as_secs_f64() * 1000.0,
            value: self.display.number.then(|| value.to_string()),
            error: None,
        });
        Ok(())
    }

    fn present_error(&mut self, n: u64, error: &FibError) -> io::Result<()> {
        self.records.push(ResultRecord {
            n,
            bits: None,
            digits: None,
            duration_ms: 0.0,
            value: None,
            error: Some(error.to_string()),
        });
        Ok(())
    }

    fn present_summary(&mut self, summary: &Summary) -> io::Result<()> {
        self.summary = Some(SummaryRecord {
            succeeded: summary.succeeded,
            failed: summary.failed,
            total_bits: summary.total_bits,
            total_ms: summary.total_duration.as_secs_f64() * 1000.0,
        });
        Ok(())
    }
}
