//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use lucasfib_cli::presenter::DisplayOptions;
use lucasfib_core::index::parse_index;
use lucasfib_core::memory_budget::parse_memory_limit;
use lucasfib_core::options::Options;
use lucasfib_orchestration::orchestrator::ExecutionMode;

const EXAMPLES: &str = "\
Examples:
  lucasfib 17 18 19
  lucasfib -s -t 9 10 11 99 100 101 999 1000 1001
  lucasfib --format json -v 0x100

Results are exact; very large indices need memory proportional to
0.694 * n bits. Use --memory-limit to refuse indices that would not fit.";

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `F(n) = value` and timing lines.
    Text,
    /// One JSON document on stdout.
    Json,
}

/// Exact Fibonacci numbers by fast doubling and Lucas-sequence steps.
#[derive(Parser, Debug)]
#[command(name = "lucasfib", version, about, after_help = EXAMPLES)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Indices to compute (decimal, 0x hex, 0o octal, 0b binary).
    #[arg(value_name = "INDEX", value_parser = parse_index)]
    pub indices: Vec<u64>,

    /// Display elapsed time in milliseconds and the result bit length.
    #[arg(short, long)]
    pub time: bool,

    /// Display the number (might be huge).
    #[arg(short, long)]
    pub number: bool,

    /// Display everything.
    #[arg(short, long)]
    pub verbose: bool,

    /// Display nothing unless --time or --number is also given.
    #[arg(short, long)]
    pub silent: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Compute the indices concurrently.
    #[arg(long)]
    pub parallel: bool,

    /// Memory limit (e.g., "8G", "512M"); indices whose estimate exceeds it fail.
    #[arg(long, env = "LUCASFIB_MEMORY_LIMIT", value_parser = parse_memory_limit)]
    pub memory_limit: Option<usize>,

    /// Also write `F(n) = value` lines to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print totals after all results.
    #[arg(long)]
    pub summary: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Resolve the display flags.
    ///
    /// The number is shown by default; `--silent` hides everything that
    /// was not asked for explicitly.
    #[must_use]
    pub fn display(&self) -> DisplayOptions {
        DisplayOptions {
            time: self.time || self.verbose,
            number: self.number || self.verbose || !self.silent,
        }
    }

    /// Calculation options.
    #[must_use]
    pub fn options(&self) -> Options {
        Options::with_memory_limit(self.memory_limit.unwrap_or(0))
    }

    /// Scheduling of the indices.
    #[must_use]
    pub fn execution_mode(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("lucasfib").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn default_shows_number_only() {
        let config = parse(&["17"]);
        assert_eq!(config.indices, vec![17]);
        assert_eq!(
            config.display(),
            DisplayOptions {
                time: false,
                number: true
            }
        );
    }

    #[test]
    fn silent_with_time() {
        let config = parse(&["-s", "-t", "9", "10"]);
        assert_eq!(
            config.display(),
            DisplayOptions {
                time: true,
                number: false
            }
        );
        assert_eq!(config.indices, vec![9, 10]);
    }

    #[test]
    fn silent_alone() {
        let display = parse(&["-s", "5"]).display();
        assert!(!display.time);
        assert!(!display.number);
    }

    #[test]
    fn verbose_shows_everything() {
        let display = parse(&["-v", "-s", "5"]).display();
        assert!(display.time);
        assert!(display.number);
    }

    #[test]
    fn prefixed_indices() {
        let config = parse(&["0x10", "0b101", "1_000"]);
        assert_eq!(config.indices, vec![16, 5, 1000]);
    }

    #[test]
    fn rejects_non_numeric_index() {
        let result = AppConfig::try_parse_from(["lucasfib", "12", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn no_indices_is_valid() {
        assert!(parse(&[]).indices.is_empty());
    }

    #[test]
    fn memory_limit_parsed() {
        let config = parse(&["--memory-limit", "512M", "10"]);
        assert_eq!(config.memory_limit, Some(512 * 1024 * 1024));
        assert_eq!(config.options().memory_limit, Some(512 * 1024 * 1024));
    }

    #[test]
    fn memory_limit_invalid() {
        let result = AppConfig::try_parse_from(["lucasfib", "--memory-limit", "lots", "10"]);
        assert!(result.is_err());
    }

    #[test]
    fn parallel_mode() {
        assert_eq!(parse(&["1"]).execution_mode(), ExecutionMode::Sequential);
        assert_eq!(
            parse(&["--parallel", "1"]).execution_mode(),
            ExecutionMode::Parallel
        );
    }

    #[test]
    fn json_format() {
        assert_eq!(parse(&["--format", "json", "1"]).format, OutputFormat::Json);
        assert_eq!(parse(&["1"]).format, OutputFormat::Text);
    }

    #[test]
    fn command_is_consistent() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
