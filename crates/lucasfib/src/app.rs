//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::debug;

use lucasfib_cli::output::write_to_file;
use lucasfib_cli::presenter::{JsonPresenter, TextPresenter};
use lucasfib_orchestration::interfaces::{CalculationResult, ResultPresenter};
use lucasfib_orchestration::orchestrator::{execute_indices, summarize};

use crate::config::{AppConfig, OutputFormat};

/// Run the application, writing results to stdout.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = run_to(config, &mut out);
    out.flush()?;
    result
}

/// Run the application, writing results to `out`.
///
/// Every index is reported before an error is returned; the error is
/// the first failed calculation.
pub fn run_to(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        lucasfib_cli::completion::generate_completion(&mut cmd, shell, out);
        return Ok(());
    }

    if config.indices.is_empty() {
        debug!("no indices given");
        return Ok(());
    }

    let calculator = lucasfib_core::default_calculator();
    let results = execute_indices(
        calculator.as_ref(),
        &config.indices,
        &config.options(),
        config.execution_mode(),
    );

    match config.format {
        OutputFormat::Text => {
            let mut presenter = TextPresenter::new(&mut *out, config.display());
            present_all(&mut presenter, &results, config.summary)?;
        }
        OutputFormat::Json => {
            let mut presenter = JsonPresenter::new(&mut *out, config.display());
            present_all(&mut presenter, &results, config.summary)?;
            presenter.finish()?;
        }
    }

    if let Some(ref path) = config.output {
        write_to_file(path, &results)
            .with_context(|| format!("writing results to {}", path.display()))?;
    }

    first_failure(&results)
}

fn present_all(
    presenter: &mut dyn ResultPresenter,
    results: &[CalculationResult],
    summary: bool,
) -> Result<()> {
    for result in results {
        result.present(presenter)?;
    }
    if summary {
        presenter.present_summary(&summarize(results))?;
    }
    Ok(())
}

fn first_failure(results: &[CalculationResult]) -> Result<()> {
    match results.iter().find_map(|r| r.outcome.as_ref().err().map(|e| (r.n, e))) {
        Some((n, e)) => Err(anyhow::Error::new(e.clone()).context(format!("F({n}) failed"))),
        None => Ok(()),
    }
}
