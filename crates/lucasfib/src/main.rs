//! lucasfib: exact Fibonacci numbers by fast doubling and Lucas steps.

use std::process::ExitCode;

use lucasfib_lib::{app, config, errors};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(u8::try_from(errors::exit_code(&e)).unwrap_or(1))
        }
    }
}
