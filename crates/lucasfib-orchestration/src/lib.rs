//! # lucasfib-orchestration
//!
//! Batch execution over indices, per-call timing, and result summaries.

pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{CalculationResult, ResultPresenter, Summary};
pub use orchestrator::{execute_indices, summarize, ExecutionMode};
