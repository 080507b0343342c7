//! # lucasfib-cli
//!
//! Text and JSON result presentation, file output, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use presenter::{DisplayOptions, JsonPresenter, ResultRecord, TextPresenter};
