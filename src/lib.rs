pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{ClangFormat, DryRun};
pub use config::FormatConfig;
pub use crate::core::{engine::FormatEngine, tree_formatter::TreeFormatter};
pub use domain::model::{FailurePolicy, FormatOutcome, RunSummary, TreeReport};
pub use domain::ports::Formatter;
pub use utils::error::{FormatError, Result};
