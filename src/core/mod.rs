pub mod engine;
pub mod tree_formatter;
pub mod walker;

pub use crate::domain::model::{FailurePolicy, FormatOutcome, RunSummary, TreeReport};
pub use crate::domain::ports::{ConfigProvider, Formatter};
pub use crate::utils::error::Result;
