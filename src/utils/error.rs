use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Formatter executable not found: {tool}")]
    ToolNotFound { tool: String },

    #[error("Formatter failed on {} (exit code {}): {stderr}", .path.display(), describe_exit(.code))]
    ToolFailed {
        path: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Tool,
    Filesystem,
    Configuration,
}

impl FormatError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormatError::ToolNotFound { .. } | FormatError::ToolFailed { .. } => {
                ErrorCategory::Tool
            }
            FormatError::Walk(_) | FormatError::IoError(_) => ErrorCategory::Filesystem,
            FormatError::ConfigError { .. } | FormatError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Process exit code the binary reports for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            FormatError::ToolNotFound { .. } => 127,
            FormatError::ToolFailed { .. } => 1,
            FormatError::Walk(_) | FormatError::IoError(_) => 3,
            FormatError::ConfigError { .. } | FormatError::InvalidConfigValueError { .. } => 2,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FormatError::ToolNotFound { tool } => format!(
                "Install {} or point --tool / TREE_FORMAT_TOOL at the formatter executable",
                tool
            ),
            FormatError::ToolFailed { path, .. } => format!(
                "Check that {} is valid source and that the formatter's style file parses; rerun with --keep-going to skip it",
                path.display()
            ),
            FormatError::Walk(e) => match e.path() {
                Some(path) => format!(
                    "Make sure {} exists and is readable (run from the project root)",
                    path.display()
                ),
                None => "Make sure every root directory exists and is readable".to_string(),
            },
            FormatError::IoError(_) => "Check file permissions under the root directories".to_string(),
            FormatError::ConfigError { .. } | FormatError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags and try again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FormatError>;
