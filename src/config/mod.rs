#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::FailurePolicy;
use crate::utils::error::{FormatError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_suffixes, Validate,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const DEFAULT_ROOTS: [&str; 2] = ["./source", "./test"];
pub const DEFAULT_SUFFIXES: [&str; 2] = [".cpp", ".h"];
pub const DEFAULT_TOOL: &str = "clang-format";

/// Resolved settings for one run: built-in defaults, then the TOML file,
/// then command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    pub roots: Vec<PathBuf>,
    pub suffixes: BTreeSet<String>,
    pub tool: String,
    pub on_failure: FailurePolicy,
    pub sort_entries: bool,
    pub dry_run: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(PathBuf::from).collect(),
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            tool: DEFAULT_TOOL.to_string(),
            on_failure: FailurePolicy::Abort,
            sort_entries: true,
            dry_run: false,
        }
    }
}

impl FormatConfig {
    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Roots as the walk will see them from `cwd`.
    pub fn absolute_roots(&self, cwd: &Path) -> Vec<PathBuf> {
        self.roots.iter().map(|root| cwd.join(root)).collect()
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }
}

impl Validate for FormatConfig {
    fn validate(&self) -> Result<()> {
        if self.roots.is_empty() {
            return Err(FormatError::ConfigError {
                message: "at least one root directory is required".to_string(),
            });
        }
        for root in &self.roots {
            validate_path("roots", root)?;
        }
        validate_suffixes("suffixes", &self.suffixes)?;
        validate_non_empty_string("tool", &self.tool)?;
        Ok(())
    }
}

impl ConfigProvider for FormatConfig {
    fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    fn suffixes(&self) -> &BTreeSet<String> {
        &self.suffixes
    }

    fn tool(&self) -> &str {
        &self.tool
    }

    fn on_failure(&self) -> FailurePolicy {
        self.on_failure
    }

    fn sort_entries(&self) -> bool {
        self.sort_entries
    }
}
