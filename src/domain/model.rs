use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to do when the formatter fails on a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the whole run at the first failure.
    #[default]
    Abort,
    /// Record the failure and move on to the next file.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    Formatted(PathBuf),
    Failed { path: PathBuf, reason: String },
}

impl FormatOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            FormatOutcome::Formatted(path) => path,
            FormatOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FormatOutcome::Failed { .. })
    }
}

/// Result of one traversal of one root.
#[derive(Debug, Clone)]
pub struct TreeReport {
    pub root: PathBuf,
    pub outcomes: Vec<FormatOutcome>,
}

impl TreeReport {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            outcomes: Vec::new(),
        }
    }

    pub fn formatted(&self) -> impl Iterator<Item = &PathBuf> {
        self.outcomes.iter().filter_map(|o| match o {
            FormatOutcome::Formatted(path) => Some(path),
            FormatOutcome::Failed { .. } => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &FormatOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub trees: Vec<TreeReport>,
    /// Set when the formatter only listed files without touching them.
    pub dry_run: bool,
}

impl RunSummary {
    /// One-line tally for the end of a run.
    pub fn headline(&self) -> String {
        if self.dry_run {
            format!("would format {} file(s)", self.formatted_count())
        } else {
            format!(
                "{} file(s) formatted, {} failed",
                self.formatted_count(),
                self.failed_count()
            )
        }
    }

    pub fn formatted_count(&self) -> usize {
        self.trees.iter().map(|t| t.formatted().count()).sum()
    }

    pub fn failed_count(&self) -> usize {
        self.trees.iter().map(|t| t.failures().count()).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(dry_run: bool) -> RunSummary {
        RunSummary {
            trees: vec![TreeReport {
                root: PathBuf::from("./source"),
                outcomes: vec![
                    FormatOutcome::Formatted(PathBuf::from("./source/a.cpp")),
                    FormatOutcome::Formatted(PathBuf::from("./source/b.h")),
                ],
            }],
            dry_run,
        }
    }

    #[test]
    fn test_headline_distinguishes_dry_run() {
        assert_eq!(summary(false).headline(), "2 file(s) formatted, 0 failed");
        assert_eq!(summary(true).headline(), "would format 2 file(s)");
    }
}
