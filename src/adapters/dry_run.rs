use crate::core::Formatter;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Stands in for the real tool under `--dry-run`: touches nothing.
#[derive(Debug, Clone, Default)]
pub struct DryRun;

#[async_trait]
impl Formatter for DryRun {
    async fn format(&self, path: &Path) -> Result<()> {
        tracing::debug!("dry run, skipping {}", path.display());
        Ok(())
    }

    fn progress_verb(&self) -> &'static str {
        "Would format"
    }

    fn rewrites_files(&self) -> bool {
        false
    }
}
