use crate::core::tree_formatter::TreeFormatter;
use crate::core::{ConfigProvider, Formatter};
use crate::domain::model::RunSummary;
use crate::utils::error::Result;
use std::io::{self, Write};
use std::path::PathBuf;

/// Runs one full traversal per configured root, in order.
pub struct FormatEngine<F, W = io::Stdout> {
    roots: Vec<PathBuf>,
    tree: TreeFormatter<F, W>,
}

impl<F: Formatter> FormatEngine<F> {
    pub fn new<C: ConfigProvider>(formatter: F, config: &C) -> Self {
        Self {
            roots: config.roots().to_vec(),
            tree: TreeFormatter::new(formatter, config),
        }
    }
}

impl<F: Formatter, W: Write + Send> FormatEngine<F, W> {
    pub fn with_progress<W2: Write + Send>(self, progress: W2) -> FormatEngine<F, W2> {
        FormatEngine {
            roots: self.roots,
            tree: self.tree.with_progress(progress),
        }
    }

    pub fn tree(&self) -> &TreeFormatter<F, W> {
        &self.tree
    }

    pub fn into_tree(self) -> TreeFormatter<F, W> {
        self.tree
    }

    /// The first aborting error ends the run; roots after it are not visited.
    pub async fn run(&mut self) -> Result<RunSummary> {
        tracing::info!("🚀 Formatting {} root(s)", self.roots.len());
        let mut summary = RunSummary {
            dry_run: !self.tree.formatter().rewrites_files(),
            ..RunSummary::default()
        };

        for root in &self.roots {
            let report = self.tree.format_tree(root).await?;
            summary.trees.push(report);
        }

        tracing::info!("📊 Done: {}", summary.headline());
        Ok(summary)
    }
}
