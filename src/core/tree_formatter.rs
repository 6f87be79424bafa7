use crate::core::walker::source_files;
use crate::core::{ConfigProvider, Formatter};
use crate::domain::model::{FailurePolicy, FormatOutcome, TreeReport};
use crate::utils::error::{FormatError, Result};
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;

/// Walks one root at a time and hands every matching file to the formatter,
/// waiting for each invocation before moving on.
pub struct TreeFormatter<F, W = io::Stdout> {
    formatter: F,
    suffixes: BTreeSet<String>,
    sort_entries: bool,
    on_failure: FailurePolicy,
    progress: W,
}

impl<F: Formatter> TreeFormatter<F> {
    pub fn new<C: ConfigProvider>(formatter: F, config: &C) -> Self {
        Self {
            formatter,
            suffixes: config.suffixes().clone(),
            sort_entries: config.sort_entries(),
            on_failure: config.on_failure(),
            progress: io::stdout(),
        }
    }
}

impl<F: Formatter, W: Write + Send> TreeFormatter<F, W> {
    /// Redirect the `Formatting <path>` lines away from stdout.
    pub fn with_progress<W2: Write + Send>(self, progress: W2) -> TreeFormatter<F, W2> {
        TreeFormatter {
            formatter: self.formatter,
            suffixes: self.suffixes,
            sort_entries: self.sort_entries,
            on_failure: self.on_failure,
            progress,
        }
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    pub fn progress(&self) -> &W {
        &self.progress
    }

    pub fn into_progress(self) -> W {
        self.progress
    }

    pub async fn format_tree(&mut self, root: &Path) -> Result<TreeReport> {
        tracing::info!("🔍 Walking {}", root.display());
        let mut report = TreeReport::new(root.to_path_buf());

        for file in source_files(root, &self.suffixes, self.sort_entries) {
            let path = file.inspect_err(|e| {
                tracing::error!("❌ Traversal of {} failed: {}", root.display(), e)
            })?;

            writeln!(
                self.progress,
                "{} {}",
                self.formatter.progress_verb(),
                path.display()
            )?;
            self.progress.flush()?;

            match self.formatter.format(&path).await {
                Ok(()) => {
                    tracing::debug!("formatted {}", path.display());
                    report.outcomes.push(FormatOutcome::Formatted(path));
                }
                // Every later file would fail the same way.
                Err(e @ FormatError::ToolNotFound { .. }) => {
                    tracing::error!("❌ {}", e);
                    return Err(e);
                }
                Err(e) => match self.on_failure {
                    FailurePolicy::Abort => {
                        tracing::error!("❌ {}", e);
                        return Err(e);
                    }
                    FailurePolicy::Continue => {
                        tracing::warn!("⚠️ {} (continuing)", e);
                        report.outcomes.push(FormatOutcome::Failed {
                            path,
                            reason: e.to_string(),
                        });
                    }
                },
            }
        }

        tracing::info!(
            "✅ {}: {} formatted, {} failed",
            root.display(),
            report.formatted().count(),
            report.failures().count()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormatConfig;
    use async_trait::async_trait;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<PathBuf>>,
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl Formatter for Recorder {
        async fn format(&self, path: &Path) -> Result<()> {
            self.calls.lock().unwrap().push(path.to_path_buf());
            match self.fail_on {
                Some(name) if path.ends_with(name) => Err(FormatError::ToolFailed {
                    path: path.to_path_buf(),
                    code: Some(1),
                    stderr: "boom".to_string(),
                }),
                _ => Ok(()),
            }
        }
    }

    fn tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.cpp"), "int a;").unwrap();
        fs::write(dir.path().join("b.h"), "int b;").unwrap();
        fs::write(dir.path().join("c.txt"), "notes").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_progress_lines_precede_each_file() {
        let dir = tree();
        let mut tf = TreeFormatter::new(Recorder::default(), &FormatConfig::default())
            .with_progress(Vec::new());

        let report = tf.format_tree(dir.path()).await.unwrap();
        assert_eq!(report.formatted().count(), 2);

        let out = String::from_utf8(tf.into_progress()).unwrap();
        let expected = format!(
            "Formatting {}\nFormatting {}\n",
            dir.path().join("a.cpp").display(),
            dir.path().join("b.h").display()
        );
        assert_eq!(out, expected);
    }

    #[tokio::test]
    async fn test_abort_stops_at_first_failure() {
        let dir = tree();
        let recorder = Recorder {
            fail_on: Some("a.cpp"),
            ..Default::default()
        };
        let mut tf =
            TreeFormatter::new(recorder, &FormatConfig::default()).with_progress(io::sink());

        let err = tf.format_tree(dir.path()).await.unwrap_err();
        assert!(matches!(err, FormatError::ToolFailed { .. }));
        assert_eq!(tf.formatter().calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_continue_records_failure_and_proceeds() {
        let dir = tree();
        let recorder = Recorder {
            fail_on: Some("a.cpp"),
            ..Default::default()
        };
        let config = FormatConfig::default().with_failure_policy(FailurePolicy::Continue);
        let mut tf = TreeFormatter::new(recorder, &config).with_progress(io::sink());

        let report = tf.format_tree(dir.path()).await.unwrap();
        assert_eq!(report.failures().count(), 1);
        assert_eq!(
            report.formatted().collect::<Vec<_>>(),
            vec![&dir.path().join("b.h")]
        );
        assert_eq!(tf.formatter().calls.lock().unwrap().len(), 2);
    }
}
