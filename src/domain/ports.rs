use crate::domain::model::FailurePolicy;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// An external tool that rewrites one file in place.
#[async_trait]
pub trait Formatter: Send + Sync {
    async fn format(&self, path: &Path) -> Result<()>;

    /// Leading word of the progress line printed before each file.
    fn progress_verb(&self) -> &'static str {
        "Formatting"
    }

    /// False for stand-ins that only report what they would do.
    fn rewrites_files(&self) -> bool {
        true
    }
}

#[async_trait]
impl<T: Formatter + ?Sized> Formatter for Box<T> {
    async fn format(&self, path: &Path) -> Result<()> {
        (**self).format(path).await
    }

    fn progress_verb(&self) -> &'static str {
        (**self).progress_verb()
    }

    fn rewrites_files(&self) -> bool {
        (**self).rewrites_files()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn roots(&self) -> &[PathBuf];
    fn suffixes(&self) -> &BTreeSet<String>;
    fn tool(&self) -> &str;
    fn on_failure(&self) -> FailurePolicy;
    fn sort_entries(&self) -> bool;
}
