use crate::utils::error::Result;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// True when `file_name` ends with one of `suffixes`. Plain string match on
/// the name, so `archive.tar.h` matches `.h` and a file literally named
/// `.h` matches too.
pub fn has_recognized_suffix(file_name: &OsStr, suffixes: &BTreeSet<String>) -> bool {
    let name = file_name.to_string_lossy();
    suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}

/// Lazily yields every file under a root whose name carries a recognized
/// suffix, top-down: a directory's files come before anything inside its
/// subdirectories. Symlinks to files count as files; symlinked directories
/// are listed but never entered.
///
/// The root itself is never yielded. A missing or unreadable root surfaces
/// as the first item, so nothing downstream runs before the error.
pub struct SourceFiles<'a> {
    entries: walkdir::IntoIter,
    suffixes: &'a BTreeSet<String>,
}

impl std::fmt::Debug for SourceFiles<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFiles")
            .field("suffixes", &self.suffixes)
            .finish_non_exhaustive()
    }
}

pub fn source_files<'a>(
    root: &Path,
    suffixes: &'a BTreeSet<String>,
    sorted: bool,
) -> SourceFiles<'a> {
    // Stable sort, so unsorted mode keeps raw order within each group.
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by(move |a, b| {
            let by_kind = a.file_type().is_dir().cmp(&b.file_type().is_dir());
            if sorted {
                by_kind.then_with(|| a.file_name().cmp(b.file_name()))
            } else {
                by_kind
            }
        });
    SourceFiles {
        entries: walker.into_iter(),
        suffixes,
    }
}

/// Dangling links are skipped: there is nothing for the tool to rewrite.
fn is_file_or_link_to_file(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink()
        && std::fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file())
}

impl Iterator for SourceFiles<'_> {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };
            if is_file_or_link_to_file(&entry)
                && has_recognized_suffix(entry.file_name(), self.suffixes)
            {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}
