//! Recursive enumeration of the regular files under a root directory.

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// A file discovered under one of the two roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the root it was found under
    pub relative: PathBuf,
    /// Location on disk
    pub absolute: PathBuf,
}

impl FileEntry {
    /// Base name of the file, if it is valid UTF-8.
    pub fn file_name(&self) -> Option<&str> {
        self.relative.file_name().and_then(|n| n.to_str())
    }
}

/// Fails with `Error::NotADirectoryError` unless `root` is an existing directory.
pub fn ensure_directory<P: AsRef<Path>>(root: P) -> Result<()> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(Error::NotADirectoryError {
            path: root.display().to_string(),
        });
    }
    Ok(())
}

/// Lazily walks `root`, yielding every regular file in file-name order.
///
/// # Errors
/// * `Error::NotADirectoryError` upfront if `root` is not a directory
/// * `Error::WalkError` items for entries that could not be read; the walk
///   carries on past them
pub fn walk_files<P: AsRef<Path>>(root: P) -> Result<impl Iterator<Item = Result<FileEntry>>> {
    let root = root.as_ref().to_path_buf();
    ensure_directory(&root)?;
    debug!("Walking '{}'", root.display());

    let entries = WalkDir::new(&root).sort_by_file_name().into_iter();
    Ok(entries.filter_map(move |entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => return Some(Err(Error::WalkError(e))),
        };
        if !entry.path().is_file() {
            return None;
        }
        let relative = entry.path().strip_prefix(&root).ok()?.to_path_buf();
        Some(Ok(FileEntry {
            relative,
            absolute: entry.into_path(),
        }))
    }))
}
