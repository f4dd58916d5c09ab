//! Best-effort bulk removal and directory copy.
//!
//! Each operation walks a set of targets, skips the ones that do not exist
//! or have the wrong type, and returns how many it acted on. Errors on a
//! target that passed the check are propagated; work already done on
//! earlier targets is kept.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use unox_core::{Error, Result};
use walkdir::WalkDir;

/// Recursively delete each path that is an existing directory.
pub fn remove_folders<I>(paths: I) -> Result<usize>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut removed = 0;
    for path in paths {
        let path = path.as_ref();
        if !path.is_dir() {
            debug!("Skipping {}: not an existing directory", path.display());
            continue;
        }
        fs::remove_dir_all(path).map_err(|e| Error::io_with_path(e, path))?;
        trace!("Removed directory {}", path.display());
        removed += 1;
    }
    debug!("Removed {} folder(s)", removed);
    Ok(removed)
}

/// Delete each path that is an existing regular file.
pub fn remove_files<I>(paths: I) -> Result<usize>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut removed = 0;
    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            debug!("Skipping {}: not an existing file", path.display());
            continue;
        }
        fs::remove_file(path).map_err(|e| Error::io_with_path(e, path))?;
        trace!("Removed file {}", path.display());
        removed += 1;
    }
    debug!("Removed {} file(s)", removed);
    Ok(removed)
}

/// Merge the contents of each `src` directory into its `dest` directory.
///
/// Pairs where either side is not an existing directory are skipped.
/// Returns the number of pairs copied.
pub fn copy_folders<I, S, D>(pairs: I) -> Result<usize>
where
    I: IntoIterator<Item = (S, D)>,
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let mut copied = 0;
    for (src, dest) in pairs {
        let (src, dest) = (src.as_ref(), dest.as_ref());
        if !src.is_dir() || !dest.is_dir() {
            debug!(
                "Skipping {} -> {}: both must be existing directories",
                src.display(),
                dest.display()
            );
            continue;
        }
        if same_directory(src, dest)? {
            debug!(
                "Skipping {} -> {}: source and destination are the same directory",
                src.display(),
                dest.display()
            );
            continue;
        }
        let files = copy_tree(src, dest)?;
        debug!(
            "Copied {} file(s) from {} to {}",
            files,
            src.display(),
            dest.display()
        );
        copied += 1;
    }
    Ok(copied)
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| Error::io_with_path(e, path))
}

fn same_directory(a: &Path, b: &Path) -> Result<bool> {
    Ok(canonical(a)? == canonical(b)?)
}

/// Recursively copy everything under `src` into `dest`.
///
/// `dest` is created if missing. Subdirectories are created as needed and
/// existing files are overwritten. Symlinks are followed, so their targets
/// are copied. Copying a directory onto itself does nothing, and when
/// `dest` lies inside `src` the `dest` subtree is not copied into itself.
/// Returns the number of files copied.
pub fn copy_tree(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<usize> {
    let (src, dest) = (src.as_ref(), dest.as_ref());
    fs::create_dir_all(dest).map_err(|e| Error::io_with_path(e, dest))?;
    let dest_canonical = canonical(dest)?;
    if canonical(src)? == dest_canonical {
        debug!("Not copying {} onto itself", src.display());
        return Ok(0);
    }

    let mut files = 0;
    let walker = WalkDir::new(src)
        .follow_links(true)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| {
            !(entry.file_type().is_dir()
                && fs::canonicalize(entry.path()).is_ok_and(|p| p == dest_canonical))
        });

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            Error::io_with_path(e.into(), path)
        })?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::io_with_path(e, &target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| Error::io_with_path(e, entry.path()))?;
            trace!("Copied {} -> {}", entry.path().display(), target.display());
            files += 1;
        }
    }

    Ok(files)
}
