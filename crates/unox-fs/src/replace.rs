//! Literal find-and-replace across a directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use unox_core::{Error, Result};

use crate::scoped::read_file;
use crate::walk::list_files_in_dir;

/// Apply each `(find, replace)` pair to `text`, in order.
///
/// Matching is literal; later pairs see the output of earlier ones.
pub fn replace_all<F, R>(text: &str, replacements: &[(F, R)]) -> String
where
    F: AsRef<str>,
    R: AsRef<str>,
{
    replacements
        .iter()
        .fold(text.to_owned(), |acc, (find, replace)| {
            let find: &str = find.as_ref();
            acc.replace(find, replace.as_ref())
        })
}

fn readable_entry(entry: Result<PathBuf>) -> Option<PathBuf> {
    match entry {
        Ok(path) => Some(path),
        Err(e) => {
            debug!("Skipping unreadable entry: {}", e);
            None
        }
    }
}

/// Rewrite every file listed under `root` with `replacements` applied.
///
/// Files are visited with [`list_files_in_dir`] and overwritten in place.
/// Files whose contents do not change are left untouched. A missing root
/// is a no-op, and directories that cannot be read during the walk are
/// skipped. Failing to read or write a listed file is an error. There is
/// no backup and no rollback: a failure partway through leaves earlier
/// files rewritten.
///
/// Returns the number of files rewritten.
pub fn deep_replace_file_contents<P, F, R>(root: P, replacements: &[(F, R)]) -> Result<usize>
where
    P: AsRef<Path>,
    F: AsRef<str>,
    R: AsRef<str>,
{
    let root = root.as_ref();
    if !root.is_dir() {
        debug!("Skipping replace in {}: not an existing directory", root.display());
        return Ok(0);
    }

    let mut rewritten = 0;
    for path in list_files_in_dir(root)?.filter_map(readable_entry) {
        let original = read_file(&path)?;
        let replaced = replace_all(&original, replacements);
        if replaced == original {
            trace!("No replacements in {}", path.display());
            continue;
        }
        fs::write(&path, replaced).map_err(|e| Error::io_with_path(e, &path))?;
        trace!("Rewrote {}", path.display());
        rewritten += 1;
    }

    debug!("Rewrote {} file(s) under {}", rewritten, root.display());
    Ok(rewritten)
}
