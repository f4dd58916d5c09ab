//! Recursive file listing.
//!
//! Listing is lazy: directories are read as the iterator advances. Calling
//! [`list_files_in_dir`] again starts a fresh walk.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Paths, Pattern};
use log::trace;
use unox_core::{Error, Result};

/// Matches any name containing a dot, at any depth.
const FILE_PATTERN: &str = "**/*.*";

fn match_options() -> MatchOptions {
    MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    }
}

fn listing_pattern(root: &Path) -> String {
    let mut pattern = Pattern::escape(&root.to_string_lossy());
    if !pattern.is_empty() && !pattern.ends_with(['/', std::path::MAIN_SEPARATOR]) {
        pattern.push('/');
    }
    pattern.push_str(FILE_PATTERN);
    pattern
}

/// Lazily list every file under `root`, including nested directories.
///
/// Only regular files whose name contains a dot are yielded; names
/// starting with a dot are not matched.
/// Directory entries that cannot be read come back as errors carrying the
/// offending path.
///
/// An empty `root` lists relative to the current directory, not the
/// filesystem root, and the yielded paths are relative as well.
///
/// # Example
///
/// ```no_run
/// use unox_fs::list_files_in_dir;
///
/// for path in list_files_in_dir("src")? {
///     println!("{}", path?.display());
/// }
/// # Ok::<(), unox_fs::Error>(())
/// ```
pub fn list_files_in_dir(root: impl AsRef<Path>) -> Result<Files> {
    let pattern = listing_pattern(root.as_ref());
    let paths =
        glob::glob_with(&pattern, match_options()).map_err(|e| Error::pattern(e.to_string()))?;
    Ok(Files { paths })
}

/// Iterator returned by [`list_files_in_dir`].
pub struct Files {
    paths: Paths,
}

impl Iterator for Files {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.paths.next()? {
                Ok(path) if path.is_file() => return Some(Ok(path)),
                Ok(path) => trace!("Skipping non-file entry {}", path.display()),
                Err(e) => {
                    let path = e.path().to_path_buf();
                    return Some(Err(Error::io_with_path(e.into_error(), path)));
                }
            }
        }
    }
}
