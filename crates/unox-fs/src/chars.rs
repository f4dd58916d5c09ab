//! Character stream over a file.

use std::iter::FusedIterator;
use std::path::Path;

use unox_core::Result;

use crate::scoped::read_file;

/// Read `path` and iterate over its characters, line terminators included.
///
/// The file is read fully up front, so a missing or unreadable file fails
/// here rather than during iteration. Line endings are yielded exactly as
/// stored.
///
/// # Example
///
/// ```no_run
/// use unox_fs::chars_in_file;
///
/// let newlines = chars_in_file("notes.txt")?.filter(|c| *c == '\n').count();
/// # Ok::<(), unox_fs::Error>(())
/// ```
pub fn chars_in_file(path: impl AsRef<Path>) -> Result<FileChars> {
    Ok(FileChars::new(read_file(path)?))
}

/// Iterator over the characters of a file's contents.
#[derive(Debug, Clone)]
pub struct FileChars {
    content: String,
    position: usize,
}

impl FileChars {
    fn new(content: String) -> Self {
        Self {
            content,
            position: 0,
        }
    }

    /// The part of the contents not yet yielded.
    pub fn remaining(&self) -> &str {
        &self.content[self.position..]
    }
}

impl Iterator for FileChars {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.remaining().chars().next()?;
        self.position += c.len_utf8();
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let bytes = self.content.len() - self.position;
        (bytes.div_ceil(4), Some(bytes))
    }
}

impl FusedIterator for FileChars {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_two_line_file_includes_newline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("two.txt");
        fs::write(&path, "ab\ncd").unwrap();

        let chars: Vec<char> = chars_in_file(&path).unwrap().collect();

        assert_eq!(chars, vec!['a', 'b', '\n', 'c', 'd']);
    }

    #[test]
    fn test_crlf_is_preserved() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dos.txt");
        fs::write(&path, "a\r\nb\r\n").unwrap();

        let text: String = chars_in_file(&path).unwrap().collect();

        assert_eq!(text, "a\r\nb\r\n");
    }

    #[test]
    fn test_multibyte_characters() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("utf8.txt");
        fs::write(&path, "né→🦀").unwrap();

        let mut chars = chars_in_file(&path).unwrap();
        assert_eq!(chars.next(), Some('n'));
        assert_eq!(chars.remaining(), "é→🦀");
        assert_eq!(chars.collect::<Vec<_>>(), vec!['é', '→', '🦀']);
    }

    #[test]
    fn test_each_call_restarts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("abc.txt");
        fs::write(&path, "abc").unwrap();

        let mut first = chars_in_file(&path).unwrap();
        first.next();
        first.next();

        let second: String = chars_in_file(&path).unwrap().collect();
        assert_eq!(second, "abc");
        assert_eq!(first.next(), Some('c'));
        assert_eq!(first.next(), None);
        assert_eq!(first.next(), None);
    }

    #[test]
    fn test_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let chars = chars_in_file(&path).unwrap();
        assert_eq!(chars.size_hint(), (0, Some(0)));
        assert_eq!(chars.count(), 0);
    }

    #[test]
    fn test_missing_file_fails_up_front() {
        let temp = TempDir::new().unwrap();

        let err = chars_in_file(temp.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }
}
