//! Output open modes.
//!
//! [`OutputMode`] mirrors the classic `fopen`-style mode strings (`"a"`,
//! `"w"`, `"x"`, ...) and maps each onto [`std::fs::OpenOptions`].

use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unox_core::{Error, Result};

/// How an output file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// `"a"`: create if missing, write at the end.
    #[default]
    Append,
    /// `"w"`: create if missing, truncate existing content.
    Truncate,
    /// `"x"`: create, failing if the file already exists.
    CreateNew,
    /// `"a+"`: like `Append`, also readable.
    AppendRead,
    /// `"w+"`: like `Truncate`, also readable.
    TruncateRead,
    /// `"r+"`: read and write an existing file without truncating.
    ReadWrite,
}

impl OutputMode {
    /// All modes, in declaration order.
    pub const ALL: [OutputMode; 6] = [
        OutputMode::Append,
        OutputMode::Truncate,
        OutputMode::CreateNew,
        OutputMode::AppendRead,
        OutputMode::TruncateRead,
        OutputMode::ReadWrite,
    ];

    /// Canonical mode string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Append => "a",
            OutputMode::Truncate => "w",
            OutputMode::CreateNew => "x",
            OutputMode::AppendRead => "a+",
            OutputMode::TruncateRead => "w+",
            OutputMode::ReadWrite => "r+",
        }
    }

    /// Build the `OpenOptions` for this mode.
    pub fn open_options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            OutputMode::Append => options.append(true).create(true),
            OutputMode::Truncate => options.write(true).create(true).truncate(true),
            OutputMode::CreateNew => options.write(true).create_new(true),
            OutputMode::AppendRead => options.read(true).append(true).create(true),
            OutputMode::TruncateRead => options.read(true).write(true).create(true).truncate(true),
            OutputMode::ReadWrite => options.read(true).write(true),
        };
        options
    }

    /// Open `path` with this mode.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<File> {
        let path = path.as_ref();
        self.open_options()
            .open(path)
            .map_err(|e| Error::io_with_path(e, path))
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = Error;

    /// Parse a mode string such as `"a"` or `"w+"`.
    ///
    /// Text (`t`) and binary (`b`) flags are accepted and ignored since
    /// content is always written as raw bytes.
    fn from_str(s: &str) -> Result<Self> {
        let flags: String = s.chars().filter(|c| !matches!(c, 't' | 'b')).collect();
        match flags.as_str() {
            "a" => Ok(OutputMode::Append),
            "w" => Ok(OutputMode::Truncate),
            "x" => Ok(OutputMode::CreateNew),
            "a+" | "+a" => Ok(OutputMode::AppendRead),
            "w+" | "+w" => Ok(OutputMode::TruncateRead),
            "r+" | "+r" => Ok(OutputMode::ReadWrite),
            _ => Err(Error::invalid_mode(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_append() {
        assert_eq!(OutputMode::default(), OutputMode::Append);
    }

    #[test]
    fn test_parse_round_trips_canonical_strings() {
        for mode in OutputMode::ALL {
            assert_eq!(mode.as_str().parse::<OutputMode>().unwrap(), mode);
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn test_parse_ignores_text_and_binary_flags() {
        assert_eq!("at".parse::<OutputMode>().unwrap(), OutputMode::Append);
        assert_eq!("wb".parse::<OutputMode>().unwrap(), OutputMode::Truncate);
        assert_eq!("rb+".parse::<OutputMode>().unwrap(), OutputMode::ReadWrite);
    }

    #[test]
    fn test_parse_rejects_read_only_and_garbage() {
        assert!(matches!(
            "r".parse::<OutputMode>(),
            Err(Error::InvalidMode(m)) if m == "r"
        ));
        assert!("".parse::<OutputMode>().is_err());
        assert!("append".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let mode: OutputMode = serde_json::from_str("\"truncate_read\"").unwrap();
        assert_eq!(mode, OutputMode::TruncateRead);
        assert_eq!(
            serde_json::to_string(&OutputMode::CreateNew).unwrap(),
            "\"create_new\""
        );
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("log.txt");
        fs::write(&path, "one\n").unwrap();

        let mut file = OutputMode::Append.open(&path).unwrap();
        file.write_all(b"two\n").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_truncate_replaces_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");
        fs::write(&path, "old content").unwrap();

        let mut file = OutputMode::Truncate.open(&path).unwrap();
        file.write_all(b"new").unwrap();
        drop(file);

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_create_new_fails_on_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("exists.txt");
        fs::write(&path, "here").unwrap();

        let err = OutputMode::CreateNew.open(&path).unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::AlreadyExists));
        assert!(err.to_string().contains("exists.txt"));
    }

    #[test]
    fn test_read_write_requires_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.txt");

        let err = OutputMode::ReadWrite.open(&path).unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
        assert!(!path.exists());
    }
}
