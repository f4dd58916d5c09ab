//! Scoped file handles and content copy.
//!
//! Handles are owned values, so they are closed when the call returns,
//! whether the handler succeeds, returns an error or panics.
//!
//! Handlers return `Result<T, E>` for any `E: From<unox_core::Error>`, which
//! lets callers keep their own error type while open failures still
//! convert into it.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use unox_core::{Error, Result};

use crate::mode::OutputMode;

/// Buffered handle passed to input handlers.
pub type InputFile = BufReader<File>;

/// Buffered handle passed to output handlers.
pub type OutputFile = BufWriter<File>;

/// Read a file's contents as a string.
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))
}

/// Open `path` for reading.
pub fn open_input(path: impl AsRef<Path>) -> Result<InputFile> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io_with_path(e, path))?;
    Ok(BufReader::new(file))
}

/// Open `path` for writing with the given mode.
pub fn open_output(path: impl AsRef<Path>, mode: OutputMode) -> Result<OutputFile> {
    Ok(BufWriter::new(mode.open(path)?))
}

fn flush_output(output: &mut OutputFile, path: &Path) -> Result<()> {
    output.flush().map_err(|e| Error::io_with_path(e, path))
}

/// Open `path` for reading and hand the handle to `handler`.
///
/// # Example
///
/// ```no_run
/// use std::io::BufRead;
/// use unox_fs::with_input_file;
///
/// let first = with_input_file("Cargo.toml", |input| {
///     let mut line = String::new();
///     input.read_line(&mut line)?;
///     Ok::<_, unox_fs::Error>(line)
/// })?;
/// # Ok::<(), unox_fs::Error>(())
/// ```
pub fn with_input_file<P, F, T, E>(path: P, handler: F) -> std::result::Result<T, E>
where
    P: AsRef<Path>,
    F: FnOnce(&mut InputFile) -> std::result::Result<T, E>,
    E: From<Error>,
{
    let mut input = open_input(path)?;
    handler(&mut input)
}

/// Open `path` for writing with `mode` and hand the handle to `handler`.
///
/// Buffered output is flushed after the handler succeeds; a flush failure
/// is reported as an error.
pub fn with_output_file<P, F, T, E>(
    path: P,
    mode: OutputMode,
    handler: F,
) -> std::result::Result<T, E>
where
    P: AsRef<Path>,
    F: FnOnce(&mut OutputFile) -> std::result::Result<T, E>,
    E: From<Error>,
{
    let path = path.as_ref();
    let mut output = open_output(path, mode)?;
    let value = handler(&mut output)?;
    flush_output(&mut output, path)?;
    Ok(value)
}

/// Open an input and an output file, in that order, and hand both to
/// `handler`.
///
/// If the output cannot be opened the input handle is closed before the
/// error is returned.
pub fn with_input_output_files<I, O, F, T, E>(
    input_path: I,
    output_path: O,
    mode: OutputMode,
    handler: F,
) -> std::result::Result<T, E>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
    F: FnOnce(&mut InputFile, &mut OutputFile) -> std::result::Result<T, E>,
    E: From<Error>,
{
    let output_path = output_path.as_ref();
    let mut input = open_input(input_path)?;
    let mut output = open_output(output_path, mode)?;
    let value = handler(&mut input, &mut output)?;
    flush_output(&mut output, output_path)?;
    Ok(value)
}

fn identity(content: String) -> String {
    content
}

/// Options for [`copy_file_content`].
///
/// Defaults to the identity transform and [`OutputMode::Append`].
pub struct CopyOptions<F = fn(String) -> String> {
    /// Applied to the full input contents before writing.
    pub transform: F,
    /// How the output file is opened.
    pub mode: OutputMode,
}

impl CopyOptions {
    /// Identity transform, append mode.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            transform: identity,
            mode: OutputMode::Append,
        }
    }
}

impl<F> CopyOptions<F> {
    /// Set the output mode.
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the transform.
    pub fn with_transform<G>(self, transform: G) -> CopyOptions<G>
    where
        G: FnOnce(String) -> String,
    {
        CopyOptions {
            transform,
            mode: self.mode,
        }
    }
}

impl<F> fmt::Debug for CopyOptions<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyOptions")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// Copy the contents of `input` to `output`, passing them through the
/// transform in `options` first.
///
/// The output is appended to unless `options` says otherwise.
pub fn copy_file_content<I, O, F>(input: I, output: O, options: CopyOptions<F>) -> Result<()>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
    F: FnOnce(String) -> String,
{
    let (input, output) = (input.as_ref(), output.as_ref());
    let CopyOptions { transform, mode } = options;

    with_input_output_files(input, output, mode, |fin, fout| {
        let mut content = String::new();
        fin.read_to_string(&mut content)
            .map_err(|e| Error::io_with_path(e, input))?;
        fout.write_all(transform(content).as_bytes())
            .map_err(|e| Error::io_with_path(e, output))
    })
}
