//! Unox FS — blocking file handling helpers.
//!
//! Every function opens, acts on and releases its own handles within the
//! call. Nothing is cached between calls.
//!
//! # Modules
//!
//! - [`mode`]: Output open modes
//! - [`scoped`]: Scoped file handles and content copy
//! - [`walk`]: Recursive file listing
//! - [`tree`]: Best-effort bulk removal and directory copy
//! - [`replace`]: Literal find-and-replace across a directory tree
//! - [`chars`]: Character stream over a file

#![doc = include_str!("../README.md")]

pub mod chars;
pub mod mode;
pub mod replace;
pub mod scoped;
pub mod tree;
pub mod walk;

pub use chars::{FileChars, chars_in_file};
pub use mode::OutputMode;
pub use replace::{deep_replace_file_contents, replace_all};
pub use scoped::{
    CopyOptions, InputFile, OutputFile, copy_file_content, open_input, open_output, read_file,
    with_input_file, with_input_output_files, with_output_file,
};
pub use tree::{copy_folders, copy_tree, remove_files, remove_folders};
pub use walk::{Files, list_files_in_dir};

pub use unox_core::{Error, Result};
