//! Unox — umbrella crate for the file and validation helpers.
//!
//! Re-exports [`unox_fs`] as [`files`] and [`unox_core::validation`] as
//! [`validation`], so applications need a single dependency.

#![doc = include_str!("../README.md")]

pub use unox_core::{Error, Result, error, validation};
pub use unox_fs as files;
