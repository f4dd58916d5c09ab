//! Unox Core — shared error type and validation helpers.
//!
//! This crate has no internal Unox dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error type and Result alias
//! - [`validation`]: Predicate-based value checks

#![doc = include_str!("../README.md")]

pub mod error;
pub mod validation;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use validation::{Length, NonEmpty, require, require_not_empty};
