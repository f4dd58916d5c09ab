//! Predicate-based value validation.
//!
//! [`require`] hands a value back only if it satisfies a predicate, and
//! [`require_not_empty`] builds on it to reject empty collections and
//! blank strings. Both fail with [`Error::ValidationFailed`], which callers
//! should treat as a programming error rather than something to recover
//! from.
//!
//! # Example
//!
//! ```
//! use unox_core::validation::{require, require_not_empty};
//!
//! let retries = require(3, |n| *n > 0).unwrap();
//! assert_eq!(retries, 3);
//!
//! // Text has its spaces removed before the length check.
//! assert_eq!(require_not_empty("a b").unwrap(), "ab");
//! assert!(require_not_empty(Vec::<u8>::new()).is_err());
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::{Error, Result};

// ============================================================================
// Length
// ============================================================================

/// Anything with a length.
pub trait Length {
    /// Number of elements (bytes for text).
    fn length(&self) -> usize;
}

impl<T: Length + ?Sized> Length for &T {
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl Length for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for Cow<'_, str> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T> Length for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> Length for HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

// ============================================================================
// NonEmpty
// ============================================================================

/// Values accepted by [`require_not_empty`].
///
/// Text is normalised by removing every `' '` character before the check;
/// tabs and newlines are kept. Collections are checked as they are.
pub trait NonEmpty {
    /// The value that is checked and handed back on success.
    type Checked: Length;

    /// Convert into the value to check.
    fn into_checked(self) -> Self::Checked;
}

fn strip_spaces(text: &str) -> String {
    text.replace(' ', "")
}

impl NonEmpty for &str {
    type Checked = String;

    fn into_checked(self) -> String {
        strip_spaces(self)
    }
}

impl NonEmpty for String {
    type Checked = String;

    fn into_checked(self) -> String {
        if self.contains(' ') {
            strip_spaces(&self)
        } else {
            self
        }
    }
}

impl NonEmpty for &String {
    type Checked = String;

    fn into_checked(self) -> String {
        strip_spaces(self)
    }
}

impl NonEmpty for Cow<'_, str> {
    type Checked = String;

    fn into_checked(self) -> String {
        strip_spaces(&self)
    }
}

macro_rules! non_empty_as_is {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> NonEmpty for $ty {
                type Checked = Self;

                fn into_checked(self) -> Self {
                    self
                }
            }
        )*
    };
}

non_empty_as_is! {
    ['a, T] &'a [T],
    ['a, T] &'a Vec<T>,
    [T] Vec<T>,
    [T, const N: usize] [T; N],
    [T] VecDeque<T>,
    [K, V, S] HashMap<K, V, S>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
}

// ============================================================================
// Checks
// ============================================================================

/// Return `value` if `predicate` holds for it.
///
/// # Errors
///
/// Returns [`Error::ValidationFailed`] when the predicate is false.
pub fn require<T, P>(value: T, predicate: P) -> Result<T>
where
    P: FnOnce(&T) -> bool,
{
    if predicate(&value) {
        Ok(value)
    } else {
        Err(Error::ValidationFailed)
    }
}

/// Require a non-empty collection or a non-blank string.
///
/// On success the checked value is returned: strings come back with
/// their spaces removed, collections come back untouched.
///
/// # Errors
///
/// Returns [`Error::ValidationFailed`] when the checked value is empty.
pub fn require_not_empty<V: NonEmpty>(value: V) -> Result<V::Checked> {
    require(value.into_checked(), |it| it.length() > 0)
}
