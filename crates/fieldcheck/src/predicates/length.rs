//! Length predicates
//!
//! Length is measured through the [`Length`] trait. Strings count bytes;
//! collections count their elements. Use [`str_max_length`] /
//! [`str_min_length`] with [`LengthMode::Chars`] to count Unicode scalar
//! values instead.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// LENGTH TRAIT
// ============================================================================

/// Anything with a measurable length.
pub trait Length {
    /// Returns the length of the value.
    fn length(&self) -> usize;
}

impl Length for str {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for String {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for [T] {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    #[inline]
    fn length(&self) -> usize {
        N
    }
}

impl<T> Length for Vec<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for VecDeque<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> Length for HashSet<T, S> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for BTreeSet<T> {
    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: Length + ?Sized> Length for &T {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl<T: Length + ?Sized> Length for Box<T> {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl<T: Length + ?Sized> Length for Rc<T> {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

impl<T: Length + ?Sized> Length for Arc<T> {
    #[inline]
    fn length(&self) -> usize {
        (**self).length()
    }
}

// ============================================================================
// PREDICATES
// ============================================================================

/// Fails with `err` when `value` is longer than `max`.
///
/// ```rust
/// use fieldcheck::predicates::max_length;
///
/// assert_eq!(max_length("hello", 5, "too long"), Ok(()));
/// assert_eq!(max_length("hello!", 5, "too long"), Err("too long"));
/// ```
pub fn max_length<V, E>(value: &V, max: usize, err: E) -> Result<(), E>
where
    V: Length + ?Sized,
{
    if value.length() > max {
        return Err(err);
    }
    Ok(())
}

/// Fails with `err` when `value` is shorter than `min`.
pub fn min_length<V, E>(value: &V, min: usize, err: E) -> Result<(), E>
where
    V: Length + ?Sized,
{
    if value.length() < min {
        return Err(err);
    }
    Ok(())
}

/// Fails with `err` when `value`, measured by `mode`, is longer than `max`.
///
/// ```rust
/// use fieldcheck::predicates::{LengthMode, str_max_length};
///
/// assert_eq!(str_max_length("h\u{e9}llo", 5, LengthMode::Bytes, "too long"), Err("too long"));
/// assert_eq!(str_max_length("h\u{e9}llo", 5, LengthMode::Chars, "too long"), Ok(()));
/// ```
pub fn str_max_length<E>(value: &str, max: usize, mode: LengthMode, err: E) -> Result<(), E> {
    if mode.measure(value) > max {
        return Err(err);
    }
    Ok(())
}

/// Fails with `err` when `value`, measured by `mode`, is shorter than `min`.
pub fn str_min_length<E>(value: &str, min: usize, mode: LengthMode, err: E) -> Result<(), E> {
    if mode.measure(value) < min {
        return Err(err);
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
