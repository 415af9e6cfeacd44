//! Fluent validation pipeline
//!
//! A [`Pipeline`] collects deferred [`Check`]s and runs them in insertion order,
//! returning the first failure. Nothing is evaluated while the pipeline is being
//! built.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! struct SignUp {
//!     username: String,
//!     age: u32,
//!     role: &'static str,
//! }
//!
//! let form = SignUp { username: "eatmoreapple".into(), age: 30, role: "editor" };
//!
//! let pipeline = Pipeline::new()
//!     .min_length(&form.username, 6, ValidationError::new("username", "too short"))
//!     .gt(form.age, 18, ValidationError::new("age", "must be an adult"))
//!     .contains(form.role, ["admin", "editor"], ValidationError::new("role", "unknown role"));
//!
//! assert!(pipeline.validate().is_ok());
//! ```
//!
//! Pipelines are checks themselves, so related rules can be grouped:
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let password = "hunter2";
//! let confirm = "hunter3";
//!
//! let passwords = Pipeline::new()
//!     .min_length(password, 6, "password too short")
//!     .eq(password, confirm, "passwords do not match");
//!
//! let result = Pipeline::new()
//!     .email("user@example.com", "invalid email")
//!     .add(passwords)
//!     .validate();
//!
//! assert_eq!(result, Err("passwords do not match"));
//! ```

use std::borrow::Borrow;
use std::fmt;

use regex::Regex;

use crate::foundation::{Check, ValidationError};
use crate::predicates::{self, DynEq, Length, LengthMode};

type BoxedCheck<'a, E> = Box<dyn Check<E> + 'a>;

// ============================================================================
// PIPELINE
// ============================================================================

/// An ordered, append-only list of checks with short-circuit evaluation.
///
/// `'a` bounds whatever the checks borrow, so a pipeline can validate fields
/// of a struct without cloning them. `E` is the failure value; it defaults to
/// [`ValidationError`] but any type works.
pub struct Pipeline<'a, E = ValidationError> {
    checks: Vec<BoxedCheck<'a, E>>,
}

impl<'a, E> Pipeline<'a, E> {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Appends a check.
    pub fn add<C>(mut self, check: C) -> Self
    where
        C: Check<E> + 'a,
    {
        self.push(check);
        self
    }

    /// Appends a closure as a check.
    pub fn add_fn<F>(self, f: F) -> Self
    where
        F: Fn() -> Result<(), E> + 'a,
    {
        self.add(f)
    }

    /// Appends a check in place.
    ///
    /// Useful when the pipeline is assembled in a loop or behind conditions.
    pub fn push<C>(&mut self, check: C) -> &mut Self
    where
        C: Check<E> + 'a,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Returns the number of checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns `true` if no check has been added.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Runs every check in insertion order.
    ///
    /// Returns the first failure unchanged; checks after it are not evaluated.
    /// An empty pipeline passes.
    pub fn validate(&self) -> Result<(), E> {
        for (index, check) in self.checks.iter().enumerate() {
            if let Err(err) = check.check() {
                tracing::trace!(
                    index,
                    total = self.checks.len(),
                    "validation pipeline stopped at failing check"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<E> Default for Pipeline<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Check<E> for Pipeline<'_, E> {
    fn check(&self) -> Result<(), E> {
        self.validate()
    }
}

impl<'a, E, C> FromIterator<C> for Pipeline<'a, E>
where
    C: Check<E> + 'a,
{
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut pipeline = Self::new();
        pipeline.extend(iter);
        pipeline
    }
}

impl<'a, E, C> Extend<C> for Pipeline<'a, E>
where
    C: Check<E> + 'a,
{
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        for check in iter {
            self.push(check);
        }
    }
}

// Checks are opaque closures
impl<E> fmt::Debug for Pipeline<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("checks", &self.checks.len())
            .finish()
    }
}

// ============================================================================
// PREDICATE SHORTHANDS
// ============================================================================

macro_rules! ordering_checks {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            pub fn $name<T>(self, a: T, b: T, err: E) -> Self
            where
                T: PartialOrd + 'a,
            {
                self.add_fn(move || predicates::$name(&a, &b, err.clone()))
            }
        )+
    };
}

impl<'a, E> Pipeline<'a, E>
where
    E: Clone + 'a,
{
    /// Fails with `err` when `value` is longer than `max`.
    pub fn max_length<V>(self, value: V, max: usize, err: E) -> Self
    where
        V: Length + 'a,
    {
        self.add_fn(move || predicates::max_length(&value, max, err.clone()))
    }

    /// Fails with `err` when `value` is shorter than `min`.
    pub fn min_length<V>(self, value: V, min: usize, err: E) -> Self
    where
        V: Length + 'a,
    {
        self.add_fn(move || predicates::min_length(&value, min, err.clone()))
    }

    /// Fails with `err` when string `value`, measured by `mode`, is longer than `max`.
    pub fn str_max_length<V>(self, value: V, max: usize, mode: LengthMode, err: E) -> Self
    where
        V: AsRef<str> + 'a,
    {
        self.add_fn(move || predicates::str_max_length(value.as_ref(), max, mode, err.clone()))
    }

    /// Fails with `err` when string `value`, measured by `mode`, is shorter than `min`.
    pub fn str_min_length<V>(self, value: V, min: usize, mode: LengthMode, err: E) -> Self
    where
        V: AsRef<str> + 'a,
    {
        self.add_fn(move || predicates::str_min_length(value.as_ref(), min, mode, err.clone()))
    }

    ordering_checks! {
        /// Fails with `err` when `a < b`.
        gt;
        /// Fails with `err` when `a > b`.
        lt;
        /// Fails with `err` when `a <= b`.
        gte;
        /// Fails with `err` when `a >= b`.
        lte;
    }

    /// Fails with `err` when `a != b`.
    pub fn eq<A, B>(self, a: A, b: B, err: E) -> Self
    where
        A: PartialEq<B> + 'a,
        B: 'a,
    {
        self.add_fn(move || predicates::eq(&a, &b, err.clone()))
    }

    /// Fails with `err` when `a == b`.
    pub fn not_eq<A, B>(self, a: A, b: B, err: E) -> Self
    where
        A: PartialEq<B> + 'a,
        B: 'a,
    {
        self.add_fn(move || predicates::not_eq(&a, &b, err.clone()))
    }

    /// Fails with `err` unless `a` and `b` have the same type and compare equal.
    pub fn eq_dyn<A, B>(self, a: A, b: B, err: E) -> Self
    where
        A: DynEq,
        B: DynEq,
    {
        self.add_fn(move || predicates::eq_dyn(&a, &b, err.clone()))
    }

    /// Fails with `err` when `a` and `b` have the same type and compare equal.
    pub fn not_eq_dyn<A, B>(self, a: A, b: B, err: E) -> Self
    where
        A: DynEq,
        B: DynEq,
    {
        self.add_fn(move || predicates::not_eq_dyn(&a, &b, err.clone()))
    }

    /// Fails with `err` when `value` is not one of `values`.
    pub fn contains<T, S>(self, value: T, values: S, err: E) -> Self
    where
        T: PartialEq + 'a,
        S: AsRef<[T]> + 'a,
    {
        self.add_fn(move || predicates::contains(&value, values.as_ref(), err.clone()))
    }

    /// Fails with `err` when `value` is one of `values`.
    pub fn not_contains<T, S>(self, value: T, values: S, err: E) -> Self
    where
        T: PartialEq + 'a,
        S: AsRef<[T]> + 'a,
    {
        self.add_fn(move || predicates::not_contains(&value, values.as_ref(), err.clone()))
    }

    /// Fails with `err` when `value` does not match `pattern`.
    ///
    /// The pattern is compiled each time the pipeline runs; a pattern that does
    /// not compile fails with the converted compile error instead of `err`.
    pub fn regex<V, P>(self, value: V, pattern: P, err: E) -> Self
    where
        E: From<regex::Error>,
        V: AsRef<str> + 'a,
        P: AsRef<str> + 'a,
    {
        self.add_fn(move || predicates::regex(value.as_ref(), pattern.as_ref(), err.clone()))
    }

    /// Fails with `err` when `value` does not match the precompiled `exp`.
    pub fn with_regex<V, R>(self, value: V, exp: R, err: E) -> Self
    where
        V: AsRef<str> + 'a,
        R: Borrow<Regex> + 'a,
    {
        self.add_fn(move || predicates::with_regex(value.as_ref(), exp.borrow(), err.clone()))
    }

    /// Fails with `err` when `value` is not shaped like an email address.
    pub fn email<V>(self, value: V, err: E) -> Self
    where
        V: AsRef<str> + 'a,
    {
        self.add_fn(move || predicates::email(value.as_ref(), err.clone()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
