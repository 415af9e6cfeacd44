//! Stateless predicate checks
//!
//! Each predicate takes its operands and a caller-supplied failure value, and
//! returns that value as `Err` when the condition is violated:
//!
//! ```rust
//! use fieldcheck::predicates::{contains, max_length};
//!
//! assert_eq!(max_length("hello", 3, "too long"), Err("too long"));
//! assert_eq!(contains(&"b", &["a", "b", "c"], "unknown"), Ok(()));
//! ```
//!
//! The [`Pipeline`](crate::pipeline::Pipeline) builder wraps each of these in a
//! deferred closure.

pub mod compare;
pub mod length;
pub mod membership;
pub mod pattern;

pub use compare::{DynEq, eq, eq_dyn, gt, gte, lt, lte, not_eq, not_eq_dyn};
pub use length::{Length, LengthMode, max_length, min_length, str_max_length, str_min_length};
pub use membership::{contains, not_contains};
pub use pattern::{EMAIL_PATTERN, EMAIL_REGEX, email, regex, with_regex};
