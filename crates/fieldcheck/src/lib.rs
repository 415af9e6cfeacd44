//! # fieldcheck
//!
//! Fluent, short-circuiting validation pipelines built from plain predicate checks.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let username = "alice";
//! let password = "hunter22";
//! let confirm = "hunter22";
//!
//! let result = Pipeline::new()
//!     .min_length(username, 3, ValidationError::new("username", "too short"))
//!     .max_length(username, 20, ValidationError::new("username", "too long"))
//!     .eq(password, confirm, ValidationError::new("password", "passwords do not match"))
//!     .validate();
//!
//! assert!(result.is_ok());
//! ```
//!
//! ## Building Blocks
//!
//! - [`Check`](foundation::Check): a deferred, zero-argument check. Every
//!   `Fn() -> Result<(), E>` closure is one.
//! - [`Pipeline`](pipeline::Pipeline): an ordered list of checks evaluated in
//!   insertion order, stopping at the first failure. A pipeline is itself a
//!   [`Check`](foundation::Check), so pipelines nest.
//! - [`predicates`]: the stateless leaf checks the pipeline dispatches to:
//!   - **Length**: [`max_length`](predicates::max_length), [`min_length`](predicates::min_length)
//!   - **Ordering**: [`gt`](predicates::gt), [`lt`](predicates::lt),
//!     [`gte`](predicates::gte), [`lte`](predicates::lte)
//!   - **Equality**: [`eq`](predicates::eq), [`not_eq`](predicates::not_eq),
//!     [`eq_dyn`](predicates::eq_dyn), [`not_eq_dyn`](predicates::not_eq_dyn)
//!   - **Membership**: [`contains`](predicates::contains), [`not_contains`](predicates::not_contains)
//!   - **Pattern**: [`regex`](predicates::regex), [`with_regex`](predicates::with_regex),
//!     [`email`](predicates::email)
//!
//! ## Failure Values
//!
//! The failure value is whatever the caller passes in; the pipeline returns it
//! untouched. [`ValidationError`](foundation::ValidationError) is provided as a
//! ready-made default. Pattern predicates also need `E: From<regex::Error>` so a
//! malformed pattern can be reported through the same channel.

pub mod foundation;
pub mod pipeline;
pub mod predicates;
pub mod prelude;
