//! Common imports for fieldcheck.
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let result = Pipeline::new()
//!     .max_length("hello", 3, ValidationError::new("max_length", "too long"))
//!     .validate();
//! assert_eq!(result.unwrap_err().code(), Some("max_length"));
//! ```

// Core
pub use crate::foundation::{Check, ValidationError, ValidationResult, Violation};

// Pipeline
pub use crate::pipeline::Pipeline;

// Predicates
pub use crate::predicates::{
    DynEq, EMAIL_PATTERN, EMAIL_REGEX, Length, LengthMode, contains, email, eq, eq_dyn, gt, gte,
    lt, lte, max_length, min_length, not_contains, not_eq, not_eq_dyn, regex, str_max_length,
    str_min_length, with_regex,
};
