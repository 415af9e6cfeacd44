//! Core validation types and traits
//!
//! - **Traits**: [`Check`]
//! - **Errors**: [`ValidationError`], [`Violation`]
//!
//! A check is anything that can be asked "does this hold?" without arguments.
//! The values it looks at are captured when the check is built:
//!
//! ```rust
//! use fieldcheck::foundation::{Check, ValidationError};
//!
//! let age = 17;
//! let adult = move || {
//!     if age >= 18 {
//!         Ok(())
//!     } else {
//!         Err(ValidationError::new("age", "must be an adult"))
//!     }
//! };
//!
//! assert!(adult.check().is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, Violation};
pub use traits::Check;

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
