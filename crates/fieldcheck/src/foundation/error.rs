//! Error types for validation failures
//!
//! [`ValidationError`] is the default failure value of a
//! [`Pipeline`](crate::pipeline::Pipeline). It separates the two ways a check
//! can fail:
//!
//! - [`ValidationError::Violation`]: the input broke a rule.
//! - [`ValidationError::InvalidPattern`]: the rule itself is broken (a regular
//!   expression that does not compile).
//!
//! All string fields of [`Violation`] use `Cow<'static, str>` so static codes
//! and messages never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Failure value produced by the built-in checks when the caller has no error
/// taxonomy of their own.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "Username is too short");
/// assert_eq!(error.code(), Some("min_length"));
/// assert!(!error.is_invalid_rule());
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// The validated value broke a rule.
    #[error("{0}")]
    Violation(Violation),

    /// A regular expression used by a check failed to compile.
    #[error("invalid validation pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl ValidationError {
    /// Creates a rule violation with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Violation(Violation::new(code, message))
    }

    /// Returns the violation code, or `None` for a broken rule.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Violation(v) => Some(v.code.as_ref()),
            Self::InvalidPattern(_) => None,
        }
    }

    /// Returns the violation, if this error is one.
    pub fn as_violation(&self) -> Option<&Violation> {
        match self {
            Self::Violation(v) => Some(v),
            Self::InvalidPattern(_) => None,
        }
    }

    /// Returns `true` when the failure came from a malformed rule rather than
    /// from the validated value.
    pub fn is_invalid_rule(&self) -> bool {
        matches!(self, Self::InvalidPattern(_))
    }
}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        Self::Violation(violation)
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A structured rule violation.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::Violation;
///
/// let violation = Violation::new("max_length", "Too long")
///     .with_field("user.name")
///     .with_param("max", "20");
///
/// assert_eq!(violation.param("max"), Some("20"));
/// assert_eq!(violation.to_string(), "[user.name] max_length: Too long (params: [max=20])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Violation {
    /// Error code for programmatic handling.
    ///
    /// Examples: "min_length", "email", "password_mismatch"
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Optional field path, e.g. "user.email".
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-3).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl Violation {
    /// Creates a violation with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field path.
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Appends a parameter.
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter by key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
