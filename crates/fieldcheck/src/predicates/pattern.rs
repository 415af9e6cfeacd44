//! Regular-expression predicates

use std::sync::LazyLock;

use regex::Regex;

/// Source of the built-in email pattern used by [`email`].
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

/// Process-wide compiled [`EMAIL_PATTERN`], built on first use.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

// ============================================================================
// REGEX
// ============================================================================

/// Fails when `value` does not match `pattern`.
///
/// The pattern is compiled on every call. If it does not compile, the compile
/// error is returned (converted into `E`) instead of `err`. Use [`with_regex`]
/// to compile once and reuse.
///
/// ```rust
/// use fieldcheck::foundation::ValidationError;
/// use fieldcheck::predicates::regex;
///
/// let err = ValidationError::new("zip", "Invalid zip code");
/// assert!(regex("12345", r"^\d{5}$", err.clone()).is_ok());
/// assert_eq!(regex("1234", r"^\d{5}$", err.clone()), Err(err.clone()));
/// assert!(regex("12345", "[", err).unwrap_err().is_invalid_rule());
/// ```
pub fn regex<E>(value: &str, pattern: &str, err: E) -> Result<(), E>
where
    E: From<regex::Error>,
{
    let exp = Regex::new(pattern)?;
    with_regex(value, &exp, err)
}

/// Fails with `err` when `value` does not match the precompiled `exp`.
///
/// Matching is a search, not a full match; anchor the pattern with `^...$`
/// when the whole value must match.
pub fn with_regex<E>(value: &str, exp: &Regex, err: E) -> Result<(), E> {
    if !exp.is_match(value) {
        return Err(err);
    }
    Ok(())
}

/// Fails with `err` when `value` is not shaped like an email address.
pub fn email<E>(value: &str, err: E) -> Result<(), E> {
    with_regex(value, &EMAIL_REGEX, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidationError;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("a@b.com", true)]
    #[case("first.last+tag@sub.example.org", true)]
    #[case("invalid", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("not-an-email", false)]
    fn test_email(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(email(input, ()).is_ok(), ok);
    }

    #[test]
    fn test_regex_match_and_mismatch() {
        let err = ValidationError::new("phone", "Invalid phone");
        assert!(regex("123-4567", r"^\d{3}-\d{4}$", err.clone()).is_ok());
        assert_eq!(regex("invalid", r"^\d{3}-\d{4}$", err.clone()), Err(err));
    }

    #[test]
    fn test_regex_with_email_pattern() {
        let err = ValidationError::new("email", "Invalid email");
        assert!(regex("a@b.com", EMAIL_PATTERN, err.clone()).is_ok());
        assert_eq!(regex("not-an-email", EMAIL_PATTERN, err.clone()), Err(err));
    }

    #[test]
    fn test_regex_compile_error_replaces_supplied_error() {
        let err = ValidationError::new("custom", "never returned");
        let result = regex("anything", "[", err);
        assert!(matches!(result, Err(ValidationError::InvalidPattern(_))));
    }

    #[test]
    fn test_regex_is_unanchored_search() {
        assert!(with_regex("order #42", &Regex::new(r"\d+").unwrap(), ()).is_ok());
        assert!(with_regex("order #42", &Regex::new(r"^\d+$").unwrap(), ()).is_err());
    }

    #[test]
    fn test_with_regex_reuses_compiled_pattern() {
        let exp = Regex::new(r"^[a-z]+$").unwrap();
        assert_eq!(with_regex("hello", &exp, "bad"), Ok(()));
        assert_eq!(with_regex("Hello", &exp, "bad"), Err("bad"));
    }
}
