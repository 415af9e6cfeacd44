//! Set membership predicates
//!
//! Both predicates scan `values` linearly and stop at the first match.

/// Fails with `err` when `value` is not one of `values`.
///
/// ```rust
/// use fieldcheck::predicates::contains;
///
/// let roles = ["admin", "editor", "viewer"];
/// assert_eq!(contains(&"editor", &roles, "unknown role"), Ok(()));
/// assert_eq!(contains(&"owner", &roles, "unknown role"), Err("unknown role"));
/// ```
pub fn contains<T, E>(value: &T, values: &[T], err: E) -> Result<(), E>
where
    T: PartialEq,
{
    if values.iter().any(|v| v == value) {
        return Ok(());
    }
    Err(err)
}

/// Fails with `err` when `value` is one of `values`.
pub fn not_contains<T, E>(value: &T, values: &[T], err: E) -> Result<(), E>
where
    T: PartialEq,
{
    if values.iter().any(|v| v == value) {
        return Err(err);
    }
    Ok(())
}
