//! Ordering and equality predicates
//!
//! The ordering predicates keep their historical directions, which do not
//! read the way the names suggest:
//!
//! | Predicate   | Fails when |
//! |-------------|------------|
//! | `gt(a, b)`  | `a < b`    |
//! | `lt(a, b)`  | `a > b`    |
//! | `gte(a, b)` | `a <= b`   |
//! | `lte(a, b)` | `a >= b`   |
//!
//! So `gt` and `lt` admit equality while `gte` and `lte` reject it.

use std::any::Any;

// ============================================================================
// ORDERING
// ============================================================================

/// Fails with `err` when `a < b`.
///
/// ```rust
/// use fieldcheck::predicates::gt;
///
/// assert_eq!(gt(&2, &1, "err"), Ok(()));
/// assert_eq!(gt(&2, &2, "err"), Ok(()));
/// assert_eq!(gt(&1, &2, "err"), Err("err"));
/// ```
pub fn gt<T, E>(a: &T, b: &T, err: E) -> Result<(), E>
where
    T: PartialOrd + ?Sized,
{
    if a < b {
        return Err(err);
    }
    Ok(())
}

/// Fails with `err` when `a > b`.
pub fn lt<T, E>(a: &T, b: &T, err: E) -> Result<(), E>
where
    T: PartialOrd + ?Sized,
{
    if a > b {
        return Err(err);
    }
    Ok(())
}

/// Fails with `err` when `a <= b`.
pub fn gte<T, E>(a: &T, b: &T, err: E) -> Result<(), E>
where
    T: PartialOrd + ?Sized,
{
    if a <= b {
        return Err(err);
    }
    Ok(())
}

/// Fails with `err` when `a >= b`.
pub fn lte<T, E>(a: &T, b: &T, err: E) -> Result<(), E>
where
    T: PartialOrd + ?Sized,
{
    if a >= b {
        return Err(err);
    }
    Ok(())
}

// ============================================================================
// STATIC EQUALITY
// ============================================================================

/// Fails with `err` when `a != b`.
///
/// The operands may differ in type as long as they are comparable, e.g.
/// `String` against `&str`.
pub fn eq<A, B, E>(a: &A, b: &B, err: E) -> Result<(), E>
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    if a != b {
        return Err(err);
    }
    Ok(())
}

/// Fails with `err` when `a == b`.
pub fn not_eq<A, B, E>(a: &A, b: &B, err: E) -> Result<(), E>
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    if a == b {
        return Err(err);
    }
    Ok(())
}

// ============================================================================
// DYNAMIC EQUALITY
// ============================================================================

/// Equality between values whose types are only known at runtime.
///
/// Implemented for every `'static` type with `PartialEq`. Two values are equal
/// only if they have the same concrete type and that type's `PartialEq` says
/// so; `1_i32` and `1_i64` are different values.
pub trait DynEq: Any {
    /// Upcasts to `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Compares against another dynamically typed value.
    fn dyn_eq(&self, other: &dyn DynEq) -> bool;
}

impl<T: Any + PartialEq> DynEq for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynEq) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// Fails with `err` unless `a` and `b` have the same type and compare equal.
///
/// ```rust
/// use fieldcheck::predicates::eq_dyn;
///
/// assert_eq!(eq_dyn(&1_i32, &1_i32, "err"), Ok(()));
/// assert_eq!(eq_dyn(&1_i32, &1_i64, "err"), Err("err"));
/// ```
pub fn eq_dyn<E>(a: &dyn DynEq, b: &dyn DynEq, err: E) -> Result<(), E> {
    if !a.dyn_eq(b) {
        return Err(err);
    }
    Ok(())
}

/// Fails with `err` when `a` and `b` have the same type and compare equal.
pub fn not_eq_dyn<E>(a: &dyn DynEq, b: &dyn DynEq, err: E) -> Result<(), E> {
    if a.dyn_eq(b) {
        return Err(err);
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2, 1, true)]
    #[case(2, 2, true)]
    #[case(1, 2, false)]
    fn test_gt(#[case] a: i32, #[case] b: i32, #[case] ok: bool) {
        assert_eq!(gt(&a, &b, ()).is_ok(), ok);
    }

    #[rstest]
    #[case(1, 2, true)]
    #[case(2, 2, true)]
    #[case(2, 1, false)]
    fn test_lt(#[case] a: i32, #[case] b: i32, #[case] ok: bool) {
        assert_eq!(lt(&a, &b, ()).is_ok(), ok);
    }

    #[rstest]
    #[case(3, 2, true)]
    #[case(2, 2, false)]
    #[case(1, 2, false)]
    fn test_gte(#[case] a: i32, #[case] b: i32, #[case] ok: bool) {
        assert_eq!(gte(&a, &b, ()).is_ok(), ok);
    }

    #[rstest]
    #[case(1, 2, true)]
    #[case(2, 2, false)]
    #[case(3, 2, false)]
    fn test_lte(#[case] a: i32, #[case] b: i32, #[case] ok: bool) {
        assert_eq!(lte(&a, &b, ()).is_ok(), ok);
    }

    #[test]
    fn test_ordering_other_types() {
        assert!(gt(&2.5_f64, &1.0, ()).is_ok());
        assert!(lt(&u64::MAX, &0, ()).is_err());
        assert!(gt("apple", "banana", ()).is_err());
        assert!(lte(&'a', &'b', ()).is_ok());
    }

    #[test]
    fn test_ordering_nan_never_fails() {
        let nan = f64::NAN;
        assert!(gt(&nan, &1.0, ()).is_ok());
        assert!(lt(&nan, &1.0, ()).is_ok());
        assert!(gte(&nan, &1.0, ()).is_ok());
        assert!(lte(&nan, &1.0, ()).is_ok());
    }

    #[test]
    fn test_eq() {
        assert_eq!(eq(&"password", &"password", "mismatch"), Ok(()));
        assert_eq!(eq(&"password", &"passw0rd", "mismatch"), Err("mismatch"));
        assert!(eq(&String::from("a"), "a", ()).is_ok());
    }

    #[test]
    fn test_not_eq() {
        assert!(not_eq(&1, &2, ()).is_ok());
        assert!(not_eq(&1, &1, ()).is_err());
    }

    #[test]
    fn test_eq_dyn_same_type() {
        assert!(eq_dyn(&String::from("x"), &String::from("x"), ()).is_ok());
        assert!(eq_dyn(&String::from("x"), &String::from("y"), ()).is_err());
    }

    #[test]
    fn test_eq_dyn_different_types_never_equal() {
        assert!(eq_dyn(&1_u8, &1_u16, ()).is_err());
        assert!(eq_dyn(&"x", &String::from("x"), ()).is_err());
        assert!(not_eq_dyn(&1_u8, &1_u16, ()).is_ok());
    }

    #[test]
    fn test_not_eq_dyn() {
        assert!(not_eq_dyn(&Some(3), &Some(3), ()).is_err());
        assert!(not_eq_dyn(&Some(3), &None::<i32>, ()).is_ok());
    }
}
