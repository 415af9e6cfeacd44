//! Core traits for the validation system

// ============================================================================
// CHECK TRAIT
// ============================================================================

/// A deferred, zero-argument validation step.
///
/// `Ok(())` means the check passed. `Err(e)` carries the failure value the
/// caller supplied when the check was built; implementations must hand it back
/// unchanged.
///
/// Every closure `Fn() -> Result<(), E>` implements `Check<E>`, and so does
/// [`Pipeline`](crate::pipeline::Pipeline), which lets pipelines nest.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::foundation::Check;
///
/// struct NonZero(u32);
///
/// impl Check<&'static str> for NonZero {
///     fn check(&self) -> Result<(), &'static str> {
///         if self.0 == 0 { Err("zero") } else { Ok(()) }
///     }
/// }
///
/// assert_eq!(NonZero(0).check(), Err("zero"));
/// assert_eq!(NonZero(7).check(), Ok(()));
/// ```
pub trait Check<E> {
    /// Evaluates the check.
    fn check(&self) -> Result<(), E>;
}

impl<E, F> Check<E> for F
where
    F: Fn() -> Result<(), E>,
{
    #[inline]
    fn check(&self) -> Result<(), E> {
        self()
    }
}
