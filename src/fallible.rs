//! Converting fallible calls into optional results.
//!
//! This module projects `Result<T, E>` into [`Optional<T>`], discarding the
//! error: success becomes `Present`, any failure becomes `Absent`. The
//! projection is strictly lossy by design - callers who need the error
//! detail keep the `Result` (or re-attach an error at the boundary with
//! [`Optional::ok_or`]).
//!
//! # Examples
//!
//! ```rust
//! use optionals::fallible::attempt;
//! use optionals::optional::Optional;
//!
//! let number = attempt(|| "10".parse::<i32>());
//! assert_eq!(number, Optional::Present(10));
//!
//! let number = attempt(|| "".parse::<i32>());
//! assert_eq!(number.coalesce(0), 0);
//! ```

use crate::optional::Optional;

/// Runs a fallible call and converts its outcome to an `Optional`.
///
/// Returns `Present(v)` iff the call succeeds with `v`, and `Absent` iff it
/// fails, regardless of the failure detail. The call runs exactly once.
///
/// # Examples
///
/// ```rust
/// use optionals::fallible::attempt;
/// use optionals::optional::Optional;
///
/// #[derive(Debug)]
/// enum UserError {
///     NetworkFailed,
/// }
///
/// fn get_user(_id: i32) -> Result<String, UserError> {
///     Err(UserError::NetworkFailed)
/// }
///
/// let user = attempt(|| get_user(23)).coalesce("Anonymous".to_string());
/// assert_eq!(user, "Anonymous");
/// ```
#[inline]
pub fn attempt<T, E, F>(call: F) -> Optional<T>
where
    F: FnOnce() -> Result<T, E>,
{
    Optional::from_result(call())
}

impl<T> Optional<T> {
    /// Projects a `Result` into an `Optional`, discarding the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// assert_eq!(Optional::from_result(ok), Optional::Present(42));
    ///
    /// let err: Result<i32, String> = Err("network failed".to_string());
    /// assert_eq!(Optional::from_result(err), Optional::Absent);
    /// ```
    #[inline]
    pub fn from_result<E>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Present(value),
            Err(_) => Self::Absent,
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Optional<T> {
    /// Converts a `Result` to an `Optional`, discarding the error.
    ///
    /// `Ok(v)` becomes `Present(v)`; every `Err(_)` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let parsed: Optional<i32> = "7".parse::<i32>().into();
    /// assert_eq!(parsed, Optional::Present(7));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}
