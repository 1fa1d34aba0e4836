//! Guard-style early exit - mandatory handling of absence.
//!
//! A guard is a binary branch where the absent side is a non-resumable exit
//! from the enclosing operation. This module encodes it explicitly:
//!
//! - [`Guarded<T>`] is the sum type `{ Continue(T) | Abort }`; callers
//!   check the tag and return on `Abort` - there is no implicit
//!   non-local exit anywhere.
//! - [`guard`] builds a `Guarded` from an [`Optional`], running the
//!   caller's reporting hook on absence.
//! - [`guard!`](crate::guard!) is sugar that yields the unwrapped value
//!   directly, forcing the absent arm to diverge.
//!
//! # Examples
//!
//! ```rust
//! use optionals::guard::{guard, Guarded};
//! use optionals::optional::Optional;
//!
//! fn print_square(number: Optional<i32>) {
//!     let number = match guard(number, || println!("Missing input")) {
//!         Guarded::Continue(value) => value,
//!         Guarded::Abort => return,
//!     };
//!     println!("{number} x {number} is {}", number * number);
//! }
//!
//! print_square(Optional::Present(3));
//! print_square(Optional::Absent);
//! ```

use crate::optional::Optional;

/// The outcome of a guard: continue with the value, or abort the operation.
///
/// `Abort` deliberately carries nothing - once the absent branch has run
/// its reporting hook, the enclosing operation has no information left to
/// act on and must exit.
///
/// # Examples
///
/// ```rust
/// use optionals::guard::Guarded;
///
/// let outcome: Guarded<i32> = Guarded::Continue(7);
/// assert!(outcome.is_continue());
/// assert_eq!(outcome.continued(), Some(7));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Guarded<T> {
    /// The value was present; the enclosing operation proceeds with it.
    Continue(T),
    /// The value was absent; the enclosing operation must exit.
    Abort,
}

impl<T> Guarded<T> {
    /// Returns `true` if the guard passed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::guard::Guarded;
    ///
    /// assert!(Guarded::Continue(1).is_continue());
    /// assert!(!Guarded::<i32>::Abort.is_continue());
    /// ```
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Returns `true` if the guard aborted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::guard::Guarded;
    ///
    /// assert!(Guarded::<i32>::Abort.is_abort());
    /// ```
    #[inline]
    pub const fn is_abort(&self) -> bool {
        matches!(self, Self::Abort)
    }

    /// Extracts the value if the guard passed, consuming the `Guarded`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::guard::Guarded;
    ///
    /// assert_eq!(Guarded::Continue(5).continued(), Some(5));
    /// assert_eq!(Guarded::<i32>::Abort.continued(), None);
    /// ```
    #[inline]
    pub fn continued(self) -> Option<T> {
        match self {
            Self::Continue(value) => Some(value),
            Self::Abort => None,
        }
    }
}

/// Guards on presence, running the reporting hook before an abort.
///
/// If `opt` is present the hook never runs and the value flows through as
/// `Continue`. If `opt` is absent, `on_absent` runs exactly once (typically
/// logging or printing a "missing input" line) and the result is `Abort`.
/// The caller must not proceed past an `Abort` - check the tag and return.
///
/// # Examples
///
/// ```rust
/// use optionals::guard::{guard, Guarded};
/// use optionals::optional::Optional;
///
/// let mut reported = false;
/// let outcome = guard(Optional::<i32>::Absent, || reported = true);
/// assert_eq!(outcome, Guarded::Abort);
/// assert!(reported);
/// ```
#[inline]
pub fn guard<T, F>(opt: Optional<T>, on_absent: F) -> Guarded<T>
where
    F: FnOnce(),
{
    match opt {
        Optional::Present(value) => Guarded::Continue(value),
        Optional::Absent => {
            on_absent();
            Guarded::Abort
        }
    }
}

/// Unwraps an [`Optional`], forcing the absent arm to exit the enclosing
/// operation.
///
/// `guard!(opt, else { ... })` evaluates to the contained value when `opt`
/// is present. When `opt` is absent, the `else` block runs instead; it must
/// diverge (`return`, `break`, `continue`, or `?` on an error), which the
/// type system enforces. This mirrors `let ... else` but goes through the
/// explicit [`Optional`] tag.
///
/// # Syntax
///
/// - `guard!(opt, else { diverging-block })`
///
/// # Examples
///
/// ```rust
/// use optionals::guard;
/// use optionals::optional::Optional;
///
/// fn describe_square(number: Optional<i32>) -> String {
///     let number = guard!(number, else {
///         return "Missing input".to_string();
///     });
///     format!("{number} x {number} is {}", number * number)
/// }
///
/// assert_eq!(describe_square(Optional::Present(3)), "3 x 3 is 9");
/// assert_eq!(describe_square(Optional::Absent), "Missing input");
/// ```
#[macro_export]
macro_rules! guard {
    ($opt:expr, else $body:block) => {
        match $opt {
            $crate::optional::Optional::Present(value) => value,
            $crate::optional::Optional::Absent => $body,
        }
    };
}
