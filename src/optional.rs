//! The `Optional<T>` type - an explicit two-state optional value.
//!
//! This module provides `Optional<T>`, a tagged variant that is either
//! `Present(T)` or `Absent`. Unlike implicit unwrapping, every access goes
//! through a combinator, so absence can never escalate into a panic:
//!
//! - [`Optional::coalesce`] substitutes a fallback for absence
//! - [`Optional::map`] transforms the contained value, preserving absence
//! - [`Optional::and_then`] sequences optional-producing accesses
//! - [`Optional::ok_or`] re-embeds the value into a `Result`
//!
//! # Examples
//!
//! ```rust
//! use optionals::optional::Optional;
//!
//! let present: Optional<i32> = Optional::Present(5);
//! let absent: Optional<i32> = Optional::Absent;
//!
//! assert_eq!(present.map(|n| n * n).coalesce(0), 25);
//! assert_eq!(absent.map(|n| n * n).coalesce(0), 0);
//! ```

use std::fmt;

/// A value that is either present or absent.
///
/// `Optional<T>` has exactly two states, fixed at construction:
///
/// - `Present(T)` wraps exactly one value of type `T`
/// - `Absent` carries nothing
///
/// There is no third state and no interior mutation; every combinator
/// consumes its input and produces a new `Optional`. Absence is an ordinary
/// return value, never an error: no method on this type panics.
///
/// # Examples
///
/// ```rust
/// use optionals::optional::Optional;
///
/// let author: Optional<&str> = Optional::Absent;
/// assert_eq!(author.coalesce("Anonymous"), "Anonymous");
///
/// let author = Optional::Present("Heaney");
/// assert_eq!(author.coalesce("Anonymous"), "Heaney");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// The value is present.
    Present(T),
    /// The value is absent.
    Absent,
}

impl<T> Optional<T> {
    // =========================================================================
    // State Checking
    // =========================================================================

    /// Returns `true` if the value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// assert!(Optional::Present(3).is_present());
    /// assert!(!Optional::<i32>::Absent.is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// assert!(Optional::<i32>::Absent.is_absent());
    /// assert!(!Optional::Present(3).is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Reference Adapters (Non-consuming)
    // =========================================================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    ///
    /// Useful for running combinators over a borrowed optional without
    /// consuming it, for example when chaining field accesses on a record
    /// that remains owned by the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let name: Optional<String> = Optional::Present("Arya".to_string());
    /// let length: Optional<usize> = name.as_ref().map(|s| s.len());
    /// assert_eq!(length, Optional::Present(4));
    /// // `name` is still available here
    /// assert!(name.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let mut count: Optional<i32> = Optional::Present(1);
    /// if let Optional::Present(n) = count.as_mut() {
    ///     *n += 1;
    /// }
    /// assert_eq!(count, Optional::Present(2));
    /// ```
    #[inline]
    pub const fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Coalescing
    // =========================================================================

    /// Returns the contained value if present, else the fallback.
    ///
    /// This is the nil-coalescing operation: pure, total, no failure path.
    /// The fallback is evaluated eagerly; use [`Optional::coalesce_with`]
    /// when it is expensive to construct.
    ///
    /// # Laws
    ///
    /// Coalescing is idempotent on the present side:
    ///
    /// ```text
    /// coalesce(coalesce(Present(x), f), f2) == coalesce(Present(x), f)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let missing: Optional<i32> = Optional::Absent;
    /// assert_eq!(missing.coalesce(0), 0);
    ///
    /// let found = Optional::Present(7);
    /// assert_eq!(found.coalesce(0), 7);
    /// ```
    #[inline]
    pub fn coalesce(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }

    /// Returns the contained value if present, else computes the fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let favorite: Optional<String> = Optional::Absent;
    /// assert_eq!(favorite.coalesce_with(|| "None".to_string()), "None");
    /// ```
    #[inline]
    pub fn coalesce_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a function to the contained value, preserving absence.
    ///
    /// # Laws
    ///
    /// `map` satisfies the functor laws:
    ///
    /// ```text
    /// opt.map(|x| x) == opt
    /// opt.map(f).map(g) == opt.map(|x| g(f(x)))
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let number = Optional::Present(10);
    /// assert_eq!(number.map(|n| n * n), Optional::Present(100));
    ///
    /// let nothing: Optional<i32> = Optional::Absent;
    /// assert_eq!(nothing.map(|n| n * n), Optional::Absent);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Applies an optional-producing function, short-circuiting on absence.
    ///
    /// This is the single step of optional chaining: if `self` is absent the
    /// accessor never runs and the result is absent; otherwise the accessor
    /// decides presence. The variadic [`chain!`](crate::chain!) macro folds
    /// a whole sequence of accessors through this method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// fn first_char(s: &str) -> Optional<char> {
    ///     s.chars().next().into()
    /// }
    ///
    /// let name = Optional::Present("Bran");
    /// assert_eq!(name.and_then(first_char), Optional::Present('B'));
    ///
    /// let empty = Optional::Present("");
    /// assert_eq!(empty.and_then(first_char), Optional::Absent);
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, accessor: F) -> Optional<B>
    where
        F: FnOnce(T) -> Optional<B>,
    {
        match self {
            Self::Present(value) => accessor(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keeps the value only if it satisfies the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let even = Optional::Present(4).filter(|n| n % 2 == 0);
    /// assert_eq!(even, Optional::Present(4));
    ///
    /// let odd = Optional::Present(3).filter(|n| n % 2 == 0);
    /// assert_eq!(odd, Optional::Absent);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Absent,
        }
    }

    // =========================================================================
    // Result Embedding
    // =========================================================================

    /// Re-embeds the optional into a `Result`, supplying the error for absence.
    ///
    /// This is the inverse of the lossy projections in
    /// [`fallible`](crate::fallible): callers who need an error value at the
    /// boundary attach one here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let present = Optional::Present(9);
    /// assert_eq!(present.ok_or("missing"), Ok(9));
    ///
    /// let absent: Optional<i32> = Optional::Absent;
    /// assert_eq!(absent.ok_or("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(error),
        }
    }

    // =========================================================================
    // Option Interop
    // =========================================================================

    /// Converts into the standard library's `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(1).into_option(), Some(1));
    /// assert_eq!(Optional::<i32>::Absent.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    /// Renders `Present(value)` using the value's `Display`, and `Absent`
    /// as the bare word.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// assert_eq!(Optional::Present(42).to_string(), "Present(42)");
    /// assert_eq!(Optional::<i32>::Absent.to_string(), "Absent");
    /// ```
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Converts an `Option` to an `Optional`.
    ///
    /// `Some(v)` becomes `Present(v)`, and `None` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let present: Optional<i32> = Some(42).into();
    /// assert_eq!(present, Optional::Present(42));
    ///
    /// let absent: Optional<i32> = None.into();
    /// assert_eq!(absent, Optional::Absent);
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    /// Converts an `Optional` to an `Option`.
    ///
    /// `Present(v)` becomes `Some(v)`, and `Absent` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionals::optional::Optional;
    ///
    /// let some: Option<i32> = Optional::Present(42).into();
    /// assert_eq!(some, Some(42));
    /// ```
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> Default for Optional<T> {
    /// Returns `Absent`, matching `Option`'s default.
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    /// Serializes with the same representation as `Option<T>`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Optional<T> {
    /// Deserializes from the same representation as `Option<T>`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Auto-trait Guarantees
// =============================================================================

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync, Clone);
