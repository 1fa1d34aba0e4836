//! # optionals
//!
//! Explicit optional-value combinators: a tagged [`Optional<T>`] type plus
//! the access patterns that keep absence from ever becoming a panic.
//!
//! ## Overview
//!
//! Every access to a possibly-absent value goes through a combinator:
//!
//! - **Lookup with default**: [`Lookup`] for keyed containers
//! - **Guard exit**: [`Guarded`], [`guard`](guard::guard), and the
//!   [`guard!`] macro for mandatory early returns on absence
//! - **Coalescing**: [`Optional::coalesce`] substitutes a fallback
//! - **Chaining**: the [`chain!`] macro folds optional-producing accessors
//!   left to right, short-circuiting on the first absence
//! - **Fallible-call conversion**: [`attempt`](fallible::attempt) turns a
//!   `Result`-returning call into an `Optional`, discarding the error
//!
//! Absence is always an ordinary return value. None of the combinators
//! raises; the only early exit is the guard, and it is visible in the
//! caller's source.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use optionals::prelude::*;
//!
//! let opposites: HashMap<&str, &str> =
//!     [("Mario", "Wario"), ("Luigi", "Waluigi")].into();
//!
//! assert_eq!(opposites.lookup_or(&"Peach", "N/A"), "N/A");
//!
//! let favorite: Optional<&str> = Optional::Absent;
//! assert_eq!(favorite.coalesce("None"), "None");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Optional<T>`], with the same
//!   representation as `Option<T>`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optionals::prelude::*;
/// ```
pub mod prelude {
    pub use crate::fallible::attempt;
    pub use crate::guard::{guard, Guarded};
    pub use crate::lookup::Lookup;
    pub use crate::optional::Optional;
}

pub mod chain;
pub mod fallible;
pub mod guard;
pub mod lookup;
pub mod optional;

pub use fallible::attempt;
pub use guard::Guarded;
pub use lookup::Lookup;
pub use optional::Optional;

#[cfg(test)]
mod tests {
    #[test]
    fn prelude_surface_is_usable() {
        use super::prelude::*;

        let value: Optional<i32> = attempt(|| "3".parse::<i32>());
        assert_eq!(guard(value, || ()), Guarded::Continue(3));
    }
}
