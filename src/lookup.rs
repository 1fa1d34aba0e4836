//! Lookup trait - optional access into map-like containers.
//!
//! This module provides the [`Lookup`] trait, implemented for the standard
//! map types, so that keyed access always yields an [`Optional`] or a
//! caller-supplied default instead of panicking on a missing key.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use optionals::lookup::Lookup;
//!
//! let opposites: HashMap<&str, &str> =
//!     [("Mario", "Wario"), ("Luigi", "Waluigi")].into();
//!
//! assert_eq!(opposites.lookup_or(&"Peach", "N/A"), "N/A");
//! assert_eq!(opposites.lookup_or(&"Mario", "N/A"), "Wario");
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::optional::Optional;

/// Keyed containers whose access yields an `Optional`.
///
/// The borrowing primitive is [`Lookup::lookup`]; [`Lookup::lookup_or`] is
/// the total lookup-with-default built on top of it. Neither has a failure
/// path: a missing key is absence, never an error.
///
/// # Laws
///
/// For every map `m`, key `k`, and default `d`:
///
/// ```text
/// lookup_or(m, k, d) == m[k].clone()   when k is in m
/// lookup_or(m, k, d) == d              otherwise
/// ```
pub trait Lookup<K, V> {
    /// Returns a reference to the value for `key` if one is stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use optionals::lookup::Lookup;
    /// use optionals::optional::Optional;
    ///
    /// let captains: BTreeMap<&str, &str> =
    ///     [("Enterprise", "Picard"), ("Voyager", "Janeway")].into();
    ///
    /// assert_eq!(captains.lookup(&"Voyager"), Optional::Present(&"Janeway"));
    /// assert_eq!(captains.lookup(&"Serenity"), Optional::Absent);
    /// ```
    fn lookup<Q>(&self, key: &Q) -> Optional<&V>
    where
        K: Borrow<Q>,
        Q: Ord + Hash + Eq + ?Sized;

    /// Returns a clone of the value for `key`, or the default when missing.
    ///
    /// Always returns a concrete `V`; the default is returned exactly as
    /// given, not wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use optionals::lookup::Lookup;
    ///
    /// let captains: HashMap<&str, &str> =
    ///     [("Enterprise", "Picard"), ("Defiant", "Sisko")].into();
    ///
    /// assert_eq!(captains.lookup_or(&"Serenity", "N/A"), "N/A");
    /// ```
    fn lookup_or<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Ord + Hash + Eq + ?Sized,
        V: Clone,
    {
        self.lookup(key).map(V::clone).coalesce(default)
    }
}

// =============================================================================
// Standard Library Map Implementations
// =============================================================================

impl<K: Hash + Eq, V> Lookup<K, V> for HashMap<K, V> {
    #[inline]
    fn lookup<Q>(&self, key: &Q) -> Optional<&V>
    where
        K: Borrow<Q>,
        Q: Ord + Hash + Eq + ?Sized,
    {
        self.get(key).into()
    }
}

impl<K: Ord, V> Lookup<K, V> for BTreeMap<K, V> {
    #[inline]
    fn lookup<Q>(&self, key: &Q) -> Optional<&V>
    where
        K: Borrow<Q>,
        Q: Ord + Hash + Eq + ?Sized,
    {
        self.get(key).into()
    }
}
