//! Unit tests for the Lookup trait.
//!
//! Lookup provides optional access into map-like containers: a missing key
//! yields absence (or a caller-supplied default), never an error.

use std::collections::{BTreeMap, HashMap};

use optionals::lookup::Lookup;
use optionals::optional::Optional;
use rstest::rstest;

fn opposites() -> HashMap<&'static str, &'static str> {
    [("Mario", "Wario"), ("Luigi", "Waluigi")].into()
}

// =============================================================================
// Borrowing Lookup
// =============================================================================

#[rstest]
fn lookup_finds_stored_value() {
    assert_eq!(opposites().lookup("Mario"), Optional::Present(&"Wario"));
}

#[rstest]
fn lookup_yields_absence_for_missing_key() {
    assert_eq!(opposites().lookup("Peach"), Optional::Absent);
}

#[rstest]
fn lookup_works_on_btree_map() {
    let captains: BTreeMap<&str, &str> = [
        ("Enterprise", "Picard"),
        ("Voyager", "Janeway"),
        ("Defiant", "Sisko"),
    ]
    .into();

    assert_eq!(captains.lookup("Voyager"), Optional::Present(&"Janeway"));
    assert_eq!(captains.lookup("Serenity"), Optional::Absent);
}

// =============================================================================
// Lookup with Default
// =============================================================================

#[rstest]
fn lookup_or_returns_stored_value() {
    assert_eq!(opposites().lookup_or("Mario", "N/A"), "Wario");
}

#[rstest]
fn lookup_or_returns_default_exactly_for_missing_key() {
    assert_eq!(opposites().lookup_or("Peach", "N/A"), "N/A");
}

#[rstest]
fn lookup_or_with_owned_values() {
    let mut scores: HashMap<String, u32> = HashMap::new();
    scores.insert("Arya".to_string(), 12);

    assert_eq!(scores.lookup_or("Arya", 0), 12);
    assert_eq!(scores.lookup_or("Bran", 0), 0);
    // the stored value is cloned out, not moved
    assert_eq!(scores.len(), 1);
}

#[rstest]
fn lookup_or_on_empty_map_always_defaults() {
    let empty: BTreeMap<String, String> = BTreeMap::new();
    assert_eq!(empty.lookup_or("anything", "N/A".to_string()), "N/A");
}
