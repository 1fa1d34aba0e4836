//! Unit tests for the chain! macro.
//!
//! chain! folds optional-producing accessors left to right, short-circuiting
//! to absence at the first absent step.

use std::cell::Cell;

use optionals::chain;
use optionals::optional::Optional;
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Book {
    title: String,
    author: Optional<String>,
}

fn author(book: Book) -> Optional<String> {
    book.author
}

fn first_char(name: String) -> Optional<char> {
    name.chars().next().into()
}

fn uppercase(c: char) -> Optional<char> {
    Optional::Present(c.to_ascii_uppercase())
}

// =============================================================================
// Base Cases
// =============================================================================

#[rstest]
fn chain_with_no_accessors_returns_input() {
    assert_eq!(chain!(Optional::Present(1)), Optional::Present(1));
    assert_eq!(chain!(Optional::<i32>::Absent), Optional::Absent);
}

#[rstest]
fn chain_with_single_accessor_is_and_then() {
    let chained = chain!(Optional::Present("Robb".to_string()), first_char);
    let direct = Optional::Present("Robb".to_string()).and_then(first_char);
    assert_eq!(chained, direct);
}

// =============================================================================
// Short-circuiting
// =============================================================================

#[rstest]
fn absent_head_is_absorbing() {
    let missing: Optional<Book> = Optional::Absent;
    let result = chain!(missing, author, first_char, uppercase);
    assert_eq!(result, Optional::Absent);
}

#[rstest]
fn accessors_after_absent_step_never_run() {
    let ran = Cell::new(false);
    let touch = |c: char| {
        ran.set(true);
        Optional::Present(c)
    };

    let anonymous = Book {
        title: "Beowulf".to_string(),
        author: Optional::Absent,
    };

    let result = chain!(Optional::Present(anonymous), author, first_char, touch);
    assert_eq!(result, Optional::Absent);
    assert!(!ran.get());
}

#[rstest]
fn empty_intermediate_value_stops_the_chain() {
    let untitled = Book {
        title: String::new(),
        author: Optional::Present(String::new()),
    };

    // the author is present but empty, so first_char goes absent
    let result = chain!(Optional::Present(untitled), author, first_char, uppercase);
    assert_eq!(result, Optional::Absent);
}

// =============================================================================
// Fully-present Chains
// =============================================================================

#[rstest]
fn fully_present_chain_equals_straight_composition() {
    let book = Book {
        title: "Beowulf".to_string(),
        author: Optional::Present("heaney".to_string()),
    };

    assert_eq!(book.title, "Beowulf");

    let chained = chain!(Optional::Present(book.clone()), author, first_char, uppercase);
    let composed = author(book).and_then(first_char).and_then(uppercase);

    assert_eq!(chained, Optional::Present('H'));
    assert_eq!(chained, composed);
}

#[rstest]
fn chain_tolerates_trailing_comma() {
    let result = chain!(Optional::Present("Bran".to_string()), first_char, uppercase,);
    assert_eq!(result, Optional::Present('B'));
}

// =============================================================================
// Chains over Coalescing
// =============================================================================

#[rstest]
fn absent_chain_coalesces_to_fallback_initial() {
    let missing: Optional<Book> = Optional::Absent;
    let initial = chain!(missing, author, first_char, uppercase).coalesce('A');
    assert_eq!(initial, 'A');
}

#[rstest]
fn chain_over_sequence_access() {
    let names = ["Arya", "Bran", "Robb", "Sansa"];
    let chosen: Optional<&&str> = names.first().into();
    let loud = chosen.map(|name| name.to_uppercase()).coalesce_with(|| "No one".to_string());
    assert_eq!(loud, "ARYA");
}
