//! The `chain!` macro for optional chaining.
//!
//! This module provides the [`chain!`](crate::chain!) macro, which applies
//! optional-producing accessors from left to right, short-circuiting to
//! `Absent` as soon as any step is absent.

/// Chains optional-producing accessors from left to right.
///
/// `chain!(opt, a1, a2, a3)` is equivalent to
/// `opt.and_then(a1).and_then(a2).and_then(a3)`: a left-fold over the
/// accessors with short-circuit-on-absent semantics. Each accessor takes
/// the unwrapped value from the previous step and returns an
/// [`Optional`](crate::optional::Optional).
///
/// # Laws
///
/// `Absent` is absorbing, and a fully-present chain is straight composition:
///
/// ```text
/// chain!(Absent, a1, ..., an) == Absent
/// chain!(Present(x), a1, ..., an) == an(...a1(x))   while every step is present
/// ```
///
/// # Syntax
///
/// - `chain!(opt)` - Returns `opt` unchanged
/// - `chain!(opt, a)` - Returns `opt.and_then(a)`
/// - `chain!(opt, a, b, ...)` - Folds every accessor in order
///
/// # Type Requirements
///
/// Each accessor only needs to implement [`FnOnce`]; it runs at most once,
/// and not at all once the chain has gone absent.
///
/// # Examples
///
/// ## Chained field access
///
/// ```rust
/// use optionals::chain;
/// use optionals::optional::Optional;
///
/// struct Book {
///     title: String,
///     author: Optional<String>,
/// }
///
/// fn author(book: Book) -> Optional<String> {
///     book.author
/// }
///
/// fn first_char(name: String) -> Optional<char> {
///     name.chars().next().into()
/// }
///
/// fn uppercase(c: char) -> Optional<char> {
///     Optional::Present(c.to_ascii_uppercase())
/// }
///
/// let missing: Optional<Book> = Optional::Absent;
/// let initial = chain!(missing, author, first_char, uppercase);
/// assert_eq!(initial.coalesce('A'), 'A');
///
/// let book = Book {
///     title: "Beowulf".to_string(),
///     author: Optional::Present("heaney".to_string()),
/// };
/// let initial = chain!(Optional::Present(book), author, first_char, uppercase);
/// assert_eq!(initial, Optional::Present('H'));
/// ```
///
/// ## Short-circuiting
///
/// ```rust
/// use optionals::chain;
/// use optionals::optional::Optional;
///
/// fn never_runs(_: i32) -> Optional<i32> {
///     unreachable!("accessors after an absent step must not run")
/// }
///
/// let result = chain!(Optional::<i32>::Absent, never_runs, never_runs);
/// assert_eq!(result, Optional::Absent);
/// ```
#[macro_export]
macro_rules! chain {
    ($opt:expr $(,)?) => {
        $opt
    };
    ($opt:expr, $accessor:expr $(, $rest:expr)* $(,)?) => {
        $crate::chain!($crate::optional::Optional::and_then($opt, $accessor) $(, $rest)*)
    };
}
