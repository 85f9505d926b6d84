//! Free functions for constructing, reshaping and aggregating `Outcome`
//! values.

use super::Outcome;
use crate::optional::Optional;

/// Wraps `value` as `Success`.
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Wraps `error` as `Failure`.
#[inline]
pub const fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

/// Runs `computation` and captures its result as an `Outcome`.
///
/// On error, `handler` is called exactly once with the caught error and its
/// return value becomes the failure payload. No error is dropped.
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::outcome::{err, from_fallible, ok};
///
/// let parsed = from_fallible(|| "7".parse::<u8>(), |error| error.to_string());
/// assert_eq!(parsed, ok(7));
///
/// let failed = from_fallible(|| "-7".parse::<u8>(), |error| error.to_string());
/// assert_eq!(failed, err("invalid digit found in string".to_string()));
/// ```
#[inline]
pub fn from_fallible<T, X, E, C, H>(computation: C, handler: H) -> Outcome<T, E>
where
    C: FnOnce() -> Result<T, X>,
    H: FnOnce(X) -> E,
{
    match computation() {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(handler(error)),
    }
}

/// Converts `Outcome<Outcome<T, E>, E>` to `Outcome<T, E>`.
#[inline]
pub fn flatten<T, E>(outcome: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> {
    outcome.flatten()
}

/// Converts `Outcome<Optional<T>, E>` to `Optional<Outcome<T, E>>`.
///
/// See [`Outcome::transpose`].
#[inline]
pub fn transpose<T, E>(outcome: Outcome<Optional<T>, E>) -> Optional<Outcome<T, E>> {
    outcome.transpose()
}

/// Collapses a collection of outcomes into a single pass/fail verdict.
///
/// Returns `Success(true)` when every outcome succeeded, including when there
/// are none. Otherwise returns `Failure` holding every failure payload in the
/// order the outcomes were given; that list is never empty.
///
/// See also the variadic [`combine!`](crate::combine!) macro.
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::outcome::{combine, err, ok};
///
/// assert_eq!(combine([ok::<i32, &str>(1), ok(2)]), ok(true));
/// assert_eq!(
///     combine([ok(1), err("e1"), ok(2), err("e2")]),
///     err(vec!["e1", "e2"])
/// );
/// ```
pub fn combine<T, E, I>(outcomes: I) -> Outcome<bool, Vec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let errors: Vec<E> = outcomes
        .into_iter()
        .filter_map(|outcome| outcome.rethrow().err())
        .collect();

    if errors.is_empty() {
        Outcome::Success(true)
    } else {
        Outcome::Failure(errors)
    }
}

/// Combines any number of outcomes with [`combine`].
///
/// `combine!(a, b, c)` is equivalent to `combine([a, b, c])`.
///
/// # Syntax
///
/// - `combine!()` - Returns `Success(true)`
/// - `combine!(a, b, ...)` - Collects the failures of `a`, `b`, ... in order
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::combine;
/// use maybe_outcome::outcome::{err, ok, Outcome};
///
/// let verdict = combine!(ok(1), err("e1"), ok(2), err("e2"));
/// assert_eq!(verdict, err(vec!["e1", "e2"]));
///
/// let empty: Outcome<bool, Vec<String>> = combine!();
/// assert_eq!(empty, ok(true));
/// ```
#[macro_export]
macro_rules! combine {
    () => {
        $crate::outcome::Outcome::Success(true)
    };
    ($($outcome:expr),+ $(,)?) => {
        $crate::outcome::combine([$($outcome),+])
    };
}
