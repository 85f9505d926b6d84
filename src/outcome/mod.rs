//! Outcome type - the success or failure of a computation.
//!
//! This module provides [`Outcome<T, E>`], which is either `Success(T)` or
//! `Failure(E)`. Unlike [`Optional`], the failure case keeps its payload so
//! callers can see why a computation failed.
//!
//! Extraction never panics: `expect`, `unwrap` and `unwrap_err` report the
//! wrong variant as an [`UnwrapError`], and [`Outcome::rethrow`] hands back
//! the failure payload itself so it can be propagated with `?`.
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::outcome::{err, ok, Outcome};
//!
//! fn parse(text: &str) -> Outcome<i32, String> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! assert_eq!(parse("21").map(|n| n * 2), ok(42));
//! assert!(parse("x").map_err(|message| message.len()).is_err());
//! assert_eq!(err::<i32, _>("boom").unwrap_or(0), 0);
//! ```
//!
//! [`Optional`]: crate::optional::Optional

mod functions;

pub use crate::iter::{IntoIter, Iter};
pub use functions::{combine, err, flatten, from_fallible, ok, transpose};

use std::error::Error;
use std::fmt;

use crate::error::UnwrapError;
use crate::optional::Optional;

/// The result of a computation that either succeeded with a `T` or failed
/// with an `E`.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::outcome::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Success(42);
/// let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
///
/// assert_eq!(success.map(|x| x + 1), Outcome::Success(43));
/// assert_eq!(failure.map_err(|e| e.len()), Outcome::Failure(4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// The computation succeeded.
    Success(T),
    /// The computation failed.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a `Success` whose value satisfies `predicate`.
    ///
    /// `predicate` is never called on `Failure`.
    #[inline]
    pub fn is_ok_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure` whose error satisfies `predicate`.
    ///
    /// `predicate` is never called on `Success`.
    #[inline]
    pub fn is_err_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns an iterator over the success value.
    ///
    /// Yields one item for `Success` and none for `Failure`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        })
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the success value, or an [`UnwrapError`] whose message is
    /// `message` followed by the rendered failure payload.
    ///
    /// Use [`expect_chained`](Self::expect_chained) when the payload is an
    /// error that should be kept as the cause instead.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::outcome::err;
    ///
    /// let error = err::<i32, _>(404).expect("fetch failed").unwrap_err();
    /// assert_eq!(error.message(), "fetch failed: 404");
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> Result<T, UnwrapError>
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(UnwrapError::new(format!("{message}: {error:?}"))),
        }
    }

    /// Returns the success value, or an [`UnwrapError`] carrying `message`
    /// verbatim with the failure payload chained as its source.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::error::Error;
    /// use maybe_outcome::outcome::err;
    ///
    /// let parse_error = "x".parse::<u8>().unwrap_err();
    /// let error = err::<u8, _>(parse_error.clone()).expect_chained("bad port").unwrap_err();
    ///
    /// assert_eq!(error.message(), "bad port");
    /// assert_eq!(
    ///     error.source().unwrap().downcast_ref::<std::num::ParseIntError>(),
    ///     Some(&parse_error)
    /// );
    /// ```
    #[inline]
    pub fn expect_chained(self, message: &str) -> Result<T, UnwrapError>
    where
        E: Error + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(UnwrapError::with_source(message, error)),
        }
    }

    /// Returns the success value, or an [`UnwrapError`] describing the
    /// failure payload.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] if this is a `Failure`.
    #[inline]
    pub fn unwrap(self) -> Result<T, UnwrapError>
    where
        E: fmt::Debug,
    {
        self.expect("called `Outcome::unwrap()` on a `Failure` value")
    }

    /// Returns the success value, or the failure payload itself.
    ///
    /// The payload is handed back as-is, so an error value keeps its identity
    /// and can be propagated with `?`.
    ///
    /// # Errors
    ///
    /// Returns the failure payload unchanged if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    /// use maybe_outcome::outcome::{from_fallible, Outcome};
    ///
    /// fn double(text: &str) -> Result<i32, ParseIntError> {
    ///     let parsed: Outcome<i32, ParseIntError> = from_fallible(|| text.parse(), |e| e);
    ///     Ok(parsed.rethrow()? * 2)
    /// }
    ///
    /// assert_eq!(double("4"), Ok(8));
    /// assert!(double("four").is_err());
    /// ```
    #[inline]
    pub fn rethrow(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Returns the failure payload, or an [`UnwrapError`] describing the
    /// success value.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] if this is a `Success`.
    #[inline]
    pub fn unwrap_err(self) -> Result<E, UnwrapError>
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => Err(UnwrapError::new(format!(
                "called `Outcome::unwrap_err()` on a `Success` value: {value:?}"
            ))),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the failure payload.
    ///
    /// `supplier` is called only on `Failure`.
    #[inline]
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => supplier(error),
        }
    }

    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Returns the success value, or `exception` itself on `Failure`.
    ///
    /// # Errors
    ///
    /// Returns `exception` unchanged if this is a `Failure`.
    #[inline]
    pub fn unwrap_or_throw<X>(self, exception: X) -> Result<T, X> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(exception),
        }
    }

    /// Returns this value unchanged on `Success`, or `exception` itself on
    /// `Failure`.
    ///
    /// # Errors
    ///
    /// Returns `exception` unchanged if this is a `Failure`.
    #[inline]
    pub fn or_throw<X>(self, exception: X) -> Result<Self, X> {
        match self {
            success @ Self::Success(_) => Ok(success),
            Self::Failure(_) => Err(exception),
        }
    }

    /// Calls `callback` with the success value, then returns this value
    /// unchanged.
    #[inline]
    pub fn inspect<F>(self, callback: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            callback(value);
        }
        self
    }

    /// Calls `callback` with the failure payload, then returns this value
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::outcome::{err, Outcome};
    ///
    /// let mut log = Vec::new();
    /// let failure: Outcome<i32, &str> = err("disk full").inspect_err(|e| log.push(*e));
    /// assert_eq!(failure, err("disk full"));
    /// assert_eq!(log, vec!["disk full"]);
    /// ```
    #[inline]
    pub fn inspect_err<F>(self, callback: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            callback(error);
        }
        self
    }

    // =========================================================================
    // Boolean Algebra
    // =========================================================================

    /// Returns `other` on `Success`, otherwise propagates the failure.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `function` with the success value and returns its result, or
    /// propagates the failure without calling it.
    ///
    /// This is the monadic bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::outcome::{err, ok, Outcome};
    ///
    /// fn checked_half(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 { ok(n / 2) } else { err(format!("{n} is odd")) }
    /// }
    ///
    /// assert_eq!(ok(12).and_then(checked_half).and_then(checked_half), ok(3));
    /// assert_eq!(ok(6).and_then(checked_half).and_then(checked_half), err("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns this value on `Success`, otherwise `other`.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Returns this value on `Success`, otherwise calls `function` with the
    /// failure payload.
    #[inline]
    pub fn or_else<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the success value, leaving a failure untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `function` to the failure payload, leaving a success untouched.
    #[inline]
    pub fn map_err<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Applies `function` to the success value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies `function` to the success value, or `default` to the failure
    /// payload.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => default(error),
        }
    }

    /// Eliminates the outcome by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::outcome::{err, ok, Outcome};
    ///
    /// let describe = |outcome: Outcome<u32, &str>| {
    ///     outcome.fold(|n| format!("got {n}"), |e| format!("failed: {e}"))
    /// };
    /// assert_eq!(describe(ok(3)), "got 3");
    /// assert_eq!(describe(err("timeout")), "failed: timeout");
    /// ```
    #[inline]
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts to `Present(value)` on `Success`, discarding any failure.
    #[inline]
    pub fn ok(self) -> Optional<T> {
        match self {
            Self::Success(value) => Optional::Present(value),
            Self::Failure(_) => Optional::Absent,
        }
    }

    /// Converts to `Present(error)` on `Failure`, discarding any success.
    #[inline]
    pub fn err(self) -> Optional<E> {
        match self {
            Self::Success(_) => Optional::Absent,
            Self::Failure(error) => Optional::Present(error),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::outcome::{err, ok, Outcome};
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = ok(ok(1));
    /// assert_eq!(nested.flatten(), ok(1));
    ///
    /// let inner_failure: Outcome<Outcome<i32, &str>, &str> = ok(err("inner"));
    /// assert_eq!(inner_failure.flatten(), err("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Outcome<Optional<T>, E> {
    /// Swaps `Outcome<Optional<T>, E>` into `Optional<Outcome<T, E>>`.
    ///
    /// - `Success(Absent)` becomes `Absent`
    /// - `Success(Present(v))` becomes `Present(Success(v))`
    /// - `Failure(e)` becomes `Present(Failure(e))`
    #[inline]
    pub fn transpose(self) -> Optional<Outcome<T, E>> {
        match self {
            Self::Success(Optional::Present(value)) => Optional::Present(Outcome::Success(value)),
            Self::Success(Optional::Absent) => Optional::Absent,
            Self::Failure(error) => Optional::Present(Outcome::Failure(error)),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts `Ok(v)` to `Success(v)` and `Err(e)` to `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.rethrow()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.rethrow().ok())
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    /// Collects every success value, or returns the first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::outcome::{err, ok, Outcome};
    ///
    /// let all: Outcome<Vec<i32>, &str> = vec![ok(1), ok(2)].into_iter().collect();
    /// assert_eq!(all, ok(vec![1, 2]));
    ///
    /// let first: Outcome<Vec<i32>, &str> =
    ///     vec![ok(1), err("a"), err("b")].into_iter().collect();
    /// assert_eq!(first, err("a"));
    /// ```
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iterable: I) -> Self {
        iterable
            .into_iter()
            .map(Outcome::rethrow)
            .collect::<Result<V, E>>()
            .into()
    }
}

static_assertions::assert_impl_all!(Outcome<i32, &'static str>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(Outcome<std::rc::Rc<i32>, ()>: Send, Sync);
