//! Optional type - a value that may be absent.
//!
//! This module provides [`Optional<T>`], which is either `Present(T)` or
//! `Absent`, together with the combinators needed to work with it without
//! null checks:
//!
//! - Queries: `is_present`, `is_absent`, `is_present_and`
//! - Extraction: `expect`, `unwrap`, `unwrap_or`, `unwrap_or_else`,
//!   `unwrap_or_throw`, `or_throw`
//! - Boolean algebra: `and`, `and_then`, `or`, `or_else`, `xor`
//! - Transformation: `filter`, `map`, `map_or`, `map_or_else`, `inspect`
//! - Conversion: `ok_or`, `ok_or_else`, `flatten`, `transpose`
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::optional::{none, some, Optional};
//!
//! let port = some("8080")
//!     .map(|text| text.len())
//!     .filter(|length| *length == 4);
//! assert_eq!(port, Optional::Present(4));
//!
//! let missing: Optional<u16> = none();
//! assert_eq!(missing.unwrap_or(80), 80);
//! ```

mod functions;

pub use crate::iter::{IntoIter, Iter};
pub use functions::{flatten, from_value, none, of, some, transpose, try_of};

use std::fmt;

use crate::error::UnwrapError;
use crate::outcome::Outcome;

/// A value that is either present or absent.
///
/// `Absent` carries no payload, so a single constant
/// ([`Optional::ABSENT`]) stands for the empty state of every
/// `Optional<T>`; [`none`] always returns it.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::optional::Optional;
///
/// let present = Optional::Present(42);
/// let doubled = present.map(|x| x * 2);
/// assert_eq!(doubled, Optional::Present(84));
///
/// let absent: Optional<i32> = Optional::Absent;
/// assert!(absent.map(|x| x * 2).is_absent());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A contained value.
    Present(T),
    /// No value.
    Absent,
}

impl<T> Optional<T> {
    /// The shared empty value.
    pub const ABSENT: Self = Self::Absent;

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::optional::{none, some};
    ///
    /// assert!(some(1).is_present());
    /// assert!(!none::<i32>().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is the `Absent` value.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if this is `Present` and the value satisfies `predicate`.
    ///
    /// `predicate` is never called on `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::optional::{none, some};
    ///
    /// assert!(some(4).is_present_and(|x| x % 2 == 0));
    /// assert!(!some(3).is_present_and(|x| x % 2 == 0));
    /// assert!(!none::<i32>().is_present_and(|_| true));
    /// ```
    #[inline]
    pub fn is_present_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns an iterator over the contained value.
    ///
    /// The iterator yields one item when `Present` and none when `Absent`.
    /// A fresh iterator can be taken from the same value any number of times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::optional::some;
    ///
    /// let value = some(3);
    /// assert_eq!(value.iter().sum::<i32>(), 3);
    /// assert_eq!(value.iter().count(), 1);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().into())
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value, or an [`UnwrapError`] carrying `message`
    /// verbatim if this is `Absent`.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::optional::{none, some};
    ///
    /// assert_eq!(some("token").expect("token must be set").unwrap(), "token");
    ///
    /// let error = none::<&str>().expect("token must be set").unwrap_err();
    /// assert_eq!(error.message(), "token must be set");
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> Result<T, UnwrapError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(UnwrapError::new(message)),
        }
    }

    /// Returns the contained value, or an [`UnwrapError`] if this is `Absent`.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] if this is `Absent`.
    #[inline]
    pub fn unwrap(self) -> Result<T, UnwrapError> {
        self.expect("called `Optional::unwrap()` on an `Absent` value")
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Returns the contained value or computes one from `supplier`.
    ///
    /// `supplier` is called only when this is `Absent`.
    #[inline]
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => supplier(),
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Returns the contained value, or `exception` itself if this is `Absent`.
    ///
    /// # Errors
    ///
    /// Returns `exception` unchanged if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::optional::{none, some};
    ///
    /// assert_eq!(some(1).unwrap_or_throw("missing"), Ok(1));
    /// assert_eq!(none::<i32>().unwrap_or_throw("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn unwrap_or_throw<X>(self, exception: X) -> Result<T, X> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(exception),
        }
    }

    /// Returns this value unchanged if `Present`, or `exception` itself if
    /// `Absent`.
    ///
    /// # Errors
    ///
    /// Returns `exception` unchanged if this is `Absent`.
    #[inline]
    pub fn or_throw<X>(self, exception: X) -> Result<Self, X> {
        match self {
            present @ Self::Present(_) => Ok(present),
            Self::Absent => Err(exception),
        }
    }

    /// Calls `callback` with the contained value if `Present`, then returns
    /// this value unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::optional::some;
    ///
    /// let mut seen = Vec::new();
    /// let value = some(5).inspect(|x| seen.push(*x));
    /// assert_eq!(value, some(5));
    /// assert_eq!(seen, vec![5]);
    /// ```
    #[inline]
    pub fn inspect<F>(self, callback: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            callback(value);
        }
        self
    }

    // =========================================================================
    // Boolean Algebra
    // =========================================================================

    /// Returns `Absent` if this is `Absent`, otherwise returns `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::optional::{none, some};
    ///
    /// assert_eq!(some(1).and(some("b")), some("b"));
    /// assert_eq!(none::<i32>().and(some("b")), none());
    /// ```
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Present(_) => other,
            Self::Absent => Optional::Absent,
        }
    }

    /// Calls `function` with the contained value and returns its result, or
    /// propagates `Absent` without calling it.
    ///
    /// This is the monadic bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::optional::{none, some, Optional};
    ///
    /// fn half(n: i32) -> Optional<i32> {
    ///     if n % 2 == 0 { some(n / 2) } else { none() }
    /// }
    ///
    /// assert_eq!(some(8).and_then(half).and_then(half), some(2));
    /// assert_eq!(some(6).and_then(half).and_then(half), none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns this value if `Present`, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            present @ Self::Present(_) => present,
            Self::Absent => other,
        }
    }

    /// Returns this value if `Present`, otherwise calls `supplier`.
    #[inline]
    pub fn or_else<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            present @ Self::Present(_) => present,
            Self::Absent => supplier(),
        }
    }

    /// Returns whichever of `self` and `other` is `Present` when exactly one
    /// of them is, otherwise `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::optional::{none, some};
    ///
    /// assert_eq!(some(1).xor(none()), some(1));
    /// assert_eq!(none().xor(some(2)), some(2));
    /// assert_eq!(some(1).xor(some(2)), none());
    /// assert_eq!(none::<i32>().xor(none()), none());
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (present @ Self::Present(_), Self::Absent)
            | (Self::Absent, present @ Self::Present(_)) => present,
            _ => Self::Absent,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Keeps the contained value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        if let Self::Present(value) = &self {
            if predicate(value) {
                return self;
            }
        }
        Self::Absent
    }

    /// Applies `function` to the contained value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Applies `function` to the contained value, or returns `default`.
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default,
        }
    }

    /// Applies `function` to the contained value, or calls `default`.
    ///
    /// Exactly one of the two functions is called.
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => default(),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts to `Success(value)`, or `Failure(error)` if `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::optional::{none, some};
    /// use maybe_outcome::outcome::{err, ok};
    ///
    /// assert_eq!(some(1).ok_or("missing"), ok(1));
    /// assert_eq!(none::<i32>().ok_or("missing"), err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error),
        }
    }

    /// Converts to `Success(value)`, or `Failure(error())` if `Absent`.
    ///
    /// `error` is called only when this is `Absent`.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Present(value) => Outcome::Success(value),
            Self::Absent => Outcome::Failure(error()),
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::optional::{none, some, Optional};
    ///
    /// assert_eq!(some(some(1)).flatten(), some(1));
    /// assert_eq!(some(none::<i32>()).flatten(), none());
    /// assert_eq!(none::<Optional<i32>>().flatten(), none());
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Optional<Outcome<T, E>> {
    /// Swaps `Optional<Outcome<T, E>>` into `Outcome<Optional<T>, E>`.
    ///
    /// - `Absent` becomes `Success(Absent)`
    /// - `Present(Success(v))` becomes `Success(Present(v))`
    /// - `Present(Failure(e))` becomes `Failure(e)`
    #[inline]
    pub fn transpose(self) -> Outcome<Optional<T>, E> {
        match self {
            Self::Present(Outcome::Success(value)) => Outcome::Success(Optional::Present(value)),
            Self::Present(Outcome::Failure(error)) => Outcome::Failure(error),
            Self::Absent => Outcome::Success(Optional::Absent),
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
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
    /// Converts `Some(v)` to `Present(v)` and `None` to `Absent`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into())
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A, V> FromIterator<Optional<A>> for Optional<V>
where
    V: FromIterator<A>,
{
    /// Collects every contained value, or returns `Absent` at the first
    /// `Absent` item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::optional::{none, some, Optional};
    ///
    /// let all: Optional<Vec<i32>> = vec![some(1), some(2)].into_iter().collect();
    /// assert_eq!(all, some(vec![1, 2]));
    ///
    /// let gap: Optional<Vec<i32>> = vec![some(1), none()].into_iter().collect();
    /// assert_eq!(gap, none());
    /// ```
    fn from_iter<I: IntoIterator<Item = Optional<A>>>(iterable: I) -> Self {
        iterable
            .into_iter()
            .map(Option::<A>::from)
            .collect::<Option<V>>()
            .into()
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn absent_is_shared_constant() {
        let first: Optional<String> = none();
        let second: Optional<String> = Optional::ABSENT;
        assert_eq!(first, second);
        assert_eq!(
            std::mem::size_of::<Optional<Box<i32>>>(),
            std::mem::size_of::<Box<i32>>()
        );
    }

    #[rstest]
    #[case(some(1), true)]
    #[case(none(), false)]
    fn presence_is_exclusive(#[case] value: Optional<i32>, #[case] present: bool) {
        assert_eq!(value.is_present(), present);
        assert_eq!(value.is_absent(), !present);
    }

    #[rstest]
    fn is_present_and_skips_predicate_on_absent() {
        let calls = Cell::new(0);
        let result = none::<i32>().is_present_and(|_| {
            calls.set(calls.get() + 1);
            true
        });
        assert!(!result);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn or_throw_returns_same_allocation() {
        let value = some(Box::new(1));
        let address = value.as_ref().map(|boxed| std::ptr::from_ref::<i32>(boxed));

        let returned = value.or_throw("unused").unwrap();
        let returned_address = returned.as_ref().map(|boxed| std::ptr::from_ref::<i32>(boxed));
        assert_eq!(address, returned_address);
    }

    #[rstest]
    fn filter_keeps_same_allocation() {
        let value = some(Box::new(10));
        let address = value.as_ref().map(|boxed| std::ptr::from_ref::<i32>(boxed));

        let filtered = value.filter(|boxed| **boxed > 5);
        let filtered_address = filtered.as_ref().map(|boxed| std::ptr::from_ref::<i32>(boxed));
        assert_eq!(address, filtered_address);
    }

    #[rstest]
    fn transpose_matches_each_case() {
        let absent: Optional<Outcome<i32, &str>> = none();
        assert_eq!(absent.transpose(), Outcome::Success(none()));
        assert_eq!(
            some(Outcome::<i32, &str>::Success(5)).transpose(),
            Outcome::Success(some(5))
        );
        assert_eq!(
            some(Outcome::<i32, &str>::Failure("bad")).transpose(),
            Outcome::Failure("bad")
        );
    }

    #[rstest]
    fn display_formats_both_variants() {
        assert_eq!(format!("{}", some(42)), "Present(42)");
        assert_eq!(format!("{}", none::<i32>()), "Absent");
    }

    #[rstest]
    fn option_conversion_roundtrip() {
        let optional: Optional<i32> = Some(3).into();
        assert_eq!(optional, some(3));
        let option: Option<i32> = optional.into();
        assert_eq!(option, Some(3));

        let empty: Optional<i32> = None.into();
        assert_eq!(empty, none());
    }
}
