//! Free functions for constructing and reshaping `Optional` values.

use std::error::Error;

use super::Optional;
use crate::error::BoxError;
use crate::outcome::Outcome;

/// Wraps `value` as `Present`.
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::optional::{some, Optional};
///
/// assert_eq!(some(1), Optional::Present(1));
/// ```
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Returns the shared `Absent` value.
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::optional::{none, Optional};
///
/// assert_eq!(none::<i32>(), Optional::ABSENT);
/// ```
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::ABSENT
}

/// Returns `Absent` if `value` equals `none_value`, otherwise `Present(value)`.
///
/// Equality is value equality through `PartialEq<N>`. Comparing against the
/// same type is the strict form; a different `N` (for example `str` against a
/// `String` value) gives a looser comparison chosen by the caller.
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::optional::{from_value, none, some};
///
/// assert_eq!(from_value(0, &0), none());
/// assert_eq!(from_value(5, &0), some(5));
/// assert_eq!(from_value(String::from("n/a"), "n/a"), none());
/// ```
#[inline]
pub fn from_value<T, N>(value: T, none_value: &N) -> Optional<T>
where
    T: PartialEq<N>,
    N: ?Sized,
{
    if PartialEq::eq(&value, none_value) {
        Optional::Absent
    } else {
        Optional::Present(value)
    }
}

/// Calls `supplier` once and passes its result to [`from_value`].
#[inline]
pub fn of<T, N, F>(supplier: F, none_value: &N) -> Optional<T>
where
    T: PartialEq<N>,
    N: ?Sized,
    F: FnOnce() -> T,
{
    from_value(supplier(), none_value)
}

/// Like [`of`], for a fallible `supplier`.
///
/// An error whose concrete type is `X` becomes `Absent`. Any other error is
/// returned unchanged.
///
/// # Errors
///
/// Returns the supplier's error, boxed, when it is not an `X`.
///
/// # Examples
///
/// ```rust
/// use std::num::ParseIntError;
/// use maybe_outcome::optional::{none, some, try_of};
///
/// let parsed = try_of::<ParseIntError, _, _, _>(|| "12".parse::<i32>(), &0);
/// assert_eq!(parsed.unwrap(), some(12));
///
/// let caught = try_of::<ParseIntError, _, _, _>(|| "twelve".parse::<i32>(), &0);
/// assert_eq!(caught.unwrap(), none());
/// ```
pub fn try_of<X, T, N, E>(
    supplier: impl FnOnce() -> Result<T, E>,
    none_value: &N,
) -> Result<Optional<T>, BoxError>
where
    X: Error + 'static,
    T: PartialEq<N>,
    N: ?Sized,
    E: Into<BoxError>,
{
    match supplier() {
        Ok(value) => Ok(from_value(value, none_value)),
        Err(error) => {
            let error = error.into();
            if error.is::<X>() {
                Ok(Optional::Absent)
            } else {
                Err(error)
            }
        }
    }
}

/// Converts `Optional<Optional<T>>` to `Optional<T>`.
#[inline]
pub fn flatten<T>(optional: Optional<Optional<T>>) -> Optional<T> {
    optional.flatten()
}

/// Converts `Optional<Outcome<T, E>>` to `Outcome<Optional<T>, E>`.
///
/// See [`Optional::transpose`].
#[inline]
pub fn transpose<T, E>(optional: Optional<Outcome<T, E>>) -> Outcome<Optional<T>, E> {
    optional.transpose()
}
