//! Monad type class - sequencing computations that may stop early.
//!
//! Both families obey the monad laws with `pure` as unit, `flat_map` as
//! bind and structural equality:
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::outcome::{err, ok, Outcome};
//! use maybe_outcome::typeclass::Monad;
//!
//! fn half(n: i32) -> Outcome<i32, String> {
//!     if n % 2 == 0 { ok(n / 2) } else { err(format!("{n} is odd")) }
//! }
//!
//! let eight: Outcome<i32, String> = ok(8);
//! let six: Outcome<i32, String> = ok(6);
//! assert_eq!(eight.flat_map(half).flat_map(half), ok(2));
//! assert_eq!(six.flat_map(half).flat_map(half), err("3 is odd".to_string()));
//! ```

use super::applicative::Applicative;
use crate::optional::Optional;
use crate::outcome::Outcome;

/// A type class for applicatives that can chain dependent computations.
pub trait Monad: Applicative {
    /// Applies a function that returns a monad and flattens the result.
    ///
    /// The function is called at most once, and only for the non-empty,
    /// non-failed variant.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the value of the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_outcome::optional::{none, some};
    /// use maybe_outcome::typeclass::Monad;
    ///
    /// assert_eq!(some(1).then(some("next")), some("next"));
    /// assert_eq!(none::<i32>().then(some("next")), none());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        Self::and_then(self, function)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        Self::and_then(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optional::{none, some};
    use crate::outcome::{err, ok};
    use rstest::rstest;

    fn checked_sqrt(n: f64) -> Optional<f64> {
        if n >= 0.0 { some(n.sqrt()) } else { none() }
    }

    #[rstest]
    #[case(16.0, some(4.0))]
    #[case(-1.0, none())]
    fn optional_flat_map(#[case] input: f64, #[case] expected: Optional<f64>) {
        assert_eq!(some(input).flat_map(checked_sqrt), expected);
    }

    #[rstest]
    fn outcome_then_keeps_first_failure() {
        let first: Outcome<i32, &str> = err("first");
        let second: Outcome<&str, &str> = ok("second");
        assert_eq!(first.then(second), err("first"));
    }

    #[rstest]
    fn outcome_flat_map_skips_function_on_failure() {
        let failure: Outcome<i32, &str> = err("stop");
        let result = failure.flat_map(|_| -> Outcome<i32, &str> {
            unreachable!("function must not run on Failure")
        });
        assert_eq!(result, err("stop"));
    }

    /// Left identity: pure(a).flat_map(f) == f(a)
    #[rstest]
    fn optional_left_identity() {
        let function = |n: i32| if n > 0 { some(n * 2) } else { none() };
        assert_eq!(<Optional<()>>::pure(5).flat_map(function), function(5));
    }

    /// Right identity: m.flat_map(pure) == m
    #[rstest]
    #[case(ok(3))]
    #[case(err("e"))]
    fn outcome_right_identity(#[case] value: Outcome<i32, &'static str>) {
        assert_eq!(value.flat_map(<Outcome<(), &str>>::pure), value);
    }
}
