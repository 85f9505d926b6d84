//! Bifunctor type class - mapping over both sides of an `Outcome`.
//!
//! `Outcome<T, E>` is implemented as `Bifunctor<E, T>`:
//! - `first` transforms the failure payload, like `Outcome::map_err`
//! - `second` transforms the success value, like `Outcome::map`
//!
//! Putting the success value second keeps `second` consistent with
//! `Functor::fmap`.
//!
//! # Laws
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::outcome::{err, ok, Outcome};
//! use maybe_outcome::typeclass::Bifunctor;
//!
//! let failure: Outcome<i32, String> = err("boom".to_string());
//! assert_eq!(failure.bimap(|e| e.len(), |n| n * 2), err(4));
//!
//! let success: Outcome<i32, String> = ok(21);
//! assert_eq!(success.bimap(|e| e.len(), |n| n * 2), ok(42));
//! ```

use crate::outcome::Outcome;

/// A type class for types with two type parameters that can have functions
/// mapped over both.
pub trait Bifunctor<A, B> {
    /// The resulting type after applying the transformation.
    ///
    /// For `Outcome<T, E>` (implemented as `Bifunctor<E, T>`) this is
    /// `Outcome<D, C>`.
    type Target<C, D>;

    /// Applies one of two functions, depending on which side is populated.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Like `bimap`, but borrows `self`.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;

    /// Like `first`, but borrows `self`. The untouched side is cloned.
    #[inline]
    fn first_ref<C, F>(&self, function: F) -> Self::Target<C, B>
    where
        B: Clone,
        F: FnOnce(&A) -> C,
        Self: Sized,
    {
        self.bimap_ref(function, B::clone)
    }

    /// Like `second`, but borrows `self`. The untouched side is cloned.
    #[inline]
    fn second_ref<D, G>(&self, function: G) -> Self::Target<A, D>
    where
        A: Clone,
        G: FnOnce(&B) -> D,
        Self: Sized,
    {
        self.bimap_ref(A::clone, function)
    }
}

impl<T, E> Bifunctor<E, T> for Outcome<T, E> {
    type Target<C, D> = Outcome<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Outcome<D, C>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&T) -> D,
    {
        match self {
            Self::Success(value) => Outcome::Success(second_function(value)),
            Self::Failure(error) => Outcome::Failure(first_function(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{err, ok};
    use rstest::rstest;

    #[rstest]
    fn first_matches_map_err() {
        let failure: Outcome<i32, &str> = err("four");
        assert_eq!(failure.first(str::len), failure.map_err(str::len));
    }

    #[rstest]
    fn second_matches_map() {
        let success: Outcome<i32, &str> = ok(4);
        assert_eq!(success.second(|n| n + 1), success.map(|n| n + 1));
    }

    #[rstest]
    fn second_ref_keeps_original() {
        let success: Outcome<String, String> = ok("value".to_string());
        assert_eq!(success.second_ref(String::len), ok(5));
        assert_eq!(success, ok("value".to_string()));
    }

    #[rstest]
    #[case(ok(3))]
    #[case(err("e"))]
    fn first_then_second_equals_bimap(#[case] value: Outcome<i32, &'static str>) {
        let by_bimap = value.bimap(str::len, |n| n * 10);
        let by_parts = value.first(str::len).second(|n| n * 10);
        assert_eq!(by_bimap, by_parts);
    }
}
