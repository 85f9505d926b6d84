//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` or `Outcome<_, E>` as type
//! constructors directly. [`TypeConstructor`] uses a GAT to name "the same
//! container holding a different type", which is what `Functor`,
//! `Applicative` and `Monad` need to describe their signatures.
//!
//! # Example
//!
//! ```rust
//! use maybe_outcome::optional::{none, some, Optional};
//! use maybe_outcome::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Optional<String> = emptied(some(42));
//! assert_eq!(emptied, none());
//! ```

use crate::optional::Optional;
use crate::outcome::Outcome;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter the constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Optional<i32>` this is `i32`; for `Outcome<i32, E>` it is `i32`.
    type Inner;

    /// The same type constructor applied to `B`.
    ///
    /// `Outcome<T, E>` keeps its error type: `WithType<B>` is `Outcome<B, E>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Optional<i32>>();
    }

    #[test]
    fn outcome_with_type_preserves_error_type() {
        fn assert_outcome_with_type<T, E, B>()
        where
            Outcome<T, E>: TypeConstructor<Inner = T, WithType<B> = Outcome<B, E>>,
        {
        }

        assert_outcome_with_type::<i32, String, bool>();
        assert_outcome_with_type::<String, (), Optional<u8>>();
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Optional<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_inner_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_inner_bool::<Step2>();
    }

    #[test]
    fn nested_constructor_keeps_inner_container() {
        fn assert_inner<T: TypeConstructor<Inner = Optional<i32>>>() {}
        assert_inner::<Outcome<Optional<i32>, String>>();
    }
}
