//! Type class traits implemented by [`Optional`](crate::optional::Optional)
//! and [`Outcome`](crate::outcome::Outcome).
//!
//! - [`Functor`]: Mapping over the contained value
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Bifunctor`]: Mapping over either side of an `Outcome`
//!
//! The inherent methods (`map`, `and_then`, `map_err`) cover everyday use.
//! These traits exist for code that is generic over the container, and to
//! state the monad laws both families obey.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types.
//! [`TypeConstructor`] uses Generic Associated Types to express "the same
//! container with a different inner type".
//!
//! # Examples
//!
//! ```rust
//! use maybe_outcome::optional::{none, some};
//! use maybe_outcome::typeclass::Monad;
//!
//! fn pair_up<M: Monad<Inner = i32>>(value: M, other: M::WithType<i32>) -> M::WithType<(i32, i32)> {
//!     value.map2(other, |a, b| (a, b))
//! }
//!
//! assert_eq!(pair_up(some(1), some(2)), some((1, 2)));
//! assert_eq!(pair_up(some(1), none()), none::<(i32, i32)>());
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
