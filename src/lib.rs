//! # maybe-outcome
//!
//! Two algebraic container types with a complete combinator algebra:
//!
//! - [`Optional<T>`](optional::Optional): either `Present(T)` or `Absent`
//! - [`Outcome<T, E>`](outcome::Outcome): either `Success(T)` or `Failure(E)`
//!
//! Both families let calling code work with "maybe absent" and "maybe
//! failed" values without null checks or panic-driven control flow. Values
//! convert into each other (`ok_or`, `ok`, `err`), nest and unnest
//! (`flatten`, `transpose`), and interoperate with the standard library's
//! `Option` and `Result` through `From`.
//!
//! Extraction never panics. Where another library would abort, these types
//! return a `Result` instead: [`UnwrapError`](error::UnwrapError) for the
//! built-in messages, or the caller's own error for `unwrap_or_throw`.
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): `Functor`, `Applicative`, `Monad` and
//!   `Bifunctor` implementations for both families
//! - `serde`: `Serialize`/`Deserialize` for both enums
//!
//! ## Example
//!
//! ```rust
//! use maybe_outcome::prelude::*;
//!
//! fn parse_port(text: &str) -> Outcome<u16, String> {
//!     from_fallible(|| text.parse::<u16>(), |error| format!("{text}: {error}"))
//! }
//!
//! let configured: Optional<&str> = some("8080");
//! let port = configured
//!     .ok_or_else(|| "port not configured".to_string())
//!     .and_then(parse_port)
//!     .unwrap_or(80);
//! assert_eq!(port, 8080);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports both container types, their constructors and the error types.
///
/// # Usage
///
/// ```rust
/// use maybe_outcome::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{BoxError, UnwrapError};
    pub use crate::optional::{Optional, none, some};
    pub use crate::outcome::{Outcome, combine, err, from_fallible, ok};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod error;
mod iter;
pub mod optional;
pub mod outcome;

#[cfg(feature = "typeclass")]
pub mod typeclass;
