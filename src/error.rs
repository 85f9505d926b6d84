//! Error types for extracting values out of `Optional` and `Outcome`.
//!
//! Extraction that can fail never panics. Instead it returns an
//! [`UnwrapError`] describing which variant was found, optionally chained to
//! the failure payload that caused it.

use std::error::Error;
use std::fmt;

/// A boxed, thread-safe error object.
///
/// Used by [`try_of`](crate::optional::try_of) to decide, by concrete type,
/// which errors are converted to `Absent` and which are passed through.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Represents an attempt to extract a payload from the wrong variant.
///
/// Produced by `expect`, `unwrap` and `unwrap_err` on [`Optional`] and
/// [`Outcome`]. When the offending payload is itself an error, it is kept as
/// the [`source`](Error::source) instead of being rendered into the message.
///
/// # Examples
///
/// ```rust
/// use maybe_outcome::optional::none;
///
/// let error = none::<i32>().expect("value must be configured").unwrap_err();
/// assert_eq!(error.message(), "value must be configured");
/// assert_eq!(format!("{error}"), "value must be configured");
/// ```
///
/// [`Optional`]: crate::optional::Optional
/// [`Outcome`]: crate::outcome::Outcome
#[derive(Debug)]
pub struct UnwrapError {
    message: String,
    source: Option<BoxError>,
}

impl UnwrapError {
    /// Creates an error carrying `message` verbatim.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error carrying `message` with `source` as its cause.
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning the chained cause if there is one.
    #[must_use]
    pub fn into_source(self) -> Option<BoxError> {
        self.source
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for UnwrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn Error + 'static))
    }
}
