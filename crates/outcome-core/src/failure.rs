#![forbid(unsafe_code)]

//! The error-carrying variant.
//!
//! A `Failure` is *data*: it flows through `map`/`chain`/`ap` untouched and
//! only surfaces as an error when something unwraps it. Constructing one from
//! an existing [`Fault`] reuses that fault; constructing one from text mints a
//! fresh fault.

use std::error::Error;
use std::fmt;

use crate::algebra::Flatten;
use crate::error::UnwrapError;
use crate::fault::Fault;
use crate::kind::{Kind, Tag, Variant};

/// Holds exactly one [`Fault`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Failure {
    error: Fault,
}

impl Failure {
    /// A failure wrapping a fresh fault with `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Fault::new(message),
        }
    }

    /// A failure with the canonical `(unspecified)` message.
    #[must_use]
    pub fn unspecified() -> Self {
        Self {
            error: Fault::unspecified(),
        }
    }

    #[must_use]
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            error: Fault::with_cause(message, cause),
        }
    }

    #[must_use]
    pub fn error(&self) -> &Fault {
        &self.error
    }

    /// Always the wrapped fault's message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.error.message()
    }

    #[must_use]
    pub fn into_error(self) -> Fault {
        self.error
    }

    pub fn map<F>(self, _f: F) -> Failure {
        self
    }

    pub fn chain<F>(self, _f: F) -> Failure {
        self
    }

    pub fn ap<W>(self, _wrapped: W) -> Failure {
        self
    }

    pub fn join(self) -> Failure {
        self
    }

    pub fn traverse<F>(self, _f: F) -> Failure {
        self
    }

    /// Replace the wrapped fault.
    pub fn map_error(self, f: impl FnOnce(Fault) -> Fault) -> Failure {
        Failure { error: f(self.error) }
    }

    pub fn fold<R>(self, on_error: impl FnOnce(Fault) -> R) -> R {
        on_error(self.error)
    }

    /// Exhaustive match. A `Failure` has a single legal case.
    pub fn match_with<R>(self, failure: impl FnOnce(Fault) -> R) -> R {
        failure(self.error)
    }

    /// # Panics
    ///
    /// Always. The panic payload is the wrapped [`Fault`] itself, so
    /// `catch_unwind` can downcast it and [`Fault::same`] still holds.
    #[track_caller]
    pub fn unwrap(self) -> ! {
        std::panic::panic_any(self.error)
    }

    /// # Errors
    ///
    /// Always returns [`UnwrapError::Failed`] with the wrapped fault.
    pub fn try_unwrap<T>(self) -> Result<T, UnwrapError> {
        Err(UnwrapError::Failed(self.error))
    }

    pub fn unwrap_or<T>(self, fallback: T) -> T {
        fallback
    }

    pub fn unwrap_or_else<T>(self, fallback: impl FnOnce(Fault) -> T) -> T {
        fallback(self.error)
    }

    /// The wrapped fault.
    pub fn unwrap_error(self) -> Fault {
        self.error
    }
}

impl Variant for Failure {
    const KIND: Kind = Kind::Failure;

    fn tag(&self) -> Tag {
        Tag::Failure
    }
}

impl Flatten for Failure {
    type Output = Failure;

    fn flatten(self) -> Failure {
        self
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failure({})", self.error)
    }
}

impl From<Fault> for Failure {
    fn from(error: Fault) -> Self {
        Self { error }
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<Failure> for Fault {
    fn from(failure: Failure) -> Self {
        failure.error
    }
}
