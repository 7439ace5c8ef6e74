#![forbid(unsafe_code)]

//! The empty variant. Inert under every transformation.

use crate::algebra::Flatten;
use crate::error::UnwrapError;
use crate::kind::{Kind, Tag, Variant};

/// Holds no payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nothing;

impl Nothing {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Identity: there is no payload to map.
    pub fn map<F>(self, _f: F) -> Nothing {
        self
    }

    pub fn chain<F>(self, _f: F) -> Nothing {
        self
    }

    pub fn ap<W>(self, _wrapped: W) -> Nothing {
        self
    }

    pub fn join(self) -> Nothing {
        self
    }

    pub fn traverse<F>(self, _f: F) -> Nothing {
        self
    }

    pub fn fold<R>(self, on_empty: impl FnOnce() -> R) -> R {
        on_empty()
    }

    /// Exhaustive match. A `Nothing` has a single legal case.
    pub fn match_with<R>(self, nothing: impl FnOnce() -> R) -> R {
        nothing()
    }

    /// # Panics
    ///
    /// Always: a `Nothing` has no payload.
    #[track_caller]
    pub fn unwrap(self) -> ! {
        panic!(
            "{}",
            UnwrapError::Empty {
                variant: Tag::Nothing
            }
        )
    }

    /// # Errors
    ///
    /// Always returns [`UnwrapError::Empty`].
    pub fn try_unwrap<T>(self) -> Result<T, UnwrapError> {
        Err(UnwrapError::Empty {
            variant: Tag::Nothing,
        })
    }

    pub fn unwrap_or<T>(self, fallback: T) -> T {
        fallback
    }

    pub fn unwrap_or_else<T>(self, fallback: impl FnOnce() -> T) -> T {
        fallback()
    }
}

impl Variant for Nothing {
    const KIND: Kind = Kind::Nothing;

    fn tag(&self) -> Tag {
        Tag::Nothing
    }
}

impl Flatten for Nothing {
    type Output = Nothing;

    fn flatten(self) -> Nothing {
        self
    }
}

impl From<()> for Nothing {
    fn from((): ()) -> Self {
        Self
    }
}
