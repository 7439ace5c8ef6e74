#![forbid(unsafe_code)]

//! The value-or-absent view: `Just(T)` or `Nothing`.
//!
//! `Maybe` has no tag of its own; it restricts which variants are legal.
//! Every operation on a `Maybe` returns a `Maybe`, with one deliberate
//! exception: [`Maybe::chain`] returns whatever its function returns, as long
//! as that type can also hold `Nothing`. Chaining into an [`Outcome`] widens
//! the result; chaining into a bare [`Just`] is rejected at compile time
//! because the receiver may be empty.

use crate::algebra::{Flatten, Functor, Plain, Pure, Traverse};
use crate::error::UnwrapError;
use crate::failure::Failure;
use crate::just::Just;
use crate::kind::{Kind, Tag, Variant};
use crate::nothing::Nothing;
use crate::outcome::Outcome;

/// `Just(T)` or `Nothing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    Just(T),
    Nothing,
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> Maybe<T> {
    /// Smart constructor: a present value becomes `Just`, an absent one
    /// becomes `Nothing`.
    #[must_use]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }

    #[must_use]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// The payload, if present.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Widen to the full outcome union.
    #[must_use]
    pub fn widen(self) -> Outcome<T> {
        self.into()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Just(value) => Maybe::Just(f(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Monadic bind.
    ///
    /// On `Just(v)` returns `f(v)` unchanged; on `Nothing` returns `Nothing`
    /// converted into `f`'s return type.
    pub fn chain<R>(self, f: impl FnOnce(T) -> R) -> R
    where
        R: From<Nothing>,
    {
        match self {
            Self::Just(value) => f(value),
            Self::Nothing => R::from(Nothing),
        }
    }

    /// Applicative apply. An empty function side wins over everything, then
    /// an empty receiver.
    pub fn ap<U, F>(self, wrapped: impl Into<Maybe<F>>) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match (wrapped.into(), self) {
            (Maybe::Nothing, _) | (_, Self::Nothing) => Maybe::Nothing,
            (Maybe::Just(g), Self::Just(value)) => Maybe::Just(g(value)),
        }
    }

    pub fn fold<R>(self, on_value: impl FnOnce(T) -> R, on_empty: impl FnOnce() -> R) -> R {
        match self {
            Self::Just(value) => on_value(value),
            Self::Nothing => on_empty(),
        }
    }

    /// Exhaustive match over the two legal cases.
    pub fn match_with<R>(self, just: impl FnOnce(T) -> R, nothing: impl FnOnce() -> R) -> R {
        self.fold(just, nothing)
    }

    /// # Panics
    ///
    /// Panics with `Unwrapped an empty Nothing` when empty.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => Nothing.unwrap(),
        }
    }

    /// # Errors
    ///
    /// Returns [`UnwrapError::Empty`] when empty.
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Nothing.try_unwrap(),
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback,
        }
    }

    pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => fallback(),
        }
    }

    /// `self` if present, otherwise `other`.
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Self::Just(_) => self,
            Self::Nothing => other,
        }
    }

    pub fn or_else(self, other: impl FnOnce() -> Maybe<T>) -> Maybe<T> {
        match self {
            Self::Just(_) => self,
            Self::Nothing => other(),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Collapse one level of nesting.
    pub fn join(self) -> Maybe<T> {
        match self {
            Self::Just(inner) => inner,
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Variant for Maybe<T> {
    const KIND: Kind = Kind::Maybe;

    fn tag(&self) -> Tag {
        match self {
            Self::Just(_) => Tag::Just,
            Self::Nothing => Tag::Nothing,
        }
    }
}

impl<T> Functor for Maybe<T> {
    type Payload = T;
    type Mapped<U> = Maybe<U>;

    fn fmap<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }
}

impl<T> Pure for Maybe<T> {
    fn of(payload: T) -> Self {
        Self::Just(payload)
    }
}

impl<T: Plain> Flatten for Maybe<T> {
    type Output = Maybe<T>;

    fn flatten(self) -> Maybe<T> {
        self
    }
}

impl<T> Flatten for Maybe<Maybe<T>>
where
    Maybe<T>: Flatten,
{
    type Output = <Maybe<T> as Flatten>::Output;

    fn flatten(self) -> Self::Output {
        self.join().flatten()
    }
}

impl<T: Plain, U, F> Traverse<U, F> for Maybe<T>
where
    F: FnOnce(T) -> Maybe<U>,
{
    type Output = Maybe<Maybe<U>>;

    fn traverse(self, f: F) -> Maybe<Maybe<U>> {
        match self {
            Self::Just(value) => f(value).map(Maybe::of),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T, U, F> Traverse<U, F> for Maybe<Maybe<T>>
where
    Maybe<T>: Traverse<U, F>,
{
    type Output = Maybe<<Maybe<T> as Traverse<U, F>>::Output>;

    fn traverse(self, f: F) -> Self::Output {
        match self {
            Self::Just(inner) => Maybe::Just(inner.traverse(f)),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> From<Just<T>> for Maybe<T> {
    fn from(Just(value): Just<T>) -> Self {
        Self::Just(value)
    }
}

impl<T> From<Nothing> for Maybe<T> {
    fn from(_: Nothing) -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> TryFrom<Maybe<T>> for Just<T> {
    type Error = Nothing;

    fn try_from(maybe: Maybe<T>) -> Result<Self, Nothing> {
        match maybe {
            Maybe::Just(value) => Ok(Just(value)),
            Maybe::Nothing => Err(Nothing),
        }
    }
}

impl<T> TryFrom<Maybe<T>> for Nothing {
    type Error = Just<T>;

    fn try_from(maybe: Maybe<T>) -> Result<Self, Just<T>> {
        match maybe {
            Maybe::Just(value) => Err(Just(value)),
            Maybe::Nothing => Ok(Nothing),
        }
    }
}

impl<T> TryFrom<crate::result::Result<T>> for Maybe<T> {
    type Error = Failure;

    fn try_from(result: crate::result::Result<T>) -> Result<Self, Failure> {
        match result {
            crate::result::Result::Just(value) => Ok(Self::Just(value)),
            crate::result::Result::Failure(failure) => Err(failure),
        }
    }
}
