#![forbid(unsafe_code)]

//! The full union: `Just(T)`, `Nothing`, or `Failure`.
//!
//! Every other variant and view widens into an `Outcome` with `From`; an
//! `Outcome` narrows back with `TryFrom`, handing the original value back on
//! a mismatch.

use std::result::Result as StdResult;

use crate::algebra::{Flatten, Functor, Plain, Pure, Traverse};
use crate::error::UnwrapError;
use crate::failure::Failure;
use crate::fault::Fault;
use crate::just::Just;
use crate::kind::{Kind, Tag, Variant};
use crate::maybe::Maybe;
use crate::nothing::Nothing;
use crate::result::Result;

/// `Just(T)`, `Nothing`, or `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Just(T),
    Nothing,
    Failure(Failure),
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> Outcome<T> {
    #[must_use]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing | Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&Fault> {
        match self {
            Self::Failure(failure) => Some(failure.error()),
            Self::Just(_) | Self::Nothing => None,
        }
    }

    #[must_use]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Just(value) => Outcome::Just(value),
            Self::Nothing => Outcome::Nothing,
            Self::Failure(failure) => Outcome::Failure(failure.clone()),
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing | Self::Failure(_) => None,
        }
    }

    /// `Ok(Some(v))`, `Ok(None)` for `Nothing`, or `Err(fault)`.
    pub fn into_std(self) -> StdResult<Option<T>, Fault> {
        match self {
            Self::Just(value) => Ok(Some(value)),
            Self::Nothing => Ok(None),
            Self::Failure(failure) => Err(failure.into_error()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Just(value) => Outcome::Just(f(value)),
            Self::Nothing => Outcome::Nothing,
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    pub fn map_error(self, f: impl FnOnce(Fault) -> Fault) -> Outcome<T> {
        match self {
            Self::Failure(failure) => Self::Failure(failure.map_error(f)),
            Self::Just(_) | Self::Nothing => self,
        }
    }

    /// Monadic bind. `f`'s return type must be able to hold both `Nothing`
    /// and `Failure`.
    pub fn chain<R>(self, f: impl FnOnce(T) -> R) -> R
    where
        R: From<Nothing> + From<Failure>,
    {
        match self {
            Self::Just(value) => f(value),
            Self::Nothing => R::from(Nothing),
            Self::Failure(failure) => R::from(failure),
        }
    }

    /// Applicative apply. The function side is inspected first: an empty
    /// one yields `Nothing`, a failing one is returned as-is.
    pub fn ap<U, F>(self, wrapped: impl Into<Outcome<F>>) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match (wrapped.into(), self) {
            (Outcome::Nothing, _) => Outcome::Nothing,
            (Outcome::Failure(failure), _) => Outcome::Failure(failure),
            (Outcome::Just(_), Self::Nothing) => Outcome::Nothing,
            (Outcome::Just(_), Self::Failure(failure)) => Outcome::Failure(failure),
            (Outcome::Just(g), Self::Just(value)) => Outcome::Just(g(value)),
        }
    }

    /// `on_other` receives `None` for `Nothing` and the fault for `Failure`.
    pub fn fold<R>(
        self,
        on_value: impl FnOnce(T) -> R,
        on_other: impl FnOnce(Option<Fault>) -> R,
    ) -> R {
        match self {
            Self::Just(value) => on_value(value),
            Self::Nothing => on_other(None),
            Self::Failure(failure) => on_other(Some(failure.into_error())),
        }
    }

    /// Exhaustive match over all three cases.
    pub fn match_with<R>(
        self,
        just: impl FnOnce(T) -> R,
        nothing: impl FnOnce() -> R,
        failure: impl FnOnce(Fault) -> R,
    ) -> R {
        match self {
            Self::Just(value) => just(value),
            Self::Nothing => nothing(),
            Self::Failure(f) => failure(f.into_error()),
        }
    }

    /// # Panics
    ///
    /// On `Nothing` with `Unwrapped an empty Nothing`; on `Failure` with the
    /// wrapped [`Fault`] as the panic payload.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => Nothing.unwrap(),
            Self::Failure(failure) => failure.unwrap(),
        }
    }

    /// # Errors
    ///
    /// [`UnwrapError::Empty`] on `Nothing`, [`UnwrapError::Failed`] on
    /// `Failure`.
    pub fn try_unwrap(self) -> StdResult<T, UnwrapError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Nothing.try_unwrap(),
            Self::Failure(failure) => failure.try_unwrap(),
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing | Self::Failure(_) => fallback,
        }
    }

    pub fn unwrap_or_else(self, fallback: impl FnOnce(Option<Fault>) -> T) -> T {
        self.fold(|value| value, fallback)
    }

    pub fn or(self, other: Outcome<T>) -> Outcome<T> {
        match self {
            Self::Just(_) => self,
            Self::Nothing | Self::Failure(_) => other,
        }
    }

    pub fn or_else(self, other: impl FnOnce(Option<Fault>) -> Outcome<T>) -> Outcome<T> {
        match self {
            Self::Just(_) => self,
            Self::Nothing => other(None),
            Self::Failure(failure) => other(Some(failure.into_error())),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Collapse one level of nesting.
    pub fn join(self) -> Outcome<T> {
        match self {
            Self::Just(inner) => inner,
            Self::Nothing => Outcome::Nothing,
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }
}

impl<T> Variant for Outcome<T> {
    const KIND: Kind = Kind::Outcome;

    fn tag(&self) -> Tag {
        match self {
            Self::Just(_) => Tag::Just,
            Self::Nothing => Tag::Nothing,
            Self::Failure(_) => Tag::Failure,
        }
    }
}

impl<T> Functor for Outcome<T> {
    type Payload = T;
    type Mapped<U> = Outcome<U>;

    fn fmap<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }
}

impl<T> Pure for Outcome<T> {
    fn of(payload: T) -> Self {
        Self::Just(payload)
    }
}

impl<T: Plain> Flatten for Outcome<T> {
    type Output = Outcome<T>;

    fn flatten(self) -> Outcome<T> {
        self
    }
}

impl<T> Flatten for Outcome<Outcome<T>>
where
    Outcome<T>: Flatten,
{
    type Output = <Outcome<T> as Flatten>::Output;

    fn flatten(self) -> Self::Output {
        self.join().flatten()
    }
}

impl<T: Plain, U, F> Traverse<U, F> for Outcome<T>
where
    F: FnOnce(T) -> Outcome<U>,
{
    type Output = Outcome<Outcome<U>>;

    fn traverse(self, f: F) -> Outcome<Outcome<U>> {
        match self {
            Self::Just(value) => f(value).map(Outcome::of),
            Self::Nothing => Outcome::Nothing,
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }
}

impl<T, U, F> Traverse<U, F> for Outcome<Outcome<T>>
where
    Outcome<T>: Traverse<U, F>,
{
    type Output = Outcome<<Outcome<T> as Traverse<U, F>>::Output>;

    fn traverse(self, f: F) -> Self::Output {
        match self {
            Self::Just(inner) => Outcome::Just(inner.traverse(f)),
            Self::Nothing => Outcome::Nothing,
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }
}

impl<T> From<Just<T>> for Outcome<T> {
    fn from(Just(value): Just<T>) -> Self {
        Self::Just(value)
    }
}

impl<T> From<Nothing> for Outcome<T> {
    fn from(_: Nothing) -> Self {
        Self::Nothing
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

impl<T> From<Maybe<T>> for Outcome<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Self::Just(value),
            Maybe::Nothing => Self::Nothing,
        }
    }
}

impl<T> From<Result<T>> for Outcome<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Result::Just(value) => Self::Just(value),
            Result::Failure(failure) => Self::Failure(failure),
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_nullable(value).into()
    }
}

impl<T, E> From<StdResult<T, E>> for Outcome<T>
where
    E: Into<Failure>,
{
    fn from(result: StdResult<T, E>) -> Self {
        Result::from(result).into()
    }
}

impl<T> TryFrom<Outcome<T>> for Just<T> {
    type Error = Outcome<T>;

    fn try_from(outcome: Outcome<T>) -> StdResult<Self, Outcome<T>> {
        match outcome {
            Outcome::Just(value) => Ok(Just(value)),
            other => Err(other),
        }
    }
}

impl<T> TryFrom<Outcome<T>> for Nothing {
    type Error = Outcome<T>;

    fn try_from(outcome: Outcome<T>) -> StdResult<Self, Outcome<T>> {
        match outcome {
            Outcome::Nothing => Ok(Nothing),
            other => Err(other),
        }
    }
}

impl<T> TryFrom<Outcome<T>> for Failure {
    type Error = Outcome<T>;

    fn try_from(outcome: Outcome<T>) -> StdResult<Self, Outcome<T>> {
        match outcome {
            Outcome::Failure(failure) => Ok(failure),
            other => Err(other),
        }
    }
}

impl<T> TryFrom<Outcome<T>> for Maybe<T> {
    type Error = Failure;

    fn try_from(outcome: Outcome<T>) -> StdResult<Self, Failure> {
        match outcome {
            Outcome::Just(value) => Ok(Maybe::Just(value)),
            Outcome::Nothing => Ok(Maybe::Nothing),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<T> TryFrom<Outcome<T>> for Result<T> {
    type Error = Nothing;

    fn try_from(outcome: Outcome<T>) -> StdResult<Self, Nothing> {
        match outcome {
            Outcome::Just(value) => Ok(Result::Just(value)),
            Outcome::Nothing => Err(Nothing),
            Outcome::Failure(failure) => Ok(Result::Failure(failure)),
        }
    }
}
