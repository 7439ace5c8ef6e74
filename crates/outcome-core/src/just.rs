#![forbid(unsafe_code)]

//! The payload-bearing variant.
//!
//! `Just<T>` is a plain tuple struct, so `Just(3)` builds one directly. Every
//! operation on a `Just` keeps the narrowest type it can: mapping a `Just`
//! yields a `Just`, not a widened view.

use crate::algebra::{Flatten, Functor, Plain, Pure, Traverse};
use crate::error::{ConstraintViolation, UnwrapError};
use crate::kind::{Kind, Tag, Variant};

/// Holds exactly one present payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Just<T>(pub T);

impl<T> Just<T> {
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Build a `Just` from a possibly-absent value.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintViolation::MissingPayload`] for `None`: an absent
    /// value is never representable as a `Just`.
    pub fn from_nullable(value: Option<T>) -> Result<Self, ConstraintViolation> {
        value.map(Self).ok_or(ConstraintViolation::MissingPayload)
    }

    #[must_use]
    pub const fn value(&self) -> &T {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }

    #[must_use]
    pub const fn as_ref(&self) -> Just<&T> {
        Just(&self.0)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Just<U> {
        Just(f(self.0))
    }

    /// Monadic bind. The result of `f` is returned as-is, whatever it is.
    pub fn chain<R>(self, f: impl FnOnce(T) -> R) -> R {
        f(self.0)
    }

    /// Apply a wrapped function to the payload.
    pub fn ap<U, F>(self, wrapped: Just<F>) -> Just<U>
    where
        F: FnOnce(T) -> U,
    {
        Just((wrapped.0)(self.0))
    }

    pub fn fold<R>(self, on_value: impl FnOnce(T) -> R) -> R {
        on_value(self.0)
    }

    /// Exhaustive match. A `Just` has a single legal case.
    pub fn match_with<R>(self, just: impl FnOnce(T) -> R) -> R {
        just(self.0)
    }

    /// The payload. Never panics: a `Just` always has one.
    pub fn unwrap(self) -> T {
        self.0
    }

    /// # Errors
    ///
    /// Never; present for symmetry with the other variants.
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        Ok(self.0)
    }

    pub fn unwrap_or(self, _fallback: T) -> T {
        self.0
    }

    pub fn unwrap_or_else(self, _fallback: impl FnOnce() -> T) -> T {
        self.0
    }
}

impl<T> Just<Just<T>> {
    /// Collapse one level of nesting.
    pub fn join(self) -> Just<T> {
        self.0
    }
}

impl<T> Variant for Just<T> {
    const KIND: Kind = Kind::Just;

    fn tag(&self) -> Tag {
        Tag::Just
    }
}

impl<T> Functor for Just<T> {
    type Payload = T;
    type Mapped<U> = Just<U>;

    fn fmap<U, F>(self, f: F) -> Just<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }
}

impl<T> Pure for Just<T> {
    fn of(payload: T) -> Self {
        Just(payload)
    }
}

impl<T: Plain> Flatten for Just<T> {
    type Output = Just<T>;

    fn flatten(self) -> Just<T> {
        self
    }
}

impl<T> Flatten for Just<Just<T>>
where
    Just<T>: Flatten,
{
    type Output = <Just<T> as Flatten>::Output;

    fn flatten(self) -> Self::Output {
        self.join().flatten()
    }
}

impl<T: Plain, U, F> Traverse<U, F> for Just<T>
where
    F: FnOnce(T) -> Just<U>,
{
    type Output = Just<Just<U>>;

    fn traverse(self, f: F) -> Just<Just<U>> {
        f(self.0).map(Just::of)
    }
}

impl<T, U, F> Traverse<U, F> for Just<Just<T>>
where
    Just<T>: Traverse<U, F>,
{
    type Output = Just<<Just<T> as Traverse<U, F>>::Output>;

    fn traverse(self, f: F) -> Self::Output {
        Just(self.0.traverse(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_guard() {
        assert_eq!(Just::from_nullable(Some(3)), Ok(Just(3)));
        assert_eq!(
            Just::<i32>::from_nullable(None),
            Err(ConstraintViolation::MissingPayload)
        );
    }

    #[test]
    fn map_keeps_the_just_type() {
        let mapped: Just<String> = Just(1).map(|n| n.to_string());
        assert_eq!(mapped, Just("1".to_string()));
        assert_eq!(mapped.value(), "1");
    }

    #[test]
    fn chain_returns_the_function_result_as_is() {
        let result: Option<i32> = Just(2).chain(|n| Some(n * 10));
        assert_eq!(result, Some(20));
    }

    #[test]
    fn ap_applies_the_wrapped_function() {
        let stringify = Just(|n: i32| format!("#{n}"));
        assert_eq!(Just(7).ap(stringify), Just("#7".to_string()));
    }

    #[test]
    fn join_and_flatten() {
        assert_eq!(Just(Just(1)).join(), Just(1));
        assert_eq!(Just(Just(Just(1))).join(), Just(Just(1)));
        assert_eq!(Just(Just(Just(1))).flatten(), Just(1));
        assert_eq!(Just(1).flatten(), Just(1));
    }

    #[test]
    fn traverse_plain_and_nested() {
        let stringify = |n: i32| Just(n.to_string());
        assert_eq!(Just(1).traverse(stringify), Just(Just("1".to_string())));

        let doubled = Just(Just(2)).traverse(|n: i32| Just(n * 2));
        assert_eq!(doubled, Just(Just(Just(4))));
    }

    #[test]
    fn fold_match_and_unwrap() {
        assert_eq!(Just(1).fold(|n| n + 1), 2);
        assert_eq!(Just("a").match_with(str::len), 1);
        assert_eq!(Just(5).unwrap(), 5);
        assert_eq!(Just(5).try_unwrap(), Ok(5));
        assert_eq!(Just(5).unwrap_or(0), 5);
        assert_eq!(Just(5).unwrap_or_else(|| 0), 5);
    }

    #[test]
    fn isa_only_views_containing_just() {
        let just = Just(1);
        assert_eq!(just.name(), "Just");
        assert!(just.isa(Kind::Just));
        assert!(just.isa(Kind::Maybe));
        assert!(just.isa(Kind::Result));
        assert!(just.isa(Kind::Outcome));
        assert!(!just.isa(Kind::Nothing));
        assert!(!just.isa(Kind::Failure));
    }
}
