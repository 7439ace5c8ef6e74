#![forbid(unsafe_code)]

//! The value-or-error view: `Just(T)` or `Failure`.
//!
//! This type deliberately shares its name with [`std::result::Result`]. Code
//! in this crate that needs the standard type spells it out in full.
//!
//! # Invariants
//!
//! - A `Failure` is never transformed: `map`, `chain`, `ap`, `join`,
//!   `flatten` and `traverse` return it with the same [`Fault`].
//! - On `ap`, a failing function side is returned before the receiver is
//!   looked at.

use std::result::Result as StdResult;

use crate::algebra::{Flatten, Functor, Plain, Pure, Traverse};
use crate::failure::Failure;
use crate::fault::Fault;
use crate::just::Just;
use crate::kind::{Kind, Tag, Variant};
use crate::maybe::Maybe;
use crate::nothing::Nothing;
use crate::outcome::Outcome;

/// `Just(T)` or `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Result<T> {
    Just(T),
    Failure(Failure),
}

impl<T> Result<T> {
    /// A present value becomes `Just`; an absent one becomes a failure with
    /// the `(unspecified)` message.
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Just(value),
            None => Self::Failure(Failure::unspecified()),
        }
    }

    /// A present value becomes `Just`; an absent one becomes `on_absent`.
    ///
    /// `on_absent` may be a [`Fault`] (kept as-is), a [`Failure`], or text.
    #[must_use]
    pub fn from_option_or(value: Option<T>, on_absent: impl Into<Failure>) -> Self {
        match value {
            Some(value) => Self::Just(value),
            None => Self::Failure(on_absent.into()),
        }
    }

    #[must_use]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The wrapped fault, if this is a failure.
    #[must_use]
    pub fn error(&self) -> Option<&Fault> {
        match self {
            Self::Just(_) => None,
            Self::Failure(failure) => Some(failure.error()),
        }
    }

    #[must_use]
    pub fn as_ref(&self) -> Result<&T> {
        match self {
            Self::Just(value) => Result::Just(value),
            Self::Failure(failure) => Result::Failure(failure.clone()),
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Convert to the standard result type, exposing the fault.
    pub fn into_std(self) -> StdResult<T, Fault> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Failure(failure) => Err(failure.into_error()),
        }
    }

    #[must_use]
    pub fn widen(self) -> Outcome<T> {
        self.into()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U> {
        match self {
            Self::Just(value) => Result::Just(f(value)),
            Self::Failure(failure) => Result::Failure(failure),
        }
    }

    /// Transform the fault of a failure; a `Just` is returned unchanged.
    pub fn map_error(self, f: impl FnOnce(Fault) -> Fault) -> Result<T> {
        match self {
            Self::Just(_) => self,
            Self::Failure(failure) => Self::Failure(failure.map_error(f)),
        }
    }

    /// Monadic bind.
    ///
    /// On `Just(v)` returns `f(v)` unchanged; on a failure returns that same
    /// failure converted into `f`'s return type.
    pub fn chain<R>(self, f: impl FnOnce(T) -> R) -> R
    where
        R: From<Failure>,
    {
        match self {
            Self::Just(value) => f(value),
            Self::Failure(failure) => R::from(failure),
        }
    }

    /// Applicative apply. A failing function side is returned as-is, then a
    /// failing receiver.
    pub fn ap<U, F>(self, wrapped: impl Into<Result<F>>) -> Result<U>
    where
        F: FnOnce(T) -> U,
    {
        match (wrapped.into(), self) {
            (Result::Failure(failure), _) | (_, Self::Failure(failure)) => Result::Failure(failure),
            (Result::Just(g), Self::Just(value)) => Result::Just(g(value)),
        }
    }

    pub fn fold<R>(self, on_value: impl FnOnce(T) -> R, on_error: impl FnOnce(Fault) -> R) -> R {
        match self {
            Self::Just(value) => on_value(value),
            Self::Failure(failure) => on_error(failure.into_error()),
        }
    }

    /// Exhaustive match over the two legal cases.
    pub fn match_with<R>(self, just: impl FnOnce(T) -> R, failure: impl FnOnce(Fault) -> R) -> R {
        self.fold(just, failure)
    }

    /// # Panics
    ///
    /// On a failure, with the wrapped [`Fault`] as the panic payload.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Failure(failure) => failure.unwrap(),
        }
    }

    /// # Errors
    ///
    /// Returns the [`Failure`] itself.
    pub fn try_unwrap(self) -> StdResult<T, Failure> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    pub fn unwrap_or_else(self, fallback: impl FnOnce(Fault) -> T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Failure(failure) => fallback(failure.into_error()),
        }
    }

    /// The wrapped fault.
    ///
    /// # Panics
    ///
    /// Panics when called on a `Just`.
    #[track_caller]
    pub fn unwrap_error(self) -> Fault {
        match self {
            Self::Just(_) => panic!("called `unwrap_error` on a Just"),
            Self::Failure(failure) => failure.into_error(),
        }
    }

    /// `self` if present, otherwise `other`.
    pub fn or(self, other: Result<T>) -> Result<T> {
        match self {
            Self::Just(_) => self,
            Self::Failure(_) => other,
        }
    }

    pub fn or_else(self, other: impl FnOnce(Fault) -> Result<T>) -> Result<T> {
        match self {
            Self::Just(_) => self,
            Self::Failure(failure) => other(failure.into_error()),
        }
    }
}

impl<T> Result<Result<T>> {
    /// Collapse one level of nesting.
    pub fn join(self) -> Result<T> {
        match self {
            Self::Just(inner) => inner,
            Self::Failure(failure) => Result::Failure(failure),
        }
    }
}

impl<T> Variant for Result<T> {
    const KIND: Kind = Kind::Result;

    fn tag(&self) -> Tag {
        match self {
            Self::Just(_) => Tag::Just,
            Self::Failure(_) => Tag::Failure,
        }
    }
}

impl<T> Functor for Result<T> {
    type Payload = T;
    type Mapped<U> = Result<U>;

    fn fmap<U, F>(self, f: F) -> Result<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }
}

impl<T> Pure for Result<T> {
    fn of(payload: T) -> Self {
        Self::Just(payload)
    }
}

impl<T: Plain> Flatten for Result<T> {
    type Output = Result<T>;

    fn flatten(self) -> Result<T> {
        self
    }
}

impl<T> Flatten for Result<Result<T>>
where
    Result<T>: Flatten,
{
    type Output = <Result<T> as Flatten>::Output;

    fn flatten(self) -> Self::Output {
        self.join().flatten()
    }
}

impl<T: Plain, U, F> Traverse<U, F> for Result<T>
where
    F: FnOnce(T) -> Result<U>,
{
    type Output = Result<Result<U>>;

    fn traverse(self, f: F) -> Result<Result<U>> {
        match self {
            Self::Just(value) => f(value).map(Result::of),
            Self::Failure(failure) => Result::Failure(failure),
        }
    }
}

impl<T, U, F> Traverse<U, F> for Result<Result<T>>
where
    Result<T>: Traverse<U, F>,
{
    type Output = Result<<Result<T> as Traverse<U, F>>::Output>;

    fn traverse(self, f: F) -> Self::Output {
        match self {
            Self::Just(inner) => Result::Just(inner.traverse(f)),
            Self::Failure(failure) => Result::Failure(failure),
        }
    }
}

impl<T> From<Just<T>> for Result<T> {
    fn from(Just(value): Just<T>) -> Self {
        Self::Just(value)
    }
}

impl<T> From<Failure> for Result<T> {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T>
where
    E: Into<Failure>,
{
    fn from(result: StdResult<T, E>) -> Self {
        match result {
            Ok(value) => Self::Just(value),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl<T> TryFrom<Result<T>> for Just<T> {
    type Error = Failure;

    fn try_from(result: Result<T>) -> StdResult<Self, Failure> {
        match result {
            Result::Just(value) => Ok(Just(value)),
            Result::Failure(failure) => Err(failure),
        }
    }
}

impl<T> TryFrom<Result<T>> for Failure {
    type Error = Just<T>;

    fn try_from(result: Result<T>) -> StdResult<Self, Just<T>> {
        match result {
            Result::Just(value) => Err(Just(value)),
            Result::Failure(failure) => Ok(failure),
        }
    }
}

impl<T> TryFrom<Maybe<T>> for Result<T> {
    type Error = Nothing;

    fn try_from(maybe: Maybe<T>) -> StdResult<Self, Nothing> {
        match maybe {
            Maybe::Just(value) => Ok(Self::Just(value)),
            Maybe::Nothing => Err(Nothing),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::AssertUnwindSafe;

    use super::*;

    #[test]
    fn constructors_and_on_absent() {
        assert_eq!(Result::from_option(Some(1)), Result::Just(1));

        let unspecified = Result::<i32>::from_option(None);
        assert_eq!(unspecified.error().map(Fault::message), Some("(unspecified)"));

        let custom = Result::<i32>::from_option_or(None, "boo");
        let message = custom.fold(|n| n.to_string(), |e| e.message().to_string());
        assert_eq!(message, "boo");
    }

    #[test]
    fn on_absent_fault_is_reused() {
        let fault = Fault::new("missing");
        let result = Result::<i32>::from_option_or(None, fault.clone());
        assert!(result.error().is_some_and(|e| Fault::same(e, &fault)));
    }

    #[test]
    fn map_skips_failures() {
        let fault = Fault::new("bad");
        let failed = Result::<i32>::Failure(Failure::from(fault.clone())).map(|n| n + 1);
        assert!(failed.error().is_some_and(|e| Fault::same(e, &fault)));
        assert_eq!(Result::Just(1).map(|n| n + 1), Result::Just(2));
    }

    #[test]
    fn chain_preserves_or_broadens() {
        let same: Result<i32> = Result::Just(3).chain(|n| Result::Just(n * 3));
        assert_eq!(same, Result::Just(9));

        let widened: Outcome<i32> = Result::Just(3).chain(|_| Outcome::Nothing);
        assert_eq!(widened, Outcome::Nothing);

        let failed: Outcome<i32> = Result::<i32>::Failure(Failure::new("x")).chain(Outcome::Just);
        assert!(failed.isa(Kind::Failure));
    }

    #[test]
    fn ap_returns_the_function_side_failure_unchanged() {
        let fn_fault = Fault::new("no function");
        let value_fault = Fault::new("no value");
        let wrapped = Result::<fn(i32) -> i32>::Failure(Failure::from(fn_fault.clone()));
        let receiver = Result::<i32>::Failure(Failure::from(value_fault.clone()));

        let applied = receiver.clone().ap(wrapped);
        assert!(applied.error().is_some_and(|e| Fault::same(e, &fn_fault)));

        let applied = receiver.ap(Just(|n: i32| n + 1));
        assert!(applied.error().is_some_and(|e| Fault::same(e, &value_fault)));

        assert_eq!(Result::Just(2).ap(Just(|n: i32| n * 5)), Result::Just(10));
    }

    #[test]
    fn join_flatten_traverse() {
        let nested: Result<Result<i32>> = Result::Just(Result::Just(1));
        assert_eq!(nested.clone().join(), Result::Just(1));
        assert_eq!(nested.flatten(), Result::Just(1));

        let failed: Result<Result<i32>> = Result::Just(Result::Failure(Failure::new("inner")));
        assert_eq!(failed.flatten().error().map(Fault::message), Some("inner"));

        let swapped = Result::Just(2).traverse(|n: i32| Result::Just(n.to_string()));
        assert_eq!(swapped, Result::Just(Result::Just("2".to_string())));

        let failing = Result::Just(2).traverse(|_: i32| Result::<i32>::Failure(Failure::new("f")));
        assert!(failing.is_failure());
    }

    #[test]
    fn unwrap_family() {
        assert_eq!(Result::Just(4).unwrap(), 4);
        assert_eq!(Result::<i32>::Failure(Failure::new("e")).unwrap_or(1), 1);
        assert_eq!(
            Result::<usize>::Failure(Failure::new("abc")).unwrap_or_else(|e| e.message().len()),
            3
        );

        let failure = Failure::new("kept");
        assert_eq!(
            Result::<i32>::Failure(failure.clone()).try_unwrap(),
            Err(failure)
        );
        assert_eq!(
            Result::<i32>::Failure(Failure::new("z")).unwrap_error().message(),
            "z"
        );
    }

    #[test]
    fn unwrap_failure_panics_with_its_fault() {
        let fault = Fault::new("cool error");
        let failed = Result::<i32>::Failure(Failure::from(fault.clone()));
        let payload = std::panic::catch_unwind(AssertUnwindSafe(move || failed.unwrap()))
            .expect_err("unwrapping a failure panics");
        let thrown = payload
            .downcast::<Fault>()
            .expect("panic payload is the fault");
        assert!(Fault::same(&thrown, &fault));
    }

    #[test]
    fn std_interop() {
        let ok: Result<i32> = StdResult::<i32, &str>::Ok(1).into();
        assert_eq!(ok, Result::Just(1));

        let err: Result<i32> = StdResult::<i32, &str>::Err("nope").into();
        assert_eq!(err.clone().into_std().map_err(|e| e.to_string()), Err("nope".into()));
        assert_eq!(err.into_option(), None);
    }

    #[test]
    fn alternatives_and_map_error() {
        let failed = Result::<i32>::Failure(Failure::new("first"));
        assert_eq!(failed.clone().or(Result::Just(2)), Result::Just(2));
        assert_eq!(
            failed
                .clone()
                .or_else(|e| Result::Just(e.message().len() as i32)),
            Result::Just(5)
        );

        let renamed = failed.map_error(|e| Fault::new(format!("wrapped: {e}")));
        assert_eq!(renamed.error().map(Fault::message), Some("wrapped: first"));
    }

    #[test]
    fn narrowing_agrees_with_isa() {
        let just = Result::Just(1);
        assert!(just.isa(Kind::Just));
        assert!(Just::try_from(just.clone()).is_ok());
        assert!(Failure::try_from(just).is_err());

        let failed = Result::<i32>::Failure(Failure::new("e"));
        assert!(failed.isa(Kind::Failure));
        assert!(Just::try_from(failed.clone()).is_err());
        assert!(Failure::try_from(failed).is_ok());

        assert!(Result::try_from(Maybe::Just(1)).is_ok());
        assert!(Result::try_from(Maybe::<i32>::Nothing).is_err());
        assert!(Maybe::Just(1).isa(Kind::Result));
        assert!(!Maybe::<i32>::Nothing.isa(Kind::Result));
    }
}
