#![forbid(unsafe_code)]

//! Point-free forms of the algebra.
//!
//! Each function takes the operation's arguments and returns a closure that
//! takes the value, so operations compose with iterator adapters:
//!
//! ```
//! use outcome_core::Maybe;
//! use outcome_core::pointfree::maybe;
//!
//! let doubled: Vec<Maybe<i32>> = [Maybe::Just(1), Maybe::Nothing]
//!     .into_iter()
//!     .map(maybe::map(|n: i32| n * 2))
//!     .collect();
//! assert_eq!(doubled, [Maybe::Just(2), Maybe::Nothing]);
//! ```
//!
//! `flatten` needs no arguments, so it is a plain function:
//! `iter.map(maybe::flatten)`.

/// Helpers over [`Maybe`](crate::Maybe).
pub mod maybe {
    use crate::algebra::{Flatten, Traverse};
    use crate::maybe::Maybe;
    use crate::nothing::Nothing;

    pub fn map<T, U>(mut f: impl FnMut(T) -> U) -> impl FnMut(Maybe<T>) -> Maybe<U> {
        move |value| value.map(&mut f)
    }

    pub fn chain<T, R>(mut f: impl FnMut(T) -> R) -> impl FnMut(Maybe<T>) -> R
    where
        R: From<Nothing>,
    {
        move |value| value.chain(&mut f)
    }

    /// The wrapped function is cloned for every application.
    pub fn ap<T, U, F>(wrapped: Maybe<F>) -> impl FnMut(Maybe<T>) -> Maybe<U>
    where
        F: FnOnce(T) -> U + Clone,
    {
        move |value| value.ap(wrapped.clone())
    }

    pub fn fold<T, R>(
        mut on_value: impl FnMut(T) -> R,
        mut on_empty: impl FnMut() -> R,
    ) -> impl FnMut(Maybe<T>) -> R {
        move |value| value.fold(&mut on_value, &mut on_empty)
    }

    /// Collapse any depth of nesting to one layer.
    pub fn flatten<M: Flatten>(value: M) -> M::Output {
        value.flatten()
    }

    pub fn traverse<M, U, F>(f: F) -> impl FnMut(M) -> M::Output
    where
        F: Clone,
        M: Traverse<U, F>,
    {
        move |value| value.traverse(f.clone())
    }
}

/// Helpers over [`Result`](crate::Result).
pub mod result {
    use crate::algebra::{Flatten, Traverse};
    use crate::failure::Failure;
    use crate::fault::Fault;
    use crate::result::Result;

    pub fn map<T, U>(mut f: impl FnMut(T) -> U) -> impl FnMut(Result<T>) -> Result<U> {
        move |value| value.map(&mut f)
    }

    pub fn chain<T, R>(mut f: impl FnMut(T) -> R) -> impl FnMut(Result<T>) -> R
    where
        R: From<Failure>,
    {
        move |value| value.chain(&mut f)
    }

    pub fn ap<T, U, F>(wrapped: Result<F>) -> impl FnMut(Result<T>) -> Result<U>
    where
        F: FnOnce(T) -> U + Clone,
    {
        move |value| value.ap(wrapped.clone())
    }

    pub fn fold<T, R>(
        mut on_value: impl FnMut(T) -> R,
        mut on_error: impl FnMut(Fault) -> R,
    ) -> impl FnMut(Result<T>) -> R {
        move |value| value.fold(&mut on_value, &mut on_error)
    }

    pub fn flatten<M: Flatten>(value: M) -> M::Output {
        value.flatten()
    }

    pub fn traverse<M, U, F>(f: F) -> impl FnMut(M) -> M::Output
    where
        F: Clone,
        M: Traverse<U, F>,
    {
        move |value| value.traverse(f.clone())
    }
}

/// Helpers over [`Outcome`](crate::Outcome).
pub mod outcome {
    use crate::algebra::{Flatten, Traverse};
    use crate::failure::Failure;
    use crate::fault::Fault;
    use crate::nothing::Nothing;
    use crate::outcome::Outcome;

    pub fn map<T, U>(mut f: impl FnMut(T) -> U) -> impl FnMut(Outcome<T>) -> Outcome<U> {
        move |value| value.map(&mut f)
    }

    pub fn chain<T, R>(mut f: impl FnMut(T) -> R) -> impl FnMut(Outcome<T>) -> R
    where
        R: From<Nothing> + From<Failure>,
    {
        move |value| value.chain(&mut f)
    }

    pub fn ap<T, U, F>(wrapped: Outcome<F>) -> impl FnMut(Outcome<T>) -> Outcome<U>
    where
        F: FnOnce(T) -> U + Clone,
    {
        move |value| value.ap(wrapped.clone())
    }

    pub fn fold<T, R>(
        mut on_value: impl FnMut(T) -> R,
        mut on_other: impl FnMut(Option<Fault>) -> R,
    ) -> impl FnMut(Outcome<T>) -> R {
        move |value| value.fold(&mut on_value, &mut on_other)
    }

    pub fn flatten<M: Flatten>(value: M) -> M::Output {
        value.flatten()
    }

    pub fn traverse<M, U, F>(f: F) -> impl FnMut(M) -> M::Output
    where
        F: Clone,
        M: Traverse<U, F>,
    {
        move |value| value.traverse(f.clone())
    }
}
