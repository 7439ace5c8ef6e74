#![forbid(unsafe_code)]

//! A handler table checked at run time.
//!
//! `match_with` on each type already enforces exhaustiveness statically.
//! [`Cases`] is for handler sets assembled dynamically: each case is
//! optional, and [`Cases::run`] verifies that every case the value's view
//! admits is covered *before* any handler runs.
//!
//! # Failure Modes
//!
//! - A missing handler for an admitted case yields
//!   [`MatchError::MissingCase`]. The check uses the static view of the
//!   argument, so a `Maybe` that happens to hold `Just` still needs a
//!   `nothing` handler.
//! - Handlers for cases the view does not admit are ignored.

use std::fmt;
use std::result::Result as StdResult;

use crate::error::MatchError;
use crate::fault::Fault;
use crate::kind::{Kind, Tag, Variant};
use crate::outcome::Outcome;

type JustArm<'a, T, R> = Box<dyn FnOnce(T) -> R + 'a>;
type NothingArm<'a, R> = Box<dyn FnOnce() -> R + 'a>;
type FailureArm<'a, R> = Box<dyn FnOnce(Fault) -> R + 'a>;

/// Optional per-case handlers, run against any variant or view.
pub struct Cases<'a, T, R> {
    just: Option<JustArm<'a, T, R>>,
    nothing: Option<NothingArm<'a, R>>,
    failure: Option<FailureArm<'a, R>>,
}

impl<T, R> Default for Cases<'_, T, R> {
    fn default() -> Self {
        Self {
            just: None,
            nothing: None,
            failure: None,
        }
    }
}

impl<T, R> fmt::Debug for Cases<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cases")
            .field("just", &self.just.is_some())
            .field("nothing", &self.nothing.is_some())
            .field("failure", &self.failure.is_some())
            .finish()
    }
}

impl<'a, T, R> Cases<'a, T, R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn just(mut self, handler: impl FnOnce(T) -> R + 'a) -> Self {
        self.just = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn nothing(mut self, handler: impl FnOnce() -> R + 'a) -> Self {
        self.nothing = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn failure(mut self, handler: impl FnOnce(Fault) -> R + 'a) -> Self {
        self.failure = Some(Box::new(handler));
        self
    }

    /// Whether a handler is registered for `tag`.
    #[must_use]
    pub fn handles(&self, tag: Tag) -> bool {
        match tag {
            Tag::Just => self.just.is_some(),
            Tag::Nothing => self.nothing.is_some(),
            Tag::Failure => self.failure.is_some(),
        }
    }

    /// Check that every case `view` admits has a handler.
    ///
    /// # Errors
    ///
    /// [`MatchError::MissingCase`] naming the first uncovered case, in
    /// [`Tag::ALL`] order.
    pub fn check(&self, view: Kind) -> StdResult<(), MatchError> {
        match view.tags().find(|tag| !self.handles(*tag)) {
            Some(case) => Err(MatchError::MissingCase { view, case }),
            None => Ok(()),
        }
    }

    /// Run the handler for `value`'s case.
    ///
    /// # Errors
    ///
    /// [`MatchError::MissingCase`] when the handlers do not cover `V`'s
    /// view. No handler runs in that case.
    pub fn run<V>(self, value: V) -> StdResult<R, MatchError>
    where
        V: Variant + Into<Outcome<T>>,
    {
        let view = V::KIND;
        self.check(view)?;
        let missing = |case| MatchError::MissingCase { view, case };
        match value.into() {
            Outcome::Just(payload) => Ok(self.just.ok_or(missing(Tag::Just))?(payload)),
            Outcome::Nothing => Ok(self.nothing.ok_or(missing(Tag::Nothing))?()),
            Outcome::Failure(failure) => {
                Ok(self.failure.ok_or(missing(Tag::Failure))?(failure.into_error()))
            }
        }
    }
}
