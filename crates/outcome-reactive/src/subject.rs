#![forbid(unsafe_code)]

//! Single-slot reactive container.
//!
//! # Design
//!
//! [`Subject<V>`] holds exactly one value of a variant or view type `V`,
//! an ordered list of [`Observer`]s, a completion flag and a version
//! counter, all behind `Rc<RefCell<..>>`. Cloning a `Subject` yields another
//! handle to the same cell.
//!
//! Dispatch never holds the borrow: `next` and `complete` update the cell,
//! snapshot the observers, release the borrow, then call out. A callback may
//! therefore read from or write to the subject that is notifying it. Dispatch
//! is depth-first: a nested `next` runs its full round before the outer round
//! moves on to the next observer.
//!
//! Derived subjects (`derive`, `map`, `filter`, `merge`) are linked by an
//! observer registered on the source that holds the derived subject. The
//! derived subject never refers back to its sources, so no cycle forms.
//!
//! # Invariants
//!
//! 1. `version` increments exactly once per accepted `next`.
//! 2. Observers are notified in registration order.
//! 3. After `complete()`, `next` is a no-op, the observer list is empty and
//!    stays empty, and late subscribers get `complete` immediately. A
//!    `complete()` issued by an observer mid-round stops the round: no
//!    observer sees `next` after `complete`.
//! 4. `complete()` notifies each observer at most once.
//! 5. A derived subject is seeded from its source's current value at
//!    derivation time.
//!
//! # Failure Modes
//!
//! - **Empty observer**: `subscribe` rejects an observer with neither
//!   callback with [`ConstraintViolation::EmptyObserver`].
//! - **Re-entrant `with`**: calling `next` on a subject from inside its own
//!   [`Subject::with`] closure panics on the `RefCell` borrow. Use
//!   [`Subject::get`] when the closure needs to write back.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::mem;
use std::rc::Rc;

use outcome_core::{ConstraintViolation, Fault, Functor, Kind, Nothing, Outcome, Pure, Tag, Variant};

use crate::config::{Replay, SubjectConfig};
use crate::observer::Observer;

struct SubjectInner<V> {
    inner: V,
    observers: Vec<Observer<V>>,
    is_completed: bool,
    version: u64,
    config: SubjectConfig,
}

/// A shared, observable cell holding one variant.
///
/// Cloning a `Subject` creates a new handle to the **same** cell.
pub struct Subject<V> {
    state: Rc<RefCell<SubjectInner<V>>>,
}

impl<V> Clone for Subject<V> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Subject<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Subject")
            .field("inner", &state.inner)
            .field("is_completed", &state.is_completed)
            .field("version", &state.version)
            .field("subscribers", &state.observers.len())
            .finish()
    }
}

impl<V> Default for Subject<V>
where
    V: From<Nothing> + Clone + 'static,
{
    /// A subject holding `Nothing`.
    fn default() -> Self {
        Self::new(Nothing)
    }
}

impl<V: Clone + 'static> Subject<V> {
    /// Create a subject holding `initial`, with the default configuration.
    #[must_use]
    pub fn new(initial: impl Into<V>) -> Self {
        Self::with_config(initial, SubjectConfig::default())
    }

    #[must_use]
    pub fn with_config(initial: impl Into<V>, config: SubjectConfig) -> Self {
        Self {
            state: Rc::new(RefCell::new(SubjectInner {
                inner: initial.into(),
                observers: Vec::new(),
                is_completed: false,
                version: 0,
                config,
            })),
        }
    }

    /// Create a subject from a bare payload, wrapped by `V`'s constructor
    /// path (`Just(payload)` for every view).
    #[must_use]
    pub fn of(payload: V::Payload) -> Self
    where
        V: Pure,
    {
        Self::new(V::of(payload))
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> V {
        self.state.borrow().inner.clone()
    }

    /// Borrow the current value without cloning.
    ///
    /// # Panics
    ///
    /// If `f` calls `next` or `complete` on this subject.
    pub fn with<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.state.borrow().inner)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state.borrow().is_completed
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().observers.len()
    }

    /// Number of accepted `next` calls.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.state.borrow().version
    }

    #[must_use]
    pub fn config(&self) -> SubjectConfig {
        self.state.borrow().config.clone()
    }

    /// Register `observer`.
    ///
    /// On a completed subject the observer's `complete` fires immediately and
    /// it is not registered. Otherwise it is registered and, under
    /// [`Replay::Latest`], its `next` fires once with the current value.
    ///
    /// # Errors
    ///
    /// [`ConstraintViolation::EmptyObserver`] when `observer` has neither
    /// callback. Nothing is registered.
    pub fn subscribe(&self, observer: Observer<V>) -> Result<(), ConstraintViolation> {
        if observer.is_empty() {
            let label = self.label();
            tracing::warn!(message = "subject.subscribe.rejected", label = label.as_str());
            return Err(ConstraintViolation::EmptyObserver);
        }
        let replay = self.state.borrow().config.replay == Replay::Latest;
        self.register(observer, replay);
        Ok(())
    }

    /// Register a `next`-only observer.
    pub fn subscribe_next(&self, next: impl Fn(&V) + 'static) {
        let replay = self.state.borrow().config.replay == Replay::Latest;
        self.register(Observer::new().on_next(next), replay);
    }

    /// Replace the current value and notify every observer.
    ///
    /// No-op once the subject has completed.
    pub fn next(&self, value: impl Into<V>) {
        let value = value.into();
        let (label, observers) = {
            let mut state = self.state.borrow_mut();
            let label = state.config.label_or_default().to_owned();
            if state.is_completed {
                tracing::trace!(message = "subject.next.ignored", label = label.as_str());
                return;
            }
            state.inner = value.clone();
            state.version += 1;
            tracing::debug!(
                message = "subject.next",
                label = label.as_str(),
                version = state.version,
                subscribers = state.observers.len()
            );
            (label, state.observers.clone())
        };

        let span = tracing::debug_span!(
            "subject.dispatch",
            label = label.as_str(),
            subscribers = observers.len()
        );
        let _guard = span.enter();
        for observer in &observers {
            if self.state.borrow().is_completed {
                tracing::trace!(message = "subject.dispatch.halted", label = label.as_str());
                break;
            }
            observer.notify_next(&value);
        }
    }

    /// [`next`](Self::next) with a bare payload, wrapped by `V`'s
    /// constructor path.
    pub fn next_value(&self, payload: V::Payload)
    where
        V: Pure,
    {
        self.next(V::of(payload));
    }

    /// Freeze the subject and notify every observer's `complete`, once.
    ///
    /// Idempotent. The observer list is cleared.
    pub fn complete(&self) {
        let observers = {
            let mut state = self.state.borrow_mut();
            if state.is_completed {
                return;
            }
            state.is_completed = true;
            tracing::debug!(
                message = "subject.complete",
                label = state.config.label_or_default(),
                version = state.version,
                subscribers = state.observers.len()
            );
            mem::take(&mut state.observers)
        };
        for observer in &observers {
            observer.notify_complete();
        }
    }

    /// A new subject holding `f` of this subject's value, kept in sync.
    ///
    /// Completion propagates from this subject to the derived one.
    pub fn derive<W: Clone + 'static>(&self, f: impl Fn(&V) -> W + 'static) -> Subject<W> {
        self.derive_as("derive", f)
    }

    /// A new subject holding this subject's value with its payload mapped.
    ///
    /// `Nothing` and `Failure` values pass through unchanged.
    pub fn map<U>(&self, f: impl Fn(V::Payload) -> U + 'static) -> Subject<V::Mapped<U>>
    where
        V: Functor,
        V::Mapped<U>: Clone + 'static,
    {
        self.derive_as("map", move |value: &V| value.clone().fmap(&f))
    }

    /// A new subject that follows this one only when `predicate` holds.
    ///
    /// The filtered subject starts from the current value regardless of the
    /// predicate.
    pub fn filter(&self, predicate: impl Fn(&V) -> bool + 'static) -> Subject<V> {
        let filtered = Subject::with_config(self.get(), self.config().derived("filter"));
        let target = filtered.clone();
        let done = filtered.clone();
        self.register(
            Observer::new()
                .on_next(move |value: &V| {
                    if predicate(value) {
                        target.next(value.clone());
                    }
                })
                .on_complete(move || done.complete()),
            false,
        );
        filtered
    }

    /// A new subject that re-emits every value from this subject and from
    /// each of `others`.
    ///
    /// It starts from this subject's current value and completes once every
    /// input has completed (inputs already completed count as done).
    pub fn merge<'a, W, M>(&self, others: impl IntoIterator<Item = &'a Subject<W>>) -> Subject<M>
    where
        V: Into<M>,
        W: Into<M> + Clone + 'static,
        M: Clone + 'static,
    {
        let others: Vec<&Subject<W>> = others.into_iter().collect();
        let merged: Subject<M> = Subject::with_config(self.get(), self.config().derived("merge"));
        let remaining = Rc::new(Cell::new(others.len() + 1));

        merged.attach_input(self, &remaining);
        for other in others {
            merged.attach_input(other, &remaining);
        }
        merged
    }

    /// The tag of the current value.
    #[must_use]
    pub fn tag(&self) -> Tag
    where
        V: Variant,
    {
        self.state.borrow().inner.tag()
    }

    /// Whether the current value belongs to `kind`.
    #[must_use]
    pub fn isa(&self, kind: Kind) -> bool
    where
        V: Variant,
    {
        kind.admits(self.tag())
    }

    /// Payload of the current value.
    ///
    /// # Panics
    ///
    /// When the subject holds `Nothing` or a `Failure`, exactly as
    /// [`Outcome::unwrap`] does.
    #[track_caller]
    pub fn unwrap(&self) -> V::Payload
    where
        V: Functor + Into<Outcome<V::Payload>>,
    {
        self.current().unwrap()
    }

    /// Payload of the current value, or `fallback`.
    pub fn unwrap_or(&self, fallback: V::Payload) -> V::Payload
    where
        V: Functor + Into<Outcome<V::Payload>>,
    {
        self.current().unwrap_or(fallback)
    }

    /// The fault of the current value, if it is a `Failure`.
    #[must_use]
    pub fn error(&self) -> Option<Fault>
    where
        V: Functor + Into<Outcome<V::Payload>>,
    {
        self.current().error().cloned()
    }

    fn current(&self) -> Outcome<V::Payload>
    where
        V: Functor + Into<Outcome<V::Payload>>,
    {
        self.get().into()
    }

    fn label(&self) -> String {
        self.state.borrow().config.label_or_default().to_owned()
    }

    /// Register without validation. Used by `subscribe` and by derived
    /// subjects, which never replay.
    fn register(&self, observer: Observer<V>, replay: bool) {
        let current = {
            let mut state = self.state.borrow_mut();
            if state.is_completed {
                None
            } else {
                state.observers.push(observer.clone());
                tracing::trace!(
                    message = "subject.subscribe",
                    label = state.config.label_or_default(),
                    subscribers = state.observers.len(),
                    replay
                );
                Some(replay.then(|| state.inner.clone()))
            }
        };
        match current {
            None => observer.notify_complete(),
            Some(Some(value)) => observer.notify_next(&value),
            Some(None) => {}
        }
    }

    fn derive_as<W: Clone + 'static>(
        &self,
        op: &str,
        f: impl Fn(&V) -> W + 'static,
    ) -> Subject<W> {
        let seed = self.with(&f);
        let derived = Subject::with_config(seed, self.config().derived(op));
        let target = derived.clone();
        let done = derived.clone();
        self.register(
            Observer::new()
                .on_next(move |value: &V| target.next(f(value)))
                .on_complete(move || done.complete()),
            false,
        );
        derived
    }

    /// Forward `source` into `self`, counting its completion against
    /// `remaining`.
    fn attach_input<S>(&self, source: &Subject<S>, remaining: &Rc<Cell<usize>>)
    where
        S: Into<V> + Clone + 'static,
    {
        let target = self.clone();
        let done = self.clone();
        let remaining = Rc::clone(remaining);
        source.register(
            Observer::new()
                .on_next(move |value: &S| target.next(value.clone()))
                .on_complete(move || {
                    let left = remaining.get().saturating_sub(1);
                    remaining.set(left);
                    if left == 0 {
                        done.complete();
                    }
                }),
            false,
        );
    }
}
