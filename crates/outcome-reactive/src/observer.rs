#![forbid(unsafe_code)]

//! Subscriber records.

use std::fmt;
use std::rc::Rc;

type NextFn<V> = Rc<dyn Fn(&V)>;
type CompleteFn = Rc<dyn Fn()>;

/// A subscriber: optional `next` and `complete` callbacks.
///
/// Cloning shares the callbacks. A subject needs at least one of the two to
/// accept the observer.
pub struct Observer<V> {
    next: Option<NextFn<V>>,
    complete: Option<CompleteFn>,
}

impl<V> Observer<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: None,
            complete: None,
        }
    }

    /// Called with every value the subject accepts, in registration order.
    #[must_use]
    pub fn on_next(mut self, next: impl Fn(&V) + 'static) -> Self {
        self.next = Some(Rc::new(next));
        self
    }

    /// Called once when the subject completes, or immediately when
    /// subscribing to a subject that already has.
    #[must_use]
    pub fn on_complete(mut self, complete: impl Fn() + 'static) -> Self {
        self.complete = Some(Rc::new(complete));
        self
    }

    /// True when neither callback is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next.is_none() && self.complete.is_none()
    }

    pub(crate) fn notify_next(&self, value: &V) {
        if let Some(next) = &self.next {
            next(value);
        }
    }

    pub(crate) fn notify_complete(&self) {
        if let Some(complete) = &self.complete {
            complete();
        }
    }
}

impl<V> Default for Observer<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for Observer<V> {
    fn clone(&self) -> Self {
        Self {
            next: self.next.clone(),
            complete: self.complete.clone(),
        }
    }
}

impl<V> fmt::Debug for Observer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("next", &self.next.is_some())
            .field("complete", &self.complete.is_some())
            .finish()
    }
}
