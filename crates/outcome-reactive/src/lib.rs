#![forbid(unsafe_code)]

//! Reactive: a single-slot [`Subject`] holding one outcome value and
//! notifying [`Observer`]s when it changes.
//!
//! - [`Subject`]: shared cell with `subscribe`, `next`, `complete`, and the
//!   derivations `derive`, `map`, `filter`, `merge`.
//! - [`Observer`]: optional `next` and `complete` callbacks.
//! - [`SubjectConfig`]: replay policy and log label.
//!
//! A subject's current value is read with `get()` (a clone) or `with()` (a
//! borrow); `unwrap`, `unwrap_or` and `error` read its payload or fault
//! directly.
//!
//! # Architecture
//!
//! Everything is single-threaded and synchronous. `Subject<V>` uses
//! `Rc<RefCell<..>>`; there is no scheduling and no queue. A `next` call
//! returns only after every observer, and every subject derived from this
//! one, has seen the value. Hosts that need threads must serialize access to
//! a subject themselves.
//!
//! Events are logged through `tracing` with `message = "subject.*"` fields;
//! install a subscriber to see them.

pub mod config;
pub mod observer;
pub mod subject;

pub use config::{Replay, SubjectConfig};
pub use observer::Observer;
pub use subject::Subject;
