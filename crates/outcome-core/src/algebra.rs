#![forbid(unsafe_code)]

//! Traits shared by the transformation algebra.
//!
//! The per-type operations (`map`, `chain`, `ap`, `fold`, ...) are inherent
//! methods so that each one can state its exact return type. The traits here
//! cover what has to be generic across types:
//!
//! - [`Functor`]: "map over the payload", used by `Subject::map` and the
//!   point-free helpers.
//! - [`Pure`]: the constructor path that wraps a bare payload.
//! - [`Flatten`] and [`Traverse`]: operations that recurse through nesting.
//!   Recursion stops at a payload type marked [`Plain`].
//!
//! # Why `Plain` exists
//!
//! `flatten` collapses `Maybe<Maybe<Maybe<T>>>` to `Maybe<T>` for any depth.
//! Rust cannot ask "is `T` a variant?" without specialization, so the base
//! case is spelled out: a payload type marked `Plain` is known not to be a
//! variant. The standard scalar, text, collection, pointer and tuple types
//! are marked here; any other payload type opts in with
//! `impl outcome_core::Plain for MyType {}`.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::fault::Fault;

/// Map over the payload of a variant or view, keeping its shape.
pub trait Functor {
    /// The payload type carried on the `Just` path.
    type Payload;

    /// The same shape carrying a `U` payload instead.
    type Mapped<U>;

    fn fmap<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: FnOnce(Self::Payload) -> U;
}

/// Build the payload-bearing variant of a type from a bare value.
pub trait Pure: Functor {
    fn of(payload: Self::Payload) -> Self;
}

/// Marker for payload types that are not themselves variants.
///
/// This is the base case for [`Flatten`] and [`Traverse`].
pub trait Plain {}

/// Collapse any depth of same-family nesting.
///
/// `Maybe<Maybe<T>>` flattens to `Maybe<T>`; `Maybe<T>` with a [`Plain`]
/// payload flattens to itself. Flattening is idempotent.
pub trait Flatten {
    type Output;

    fn flatten(self) -> Self::Output;
}

/// Swap two layers of the same family.
///
/// For a [`Plain`] payload, `x.traverse(f)` is `f(v).map(Self::of)` on the
/// payload path and `x` itself otherwise. For a nested payload it recurses
/// into the inner layer and rewraps the result.
pub trait Traverse<U, F> {
    type Output;

    fn traverse(self, f: F) -> Self::Output;
}

macro_rules! plain {
    ($($ty:ty),* $(,)?) => {
        $(impl Plain for $ty {})*
    };
}

plain!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    str,
    String,
    Fault,
    std::time::Duration,
    std::path::PathBuf,
);

impl<T: ?Sized> Plain for &T where T: Plain {}
impl<T: ?Sized> Plain for Box<T> {}
impl<T: ?Sized> Plain for Rc<T> {}
impl<T: ?Sized> Plain for Arc<T> {}
impl<T> Plain for Cell<T> {}
impl<T> Plain for RefCell<T> {}
impl<T> Plain for Vec<T> {}
impl<T> Plain for VecDeque<T> {}
impl<T, const N: usize> Plain for [T; N] {}
impl<T> Plain for Option<T> {}
impl<T, E> Plain for std::result::Result<T, E> {}
impl<K, V, S> Plain for HashMap<K, V, S> {}
impl<K, V> Plain for BTreeMap<K, V> {}
impl<T, S> Plain for HashSet<T, S> {}
impl<T> Plain for BTreeSet<T> {}
impl<A, B> Plain for (A, B) {}
impl<A, B, C> Plain for (A, B, C) {}
impl<A, B, C, D> Plain for (A, B, C, D) {}
impl<A, R> Plain for fn(A) -> R {}
impl<A, B, R> Plain for fn(A, B) -> R {}
