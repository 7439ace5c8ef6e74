#![forbid(unsafe_code)]

//! Core: the `Just`/`Nothing`/`Failure` variants, the `Maybe`, `Result` and
//! `Outcome` views, and the transformation algebra over them.
//!
//! # Shape
//!
//! There are three terminal variants, each its own type: [`Just`],
//! [`Nothing`] and [`Failure`]. The views are enums that restrict which of
//! them may appear: [`Maybe`] (`Just | Nothing`), [`Result`]
//! (`Just | Failure`) and [`Outcome`] (all three). Widening is `From`,
//! narrowing is `TryFrom`, and [`Variant::isa`] is the runtime membership
//! test that agrees with both.
//!
//! # Invariants
//!
//! 1. Every value holds exactly one variant; its [`Tag`] never changes.
//! 2. A `Just` always holds a payload. Absent input is rejected at the
//!    nullable entry points ([`Just::from_nullable`]).
//! 3. `Nothing` and `Failure` are inert under `map`, `chain`, `ap`, `join`,
//!    `flatten` and `traverse`; a `Failure` keeps its [`Fault`] identity.
//! 4. `x.isa(N::KIND) == N::try_from(x).is_ok()` for every value `x` and
//!    every target type `N`.
//! 5. `flatten` is idempotent and leaves no same-family nesting behind.
//!
//! # Failure Modes
//!
//! - `unwrap()` panics on `Nothing` and `Failure`; `try_unwrap()`,
//!   `unwrap_or()` and `unwrap_or_else()` are the non-panicking forms.
//! - [`Cases::run`] rejects a handler table that misses a case the view
//!   admits, before any handler runs.

pub mod algebra;
pub mod cases;
pub mod error;
pub mod failure;
pub mod fault;
pub mod just;
pub mod kind;
pub mod maybe;
pub mod nothing;
pub mod outcome;
pub mod pointfree;
pub mod result;

pub use algebra::{Flatten, Functor, Plain, Pure, Traverse};
pub use cases::Cases;
pub use error::{ConstraintViolation, MatchError, UnwrapError};
pub use failure::Failure;
pub use fault::Fault;
pub use just::Just;
pub use kind::{Kind, Tag, Variant};
pub use maybe::Maybe;
pub use nothing::Nothing;
pub use outcome::Outcome;
pub use result::Result;
