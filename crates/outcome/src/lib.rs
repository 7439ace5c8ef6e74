#![forbid(unsafe_code)]

//! Outcome public facade crate.
//!
//! Re-exports the variant algebra from `outcome-core` and, with the default
//! `reactive` feature, the [`Subject`] container from `outcome-reactive`.
//!
//! The [`prelude`] leaves out [`Result`] so that a glob import does not
//! shadow the standard one; name it as `outcome::Result`.

pub use outcome_core::{
    Cases, ConstraintViolation, Failure, Fault, Flatten, Functor, Just, Kind, MatchError, Maybe,
    Nothing, Outcome, Plain, Pure, Result, Tag, Traverse, UnwrapError, Variant, pointfree,
};
#[cfg(feature = "reactive")]
pub use outcome_reactive::{Observer, Replay, Subject, SubjectConfig};

pub mod prelude {
    pub use outcome_core as core;
    #[cfg(feature = "reactive")]
    pub use outcome_reactive as reactive;

    pub use outcome_core::{
        Cases, Failure, Fault, Flatten, Functor, Just, Kind, Maybe, Nothing, Outcome, Pure, Tag,
        Traverse, Variant,
    };
    #[cfg(feature = "reactive")]
    pub use outcome_reactive::{Observer, Subject, SubjectConfig};
}
