#![forbid(unsafe_code)]

//! Error kinds raised by the algebra itself.
//!
//! These are control-flow errors, distinct from the *data* failures a
//! [`Failure`](crate::Failure) carries:
//!
//! - [`ConstraintViolation`]: a precondition broken by the caller.
//! - [`UnwrapError`]: the caller assumed a payload that is not there.
//! - [`MatchError`]: a dynamic [`Cases`](crate::Cases) table lacks a handler
//!   the matched view requires.

use thiserror::Error;

use crate::fault::Fault;
use crate::kind::{Kind, Tag};

/// A precondition failure at construction or call time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("Just requires a present value, got nothing")]
    MissingPayload,

    #[error("a subscriber needs at least one of `next` or `complete`")]
    EmptyObserver,
}

/// Raised when a payload is demanded from a value that has none.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnwrapError {
    #[error("Unwrapped an empty {variant}")]
    Empty { variant: Tag },

    #[error(transparent)]
    Failed(Fault),
}

impl UnwrapError {
    /// The fault behind a failed unwrap, if it came from a `Failure`.
    #[must_use]
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Failed(fault) => Some(fault),
            Self::Empty { .. } => None,
        }
    }
}

/// Raised by [`Cases::run`](crate::Cases::run) when a required handler is
/// missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("{view} match is missing a handler for {case}")]
    MissingCase { view: Kind, case: Tag },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_case() {
        let err = UnwrapError::Empty {
            variant: Tag::Nothing,
        };
        assert_eq!(err.to_string(), "Unwrapped an empty Nothing");

        let err = MatchError::MissingCase {
            view: Kind::Maybe,
            case: Tag::Nothing,
        };
        assert_eq!(err.to_string(), "Maybe match is missing a handler for Nothing");
    }

    #[test]
    fn failed_unwrap_is_transparent() {
        let err = UnwrapError::Failed(Fault::new("cool error"));
        assert_eq!(err.to_string(), "cool error");
        assert_eq!(err.fault().map(Fault::message), Some("cool error"));
        assert!(
            UnwrapError::Empty {
                variant: Tag::Nothing
            }
            .fault()
            .is_none()
        );
    }
}
