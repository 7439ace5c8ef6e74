#![forbid(unsafe_code)]

//! The error object carried by a [`Failure`](crate::Failure).
//!
//! A [`Fault`] is a message plus an optional chained cause. It is a cheap,
//! shared handle: cloning a fault yields the *same* fault, and
//! [`Fault::same`] tells two handles apart by identity rather than by
//! message. This is what lets `Failure::from(fault)` reuse an existing error
//! unchanged while `Failure::new("text")` always mints a fresh one.
//!
//! # Invariants
//!
//! 1. The message never changes after construction.
//! 2. Equality (`==`) compares messages; identity is [`Fault::same`].
//! 3. `source()` returns the chained cause, if any.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Message used when a failure is constructed without one.
pub const UNSPECIFIED: &str = "(unspecified)";

/// A chained cause attached to a [`Fault`].
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

struct FaultInner {
    message: String,
    cause: Option<Cause>,
}

/// Shared error object: message plus optional cause.
#[derive(Clone)]
pub struct Fault {
    inner: Arc<FaultInner>,
}

impl Fault {
    /// Create a fault with the given message and no cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(FaultInner {
                message: message.into(),
                cause: None,
            }),
        }
    }

    /// Create a fault that chains `cause`.
    #[must_use]
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(FaultInner {
                message: message.into(),
                cause: Some(Arc::new(cause)),
            }),
        }
    }

    /// Create a fault that chains an already shared cause.
    #[must_use]
    pub fn with_shared_cause(message: impl Into<String>, cause: Cause) -> Self {
        Self {
            inner: Arc::new(FaultInner {
                message: message.into(),
                cause: Some(cause),
            }),
        }
    }

    /// A fault carrying the canonical [`UNSPECIFIED`] message.
    #[must_use]
    pub fn unspecified() -> Self {
        Self::new(UNSPECIFIED)
    }

    /// Capture any error as a fault, keeping it as the cause.
    #[must_use]
    pub fn capture(error: impl Error + Send + Sync + 'static) -> Self {
        let message = error.to_string();
        Self::with_cause(message, error)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// The chained cause, if one was attached.
    #[must_use]
    pub fn cause(&self) -> Option<&Cause> {
        self.inner.cause.as_ref()
    }

    /// Whether two handles refer to the same fault.
    #[must_use]
    pub fn same(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl Default for Fault {
    fn default() -> Self {
        Self::unspecified()
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        Self::same(self, other) || self.inner.message == other.inner.message
    }
}

impl Eq for Fault {}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("Fault");
        dbg.field("message", &self.inner.message);
        if let Some(cause) = &self.inner.cause {
            dbg.field("cause", &format_args!("{cause}"));
        }
        dbg.finish()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.message)
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner
            .cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn Error + 'static))
    }
}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
