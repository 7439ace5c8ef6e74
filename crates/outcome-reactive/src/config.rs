#![forbid(unsafe_code)]

//! Subject configuration.

/// What a new subscriber sees at subscription time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Replay {
    /// Deliver the current value once, immediately, whatever variant it is.
    #[default]
    Latest,
    /// Deliver nothing until the next `next` call.
    Never,
}

/// Configuration for a [`Subject`](crate::Subject).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectConfig {
    /// Replay policy for new subscribers.
    pub replay: Replay,
    /// Name used in log fields. Derived subjects extend it.
    pub label: Option<String>,
}

impl SubjectConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn replay(mut self, replay: Replay) -> Self {
        self.replay = replay;
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Configuration for a subject derived from this one by `op`.
    ///
    /// The replay policy is inherited; the label becomes `<label>.<op>`.
    #[must_use]
    pub(crate) fn derived(&self, op: &str) -> Self {
        Self {
            replay: self.replay,
            label: self.label.as_ref().map(|label| format!("{label}.{op}")),
        }
    }

    pub(crate) fn label_or_default(&self) -> &str {
        self.label.as_deref().unwrap_or("subject")
    }
}
