#![forbid(unsafe_code)]

//! Runtime discriminants and the narrowing predicate.
//!
//! Every value in this crate carries exactly one [`Tag`]. A [`Kind`] names a
//! *set* of tags: a terminal variant, one of the two views, or the full
//! outcome union. [`Variant::isa`] is the membership test, and it agrees with
//! static narrowing: for any value `x` and target type `N`,
//! `x.isa(N::KIND)` holds exactly when `N::try_from(x)` succeeds.
//!
//! # Membership table
//!
//! | Kind      | Just | Nothing | Failure |
//! |-----------|------|---------|---------|
//! | `Just`    | yes  |         |         |
//! | `Nothing` |      | yes     |         |
//! | `Failure` |      |         | yes     |
//! | `Maybe`   | yes  | yes     |         |
//! | `Result`  | yes  |         | yes     |
//! | `Outcome` | yes  | yes     | yes     |

use std::fmt;

/// The runtime shape of a value. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Just,
    Nothing,
    Failure,
}

impl Tag {
    /// All tags, in declaration order.
    pub const ALL: [Tag; 3] = [Tag::Just, Tag::Nothing, Tag::Failure];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Just => "Just",
            Self::Nothing => "Nothing",
            Self::Failure => "Failure",
        }
    }

    /// The singleton kind for this tag.
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Self::Just => Kind::Just,
            Self::Nothing => Kind::Nothing,
            Self::Failure => Kind::Failure,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of tags: a terminal variant, a view, or the full union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Just,
    Nothing,
    Failure,
    Maybe,
    Result,
    Outcome,
}

impl Kind {
    /// Every kind, terminals first.
    pub const ALL: [Kind; 6] = [
        Kind::Just,
        Kind::Nothing,
        Kind::Failure,
        Kind::Maybe,
        Kind::Result,
        Kind::Outcome,
    ];

    /// Whether a value tagged `tag` belongs to this kind.
    #[must_use]
    pub const fn admits(self, tag: Tag) -> bool {
        matches!(
            (self, tag),
            (Self::Just, Tag::Just)
                | (Self::Nothing, Tag::Nothing)
                | (Self::Failure, Tag::Failure)
                | (Self::Maybe, Tag::Just | Tag::Nothing)
                | (Self::Result, Tag::Just | Tag::Failure)
                | (Self::Outcome, _)
        )
    }

    /// The tags this kind admits, in [`Tag::ALL`] order.
    pub fn tags(self) -> impl Iterator<Item = Tag> {
        Tag::ALL.into_iter().filter(move |tag| self.admits(*tag))
    }

    /// Whether every tag admitted by `self` is admitted by `other`.
    #[must_use]
    pub fn is_within(self, other: Kind) -> bool {
        self.tags().all(|tag| other.admits(tag))
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Just => "Just",
            Self::Nothing => "Nothing",
            Self::Failure => "Failure",
            Self::Maybe => "Maybe",
            Self::Result => "Result",
            Self::Outcome => "Outcome",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared surface of every variant and view type.
pub trait Variant {
    /// The set of tags a value of this type may carry.
    const KIND: Kind;

    /// The tag of this particular value.
    fn tag(&self) -> Tag;

    /// Name of the variant actually held (`"Just"`, `"Nothing"`, `"Failure"`).
    fn name(&self) -> &'static str {
        self.tag().name()
    }

    /// Narrowing predicate: is this value a member of `kind`?
    fn isa(&self, kind: Kind) -> bool {
        kind.admits(self.tag())
    }
}
