//! Property-based invariant tests for narrowing, widening and matching.
//!
//! 1. `isa(N::KIND)` agrees with `N::try_from` for every target type
//! 2. Widening to `Outcome` then narrowing back is lossless
//! 3. A failed narrowing hands the original value back
//! 4. `match_with` dispatches on the tag the value reports
//! 5. `Cases::run` succeeds iff every case the view admits is handled
//! 6. A rejected `Cases` table runs no handler
//! 7. `Kind::is_within` agrees with `admits` on every tag

use std::cell::Cell;

use outcome_core::{Cases, Failure, Just, Kind, MatchError, Maybe, Nothing, Outcome, Tag, Variant};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn arb_outcome() -> impl Strategy<Value = Outcome<i32>> {
    (0u8..3, any::<i32>(), "[a-z]{1,8}").prop_map(|(tag, n, message)| match tag {
        0 => Outcome::Just(n),
        1 => Outcome::Nothing,
        _ => Outcome::Failure(Failure::new(message)),
    })
}

fn arb_maybe() -> impl Strategy<Value = Maybe<i32>> {
    proptest::option::of(any::<i32>()).prop_map(Maybe::from)
}

fn arb_kind() -> impl Strategy<Value = Kind> {
    (0..Kind::ALL.len()).prop_map(|i| Kind::ALL[i])
}

/// Run `cases` against a value of the static view `view`, built from `outcome`.
///
/// Returns `None` when `outcome` cannot be narrowed to `view`.
fn run_as(
    view: Kind,
    outcome: Outcome<i32>,
    cases: Cases<'_, i32, Tag>,
) -> Option<Result<Tag, MatchError>> {
    match view {
        Kind::Just => Just::try_from(outcome).ok().map(|v| cases.run(v)),
        Kind::Nothing => Nothing::try_from(outcome).ok().map(|v| cases.run(v)),
        Kind::Failure => Failure::try_from(outcome).ok().map(|v| cases.run(v)),
        Kind::Maybe => Maybe::try_from(outcome).ok().map(|v| cases.run(v)),
        Kind::Result => outcome_core::Result::try_from(outcome)
            .ok()
            .map(|v| cases.run(v)),
        Kind::Outcome => Some(cases.run(outcome)),
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. isa agrees with TryFrom
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn isa_agrees_with_try_from(o in arb_outcome()) {
        prop_assert_eq!(o.isa(Kind::Just), Just::try_from(o.clone()).is_ok());
        prop_assert_eq!(o.isa(Kind::Nothing), Nothing::try_from(o.clone()).is_ok());
        prop_assert_eq!(o.isa(Kind::Failure), Failure::try_from(o.clone()).is_ok());
        prop_assert_eq!(o.isa(Kind::Maybe), Maybe::try_from(o.clone()).is_ok());
        prop_assert_eq!(o.isa(Kind::Result), outcome_core::Result::try_from(o.clone()).is_ok());
        prop_assert!(o.isa(Kind::Outcome));
    }

    #[test]
    fn isa_agrees_with_try_from_on_maybe(m in arb_maybe()) {
        prop_assert_eq!(m.isa(Kind::Just), Just::try_from(m).is_ok());
        prop_assert_eq!(m.isa(Kind::Nothing), Nothing::try_from(m).is_ok());
        prop_assert_eq!(m.isa(Kind::Result), outcome_core::Result::try_from(m).is_ok());
        prop_assert!(m.isa(Kind::Maybe));
        prop_assert!(!m.isa(Kind::Failure));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Widen then narrow
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn widening_round_trips(m in arb_maybe()) {
        let widened = m.widen();
        prop_assert_eq!(widened.tag(), m.tag());
        prop_assert_eq!(Maybe::try_from(widened), Ok(m));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Failed narrowing returns the value
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn failed_narrowing_returns_the_original(o in arb_outcome()) {
        if let Err(back) = Just::try_from(o.clone()) {
            prop_assert_eq!(back, o);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. match_with dispatch
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn match_with_follows_the_tag(o in arb_outcome()) {
        let tag = o.tag();
        let dispatched = o.match_with(|_| Tag::Just, || Tag::Nothing, |_| Tag::Failure);
        prop_assert_eq!(dispatched, tag);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5 & 6. Cases exhaustiveness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cases_run_iff_exhaustive(
        o in arb_outcome(),
        view in arb_kind(),
        with_just in any::<bool>(),
        with_nothing in any::<bool>(),
        with_failure in any::<bool>(),
    ) {
        let ran = Cell::new(false);
        let mut cases = Cases::<i32, Tag>::new();
        if with_just {
            cases = cases.just(|_| { ran.set(true); Tag::Just });
        }
        if with_nothing {
            cases = cases.nothing(|| { ran.set(true); Tag::Nothing });
        }
        if with_failure {
            cases = cases.failure(|_| { ran.set(true); Tag::Failure });
        }

        let handled = |tag| match tag {
            Tag::Just => with_just,
            Tag::Nothing => with_nothing,
            Tag::Failure => with_failure,
        };
        let exhaustive = view.tags().all(handled);
        let tag = o.tag();

        if let Some(outcome) = run_as(view, o, cases) {
            match outcome {
                Ok(dispatched) => {
                    prop_assert!(exhaustive);
                    prop_assert_eq!(dispatched, tag);
                    prop_assert!(ran.get());
                }
                Err(MatchError::MissingCase { view: reported, case }) => {
                    prop_assert!(!exhaustive);
                    prop_assert_eq!(reported, view);
                    prop_assert!(!handled(case));
                    prop_assert!(!ran.get());
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Kind containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn is_within_matches_admits(a in arb_kind(), b in arb_kind()) {
        let expected = Tag::ALL.iter().all(|tag| !a.admits(*tag) || b.admits(*tag));
        prop_assert_eq!(a.is_within(b), expected);
        prop_assert!(a.is_within(Kind::Outcome));
    }
}
