//! Property-based invariant tests for `Subject`.
//!
//! 1. `version` counts accepted `next` calls and freezes at `complete`.
//! 2. Under `Replay::Latest` an observer sees the current value, then every
//!    update, in order.
//! 3. A mapped subject always holds the source value with its payload mapped.
//! 4. A filtered subject holds the last value that passed, or its seed.
//! 5. `complete` notifies each observer exactly once however often it runs.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use outcome_core::Maybe;
use outcome_reactive::{Observer, Replay, Subject, SubjectConfig};
use proptest::prelude::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    proptest::option::of(any::<i32>()).prop_map(Maybe::from)
}

fn updates_strategy() -> impl Strategy<Value = Vec<Maybe<i32>>> {
    proptest::collection::vec(maybe_strategy(), 0..24)
}

fn is_even(value: &Maybe<i32>) -> bool {
    value.value().is_some_and(|n| n % 2 == 0)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Version counting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn version_counts_accepted_updates(
        initial in maybe_strategy(),
        before in updates_strategy(),
        after in updates_strategy(),
    ) {
        let subject: Subject<Maybe<i32>> = Subject::new(initial);
        for value in &before {
            subject.next(*value);
        }
        prop_assert_eq!(subject.version(), before.len() as u64);

        subject.complete();
        for value in &after {
            subject.next(*value);
        }
        prop_assert_eq!(subject.version(), before.len() as u64);
        prop_assert_eq!(subject.get(), before.last().copied().unwrap_or(initial));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Replay then ordered delivery
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn observer_sees_current_value_then_updates(
        initial in maybe_strategy(),
        updates in updates_strategy(),
    ) {
        let subject: Subject<Maybe<i32>> =
            Subject::with_config(initial, SubjectConfig::new().replay(Replay::Latest));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        subject.subscribe_next(move |value: &Maybe<i32>| sink.borrow_mut().push(*value));

        for value in &updates {
            subject.next(*value);
        }

        let mut expected = vec![initial];
        expected.extend(updates.iter().copied());
        prop_assert_eq!(&*seen.borrow(), &expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Mapped subjects track their source
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mapped_subject_tracks_source(
        initial in maybe_strategy(),
        updates in updates_strategy(),
    ) {
        let source: Subject<Maybe<i32>> = Subject::new(initial);
        let mapped = source.map(|n: i32| n.wrapping_mul(3));
        prop_assert_eq!(mapped.get(), initial.map(|n| n.wrapping_mul(3)));

        for value in &updates {
            source.next(*value);
            prop_assert_eq!(mapped.get(), value.map(|n| n.wrapping_mul(3)));
        }
        prop_assert_eq!(mapped.version(), source.version());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Filtered subjects hold the last passing value
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn filtered_subject_holds_last_passing_value(
        initial in maybe_strategy(),
        updates in updates_strategy(),
    ) {
        let source: Subject<Maybe<i32>> = Subject::new(initial);
        let evens = source.filter(is_even);

        for value in &updates {
            source.next(*value);
        }

        let expected = updates
            .iter()
            .rev()
            .find(|value| is_even(value))
            .copied()
            .unwrap_or(initial);
        prop_assert_eq!(evens.get(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Completion fires once
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn complete_notifies_each_observer_once(
        observers in 1usize..8,
        repeats in 1usize..5,
    ) {
        let subject: Subject<Maybe<i32>> = Subject::of(0);
        let completions = Rc::new(Cell::new(0usize));
        for _ in 0..observers {
            let counter = Rc::clone(&completions);
            subject
                .subscribe(Observer::new().on_complete(move || counter.set(counter.get() + 1)))
                .expect("observer has a complete callback");
        }

        for _ in 0..repeats {
            subject.complete();
        }
        prop_assert_eq!(completions.get(), observers);
        prop_assert_eq!(subject.subscriber_count(), 0);
    }
}
