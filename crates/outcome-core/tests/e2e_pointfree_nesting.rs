//! End-to-end use of the point-free helpers on nested values.

use outcome_core::pointfree::{maybe, outcome, result};
use outcome_core::{Failure, Maybe, Outcome, Result};

#[test]
fn e2e_maybe_flatten_over_an_iterator() {
    let nested: [Maybe<Maybe<i32>>; 3] = [
        Maybe::Just(Maybe::Just(1)),
        Maybe::Just(Maybe::Nothing),
        Maybe::Nothing,
    ];
    let flat: Vec<Maybe<i32>> = nested.into_iter().map(maybe::flatten).collect();
    assert_eq!(flat, [Maybe::Just(1), Maybe::Nothing, Maybe::Nothing]);

    let deep: Maybe<Maybe<Maybe<i32>>> = Maybe::Just(Maybe::Just(Maybe::Just(7)));
    assert_eq!(maybe::flatten(deep), Maybe::Just(7));
}

#[test]
fn e2e_result_flatten_keeps_the_inner_failure() {
    let ok: Result<Result<i32>> = Result::Just(Result::Just(1));
    assert_eq!(result::flatten(ok), Result::Just(1));

    let inner: Result<Result<i32>> = Result::Just(Result::Failure(Failure::new("inner")));
    let flat: Vec<Result<i32>> = [inner].into_iter().map(result::flatten).collect();
    assert_eq!(flat[0].error().map(|fault| fault.message()), Some("inner"));
}

#[test]
fn e2e_outcome_flatten_over_every_variant() {
    let nested: Vec<Outcome<Outcome<i32>>> = vec![
        Outcome::Just(Outcome::Just(2)),
        Outcome::Just(Outcome::Nothing),
        Outcome::Failure(Failure::new("outer")),
    ];
    let flat: Vec<Outcome<i32>> = nested.into_iter().map(outcome::flatten).collect();
    assert_eq!(flat[0], Outcome::Just(2));
    assert_eq!(flat[1], Outcome::Nothing);
    assert!(flat[2].is_failure());
}

#[test]
fn e2e_traverse_then_flatten() {
    let halve = |n: i32| {
        if n % 2 == 0 {
            Maybe::Just(n / 2)
        } else {
            Maybe::Nothing
        }
    };
    let values: [Maybe<i32>; 3] = [Maybe::Just(4), Maybe::Just(3), Maybe::Nothing];
    let swapped: Vec<Maybe<Maybe<i32>>> = values.into_iter().map(maybe::traverse(halve)).collect();
    assert_eq!(
        swapped,
        [Maybe::Just(Maybe::Just(2)), Maybe::Nothing, Maybe::Nothing]
    );

    let flat: Vec<Maybe<i32>> = swapped.into_iter().map(maybe::flatten).collect();
    assert_eq!(flat, [Maybe::Just(2), Maybe::Nothing, Maybe::Nothing]);
}
