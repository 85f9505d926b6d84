//! Integration tests for moving values between the two families.
//!
//! Covers `flatten`, `transpose` in both directions, `combine`, and
//! `from_fallible`, plus the end-to-end scenarios that exercise several
//! combinators together.

use std::cell::Cell;
use std::fmt;

use maybe_outcome::combine;
use maybe_outcome::optional::{self, Optional, none, some};
use maybe_outcome::outcome::{self, Outcome, err, from_fallible, ok};
use rstest::rstest;

#[derive(Debug, PartialEq, Eq)]
struct CustomError(&'static str);

impl fmt::Display for CustomError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "custom error: {}", self.0)
    }
}

impl std::error::Error for CustomError {}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn scenario_map_present() {
    assert_eq!(some(42).map(|x| x * 2), some(84));
}

#[rstest]
fn scenario_unwrap_or_on_absent() {
    assert_eq!(none().unwrap_or(7), 7);
}

#[rstest]
fn scenario_map_err_length() {
    let failure: Outcome<i32, &str> = err("boom");
    assert_eq!(failure.map_err(str::len), err(4));
}

#[rstest]
fn scenario_combine_preserves_failure_order() {
    assert_eq!(
        combine!(ok(1), err("e1"), ok(2), err("e2")),
        err(vec!["e1", "e2"])
    );
}

#[rstest]
fn scenario_transpose_success_of_optional() {
    let empty: Outcome<Optional<i32>, &str> = ok(none());
    assert_eq!(outcome::transpose(empty), none());

    let full: Outcome<Optional<i32>, &str> = ok(some(5));
    assert_eq!(outcome::transpose(full), some(ok(5)));
}

#[rstest]
fn scenario_or_throw() {
    assert_eq!(
        none::<i32>().or_throw(CustomError("x")),
        Err(CustomError("x"))
    );
    assert_eq!(some(1).or_throw(CustomError("anything")), Ok(some(1)));
}

// =============================================================================
// Flatten
// =============================================================================

#[rstest]
#[case(some(some(1)), some(1))]
#[case(some(none()), none())]
#[case(none(), none())]
fn optional_flatten_table(#[case] nested: Optional<Optional<i32>>, #[case] expected: Optional<i32>) {
    assert_eq!(optional::flatten(nested), expected);
}

#[rstest]
#[case(ok(ok(1)), ok(1))]
#[case(ok(err("inner")), err("inner"))]
#[case(err("outer"), err("outer"))]
fn outcome_flatten_table(
    #[case] nested: Outcome<Outcome<i32, &str>, &str>,
    #[case] expected: Outcome<i32, &str>,
) {
    assert_eq!(nested.flatten(), expected);
}

// =============================================================================
// Transpose
// =============================================================================

#[rstest]
#[case(some(ok(1)), ok(some(1)))]
#[case(some(err("e")), err("e"))]
#[case(none(), ok(none()))]
fn optional_transpose_table(
    #[case] value: Optional<Outcome<i32, &str>>,
    #[case] expected: Outcome<Optional<i32>, &str>,
) {
    assert_eq!(optional::transpose(value), expected);
}

#[rstest]
#[case(ok(some(1)), some(ok(1)))]
#[case(ok(none()), none())]
#[case(err("e"), some(err("e")))]
fn outcome_transpose_table(
    #[case] value: Outcome<Optional<i32>, &str>,
    #[case] expected: Optional<Outcome<i32, &str>>,
) {
    assert_eq!(value.transpose(), expected);
}

#[rstest]
#[case(some(ok(1)))]
#[case(some(err("e")))]
#[case(none())]
fn transpose_round_trip_from_optional(#[case] value: Optional<Outcome<i32, &str>>) {
    assert_eq!(value.transpose().transpose(), value);
}

// =============================================================================
// Combine
// =============================================================================

#[rstest]
fn combine_all_success_is_true() {
    assert_eq!(outcome::combine([ok::<_, &str>(1), ok(2), ok(3)]), ok(true));
}

#[rstest]
fn combine_failure_list_is_never_empty() {
    let verdict = outcome::combine(vec![ok(1), err("only")]);
    let errors = verdict.err().unwrap().unwrap();
    assert_eq!(errors, vec!["only"]);
}

#[rstest]
fn combine_accepts_any_iterator() {
    let verdict = outcome::combine((1..=4).map(|n| if n % 2 == 0 { err(n) } else { ok(n) }));
    assert_eq!(verdict, err(vec![2, 4]));
}

#[rstest]
fn combine_macro_without_arguments_is_true() {
    let verdict: Outcome<bool, Vec<&str>> = combine!();
    assert_eq!(verdict, ok(true));
}

// =============================================================================
// From Fallible
// =============================================================================

#[rstest]
fn from_fallible_passes_caught_error_to_handler() {
    let seen = Cell::new(None);
    let outcome: Outcome<i32, &str> = from_fallible(
        || Err(CustomError("disk full")),
        |error: CustomError| {
            seen.set(Some(error.0));
            "storage"
        },
    );
    assert_eq!(outcome, err("storage"));
    assert_eq!(seen.get(), Some("disk full"));
}

#[rstest]
fn from_fallible_identity_handler_keeps_error() {
    let outcome = from_fallible(|| "x".parse::<u8>(), |error| error);
    assert!(outcome.is_err_and(|error| error.to_string().contains("invalid digit")));
}

#[rstest]
fn from_fallible_success_does_not_call_handler() {
    let calls = Cell::new(0);
    let outcome: Outcome<u8, ()> = from_fallible(
        || "8".parse::<u8>(),
        |_| calls.set(calls.get() + 1),
    );
    assert_eq!(outcome, ok(8));
    assert_eq!(calls.get(), 0);
}
