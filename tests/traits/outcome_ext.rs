use maybe_rail::traits::OutcomeExt;
use maybe_rail::Outcome;
use std::cell::Cell;

#[test]
fn map_transforms_success_and_changes_type() {
    let mapped: Outcome<String> = Outcome::ok(12).map(|x| x.to_string());
    assert_eq!(mapped, Outcome::ok("12".to_string()));
}

#[test]
fn map_keeps_identical_failure_message() {
    let calls = Cell::new(0);
    let mapped = Outcome::<i32>::fail("bad input").map(|x| {
        calls.set(calls.get() + 1);
        x.to_string()
    });
    assert_eq!(mapped.error(), "bad input");
    assert_eq!(calls.get(), 0);
}

#[test]
fn on_success_map_matches_map() {
    let via_map = Outcome::ok(3).map(|x| x + 1);
    let via_alias = Outcome::ok(3).on_success_map(|x| x + 1);
    assert_eq!(via_map, via_alias);

    let failed_map = Outcome::<i32>::fail("e").map(|x| x + 1);
    let failed_alias = Outcome::<i32>::fail("e").on_success_map(|x| x + 1);
    assert_eq!(failed_map, failed_alias);
}

#[test]
fn and_then_chains_fallible_steps() {
    fn non_zero(x: i32) -> Outcome<i32> {
        if x == 0 {
            Outcome::fail("zero")
        } else {
            Outcome::ok(x)
        }
    }

    assert_eq!(Outcome::ok(2).and_then(non_zero), Outcome::ok(2));
    assert_eq!(Outcome::ok(0).and_then(non_zero).error(), "zero");
    assert_eq!(Outcome::<i32>::fail("earlier").and_then(non_zero).error(), "earlier");
}

#[test]
fn ensure_passes_accepted_success_through() {
    let kept = Outcome::ok(5).ensure(|x| *x > 0, "must be positive");
    assert_eq!(kept, Outcome::ok(5));
}

#[test]
fn ensure_turns_rejected_success_into_failure() {
    let rejected = Outcome::ok(-1).ensure(|x| *x > 0, "must be positive");
    assert_eq!(rejected, Outcome::fail("must be positive"));
}

#[test]
fn ensure_leaves_failure_untouched() {
    let calls = Cell::new(0);
    let failed = Outcome::<i32>::fail("original").ensure(
        |_| {
            calls.set(calls.get() + 1);
            false
        },
        "replacement",
    );
    assert_eq!(failed.error(), "original");
    assert_eq!(calls.get(), 0);
}

#[test]
fn on_success_taps_once_and_returns_input() {
    let calls = Cell::new(0);
    let ok = Outcome::ok("v").on_success(|v| {
        assert_eq!(*v, "v");
        calls.set(calls.get() + 1);
    });
    assert_eq!(ok, Outcome::ok("v"));
    assert_eq!(calls.get(), 1);

    let failed = Outcome::<&str>::fail("e").on_success(|_| calls.set(calls.get() + 1));
    assert_eq!(failed, Outcome::fail("e"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn on_failure_receives_error_message() {
    let seen = Cell::new(None);
    let failed = Outcome::<u8>::fail("timeout").on_failure(|e| seen.set(Some(e.len())));
    assert_eq!(failed, Outcome::fail("timeout"));
    assert_eq!(seen.get(), Some("timeout".len()));

    let calls = Cell::new(0);
    let ok = Outcome::ok(1u8).on_failure(|_| calls.set(calls.get() + 1));
    assert_eq!(ok, Outcome::ok(1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn on_both_receives_whole_outcome() {
    let describe = |o: Outcome<i32>| o.as_error().map(str::to_owned);
    assert_eq!(Outcome::ok(1).on_both(describe), None);
    assert_eq!(Outcome::fail("x").on_both(describe), Some("x".to_string()));
}
