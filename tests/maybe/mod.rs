use maybe_rail::{ContractViolation, Maybe};
use std::cell::Cell;

mod iter;

#[test]
fn some_and_none_helpers_behave_as_expected() {
    let present = Maybe::some(5);
    assert!(present.has_value());
    assert!(!present.is_absent());
    assert_eq!(present.value(), &5);
    assert_eq!(present.into_value(), 5);

    let absent: Maybe<i32> = Maybe::none();
    assert!(!absent.has_value());
    assert!(absent.is_absent());
    assert_eq!(absent, Maybe::Absent);
    assert_eq!(Maybe::<i32>::default(), Maybe::none());
}

#[test]
#[should_panic(expected = "Maybe does not have a value")]
fn value_on_absent_panics() {
    let absent: Maybe<String> = Maybe::none();
    let _ = absent.value();
}

#[test]
#[should_panic(expected = "Maybe does not have a value")]
fn into_value_on_absent_panics() {
    let _ = Maybe::<u8>::none().into_value();
}

#[test]
#[should_panic(expected = "cannot create a present Maybe from a null value")]
fn some_checked_rejects_null_source() {
    let _ = Maybe::<&str>::some_checked(None);
}

#[test]
fn some_checked_accepts_present_source() {
    assert_eq!(Maybe::some_checked(Some('x')), Maybe::some('x'));
}

#[test]
fn try_value_reports_absence_without_panicking() {
    assert_eq!(Maybe::some("a").try_value(), Ok(&"a"));
    assert_eq!(Maybe::<&str>::none().try_value(), Err(ContractViolation::AbsentValue));
}

#[test]
fn value_or_default_only_uses_default_when_absent() {
    assert_eq!(Maybe::some(3).value_or_default(9), 3);
    assert_eq!(Maybe::none().value_or_default(9), 9);
}

#[test]
fn value_or_else_is_lazy() {
    let mut calls = 0;
    let value = Maybe::some(1).value_or_else(|| {
        calls += 1;
        0
    });
    assert_eq!(value, 1);
    assert_eq!(calls, 0);

    let fallback = Maybe::none().value_or_else(|| {
        calls += 1;
        7
    });
    assert_eq!(fallback, 7);
    assert_eq!(calls, 1);
}

#[derive(Debug, PartialEq)]
enum LookupError {
    NotFound(&'static str),
}

fn find_port(config: Maybe<u16>) -> Result<u16, LookupError> {
    let port = config.value_or_throw(LookupError::NotFound("port"))?;
    Ok(port + 1)
}

#[test]
fn value_or_throw_propagates_custom_error() {
    assert_eq!(find_port(Maybe::some(8079)), Ok(8080));
    assert_eq!(find_port(Maybe::none()), Err(LookupError::NotFound("port")));
}

#[test]
fn match_with_calls_exactly_one_branch() {
    let present = Maybe::some(4).match_with(|v| v * 10, || -1);
    assert_eq!(present, 40);

    let absent = Maybe::<i32>::none().match_with(|v| v * 10, || -1);
    assert_eq!(absent, -1);
}

#[test]
fn match_ref_side_effect_form_keeps_container() {
    let some_calls = Cell::new(0);
    let none_calls = Cell::new(0);

    let present = Maybe::some("ready");
    present.match_ref(|_| some_calls.set(some_calls.get() + 1), || none_calls.set(none_calls.get() + 1));
    assert_eq!((some_calls.get(), none_calls.get()), (1, 0));

    let absent: Maybe<&str> = Maybe::none();
    absent.match_ref(|_| some_calls.set(some_calls.get() + 1), || none_calls.set(none_calls.get() + 1));
    assert_eq!((some_calls.get(), none_calls.get()), (1, 1));

    assert!(present.has_value());
}

#[test]
fn match_ref_passes_borrowed_value() {
    let name = Maybe::some(String::from("ana"));
    let greeting = name.match_ref(|n| format!("hi {n}"), || "hi".to_string());
    assert_eq!(greeting, "hi ana");
    assert_eq!(name.into_value(), "ana");
}

#[test]
fn if_some_runs_only_when_present() {
    let mut seen = Vec::new();
    Maybe::some(1).if_some(|v| seen.push(*v));
    Maybe::<i32>::none().if_some(|v| seen.push(*v));
    assert_eq!(seen, vec![1]);
}

#[test]
fn map_skips_transform_when_absent() {
    let mut calls = 0;
    let mapped = Maybe::<i32>::none().map(|v| {
        calls += 1;
        v + 1
    });
    assert_eq!(mapped, Maybe::none());
    assert_eq!(calls, 0);

    assert_eq!(Maybe::some(1).map(|v| v + 1), Maybe::some(2));
}

#[test]
fn and_then_flattens_and_short_circuits() {
    fn non_empty(s: &str) -> Maybe<&str> {
        if s.is_empty() {
            Maybe::none()
        } else {
            Maybe::some(s)
        }
    }

    assert_eq!(Maybe::some("abc").and_then(non_empty), Maybe::some("abc"));
    assert_eq!(Maybe::some("").and_then(non_empty), Maybe::none());

    let mut calls = 0;
    let chained = Maybe::some("")
        .and_then(non_empty)
        .and_then(|s| {
            calls += 1;
            Maybe::some(s.len())
        });
    assert!(chained.is_absent());
    assert_eq!(calls, 0);
}

#[test]
fn equality_compares_presence_and_value() {
    assert_eq!(Maybe::some(1), Maybe::some(1));
    assert_ne!(Maybe::some(1), Maybe::some(2));
    assert_ne!(Maybe::some(1), Maybe::none());
    assert_eq!(Maybe::<i32>::none(), Maybe::none());
}

#[test]
fn contains_compares_against_bare_value() {
    assert!(Maybe::some(10).contains(&10));
    assert!(!Maybe::some(10).contains(&11));
    assert!(!Maybe::<i32>::none().contains(&10));

    let owned = Maybe::some(String::from("ferris"));
    assert!(owned.contains(&"ferris"));
}

#[test]
fn option_conversions_preserve_state() {
    assert_eq!(Maybe::from(Some(2)), Maybe::some(2));
    assert_eq!(Maybe::<i32>::from(None), Maybe::none());
    let option: Option<i32> = Maybe::some(2).into();
    assert_eq!(option, Some(2));
    assert_eq!(Maybe::<i32>::none().into_option(), None);
}

#[test]
fn as_ref_borrows_held_value() {
    let name = Maybe::some(String::from("ana"));
    let len = name.as_ref().map(|n| n.len());
    assert_eq!(len, Maybe::some(3));
    assert!(name.has_value());
}

#[test]
fn ordering_places_absent_first() {
    assert!(Maybe::none() < Maybe::some(0));
    assert!(Maybe::some(1) < Maybe::some(2));
}

#[cfg(feature = "serde")]
#[test]
fn maybe_serde_round_trip() {
    let present = Maybe::some(5);
    let json = serde_json::to_string(&present).unwrap();
    assert_eq!(json, r#"{"Present":5}"#);
    assert_eq!(serde_json::from_str::<Maybe<i32>>(&json).unwrap(), present);

    let absent: Maybe<i32> = Maybe::none();
    let json = serde_json::to_string(&absent).unwrap();
    assert_eq!(json, r#""Absent""#);
    assert_eq!(serde_json::from_str::<Maybe<i32>>(&json).unwrap(), absent);
}
