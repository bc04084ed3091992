use outcome_rail::Outcome;
use std::panic;

#[test]
fn unwrap_returns_the_success_value() {
    let ok: Outcome<i32, &str> = Outcome::Ok(0);
    assert_eq!(ok.unwrap(), 0);
}

#[test]
#[should_panic(expected = "called `Outcome::unwrap()` on an `Err` value: \"boom\"")]
fn unwrap_on_a_faulted_outcome_panics_with_the_error_embedded() {
    let err: Outcome<i32, &str> = Outcome::Err("boom");
    let _ = err.unwrap();
}

#[test]
fn unwrap_err_returns_the_error_value() {
    let err: Outcome<i32, &str> = Outcome::Err("boom");
    assert_eq!(err.unwrap_err(), "boom");
}

#[test]
#[should_panic(expected = "called `Outcome::unwrap_err()` on an `Ok` value: 7")]
fn unwrap_err_on_an_ok_outcome_panics_with_the_value_embedded() {
    let ok: Outcome<i32, &str> = Outcome::Ok(7);
    let _ = ok.unwrap_err();
}

#[test]
fn unwrap_or_falls_back_only_on_error() {
    assert_eq!(Outcome::<i32, &str>::Ok(0).unwrap_or(-1), 0);
    assert_eq!(Outcome::<i32, &str>::Err("err").unwrap_or(0), 0);
}

#[test]
fn unwrap_or_else_computes_the_fallback_from_the_error() {
    assert_eq!(Outcome::<i32, &str>::Ok(0).unwrap_or_else(|_| -1), 0);

    let computed = Outcome::<String, &str>::Err("err").unwrap_or_else(|e| format!("computed {e}"));
    assert_eq!(computed, "computed err");
}

#[test]
fn unwrap_or_default_uses_the_type_default() {
    assert_eq!(Outcome::<i32, &str>::Err("err").unwrap_or_default(), 0);
    assert_eq!(Outcome::<String, &str>::Err("err").unwrap_or_default(), "");
}

#[test]
fn expect_returns_the_success_value() {
    let ok: Outcome<i32, &str> = Outcome::Ok(3);
    assert_eq!(ok.expect("must hold a value"), 3);
}

#[test]
fn expect_panics_with_exactly_the_caller_message() {
    let result = panic::catch_unwind(|| {
        let err: Outcome<i32, &str> = Outcome::Err("boom");
        err.expect("config must parse")
    });

    let payload = result.unwrap_err();
    let message = payload.downcast_ref::<String>().expect("formatted panic payload");
    assert_eq!(message, "config must parse");
}

#[test]
fn expect_err_panics_with_exactly_the_caller_message() {
    let result = panic::catch_unwind(|| {
        let ok: Outcome<i32, &str> = Outcome::Ok(3);
        ok.expect_err("wanted the failure branch")
    });

    let payload = result.unwrap_err();
    let message = payload.downcast_ref::<String>().expect("formatted panic payload");
    assert_eq!(message, "wanted the failure branch");
}

#[test]
fn expect_err_returns_the_error_value() {
    let err: Outcome<i32, &str> = Outcome::Err("boom");
    assert_eq!(err.expect_err("should be faulted"), "boom");
}
