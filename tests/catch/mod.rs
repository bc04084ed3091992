use outcome_rail::catch::{catch, catch_as};
use outcome_rail::Outcome;
use std::panic::{self, panic_any};

#[derive(Debug, PartialEq)]
struct Overflow(u64);

#[derive(Debug, PartialEq)]
struct Unrelated;

#[test]
fn catch_wraps_a_normal_return_as_ok() {
    let outcome = catch(|| 40 + 2);
    assert_eq!(outcome.unwrap(), 42);
}

#[test]
fn catch_captures_any_panic_payload() {
    let outcome: Outcome<i32, _> = catch(|| panic!("integer overflow"));
    let caught = outcome.unwrap_err();
    assert_eq!(caught.message(), Some("integer overflow"));
    assert_eq!(caught.to_string(), "panic: integer overflow");
}

#[test]
fn catch_reports_non_string_payloads_without_a_message() {
    let outcome: Outcome<i32, _> = catch(|| panic_any(Overflow(9)));
    let caught = outcome.unwrap_err();
    assert_eq!(caught.message(), None);
    assert!(caught.is::<Overflow>());
    assert!(caught.into_payload().downcast_ref::<Overflow>().is_some());
}

#[test]
fn catch_as_captures_only_the_declared_payload_type() {
    let captured = catch_as::<i32, Overflow, _>(|| panic_any(Overflow(9)));
    assert_eq!(captured.unwrap_err(), Overflow(9));
}

#[test]
fn catch_as_lets_foreign_payloads_keep_unwinding() {
    let propagated = panic::catch_unwind(|| {
        let _ = catch_as::<i32, Overflow, _>(|| panic_any(Unrelated));
    });

    let payload = propagated.unwrap_err();
    assert!(payload.downcast_ref::<Unrelated>().is_some());
}

#[test]
fn and_then_catch_chains_and_captures_declared_panics() {
    let halved = Outcome::<i32, Overflow>::Ok(8).and_then_catch(|x| x / 2);
    assert_eq!(halved.unwrap(), 4);

    let blown = Outcome::<i32, Overflow>::Ok(8)
        .and_then_catch(|x| -> i32 { panic_any(Overflow(x as u64)) });
    assert_eq!(blown.unwrap_err(), Overflow(8));
}

#[test]
fn and_then_catch_short_circuits_without_running_the_chain() {
    let mut invoked = false;
    let kept = Outcome::<i32, Overflow>::Err(Overflow(1)).and_then_catch(|x| {
        invoked = true;
        x
    });

    assert!(!invoked);
    assert_eq!(kept.unwrap_err(), Overflow(1));
}

#[test]
fn and_then_catch_lets_foreign_panics_propagate() {
    let propagated = panic::catch_unwind(|| {
        let _ = Outcome::<i32, Overflow>::Ok(1).and_then_catch(|_| -> i32 { panic_any(Unrelated) });
    });

    assert!(propagated.unwrap_err().downcast_ref::<Unrelated>().is_some());
}
