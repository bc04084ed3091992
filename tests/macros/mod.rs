use outcome_rail::{assert_err, assert_ok, fail, Outcome};

#[test]
fn fail_formats_the_message_into_the_error_side() {
    let denied: Outcome<i32> = fail!("user {} lacks permission", 42);
    assert_eq!(denied.unwrap_err(), "user 42 lacks permission");
}

#[test]
fn fail_fits_the_unit_shape_too() {
    fn check(flag: bool) -> Outcome {
        if !flag {
            return fail!("flag must be set");
        }
        outcome_rail::prelude::ok_unit()
    }

    assert!(check(true).is_ok());
    assert_eq!(check(false).unwrap_err(), "flag must be set");
}

#[test]
fn assert_ok_returns_the_success_value() {
    let value = assert_ok!(Outcome::<i32, &str>::Ok(3));
    assert_eq!(value, 3);
}

#[test]
#[should_panic(expected = "expected Ok, got Err(\"boom\")")]
fn assert_ok_panics_with_the_error_payload() {
    let _ = assert_ok!(Outcome::<i32, &str>::Err("boom"));
}

#[test]
#[should_panic(expected = "seeding fixture failed")]
fn assert_ok_supports_a_custom_message() {
    let _ = assert_ok!(Outcome::<i32, &str>::Err("boom"), "seeding fixture failed");
}

#[test]
fn assert_err_returns_the_error_value() {
    let error = assert_err!(Outcome::<i32, &str>::Err("boom"));
    assert_eq!(error, "boom");
}

#[test]
#[should_panic(expected = "expected Err, got Ok(3)")]
fn assert_err_panics_with_the_success_payload() {
    let _ = assert_err!(Outcome::<i32, &str>::Ok(3));
}
