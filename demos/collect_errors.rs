//! Error Collection Example
//!
//! Shows how the combine family aggregates many outcomes into one:
//! every failure is reported at once instead of stopping at the first.
//!
//! Run with: `cargo run --example collect_errors`

use outcome_rail::combine::{combine, combine_unit};
use outcome_rail::prelude::*;

struct SignupForm {
    username: &'static str,
    email: &'static str,
    age: i32,
}

fn check_username(form: &SignupForm) -> Outcome {
    err_if(form.username.len() < 2, Unit, "username is too short".to_string())
}

fn check_email(form: &SignupForm) -> Outcome {
    ok_if_with(
        form.email.contains('@'),
        || Unit,
        || format!("'{}' is not an email address", form.email),
    )
}

fn check_age(form: &SignupForm) -> Outcome {
    ok_if_with(
        (13..=120).contains(&form.age),
        || Unit,
        || format!("age {} is out of range", form.age),
    )
}

fn validate(form: &SignupForm) -> Outcome {
    combine_unit(
        [check_username(form), check_email(form), check_age(form)],
        "\n  - ",
    )
}

fn main() {
    println!("=== outcome-rail error collection ===\n");

    let bad_form = SignupForm {
        username: "x",
        email: "not-an-email",
        age: 300,
    };

    match validate(&bad_form).into_result() {
        Ok(_) => println!("signup accepted"),
        Err(report) => println!("signup rejected:\n  - {report}"),
    }

    // combine keeps every parsed value when nothing fails.
    let parsed = combine(["1", "2", "3"].map(|s| {
        Outcome::from_result(s.parse::<i32>().map_err(|e| e.to_string()))
    }));
    println!("\nparsed batch: {:?}", parsed.unwrap());
}
