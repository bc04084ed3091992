use outcome_rail::{Failure, Outcome, Success};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<H: Hash>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn outcomes_in_the_same_state_compare_by_payload() {
    assert_eq!(Outcome::<i32, &str>::Ok(1), Outcome::<i32, &str>::Ok(1));
    assert_ne!(Outcome::<i32, &str>::Ok(1), Outcome::<i32, &str>::Ok(2));
    assert_eq!(Outcome::<i32, &str>::Err("a"), Outcome::<i32, &str>::Err("a"));
    assert_ne!(Outcome::<i32, &str>::Err("a"), Outcome::<i32, &str>::Err("b"));
}

#[test]
fn outcomes_in_different_states_never_compare_equal() {
    let ok: Outcome<&str, &str> = Outcome::Ok("x");
    let err: Outcome<&str, &str> = Outcome::Err("x");
    assert_ne!(ok, err);
}

#[test]
fn absent_payloads_compare_equal_when_both_absent() {
    let left: Outcome<Option<i32>, &str> = Outcome::Ok(None);
    let right: Outcome<Option<i32>, &str> = Outcome::Ok(None);
    assert_eq!(left, right);
    assert_ne!(left, Outcome::<Option<i32>, &str>::Ok(Some(1)));
}

#[test]
fn outcome_equals_the_matching_wrapper_only() {
    let ok: Outcome<i32, &str> = Outcome::Ok(3);
    assert_eq!(ok, Success(3));
    assert_ne!(ok, Success(4));
    assert_ne!(ok, Failure("boom"));

    let err: Outcome<i32, &str> = Outcome::Err("boom");
    assert_eq!(err, Failure("boom"));
    assert_ne!(err, Failure("other"));
    assert_ne!(err, Success(3));
}

#[test]
fn wrapper_equality_is_symmetric() {
    let ok: Outcome<i32, &str> = Outcome::Ok(3);
    assert_eq!(Success(3), ok);

    let err: Outcome<i32, &str> = Outcome::Err("boom");
    assert_eq!(Failure("boom"), err);
}

#[test]
fn hash_includes_the_state_tag() {
    let ok: Outcome<&str, &str> = Outcome::Ok("x");
    let err: Outcome<&str, &str> = Outcome::Err("x");
    assert_ne!(hash_of(&ok), hash_of(&err));
}

#[test]
fn hash_is_a_pure_function_of_state_and_payload() {
    let a: Outcome<&str, i32> = Outcome::Ok("x");
    let b: Outcome<&str, i32> = Outcome::Ok("x");
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn ordering_places_ok_before_err() {
    let ok: Outcome<i32, i32> = Outcome::Ok(100);
    let err: Outcome<i32, i32> = Outcome::Err(0);
    assert!(ok < err);
    assert!(Outcome::<i32, i32>::Ok(1) < Outcome::<i32, i32>::Ok(2));
}

#[cfg(feature = "serde")]
mod serde_round_trips {
    use outcome_rail::{Outcome, Unit};

    #[test]
    fn both_states_round_trip_through_json() {
        let ok: Outcome<i32, String> = Outcome::Ok(3);
        let serialized = serde_json::to_string(&ok).unwrap();
        let deserialized: Outcome<i32, String> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(ok, deserialized);

        let err: Outcome<i32, String> = Outcome::Err("boom".to_string());
        let serialized = serde_json::to_string(&err).unwrap();
        let deserialized: Outcome<i32, String> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn absent_payloads_round_trip() {
        let absent: Outcome<Option<i32>, String> = Outcome::Ok(None);
        let serialized = serde_json::to_string(&absent).unwrap();
        let deserialized: Outcome<Option<i32>, String> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(absent, deserialized);
    }

    #[test]
    fn unit_outcomes_round_trip() {
        let done: Outcome = Outcome::Ok(Unit);
        let serialized = serde_json::to_string(&done).unwrap();
        let deserialized: Outcome = serde_json::from_str(&serialized).unwrap();
        assert_eq!(done, deserialized);
    }
}
