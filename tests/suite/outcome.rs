use fake::{Fake, Faker};
use serde_json::{json, Value};
use weather_report::{Outcome, CAUSE_KEY, TYPE_KEY};

#[test]
fn map_over_a_success_applies_the_function() {
    // Arrange
    let outcome = Outcome::<i32>::success(20);
    // Act
    let mapped = outcome.map(|value| value * 2);
    // Assert
    assert_eq!(Outcome::success(40), mapped);
}

#[test]
fn map_with_identity_leaves_a_success_untouched() {
    // Arrange
    let value: String = Faker.fake();
    let outcome = Outcome::<String>::success(value.clone());
    // Act
    let mapped = outcome.map(|value| value);
    // Assert
    assert_eq!(Outcome::success(value), mapped);
}

#[test]
fn map_passes_a_failure_through_unchanged() {
    // Arrange
    let outcome = Outcome::<i32>::failure(json!("Timeout"));
    // Act
    let mapped = outcome.map(|value| value * 2);
    // Assert
    assert_eq!(Outcome::failure(json!("Timeout")), mapped);
}

#[test]
fn map_err_with_identity_leaves_a_failure_untouched() {
    // Arrange
    let error: String = Faker.fake();
    let outcome = Outcome::<(), String>::failure(error.clone());
    // Act
    let mapped = outcome.map_err(|error| error);
    // Assert
    assert_eq!(Outcome::failure(error), mapped);
}

#[test]
fn map_err_passes_a_success_through_unchanged() {
    // Arrange
    let outcome = Outcome::<i32, String>::success(7);
    // Act
    let mapped = outcome.map_err(|error| format!("wrapped: {}", error));
    // Assert
    assert_eq!(Outcome::success(7), mapped);
}

#[test]
fn and_then_is_associative() {
    // Arrange
    let double = |value: i32| Outcome::<i32>::success(value * 2);
    let describe = |value: i32| Outcome::<String>::success(format!("value is {}", value));
    let outcome = Outcome::<i32>::success(21);
    // Act
    let left = outcome.clone().and_then(double).and_then(describe);
    let right = outcome.and_then(|value| double(value).and_then(describe));
    // Assert
    assert_eq!(left, right);
}

#[test]
fn and_then_short_circuits_both_sides_of_the_law_on_failure() {
    // Arrange
    let double = |value: i32| Outcome::<i32>::success(value * 2);
    let describe = |value: i32| Outcome::<String>::success(format!("value is {}", value));
    let outcome = Outcome::<i32>::failure(json!({"type": "Timeout", "ms": 1000}));
    // Act
    let left = outcome.clone().and_then(double).and_then(describe);
    let right = outcome.and_then(|value| double(value).and_then(describe));
    // Assert
    assert_eq!(left, right);
    assert!(left.is_failure());
}

#[test]
fn and_then_does_not_nest_outcomes() {
    // Arrange
    let outcome = Outcome::<i32>::success(5);
    // Act
    let chained = outcome.and_then(|value| Outcome::success(value + 1));
    // Assert
    assert_eq!(Outcome::success(6), chained);
}

#[test]
fn unwrap_returns_the_value_of_a_success() {
    // Arrange
    let outcome = Outcome::<i32>::success(42);
    // Act
    let value = outcome.unwrap();
    // Assert
    assert_eq!(42, value);
}

#[test]
#[should_panic(expected = "called `Outcome::unwrap` on a failure")]
fn unwrap_panics_with_the_error_of_a_failure() {
    // Arrange
    let outcome = Outcome::<i32>::failure(json!("Timeout"));
    // Act
    outcome.unwrap();
}

#[test]
fn unwrap_or_returns_the_value_of_a_success() {
    // Arrange
    let outcome = Outcome::<i32>::success(42);
    // Act
    let value = outcome.unwrap_or(0);
    // Assert
    assert_eq!(42, value);
}

#[test]
fn unwrap_or_discards_the_error_of_a_failure() {
    // Arrange
    let outcome = Outcome::<i32>::failure(json!("Timeout"));
    // Act
    let value = outcome.unwrap_or(0);
    // Assert
    assert_eq!(0, value);
}

#[test]
fn a_bare_tag_failure_carries_the_tag_as_its_payload() {
    // Arrange
    let outcome = Outcome::<()>::failure(json!("Timeout"));
    // Act
    let error = outcome.error();
    // Assert
    assert_eq!(Some(json!("Timeout")), error);
}

#[test]
fn a_tagged_failure_merges_the_tag_with_its_fields() {
    // Arrange
    let outcome =
        Outcome::<()>::failure_with("Timeout", [("ms".to_string(), json!(1000))]);
    // Act
    let error = outcome.error();
    // Assert
    assert_eq!(Some(json!({"type": "Timeout", "ms": 1000})), error);
}

#[test]
fn the_discriminant_wins_over_a_caller_field_named_type() {
    // Arrange
    let outcome = Outcome::<()>::failure_with(
        "Timeout",
        [
            (TYPE_KEY.to_string(), json!("Shadow")),
            ("ms".to_string(), json!(1000)),
        ],
    );
    // Act
    let error = outcome.error().expect("expected a failure payload");
    // Assert
    assert_eq!(Some(&json!("Timeout")), error.get(TYPE_KEY));
    assert_eq!(Some(&json!(1000)), error.get("ms"));
}

#[test]
fn a_cause_fragment_carries_the_prior_failure_payload() {
    // Arrange
    let low = Outcome::<()>::failure_with("Low", []);
    // Act
    let high = Outcome::<()>::failure_with("High", [low.cause()]);
    // Assert
    let error = high.error().expect("expected a failure payload");
    assert_eq!(Some(&json!({"type": "Low"})), error.get(CAUSE_KEY));
}

#[test]
#[should_panic(expected = "cause fragments can only be taken from a failure")]
fn a_cause_fragment_cannot_be_taken_from_a_success() {
    // Arrange
    let outcome = Outcome::<i32>::success(42);
    // Act
    outcome.cause();
}

#[test]
fn a_success_with_no_meaningful_payload_is_not_a_failure() {
    // Arrange
    let outcome = Outcome::<()>::success(());
    // Assert
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
}

#[test]
fn results_lift_into_outcomes_and_back() {
    // Arrange
    let ok: Result<i32, String> = Ok(7);
    let err: Result<i32, String> = Err("boom".to_string());
    // Act
    let success = Outcome::from(ok);
    let failure = Outcome::from(err);
    // Assert
    assert_eq!(Outcome::success(7), success);
    assert_eq!(Ok(7), success.into_result());
    assert_eq!(Outcome::failure("boom".to_string()), failure);
    assert_eq!(Err("boom".to_string()), failure.into_result());
}

#[test]
fn outcomes_serialize_with_a_variant_discriminant() {
    // Arrange
    let success = Outcome::<i32>::success(5);
    let failure = Outcome::<i32>::failure(json!("Timeout"));
    // Act
    let success_json = serde_json::to_value(&success).expect("Failed to serialize");
    let failure_json = serde_json::to_value(&failure).expect("Failed to serialize");
    // Assert
    assert_eq!(json!({"type": "success", "value": 5}), success_json);
    assert_eq!(json!({"type": "failure", "error": "Timeout"}), failure_json);
    let back: Outcome<i32, Value> =
        serde_json::from_value(success_json).expect("Failed to deserialize");
    assert_eq!(success, back);
}
