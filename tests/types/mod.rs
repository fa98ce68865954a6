use error_flow::types::{fail_if, ConditionError, ErrorOutcome};

#[test]
fn outcome_conversions() {
    assert_eq!(ErrorOutcome::from(None::<&str>), ErrorOutcome::Success);
    assert_eq!(ErrorOutcome::from(Some("e")), ErrorOutcome::Failure("e"));
    assert_eq!(ErrorOutcome::from(Ok::<u8, &str>(1)), ErrorOutcome::Success);
    assert_eq!(ErrorOutcome::from(Err::<u8, _>("e")), ErrorOutcome::Failure("e"));
    assert_eq!(Result::from(ErrorOutcome::Failure("e")), Err::<(), _>("e"));
}

#[test]
fn outcome_accessors() {
    let failed = ErrorOutcome::Failure(3).map_error(|n| n * 2);
    assert!(failed.is_failure());
    assert_eq!(failed.into_error(), Some(6));
    assert!(ErrorOutcome::<u8>::default().is_success());
}

#[test]
fn fail_if_polarity() {
    assert_eq!(fail_if(false, "x"), Ok(()));
    assert_eq!(fail_if(true, "x"), Err(ConditionError::new("x")));
}

#[test]
fn condition_error_converts_into_string() {
    let text: String = ConditionError::new(format!("limit {}", 3)).into();
    assert_eq!(text, "limit 3");
    assert_eq!(ConditionError::new("shown").to_string(), "shown");
}
