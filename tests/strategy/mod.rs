use error_flow::strategy::{LogStrategy, ReturnStrategy, Suppressed};

#[test]
fn combine_with_nothing_held_never_suppresses() {
    for strategy in [ReturnStrategy::First, ReturnStrategy::Last] {
        let step = strategy.combine(None, "incoming");
        assert_eq!(step.result, "incoming");
        assert!(!step.is_suppressed());
    }
}

#[test]
fn first_keeps_current_and_suppresses_incoming() {
    let step = ReturnStrategy::First.combine(Some("current"), "incoming");
    assert_eq!(step.result, "current");
    let suppressed = step.suppressed.unwrap();
    assert!(suppressed.is_incoming());
    assert_eq!(suppressed.into_error(), "incoming");
}

#[test]
fn last_keeps_incoming_and_suppresses_current() {
    let step = ReturnStrategy::Last.combine(Some("current"), "incoming");
    assert_eq!(step.result, "incoming");
    assert_eq!(step.suppressed, Some(Suppressed::Current("current")));
    assert_eq!(step.suppressed.as_ref().map(Suppressed::error), Some(&"current"));
}

#[test]
fn defaults_are_first_and_if_suppressed() {
    assert_eq!(ReturnStrategy::default(), ReturnStrategy::First);
    assert_eq!(LogStrategy::default(), LogStrategy::IfSuppressed);
}

#[test]
fn log_strategy_decisions() {
    assert!(LogStrategy::Always.logs_on_arrival());
    assert!(!LogStrategy::Always.logs_suppressed());
    assert!(LogStrategy::IfSuppressed.logs_suppressed());
    assert!(!LogStrategy::IfSuppressed.logs_on_arrival());
    assert!(!LogStrategy::Never.logs_on_arrival());
    assert!(!LogStrategy::Never.logs_suppressed());
}

#[test]
fn strategies_parse_and_display_in_kebab_case() {
    for strategy in [ReturnStrategy::First, ReturnStrategy::Last] {
        assert_eq!(strategy.to_string().parse::<ReturnStrategy>(), Ok(strategy));
    }
    for strategy in [LogStrategy::Never, LogStrategy::IfSuppressed, LogStrategy::Always] {
        assert_eq!(strategy.to_string().parse::<LogStrategy>(), Ok(strategy));
    }
    assert_eq!(" always ".parse::<LogStrategy>(), Ok(LogStrategy::Always));
}

#[test]
fn unknown_strategy_names_are_rejected() {
    let err = "newest".parse::<ReturnStrategy>().unwrap_err();
    assert_eq!(err.input(), "newest");
    assert_eq!(err.to_string(), "unknown strategy 'newest', expected one of: first, last");

    assert!("IfSuppressed".parse::<LogStrategy>().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn strategies_serialize_in_kebab_case() {
    assert_eq!(serde_json::to_string(&LogStrategy::IfSuppressed).unwrap(), "\"if-suppressed\"");
    let parsed: ReturnStrategy = serde_json::from_str("\"last\"").unwrap();
    assert_eq!(parsed, ReturnStrategy::Last);
}
