use crate::common::recorded;
use error_flow::sink::{TAG_ERROR, TAG_SUPPRESSED};
use error_flow::{ConfigError, FlowConfig, LogStrategy, ReturnStrategy};

#[test]
fn closer_rejects_last_at_construction() {
    let config = FlowConfig::<String>::default().with(ReturnStrategy::Last);
    let err = config.closer().unwrap_err();

    assert_eq!(
        err,
        ConfigError::UnsupportedReturnStrategy {
            strategy: ReturnStrategy::Last,
            call_path: "assign-on-close",
        }
    );
    assert_eq!(err.to_string(), "'last' return strategy is not supported by assign-on-close");
}

#[test]
fn close_error_replaces_a_successful_slot() {
    let (config, sink) = recorded(|b| b);
    let closer = config.closer().unwrap();
    let mut slot: Result<u8, String> = Ok(1);

    closer.assign(&mut slot, || Err("close failed".to_string()));

    assert_eq!(slot, Err("close failed".to_string()));
    assert!(sink.is_empty());
}

#[test]
fn successful_close_leaves_the_slot_alone() {
    let (config, _) = recorded(|b| b);
    let closer = config.closer().unwrap();
    let mut ok: Result<u8, String> = Ok(1);
    let mut failed: Result<u8, String> = Err("write".to_string());

    closer.assign(&mut ok, || Ok(()));
    closer.assign(&mut failed, || Ok(()));

    assert_eq!(ok, Ok(1));
    assert_eq!(failed, Err("write".to_string()));
}

#[test]
fn existing_error_wins_and_close_error_is_logged_as_suppressed() {
    let (config, sink) = recorded(|b| b.log_strategy(LogStrategy::IfSuppressed));
    let closer = config.closer().unwrap();
    let mut slot: Result<(), String> = Err("write failed".to_string());

    closer.assign(&mut slot, || Err("close failed".to_string()));

    assert_eq!(slot, Err("write failed".to_string()));
    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].render(), "close failed");
    assert!(messages[0].has_tag(TAG_SUPPRESSED));
}

#[test]
fn always_logs_the_first_close_error_too() {
    let (config, sink) = recorded(|b| b.log_strategy(LogStrategy::Always));
    let closer = config.closer().unwrap();
    let mut slot: Result<(), String> = Ok(());

    closer.assign(&mut slot, || Err("close a".to_string()));
    closer.assign(&mut slot, || Err("close b".to_string()));

    assert_eq!(slot, Err("close a".to_string()));
    let messages = sink.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].has_tag(TAG_ERROR));
    assert!(messages[1].has_tag(TAG_SUPPRESSED));
}

#[test]
fn never_keeps_the_sink_quiet() {
    let (config, sink) = recorded(|b| b.log_strategy(LogStrategy::Never));
    let closer = config.closer().unwrap();
    let mut slot: Result<(), String> = Err("write".to_string());

    closer.assign(&mut slot, || Err("close".to_string()));

    assert!(sink.is_empty());
}

#[test]
fn wrapper_applies_to_each_close_error() {
    let (config, sink) = recorded(|b| b.wrap(|e: String| format!("closing: {e}")));
    let closer = config.closer().unwrap();
    let mut slot: Result<(), String> = Ok(());

    closer.assign(&mut slot, || Err("a".to_string()));
    closer.assign(&mut slot, || Err("b".to_string()));

    assert_eq!(slot, Err("closing: a".to_string()));
    assert_eq!(sink.rendered(), vec!["closing: b"]);
}

#[test]
#[should_panic(expected = "'last' return strategy is not supported by assign-on-close")]
fn deferred_switch_to_last_is_fatal() {
    let (config, _) = recorded(|b| {
        b.defer_setup(|settings| settings.return_strategy = ReturnStrategy::Last)
    });
    let closer = config.closer().unwrap();
    let mut slot: Result<(), String> = Ok(());

    closer.assign(&mut slot, || Ok(()));
}
