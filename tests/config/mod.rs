use error_flow::sink::{MemorySink, SharedSink};
use error_flow::{
    DeferredSetup, FlowConfig, FlowOption, LogStrategy, ReturnStrategy, Settings, Wrapper,
};
use std::sync::Arc;

#[test]
fn ambient_configuration_defaults() {
    let config = FlowConfig::<String>::new();
    assert_eq!(config.return_strategy(), ReturnStrategy::First);
    assert_eq!(config.log_strategy(), LogStrategy::IfSuppressed);
    assert_eq!(config.deferred_setup_len(), 0);
    assert_eq!(config.resolve().wrapper_len(), 0);
}

#[test]
fn options_apply_in_order() {
    let config = FlowConfig::<String>::from_options([
        FlowOption::from(ReturnStrategy::Last),
        FlowOption::from(LogStrategy::Never),
        FlowOption::from(ReturnStrategy::First),
    ]);

    assert_eq!(config.return_strategy(), ReturnStrategy::First);
    assert_eq!(config.log_strategy(), LogStrategy::Never);
}

#[test]
fn with_is_copy_on_configure() {
    let base = FlowConfig::<String>::default();
    let derived = base.with(LogStrategy::Always).with(Wrapper::map(|e: String| e));

    assert_eq!(base.log_strategy(), LogStrategy::IfSuppressed);
    assert_eq!(base.resolve().wrapper_len(), 0);
    assert_eq!(derived.log_strategy(), LogStrategy::Always);
    assert_eq!(derived.resolve().wrapper_len(), 1);
}

#[test]
fn wrappers_chain_in_configuration_order() {
    let config = FlowConfig::<String>::builder()
        .wrap(|e| format!("inner({e})"))
        .wrap(|e| format!("outer({e})"))
        .build();

    let mut handler = config.begin();
    handler.deliver(Some("e".to_string()));
    assert_eq!(handler.finalize(), Err("outer(inner(e))".to_string()));
}

#[test]
fn wrapper_then_composes() {
    let wrapper =
        Wrapper::map(|e: String| format!("a:{e}")).then(Wrapper::map(|e: String| format!("b:{e}")));
    assert_eq!(wrapper.apply("x".to_string()), "b:a:x");
}

#[test]
fn resolve_runs_deferred_setup_on_a_copy() {
    let setup = DeferredSetup::new(|settings: &mut Settings<String>| {
        settings.log_strategy = LogStrategy::Never;
    });
    let config = FlowConfig::<String>::default().with(setup);

    assert_eq!(config.deferred_setup_len(), 1);
    assert_eq!(config.resolve().log_strategy, LogStrategy::Never);
    assert_eq!(config.log_strategy(), LogStrategy::IfSuppressed);
}

#[test]
fn injected_sink_receives_handler_output() {
    let sink = Arc::new(MemorySink::new());
    let shared: SharedSink = sink.clone();
    let config = FlowConfig::<String>::default().with(shared);

    let mut handler = config.begin();
    handler.deliver(Some("a".to_string()));
    handler.deliver(Some("b".to_string()));
    let _ = handler.finalize();

    assert_eq!(sink.rendered(), vec!["b"]);
}

#[test]
fn deferred_setup_can_swap_the_sink() {
    let sink = Arc::new(MemorySink::new());
    let late = sink.clone();
    let config = FlowConfig::<String>::builder()
        .sink(Arc::new(error_flow::sink::NoopSink))
        .defer_setup(move |settings| settings.set_sink(late.clone()))
        .build();

    let mut handler = config.begin();
    handler.deliver(Some("a".to_string()));
    handler.deliver(Some("b".to_string()));
    let _ = handler.finalize();

    assert_eq!(sink.len(), 1);
}

#[test]
fn debug_output_hides_closures() {
    let config = FlowConfig::<String>::builder().wrap(|e| e).build();
    let rendered = format!("{config:?}");
    assert!(rendered.contains("FlowConfig"));
    assert!(rendered.contains("wrappers: 1"));

    let option: FlowOption<String> = FlowOption::from(Wrapper::map(|e: String| e));
    assert_eq!(format!("{option:?}"), "Wrap(Wrapper { .. })");
}
