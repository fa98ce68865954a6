use error_flow::sink::MemorySink;
use error_flow::{FlowConfig, FlowConfigBuilder};
use std::sync::Arc;

/// Builds a `String` configuration that logs into a fresh in-memory sink.
pub fn recorded<F>(configure: F) -> (FlowConfig<String>, Arc<MemorySink>)
where
    F: FnOnce(FlowConfigBuilder<String>) -> FlowConfigBuilder<String>,
{
    let sink = Arc::new(MemorySink::new());
    let config = configure(FlowConfig::builder().sink(sink.clone())).build();
    (config, sink)
}

pub fn err(text: &str) -> Option<String> {
    Some(text.to_string())
}
