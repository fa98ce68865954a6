//! Process-wide sink used when a configuration does not inject its own.
use super::{LogMessage, SharedSink, StderrSink};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

static GLOBAL_SINK: LazyLock<RwLock<SharedSink>> =
    LazyLock::new(|| RwLock::new(Arc::new(StderrSink)));

/// Installs `sink` as the process-wide sink, returning the previous one.
///
/// Intended to be called once at start-up, before handlers run.
pub fn set_global_sink(sink: SharedSink) -> SharedSink {
    let mut guard = GLOBAL_SINK.write().unwrap_or_else(PoisonError::into_inner);
    core::mem::replace(&mut *guard, sink)
}

/// Restores the default [`StderrSink`].
pub fn reset_global_sink() {
    set_global_sink(Arc::new(StderrSink));
}

/// Returns the current process-wide sink.
pub fn global_sink() -> SharedSink {
    let guard = GLOBAL_SINK.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// Emits `message` to the process-wide sink.
///
/// The lock is released before the sink runs, so a sink may itself log.
pub fn emit(message: &LogMessage) {
    global_sink().emit(message);
}
