//! Logging sinks for suppressed and observed errors.
//!
//! The crate never picks a logging backend. Every emission goes through a
//! [`LogSink`]: either one injected into a [`FlowConfig`](crate::FlowConfig)
//! or, with the `std` feature, the process-wide sink installed with
//! [`set_global_sink`].
//!
//! # Examples
//!
//! ```
//! use error_flow::sink::{LogMessage, LogSink, MemorySink};
//!
//! let sink = MemorySink::new();
//! sink.emit(&LogMessage::new("closing {} failed").arg("db"));
//!
//! assert_eq!(sink.rendered(), vec!["closing db failed".to_string()]);
//! ```
use crate::types::alloc_type::Arc;

mod message;

#[cfg(feature = "std")]
mod global;
#[cfg(feature = "std")]
mod memory;
#[cfg(feature = "tracing")]
mod tracing_sink;

pub use message::*;

#[cfg(feature = "std")]
pub use global::{emit, global_sink, reset_global_sink, set_global_sink};
#[cfg(feature = "std")]
pub use memory::MemorySink;
#[cfg(feature = "tracing")]
pub use tracing_sink::TracingSink;

/// Destination for [`LogMessage`]s.
///
/// Sinks are shared across frames and threads, so `emit` takes `&self` and must
/// not interleave the contents of concurrent messages.
pub trait LogSink: Send + Sync {
    /// Delivers one message.
    fn emit(&self, message: &LogMessage);
}

impl<F> LogSink for F
where
    F: Fn(&LogMessage) + Send + Sync,
{
    #[inline]
    fn emit(&self, message: &LogMessage) {
        self(message)
    }
}

/// Reference-counted sink handle.
pub type SharedSink = Arc<dyn LogSink>;

/// Sink that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    #[inline]
    fn emit(&self, _message: &LogMessage) {}
}

/// Sink writing one line per message to standard error.
///
/// The stderr lock is held for the whole message, stack included.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

#[cfg(feature = "std")]
impl LogSink for StderrSink {
    fn emit(&self, message: &LogMessage) {
        use std::io::Write;

        let mut out = std::io::stderr().lock();
        let _ = writeln!(out, "[{}] {}", message.tags.join(","), message.render());
        if let Some(stack) = &message.stack {
            let _ = writeln!(out, "{}", stack);
        }
    }
}

/// Routes a message to `sink`, falling back to the global sink.
#[inline]
pub(crate) fn dispatch(sink: Option<&SharedSink>, message: &LogMessage) {
    match sink {
        Some(sink) => sink.emit(message),
        #[cfg(feature = "std")]
        None => emit(message),
        #[cfg(not(feature = "std"))]
        None => {},
    }
}
