//! Bridge from the crate's sink into the `tracing` ecosystem.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-flow = { version = "0.3", features = ["tracing"] }
//! ```
use super::{LogMessage, LogSink, TAG_DISCARDED, TAG_SUPPRESSED};

/// Sink forwarding each message as a `tracing` event under the `error_flow` target.
///
/// Suppressed and discarded errors are emitted at `WARN`, everything else at
/// `ERROR`. Tags and the stack (when captured) travel as event fields.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use error_flow::sink::{set_global_sink, TracingSink};
///
/// tracing_subscriber::fmt::init();
/// set_global_sink(Arc::new(TracingSink));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, message: &LogMessage) {
        let tags = message.tags.join(",");
        let stack = message.stack.as_deref();
        if message.has_tag(TAG_SUPPRESSED) || message.has_tag(TAG_DISCARDED) {
            tracing::warn!(target: "error_flow", tags = %tags, stack, "{}", message.render());
        } else {
            tracing::error!(target: "error_flow", tags = %tags, stack, "{}", message.render());
        }
    }
}
