use crate::sink::{self, LogMessage, SharedSink};
use crate::strategy::{LogStrategy, ReturnStrategy};
use crate::types::alloc_type::{Arc, Vec};
use crate::wrapper::Wrapper;
use core::fmt;

/// Resolved policy a handler works with.
///
/// This is what [`DeferredSetup`](super::DeferredSetup) actions mutate; each
/// handler owns its own copy.
pub struct Settings<E> {
    /// Which error the handler returns.
    pub return_strategy: ReturnStrategy,
    /// Which errors the handler logs.
    pub log_strategy: LogStrategy,
    pub(crate) wrappers: Vec<Wrapper<E>>,
    pub(crate) sink: Option<SharedSink>,
}

impl<E> Settings<E> {
    /// Appends a wrapper; wrappers apply in the order they were added.
    #[inline]
    pub fn wrap(&mut self, wrapper: Wrapper<E>) {
        self.wrappers.push(wrapper);
    }

    /// Removes every wrapper.
    #[inline]
    pub fn clear_wrappers(&mut self) {
        self.wrappers.clear();
    }

    /// Number of configured wrappers.
    #[inline]
    pub fn wrapper_len(&self) -> usize {
        self.wrappers.len()
    }

    /// Overrides the sink for this handler.
    #[inline]
    pub fn set_sink(&mut self, sink: SharedSink) {
        self.sink = Some(sink);
    }

    /// Falls back to the process-wide sink.
    #[inline]
    pub fn clear_sink(&mut self) {
        self.sink = None;
    }

    /// Runs every wrapper over `error`.
    ///
    /// # Panics
    ///
    /// Panics if a wrapper returns no error.
    #[track_caller]
    pub(crate) fn wrap_error(&self, error: E) -> E {
        self.wrappers.iter().fold(error, |error, wrapper| wrapper.apply(error))
    }

    #[inline]
    pub(crate) fn emit(&self, message: &LogMessage) {
        sink::dispatch(self.sink.as_ref(), message);
    }
}

impl<E> Default for Settings<E> {
    fn default() -> Self {
        Self {
            return_strategy: ReturnStrategy::default(),
            log_strategy: LogStrategy::default(),
            wrappers: Vec::new(),
            sink: None,
        }
    }
}

impl<E> Clone for Settings<E> {
    fn clone(&self) -> Self {
        Self {
            return_strategy: self.return_strategy,
            log_strategy: self.log_strategy,
            wrappers: self.wrappers.clone(),
            sink: self.sink.as_ref().map(Arc::clone),
        }
    }
}

impl<E> fmt::Debug for Settings<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("return_strategy", &self.return_strategy)
            .field("log_strategy", &self.log_strategy)
            .field("wrappers", &self.wrappers.len())
            .field("custom_sink", &self.sink.is_some())
            .finish()
    }
}
