use super::{LogMessage, LogSink};
use crate::types::alloc_type::{String, Vec};
use std::sync::{Mutex, PoisonError};

/// Sink that records every message in memory.
///
/// Handy for hosts that batch error reports, and for asserting on emissions.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<LogMessage>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded messages, oldest first.
    pub fn messages(&self) -> Vec<LogMessage> {
        self.lock().clone()
    }

    /// Returns the rendered text of each recorded message, oldest first.
    pub fn rendered(&self) -> Vec<String> {
        self.lock().iter().map(LogMessage::render).collect()
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes and returns the recorded messages.
    pub fn take(&self) -> Vec<LogMessage> {
        core::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for MemorySink {
    fn emit(&self, message: &LogMessage) {
        self.lock().push(message.clone());
    }
}
