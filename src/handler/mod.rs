//! The per-frame error accumulator and its scoped forms.
//!
//! A [`Handler`] receives the error outcomes of one call frame in emission
//! order and, when finalized, returns exactly one of them (wrapped) while the
//! others are discarded or logged according to its [`FlowConfig`].
//!
//! Most code uses the scoped form, [`run`] / [`flow`], which feeds the body's
//! error and every deferred cleanup's error into the handler and finalizes it
//! on every exit path.
//!
//! # Examples
//!
//! ```
//! use error_flow::{FlowConfig, LogStrategy, ReturnStrategy};
//! use error_flow::sink::MemorySink;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let config = FlowConfig::<String>::builder()
//!     .return_strategy(ReturnStrategy::First)
//!     .log_strategy(LogStrategy::IfSuppressed)
//!     .sink(sink.clone())
//!     .build();
//!
//! let mut handler = config.begin();
//! handler.deliver(Some("errA".to_string()));
//! handler.deliver(Some("errB".to_string()));
//!
//! assert_eq!(handler.finalize(), Err("errA".to_string()));
//! assert_eq!(sink.rendered(), vec!["errB".to_string()]);
//! ```
use crate::config::{DeferredSetup, FlowConfig, Settings};
use crate::sink::{LogMessage, TAG_ERROR, TAG_SUPPRESSED};
use crate::types::alloc_type::{Cow, Vec};
use crate::types::{fail_if, ConditionError, ErrorOutcome};
use core::fmt::Display;

mod closer;
mod frame;

pub use closer::Closer;
pub use frame::{flow, run, Frame};

/// Lifecycle of a [`Handler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerState {
    /// No error observed yet.
    Idle,
    /// At least one error recorded, not yet finalized.
    Holding,
    /// Result handed out; the handler accepts nothing more.
    Finalized,
}

/// Frame-scoped error accumulator.
///
/// Misuse is fatal: delivering after finalization, finalizing twice, a wrapper
/// dropping the error and (with `std`) dropping an unfinalized handler outside
/// of a panic all panic.
#[must_use = "a handler must be finalized exactly once"]
pub struct Handler<E> {
    settings: Settings<E>,
    pending_setup: Vec<DeferredSetup<E>>,
    current: Option<E>,
    state: HandlerState,
    deliveries: usize,
}

impl<E> Handler<E> {
    pub(crate) fn new(config: &FlowConfig<E>) -> Self {
        Self {
            settings: config.settings.clone(),
            pending_setup: config.deferred.clone(),
            current: None,
            state: HandlerState::Idle,
            deliveries: 0,
        }
    }

    /// Where the handler is in its lifecycle.
    #[inline]
    pub fn state(&self) -> HandlerState {
        self.state
    }

    /// The error that would be returned if the handler finalized now, unwrapped.
    #[inline]
    pub fn current(&self) -> Option<&E> {
        self.current.as_ref()
    }

    /// Number of non-nil errors delivered so far.
    #[inline]
    pub fn deliveries(&self) -> usize {
        self.deliveries
    }

    /// Settings in effect; deferred setup is reflected only after the first
    /// delivery.
    #[inline]
    pub fn settings(&self) -> &Settings<E> {
        &self.settings
    }

    /// Commits the decision: wraps the held error, if any, and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the handler was already finalized or a wrapper drops the error.
    #[track_caller]
    pub fn finalize(&mut self) -> Result<(), E> {
        self.ensure_open("error handler finalized twice");
        self.state = HandlerState::Finalized;
        match self.current.take() {
            None => Ok(()),
            Some(error) => Err(self.settings.wrap_error(error)),
        }
    }

    /// Finalizes into a caller-owned slot, overwriting it exactly once.
    #[track_caller]
    pub fn finalize_into(&mut self, slot: &mut Option<E>) {
        *slot = self.finalize().err();
    }

    #[track_caller]
    fn ensure_open(&self, violation: &'static str) {
        if self.state == HandlerState::Finalized {
            panic!("{}", violation);
        }
    }

    pub(crate) fn run_pending_setup(&mut self) {
        if self.pending_setup.is_empty() {
            return;
        }
        for setup in core::mem::take(&mut self.pending_setup) {
            setup.run(&mut self.settings);
        }
    }
}

impl<E: Display> Handler<E> {
    /// Hands one outcome to the handler. Success outcomes change nothing.
    ///
    /// # Panics
    ///
    /// Panics if the handler was already finalized.
    #[track_caller]
    pub fn deliver<O>(&mut self, outcome: O)
    where
        O: Into<ErrorOutcome<E>>,
    {
        self.ensure_open("error delivered to a finalized handler");
        self.run_pending_setup();

        let Some(incoming) = outcome.into().into_error() else {
            return;
        };
        self.deliveries += 1;

        let log = self.settings.log_strategy;
        let arrival = log.logs_on_arrival().then(|| LogMessage::new("{}").arg(&incoming));

        let step = self.settings.return_strategy.combine(self.current.take(), incoming);
        match (arrival, &step.suppressed) {
            (Some(message), Some(suppressed)) if suppressed.is_incoming() => {
                self.settings.emit(&message.classified(TAG_SUPPRESSED));
            },
            (Some(message), _) => self.settings.emit(&message.classified(TAG_ERROR)),
            (None, Some(suppressed)) if log.logs_suppressed() => {
                self.settings.emit(&LogMessage::for_error(suppressed.error(), TAG_SUPPRESSED));
            },
            (None, _) => {},
        }

        self.current = Some(step.result);
        self.state = HandlerState::Holding;
    }

    /// Delivers the error of `result`, passing a success value through.
    #[track_caller]
    pub fn deliver_value<T>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => {
                self.deliver(ErrorOutcome::Success);
                Some(value)
            },
            Err(error) => {
                self.deliver(ErrorOutcome::Failure(error));
                None
            },
        }
    }

    /// Delivers a [`ConditionError`] carrying `message` when `condition` holds.
    #[track_caller]
    pub fn deliver_condition<M>(&mut self, condition: bool, message: M)
    where
        E: From<ConditionError>,
        M: Into<Cow<'static, str>>,
    {
        self.deliver(fail_if(condition, message).map_err(E::from));
    }
}

impl<E> Drop for Handler<E> {
    fn drop(&mut self) {
        #[cfg(feature = "std")]
        if self.state != HandlerState::Finalized && !std::thread::panicking() {
            panic!("error handler dropped without finalization");
        }
    }
}

impl<E> core::fmt::Debug for Handler<E>
where
    E: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Handler")
            .field("state", &self.state)
            .field("current", &self.current)
            .field("deliveries", &self.deliveries)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
