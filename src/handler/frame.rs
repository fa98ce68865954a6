//! Scoped form of the handler: a frame body plus its deferred cleanups.
use super::{Handler, HandlerState};
use crate::config::FlowConfig;
use crate::sink::{LogMessage, TAG_DISCARDED};
use crate::strategy::LogStrategy;
use crate::types::alloc_type::{Box, Cow, Vec};
use crate::types::{fail_if, ConditionError, ErrorOutcome};
use core::fmt::Display;

type Cleanup<'a, E> = Box<dyn FnOnce() -> Result<(), E> + 'a>;

/// One call frame: its [`Handler`] and the cleanups registered so far.
///
/// Frames are created by [`run`]; the body gets `&mut Frame`. Returning `Err`
/// from the body (typically through `?`) is the early exit: the remaining body
/// is skipped but every registered cleanup still runs.
pub struct Frame<'a, E: Display> {
    handler: Handler<E>,
    cleanups: Vec<Cleanup<'a, E>>,
}

impl<'a, E: Display> Frame<'a, E> {
    fn new(handler: Handler<E>) -> Self {
        Self { handler, cleanups: Vec::new() }
    }

    /// Registers a cleanup. Cleanups run in reverse registration order when the
    /// frame exits, and each one's error is delivered to the handler.
    pub fn defer<F>(&mut self, cleanup: F)
    where
        F: FnOnce() -> Result<(), E> + 'a,
    {
        self.cleanups.push(Box::new(cleanup));
    }

    /// Number of cleanups still to run.
    #[inline]
    pub fn pending_cleanups(&self) -> usize {
        self.cleanups.len()
    }

    /// Delivers an outcome without leaving the frame.
    #[track_caller]
    pub fn deliver<O>(&mut self, outcome: O)
    where
        O: Into<ErrorOutcome<E>>,
    {
        self.handler.deliver(outcome);
    }

    /// Delivers the error of `result` without leaving the frame, passing a
    /// success value through.
    #[track_caller]
    pub fn deliver_value<T>(&mut self, result: Result<T, E>) -> Option<T> {
        self.handler.deliver_value(result)
    }

    /// Passes a success value through, or converts the error for an early exit
    /// with `?`.
    #[inline]
    pub fn check<T, E2>(&self, result: Result<T, E2>) -> Result<T, E>
    where
        E2: Into<E>,
    {
        result.map_err(Into::into)
    }

    /// Like [`check`](Self::check), dropping the success value.
    #[inline]
    pub fn check_discard<T, E2>(&self, result: Result<T, E2>) -> Result<(), E>
    where
        E2: Into<E>,
    {
        result.map(|_| ()).map_err(Into::into)
    }

    /// Synthesizes an early-exit error when `condition` holds.
    #[inline]
    pub fn check_condition<M>(&self, condition: bool, message: M) -> Result<(), E>
    where
        E: From<ConditionError>,
        M: Into<Cow<'static, str>>,
    {
        fail_if(condition, message).map_err(E::from)
    }

    /// The frame's handler, for inspection.
    #[inline]
    pub fn handler(&self) -> &Handler<E> {
        &self.handler
    }

    fn unwind(&mut self) {
        while let Some(cleanup) = self.cleanups.pop() {
            let outcome = cleanup();
            self.handler.deliver(outcome);
        }
    }

    fn discard(&self, error: &E) {
        let settings = self.handler.settings();
        if settings.log_strategy != LogStrategy::Never {
            settings.emit(&LogMessage::for_error(error, TAG_DISCARDED));
        }
    }
}

impl<E: Display> Drop for Frame<'_, E> {
    // Only reached unfinalized when the body or a cleanup panicked.
    fn drop(&mut self) {
        if self.handler.state() == HandlerState::Finalized {
            return;
        }
        self.handler.run_pending_setup();

        let held = self.handler.current.take();
        self.handler.state = HandlerState::Finalized;
        if let Some(error) = held {
            self.discard(&error);
        }
        while let Some(cleanup) = self.cleanups.pop() {
            if let Err(error) = cleanup() {
                self.discard(&error);
            }
        }
    }
}

/// Runs `body` as one call frame under `config`.
///
/// The handler sees the body's error (if any), then each cleanup's error in
/// reverse registration order, then finalizes. A successful body value is
/// returned only if the finalized handler holds no error.
///
/// A panic in the body is not an error outcome: it propagates unchanged, and
/// the remaining cleanups still run while unwinding. The error the handler
/// held at that point and every cleanup error are routed to the sink under
/// the `discarded-error` tag, after any deferred setup has run.
///
/// # Examples
///
/// ```
/// use error_flow::{run, FlowConfig, ReturnStrategy};
///
/// let config = FlowConfig::<String>::default().with(ReturnStrategy::Last);
/// let result: Result<u8, String> = run(&config, |frame| {
///     frame.defer(|| Err("close a".to_string()));
///     frame.defer(|| Err("close b".to_string()));
///     Err("body".to_string())
/// });
///
/// // body, then "close b", then "close a": the last one wins.
/// assert_eq!(result, Err("close a".to_string()));
/// ```
pub fn run<'a, T, E, F>(config: &FlowConfig<E>, body: F) -> Result<T, E>
where
    E: Display,
    F: FnOnce(&mut Frame<'a, E>) -> Result<T, E>,
{
    let mut frame = Frame::new(config.begin());
    let result = body(&mut frame);
    let value = frame.handler.deliver_value(result);
    frame.unwind();

    match frame.handler.finalize() {
        Err(error) => Err(error),
        Ok(()) => match value {
            Some(value) => Ok(value),
            None => unreachable!("a failed frame body always leaves an error to return"),
        },
    }
}

/// [`run`] under the ambient [`FlowConfig::default`].
///
/// # Examples
///
/// ```
/// use error_flow::flow;
///
/// let result: Result<(), String> = flow(|frame| {
///     frame.defer(|| Err("flush failed".to_string()));
///     Ok(())
/// });
///
/// assert_eq!(result, Err("flush failed".to_string()));
/// ```
#[inline]
pub fn flow<'a, T, E, F>(body: F) -> Result<T, E>
where
    E: Display,
    F: FnOnce(&mut Frame<'a, E>) -> Result<T, E>,
{
    run(&FlowConfig::default(), body)
}
