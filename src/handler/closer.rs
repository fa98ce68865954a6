use crate::config::FlowConfig;
use crate::sink::{LogMessage, TAG_ERROR, TAG_SUPPRESSED};
use core::fmt::Display;

/// Assign-on-close: merges a close action's error into a result the caller
/// already holds, for code that does not run inside a [`Frame`](super::Frame).
///
/// Obtained from [`FlowConfig::closer`], which rejects strategies that could
/// displace the caller's error. Unlike a handler, the wrapper runs on each
/// close error as it is merged.
///
/// # Examples
///
/// ```
/// use error_flow::FlowConfig;
///
/// fn write_report() -> Result<usize, String> {
///     let closer = FlowConfig::<String>::default().closer().map_err(|e| e.to_string())?;
///     let mut result = Ok(42);
///     closer.assign(&mut result, || Err("close failed".to_string()));
///     result
/// }
///
/// assert_eq!(write_report(), Err("close failed".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Closer<E> {
    config: FlowConfig<E>,
}

impl<E> Closer<E> {
    pub(crate) const CALL_PATH: &'static str = "assign-on-close";

    pub(crate) fn new(config: FlowConfig<E>) -> Self {
        Self { config }
    }
}

impl<E: Display> Closer<E> {
    /// Runs `close` and merges its error into `slot`.
    ///
    /// A successful slot takes the close error; a failed slot keeps its own
    /// error and the close error is treated as suppressed.
    ///
    /// # Panics
    ///
    /// Panics if deferred setup switched to [`ReturnStrategy::Last`](crate::ReturnStrategy::Last)
    /// or a wrapper drops the error.
    #[track_caller]
    pub fn assign<T, F>(&self, slot: &mut Result<T, E>, close: F)
    where
        F: FnOnce() -> Result<(), E>,
    {
        let outcome = close();
        let settings = self.config.resolve();
        if settings.return_strategy.may_suppress_first() {
            panic!(
                "'{}' return strategy is not supported by {}",
                settings.return_strategy,
                Self::CALL_PATH
            );
        }

        let Err(error) = outcome else {
            return;
        };
        let error = settings.wrap_error(error);
        let log = settings.log_strategy;

        match slot {
            Ok(_) => {
                if log.logs_on_arrival() {
                    settings.emit(&LogMessage::for_error(&error, TAG_ERROR));
                }
                *slot = Err(error);
            },
            Err(current) => {
                let step = settings.return_strategy.combine(Some(&*current), &error);
                if (step.is_suppressed() && log.logs_suppressed()) || log.logs_on_arrival() {
                    settings.emit(&LogMessage::for_error(&error, TAG_SUPPRESSED));
                }
            },
        }
    }
}
