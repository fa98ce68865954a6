use super::{DeferredSetup, FlowConfig, FlowOption, Settings};
use crate::sink::SharedSink;
use crate::strategy::{LogStrategy, ReturnStrategy};
use crate::wrapper::Wrapper;

/// Fluent builder for [`FlowConfig`].
///
/// # Examples
///
/// ```
/// use error_flow::{FlowConfig, LogStrategy, ReturnStrategy};
///
/// let config = FlowConfig::<String>::builder()
///     .return_strategy(ReturnStrategy::Last)
///     .log_strategy(LogStrategy::Always)
///     .wrap(|e| format!("copy: {e}"))
///     .build();
///
/// assert_eq!(config.return_strategy(), ReturnStrategy::Last);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct FlowConfigBuilder<E> {
    config: FlowConfig<E>,
}

impl<E> FlowConfigBuilder<E> {
    /// Starts from the ambient configuration.
    #[inline]
    pub fn new() -> Self {
        Self { config: FlowConfig::new() }
    }

    /// Sets the [`ReturnStrategy`].
    #[inline]
    pub fn return_strategy(self, strategy: ReturnStrategy) -> Self {
        self.option(strategy)
    }

    /// Sets the [`LogStrategy`].
    #[inline]
    pub fn log_strategy(self, strategy: LogStrategy) -> Self {
        self.option(strategy)
    }

    /// Appends a prepared [`Wrapper`].
    #[inline]
    pub fn wrapper(self, wrapper: Wrapper<E>) -> Self {
        self.option(wrapper)
    }

    /// Injects a sink instead of using the process-wide one.
    #[inline]
    pub fn sink(self, sink: SharedSink) -> Self {
        self.option(sink)
    }

    /// Applies any [`FlowOption`].
    #[inline]
    pub fn option<O>(mut self, option: O) -> Self
    where
        O: Into<FlowOption<E>>,
    {
        self.config = self.config.apply(option.into());
        self
    }

    /// Finishes the configuration.
    #[inline]
    pub fn build(self) -> FlowConfig<E> {
        self.config
    }
}

impl<E: 'static> FlowConfigBuilder<E> {
    /// Appends a total wrapper.
    #[inline]
    pub fn wrap<F>(self, f: F) -> Self
    where
        F: Fn(E) -> E + Send + Sync + 'static,
    {
        self.wrapper(Wrapper::map(f))
    }

    /// Appends a wrapper that may (illegally) drop the error.
    #[inline]
    pub fn try_wrap<F>(self, f: F) -> Self
    where
        F: Fn(E) -> Option<E> + Send + Sync + 'static,
    {
        self.wrapper(Wrapper::try_map(f))
    }

    /// Appends a deferred setup action.
    #[inline]
    pub fn defer_setup<F>(self, f: F) -> Self
    where
        F: Fn(&mut Settings<E>) + Send + Sync + 'static,
    {
        self.option(DeferredSetup::new(f))
    }
}

impl<E> Default for FlowConfigBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
