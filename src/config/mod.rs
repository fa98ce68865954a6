//! Flow configuration: strategies, wrappers, deferred setup and sink override.
//!
//! A [`FlowConfig`] is an immutable template. Build it once from
//! [`FlowOption`]s or with [`FlowConfig::builder`], share it across frames and
//! threads, and start one [`Handler`](crate::Handler) per frame with
//! [`FlowConfig::begin`]. Reconfiguring with [`FlowConfig::with`] returns a new
//! value and leaves the original untouched.
//!
//! # Examples
//!
//! ```
//! use error_flow::{FlowConfig, LogStrategy, ReturnStrategy};
//!
//! let base: FlowConfig<String> = FlowConfig::default();
//! let last = base.with(ReturnStrategy::Last).with(LogStrategy::Always);
//!
//! assert_eq!(base.return_strategy(), ReturnStrategy::First);
//! assert_eq!(last.return_strategy(), ReturnStrategy::Last);
//! assert_eq!(last.log_strategy(), LogStrategy::Always);
//! ```
use crate::handler::{Closer, Handler};
use crate::sink::SharedSink;
use crate::strategy::{LogStrategy, ReturnStrategy};
use crate::types::alloc_type::{Arc, Vec};
use crate::wrapper::Wrapper;
use core::fmt::{self, Display};

mod builder;
mod settings;

pub use builder::FlowConfigBuilder;
pub use settings::Settings;

/// Configuration action run lazily, once per handler, right before the first
/// delivery.
///
/// Setup actions see the handler's private [`Settings`], so they may read
/// values that did not exist when the configuration was built without
/// affecting other frames sharing the same [`FlowConfig`].
pub struct DeferredSetup<E> {
    f: Arc<dyn Fn(&mut Settings<E>) + Send + Sync>,
}

impl<E: 'static> DeferredSetup<E> {
    /// Wraps a setup action.
    #[inline]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Settings<E>) + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }
}

impl<E> DeferredSetup<E> {
    #[inline]
    pub(crate) fn run(&self, settings: &mut Settings<E>) {
        (self.f)(settings)
    }
}

impl<E> Clone for DeferredSetup<E> {
    fn clone(&self) -> Self {
        Self { f: Arc::clone(&self.f) }
    }
}

impl<E> fmt::Debug for DeferredSetup<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredSetup").finish_non_exhaustive()
    }
}

/// A single configuration option.
///
/// Options apply in order, so a later strategy overrides an earlier one and
/// wrappers chain in the order given.
pub enum FlowOption<E> {
    /// Selects which error is returned.
    Return(ReturnStrategy),
    /// Selects which errors are logged.
    Log(LogStrategy),
    /// Appends a wrapper for the returned error.
    Wrap(Wrapper<E>),
    /// Appends a setup action run when a handler processes its first outcome.
    Deferred(DeferredSetup<E>),
    /// Injects a sink in place of the process-wide one.
    Sink(SharedSink),
}

impl<E> Clone for FlowOption<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Return(strategy) => Self::Return(*strategy),
            Self::Log(strategy) => Self::Log(*strategy),
            Self::Wrap(wrapper) => Self::Wrap(wrapper.clone()),
            Self::Deferred(setup) => Self::Deferred(setup.clone()),
            Self::Sink(sink) => Self::Sink(Arc::clone(sink)),
        }
    }
}

impl<E> fmt::Debug for FlowOption<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Return(strategy) => f.debug_tuple("Return").field(strategy).finish(),
            Self::Log(strategy) => f.debug_tuple("Log").field(strategy).finish(),
            Self::Wrap(wrapper) => f.debug_tuple("Wrap").field(wrapper).finish(),
            Self::Deferred(setup) => f.debug_tuple("Deferred").field(setup).finish(),
            Self::Sink(_) => f.write_str("Sink(..)"),
        }
    }
}

impl<E> From<ReturnStrategy> for FlowOption<E> {
    #[inline]
    fn from(strategy: ReturnStrategy) -> Self {
        Self::Return(strategy)
    }
}

impl<E> From<LogStrategy> for FlowOption<E> {
    #[inline]
    fn from(strategy: LogStrategy) -> Self {
        Self::Log(strategy)
    }
}

impl<E> From<Wrapper<E>> for FlowOption<E> {
    #[inline]
    fn from(wrapper: Wrapper<E>) -> Self {
        Self::Wrap(wrapper)
    }
}

impl<E> From<DeferredSetup<E>> for FlowOption<E> {
    #[inline]
    fn from(setup: DeferredSetup<E>) -> Self {
        Self::Deferred(setup)
    }
}

impl<E> From<SharedSink> for FlowOption<E> {
    #[inline]
    fn from(sink: SharedSink) -> Self {
        Self::Sink(sink)
    }
}

/// Configuration rejected when it is bound to a call path that cannot honour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The return strategy could displace an error the caller already owns.
    UnsupportedReturnStrategy { strategy: ReturnStrategy, call_path: &'static str },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedReturnStrategy { strategy, call_path } => {
                write!(f, "'{}' return strategy is not supported by {}", strategy, call_path)
            },
        }
    }
}

impl core::error::Error for ConfigError {}

/// Immutable template describing how a frame disposes of its errors.
///
/// The default is the ambient configuration: [`ReturnStrategy::First`],
/// [`LogStrategy::IfSuppressed`], no wrapper and the process-wide sink.
pub struct FlowConfig<E> {
    pub(crate) settings: Settings<E>,
    pub(crate) deferred: Vec<DeferredSetup<E>>,
}

impl<E> FlowConfig<E> {
    /// Returns the ambient configuration.
    #[inline]
    pub fn new() -> Self {
        Self { settings: Settings::default(), deferred: Vec::new() }
    }

    /// Builds a configuration by applying `options` in order to the defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_flow::{FlowConfig, FlowOption, LogStrategy, ReturnStrategy};
    ///
    /// let config = FlowConfig::<String>::from_options([
    ///     FlowOption::from(ReturnStrategy::Last),
    ///     FlowOption::from(LogStrategy::Never),
    /// ]);
    /// assert_eq!(config.return_strategy(), ReturnStrategy::Last);
    /// ```
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = FlowOption<E>>,
    {
        options.into_iter().fold(Self::new(), Self::apply)
    }

    /// Starts a fluent builder from the defaults.
    #[inline]
    pub fn builder() -> FlowConfigBuilder<E> {
        FlowConfigBuilder::new()
    }

    /// Returns a copy with `option` applied; `self` is left unchanged.
    #[inline]
    pub fn with<O>(&self, option: O) -> Self
    where
        O: Into<FlowOption<E>>,
    {
        self.clone().apply(option.into())
    }

    pub(crate) fn apply(mut self, option: FlowOption<E>) -> Self {
        match option {
            FlowOption::Return(strategy) => self.settings.return_strategy = strategy,
            FlowOption::Log(strategy) => self.settings.log_strategy = strategy,
            FlowOption::Wrap(wrapper) => self.settings.wrap(wrapper),
            FlowOption::Deferred(setup) => self.deferred.push(setup),
            FlowOption::Sink(sink) => self.settings.sink = Some(sink),
        }
        self
    }

    /// Configured return strategy, before deferred setup runs.
    #[inline]
    pub fn return_strategy(&self) -> ReturnStrategy {
        self.settings.return_strategy
    }

    /// Configured log strategy, before deferred setup runs.
    #[inline]
    pub fn log_strategy(&self) -> LogStrategy {
        self.settings.log_strategy
    }

    /// Number of deferred setup actions.
    #[inline]
    pub fn deferred_setup_len(&self) -> usize {
        self.deferred.len()
    }

    /// Settings with every deferred setup action applied, on a fresh copy.
    pub fn resolve(&self) -> Settings<E> {
        let mut settings = self.settings.clone();
        for setup in &self.deferred {
            setup.run(&mut settings);
        }
        settings
    }

    /// Starts a handler for one call frame.
    #[inline]
    pub fn begin(&self) -> Handler<E> {
        Handler::new(self)
    }

    /// Binds this configuration to the assign-on-close call path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedReturnStrategy`] for
    /// [`ReturnStrategy::Last`], which would replace an error the caller has
    /// already stored.
    pub fn closer(&self) -> Result<Closer<E>, ConfigError> {
        let strategy = self.settings.return_strategy;
        if strategy.may_suppress_first() {
            return Err(ConfigError::UnsupportedReturnStrategy {
                strategy,
                call_path: Closer::<E>::CALL_PATH,
            });
        }
        Ok(Closer::new(self.clone()))
    }
}

impl<E> Default for FlowConfig<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for FlowConfig<E> {
    fn clone(&self) -> Self {
        Self { settings: self.settings.clone(), deferred: self.deferred.clone() }
    }
}

impl<E> fmt::Debug for FlowConfig<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowConfig")
            .field("settings", &self.settings)
            .field("deferred", &self.deferred.len())
            .finish()
    }
}
