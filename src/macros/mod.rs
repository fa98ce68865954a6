//! Shorthand macros for frame bodies.
//!
//! - [`macro@crate::fail_if`] - returns early with a
//!   [`ConditionError`](crate::types::ConditionError) converted into the
//!   function's error type when a condition holds.
//! - [`macro@crate::flow`] - runs a closure as one call frame, under the ambient or a given
//!   [`FlowConfig`](crate::FlowConfig).
//!
//! # Examples
//!
//! ```
//! use error_flow::{fail_if, flow};
//!
//! fn reserve(requested: u32, available: u32) -> Result<u32, String> {
//!     flow!(|frame| {
//!         frame.defer(|| Ok(()));
//!         fail_if!(requested > available, "requested {} of {}", requested, available);
//!         Ok(available - requested)
//!     })
//! }
//!
//! assert_eq!(reserve(2, 5), Ok(3));
//! assert_eq!(reserve(9, 5), Err("requested 9 of 5".to_string()));
//! ```

/// Returns early with `Err(ConditionError.into())` when the condition holds.
///
/// The message accepts the same arguments as `format!`. The enclosing function
/// (or closure) must return a `Result` whose error implements
/// `From<ConditionError>`.
///
/// # Examples
///
/// ```
/// use error_flow::fail_if;
///
/// fn open(path: &str) -> Result<(), String> {
///     fail_if!(path.is_empty(), "empty path");
///     Ok(())
/// }
///
/// assert_eq!(open(""), Err("empty path".to_string()));
/// ```
#[macro_export]
macro_rules! fail_if {
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::types::ConditionError::new(format!($($arg)+)),
            ));
        }
    };
}

/// Runs a closure as one call frame.
///
/// - `flow!(|frame| body)` uses [`FlowConfig::default`](crate::FlowConfig).
/// - `flow!(config, |frame| body)` uses the given configuration.
///
/// # Examples
///
/// ```
/// use error_flow::{flow, FlowConfig, ReturnStrategy};
///
/// let config = FlowConfig::<String>::default().with(ReturnStrategy::Last);
/// let result: Result<(), String> = flow!(config, |frame| {
///     frame.defer(|| Err("close".to_string()));
///     Err("write".to_string())
/// });
///
/// assert_eq!(result, Err("close".to_string()));
/// ```
#[macro_export]
macro_rules! flow {
    (|$frame:ident| $body:expr $(,)?) => {
        $crate::handler::run(&$crate::FlowConfig::default(), |$frame| $body)
    };
    ($config:expr, |$frame:ident| $body:expr $(,)?) => {
        $crate::handler::run(&$config, |$frame| $body)
    };
}
