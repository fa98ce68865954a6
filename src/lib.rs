//! Deferred multi-error disposition.
//!
//! A call frame often fails more than once: the main computation errors, then a
//! `close` on the way out errors too. `error-flow` collects every one of those
//! outcomes in a per-frame [`Handler`], returns exactly one (chosen by a
//! [`ReturnStrategy`] and transformed by an optional [`Wrapper`]) and sends the
//! rest to a logging sink according to a [`LogStrategy`].
//!
//! # Examples
//!
//! ## Cleanup errors do not hide the real failure
//!
//! ```
//! use error_flow::{run, FlowConfig, LogStrategy};
//! use error_flow::sink::MemorySink;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let config = FlowConfig::<String>::builder()
//!     .log_strategy(LogStrategy::IfSuppressed)
//!     .sink(sink.clone())
//!     .build();
//!
//! let result: Result<(), String> = run(&config, |frame| {
//!     frame.defer(|| Err("close failed".to_string()));
//!     Err("write failed".to_string())
//! });
//!
//! assert_eq!(result, Err("write failed".to_string()));
//! assert_eq!(sink.rendered(), vec!["close failed".to_string()]);
//! ```
//!
//! ## Annotating the returned error
//!
//! ```
//! use error_flow::{run, FlowConfig};
//!
//! let config = FlowConfig::<String>::builder().wrap(|e| format!("ctx: {e}")).build();
//! let result: Result<(), String> = run(&config, |_| Err("errA".to_string()));
//!
//! assert_eq!(result, Err("ctx: errA".to_string()));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Flow configuration, options and builder
pub mod config;
/// Per-frame handler, scoped frames and assign-on-close
pub mod handler;
/// Shorthand macros for frame bodies
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Logging sinks and log messages
pub mod sink;
/// Return and log strategies
pub mod strategy;
/// Extension traits for delivering outcomes
pub mod traits;
/// Error outcomes and condition errors
pub mod types;
/// Transforms applied to the returned error
pub mod wrapper;

pub use config::{ConfigError, DeferredSetup, FlowConfig, FlowConfigBuilder, FlowOption, Settings};
pub use handler::{flow, run, Closer, Frame, Handler, HandlerState};
pub use strategy::{Combination, LogStrategy, ReturnStrategy, Suppressed};
pub use traits::DeliverExt;
pub use types::{fail_if, ConditionError, ErrorOutcome};
pub use wrapper::Wrapper;
