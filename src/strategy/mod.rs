//! Policies deciding which error is returned and which ones are logged.
//!
//! - [`ReturnStrategy`]: folds two competing errors into a winner and marks the
//!   loser as suppressed.
//! - [`LogStrategy`]: decides which errors reach the logging sink.
//!
//! Both are plain `Copy` values, parse from kebab-case strings and, with the
//! `serde` feature, (de)serialize the same way so hosts can keep them in their
//! own configuration files.
//!
//! # Examples
//!
//! ```
//! use error_flow::strategy::{LogStrategy, ReturnStrategy};
//!
//! let returned: ReturnStrategy = "last".parse().unwrap();
//! let logged: LogStrategy = "if-suppressed".parse().unwrap();
//!
//! assert_eq!(returned, ReturnStrategy::Last);
//! assert_eq!(logged, LogStrategy::default());
//! ```
use crate::types::alloc_type::String;
use core::fmt::{self, Display};

pub mod log_strategy;
pub mod return_strategy;

pub use log_strategy::LogStrategy;
pub use return_strategy::{Combination, ReturnStrategy, Suppressed};

/// Error returned when a strategy name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    input: String,
    expected: &'static str,
}

impl ParseStrategyError {
    pub(crate) fn new(input: &str, expected: &'static str) -> Self {
        Self { input: input.into(), expected }
    }

    /// The rejected input.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown strategy '{}', expected one of: {}", self.input, self.expected)
    }
}

impl core::error::Error for ParseStrategyError {}
