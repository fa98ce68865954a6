use super::ParseStrategyError;
use core::fmt::{self, Display};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decides which delivered errors are sent to the logging sink.
///
/// Logging is independent of which error is finally returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LogStrategy {
    /// Nothing is ever logged.
    Never,
    /// An error is logged when a combine step suppresses it.
    #[default]
    IfSuppressed,
    /// Every delivered error is logged once, on arrival.
    Always,
}

impl LogStrategy {
    /// Whether each error is logged as it arrives.
    #[inline]
    pub fn logs_on_arrival(self) -> bool {
        matches!(self, Self::Always)
    }

    /// Whether the loser of a combine step is logged.
    #[inline]
    pub fn logs_suppressed(self) -> bool {
        matches!(self, Self::IfSuppressed)
    }

    /// Kebab-case name used by `Display`, `FromStr` and serde.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::IfSuppressed => "if-suppressed",
            Self::Always => "always",
        }
    }
}

impl Display for LogStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "never" => Ok(Self::Never),
            "if-suppressed" => Ok(Self::IfSuppressed),
            "always" => Ok(Self::Always),
            other => Err(ParseStrategyError::new(other, "never, if-suppressed, always")),
        }
    }
}
