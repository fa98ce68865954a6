use super::ParseStrategyError;
use core::fmt::{self, Display};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decides which of two competing errors is returned to the caller.
///
/// Errors are never compared or deduplicated: two identical errors delivered
/// twice are combined like any other pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ReturnStrategy {
    /// Keep the earliest error; every later one is suppressed.
    #[default]
    First,
    /// Keep the most recent error; the one held so far becomes suppressed.
    Last,
}

/// The error that lost a [`ReturnStrategy::combine`] step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suppressed<E> {
    /// The newly delivered error lost.
    Incoming(E),
    /// The previously held error lost, retroactively.
    Current(E),
}

impl<E> Suppressed<E> {
    /// Borrows the suppressed error.
    #[inline]
    pub fn error(&self) -> &E {
        match self {
            Self::Incoming(error) | Self::Current(error) => error,
        }
    }

    /// Consumes the marker, returning the suppressed error.
    #[inline]
    pub fn into_error(self) -> E {
        match self {
            Self::Incoming(error) | Self::Current(error) => error,
        }
    }

    /// Returns `true` when the newly delivered error was the one suppressed.
    #[inline]
    pub fn is_incoming(&self) -> bool {
        matches!(self, Self::Incoming(_))
    }
}

/// Result of folding an incoming error into the currently held one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Combination<E> {
    /// The winner, which becomes the new held error.
    pub result: E,
    /// The loser, if there was anything to compete with.
    pub suppressed: Option<Suppressed<E>>,
}

impl<E> Combination<E> {
    /// Returns `true` when this step suppressed an error.
    #[inline]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed.is_some()
    }
}

impl ReturnStrategy {
    /// Folds `incoming` into `current`.
    ///
    /// With no current error the incoming one wins unsuppressed. Otherwise
    /// [`First`](Self::First) keeps `current` and suppresses `incoming`, and
    /// [`Last`](Self::Last) keeps `incoming` and suppresses `current`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_flow::strategy::{ReturnStrategy, Suppressed};
    ///
    /// let step = ReturnStrategy::Last.combine(Some("read failed"), "close failed");
    /// assert_eq!(step.result, "close failed");
    /// assert_eq!(step.suppressed, Some(Suppressed::Current("read failed")));
    ///
    /// let step = ReturnStrategy::First.combine(None, "read failed");
    /// assert_eq!(step.result, "read failed");
    /// assert!(!step.is_suppressed());
    /// ```
    #[inline]
    pub fn combine<E>(self, current: Option<E>, incoming: E) -> Combination<E> {
        match (self, current) {
            (_, None) => Combination { result: incoming, suppressed: None },
            (Self::First, Some(current)) => {
                Combination { result: current, suppressed: Some(Suppressed::Incoming(incoming)) }
            },
            (Self::Last, Some(current)) => {
                Combination { result: incoming, suppressed: Some(Suppressed::Current(current)) }
            },
        }
    }

    /// Returns `true` if the strategy can displace an error that was already
    /// returned to a caller-owned slot.
    #[inline]
    pub fn may_suppress_first(self) -> bool {
        matches!(self, Self::Last)
    }

    /// Kebab-case name used by `Display`, `FromStr` and serde.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Last => "last",
        }
    }
}

impl Display for ReturnStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReturnStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            other => Err(ParseStrategyError::new(other, "first, last")),
        }
    }
}
