use crate::types::alloc_type::{Cow, String};
use core::fmt::{self, Display};

/// Error synthesized by condition checks such as [`fail_if`] and
/// [`fail_if!`](crate::fail_if).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionError {
    message: Cow<'static, str>,
}

impl ConditionError {
    /// Creates a condition error with the given message.
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self { message: message.into() }
    }

    /// Returns the message describing the failed condition.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ConditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for ConditionError {}

impl From<ConditionError> for String {
    #[inline]
    fn from(error: ConditionError) -> Self {
        error.message.into_owned()
    }
}

/// Fails with a [`ConditionError`] when `condition` holds.
///
/// The polarity matches "bail out if": a `true` condition is the failure.
///
/// # Examples
///
/// ```
/// use error_flow::types::fail_if;
///
/// assert!(fail_if(false, "never raised").is_ok());
///
/// let err = fail_if(3 > 2, "limit exceeded").unwrap_err();
/// assert_eq!(err.message(), "limit exceeded");
/// ```
#[inline]
pub fn fail_if<M>(condition: bool, message: M) -> Result<(), ConditionError>
where
    M: Into<Cow<'static, str>>,
{
    if condition {
        Err(ConditionError::new(message))
    } else {
        Ok(())
    }
}
