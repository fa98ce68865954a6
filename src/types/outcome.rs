/// The success/failure signal handed to a [`Handler`](crate::handler::Handler).
///
/// An outcome carries no success payload: check operations pass values
/// through themselves and only the failure travels on to the handler.
///
/// # Examples
///
/// ```
/// use error_flow::types::ErrorOutcome;
///
/// let outcome = ErrorOutcome::from(Err::<(), _>("closed twice"));
/// assert!(outcome.is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorOutcome<E> {
    /// Nothing failed.
    #[default]
    Success,
    /// The operation failed with the given error.
    Failure(E),
}

impl<E> ErrorOutcome<E> {
    /// Returns `true` for [`ErrorOutcome::Success`].
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` for [`ErrorOutcome::Failure`].
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the carried error, if any.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Maps the carried error, leaving success untouched.
    #[inline]
    pub fn map_error<F, NewE>(self, f: F) -> ErrorOutcome<NewE>
    where
        F: FnOnce(E) -> NewE,
    {
        match self {
            Self::Success => ErrorOutcome::Success,
            Self::Failure(error) => ErrorOutcome::Failure(f(error)),
        }
    }
}

impl<E> From<Option<E>> for ErrorOutcome<E> {
    #[inline]
    fn from(error: Option<E>) -> Self {
        match error {
            None => Self::Success,
            Some(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for ErrorOutcome<E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(error) => Self::Failure(error),
        }
    }
}

impl<E> From<ErrorOutcome<E>> for Result<(), E> {
    #[inline]
    fn from(outcome: ErrorOutcome<E>) -> Self {
        match outcome {
            ErrorOutcome::Success => Ok(()),
            ErrorOutcome::Failure(error) => Err(error),
        }
    }
}
