//! Transforms applied to the single error a handler finally returns.
//!
//! A [`Wrapper`] runs exactly once per finalized handler, and only when there is
//! an error to return. Errors that are merely logged are never wrapped.
//!
//! # Examples
//!
//! ```
//! use error_flow::Wrapper;
//!
//! let wrapper = Wrapper::map(|e: String| format!("ctx: {e}"));
//! assert_eq!(wrapper.apply("errA".to_string()), "ctx: errA");
//! ```
use crate::types::alloc_type::Arc;
use core::fmt;

type WrapFn<E> = dyn Fn(E) -> Option<E> + Send + Sync;

/// Shared error transform. Cloning is cheap.
pub struct Wrapper<E> {
    f: Arc<WrapFn<E>>,
}

impl<E: 'static> Wrapper<E> {
    /// Creates a wrapper from a total transform.
    #[inline]
    pub fn map<F>(f: F) -> Self
    where
        F: Fn(E) -> E + Send + Sync + 'static,
    {
        Self { f: Arc::new(move |error| Some(f(error))) }
    }

    /// Creates a wrapper that may drop the error.
    ///
    /// Dropping the error is a contract violation: [`apply`](Self::apply)
    /// panics instead of letting a failure turn into a success.
    #[inline]
    pub fn try_map<F>(f: F) -> Self
    where
        F: Fn(E) -> Option<E> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Chains `next` after `self`.
    #[inline]
    pub fn then(self, next: Wrapper<E>) -> Self {
        Self {
            f: Arc::new(move |error| {
                let error = (self.f)(error)?;
                (next.f)(error)
            }),
        }
    }
}

impl<E> Wrapper<E> {
    /// Applies the transform.
    ///
    /// # Panics
    ///
    /// Panics if the transform returned no error.
    #[inline]
    #[track_caller]
    pub fn apply(&self, error: E) -> E {
        match (self.f)(error) {
            Some(wrapped) => wrapped,
            None => panic!("error wrapper returned no error"),
        }
    }
}

impl<E> Clone for Wrapper<E> {
    fn clone(&self) -> Self {
        Self { f: Arc::clone(&self.f) }
    }
}

impl<E> fmt::Debug for Wrapper<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapper").finish_non_exhaustive()
    }
}
