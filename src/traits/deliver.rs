//! Extension trait for handing `Result`s to a handler without leaving the frame.
//!
//! # Examples
//!
//! ```
//! use error_flow::traits::DeliverExt;
//! use error_flow::FlowConfig;
//!
//! let config = FlowConfig::<String>::default();
//! let mut handler = config.begin();
//!
//! let parsed = "7".parse::<u8>().map_err(|e| e.to_string()).deliver_to(&mut handler);
//! let missing = Err::<u8, _>("no such key".to_string()).deliver_to(&mut handler);
//!
//! assert_eq!(parsed, Some(7));
//! assert_eq!(missing, None);
//! assert_eq!(handler.finalize(), Err("no such key".to_string()));
//! ```
use crate::handler::{Frame, Handler};
use core::fmt::Display;

/// Delivers the error side of a `Result` and passes the value through.
///
/// This is the non-exiting counterpart of `?` inside a frame body: the error is
/// recorded and execution continues with `None`.
pub trait DeliverExt<T, E: Display> {
    /// Delivers to an explicit handler.
    fn deliver_to(self, handler: &mut Handler<E>) -> Option<T>;

    /// Delivers to the handler of a running frame.
    fn deliver_in(self, frame: &mut Frame<'_, E>) -> Option<T>;
}

impl<T, E: Display> DeliverExt<T, E> for Result<T, E> {
    #[inline]
    #[track_caller]
    fn deliver_to(self, handler: &mut Handler<E>) -> Option<T> {
        handler.deliver_value(self)
    }

    #[inline]
    #[track_caller]
    fn deliver_in(self, frame: &mut Frame<'_, E>) -> Option<T> {
        frame.deliver_value(self)
    }
}
