//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_flow::prelude::*;
//!
//! fn copy() -> Result<(), String> {
//!     flow(|frame| {
//!         frame.defer(|| Ok(()));
//!         Ok(())
//!     })
//! }
//!
//! assert!(copy().is_ok());
//! ```

// Macros (and the functions sharing their names)
pub use crate::{fail_if, flow};

// Core types
pub use crate::config::{FlowConfig, FlowOption};
pub use crate::handler::{run, Frame, Handler};
pub use crate::strategy::{LogStrategy, ReturnStrategy};
pub use crate::wrapper::Wrapper;

// Traits
pub use crate::traits::DeliverExt;
