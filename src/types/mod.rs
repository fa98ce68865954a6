//! Value types shared by the handler, configuration and sink layers.
//!
//! # Examples
//!
//! ```
//! use error_flow::types::ErrorOutcome;
//!
//! let ok: ErrorOutcome<&str> = Ok::<u8, &str>(1).into();
//! let failed: ErrorOutcome<&str> = Some("disk full").into();
//!
//! assert!(ok.is_success());
//! assert_eq!(failed.into_error(), Some("disk full"));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod condition;
pub mod outcome;

pub use condition::*;
pub use outcome::*;

use alloc_type::{Cow, String};

/// SmallVec-backed tag list attached to every [`LogMessage`](crate::sink::LogMessage).
///
/// Handler emissions always carry two tags, so they stay inline.
pub type TagVec = SmallVec<[Cow<'static, str>; 2]>;

/// SmallVec-backed argument list for [`LogMessage`](crate::sink::LogMessage) templates.
pub type ArgVec = SmallVec<[String; 1]>;
