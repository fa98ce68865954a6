//! Extension traits for feeding outcomes into handlers.
//!
//! - [`DeliverExt`]: record a `Result`'s error and keep going.

pub mod deliver;

pub use deliver::DeliverExt;
