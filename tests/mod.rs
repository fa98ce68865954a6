pub mod config;
pub mod macros;
pub mod strategy;
pub mod types;

pub mod common;
