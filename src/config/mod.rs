//! Process configuration: bind address, database location, request limits.

pub mod loader;
pub mod types;

pub use types::*;
