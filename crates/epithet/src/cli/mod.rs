//! Command implementations.

pub mod analyze;
pub mod config;
pub mod learn;
pub mod store;
pub mod vocab;
