//! User search CLI library exports for testing.

pub mod commands;
pub mod config;
pub mod errors;
