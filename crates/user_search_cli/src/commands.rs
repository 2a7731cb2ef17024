//! Command modules for the user search CLI.
//!
//! - `search_cmd`: paginated directory search with optional enrichment
//! - `user_cmd`: direct lookup of a single user by login

pub mod search_cmd;
pub mod user_cmd;
