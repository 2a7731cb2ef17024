//! Crate for searching a remote user directory and enriching the results.
//!
//! A search runs in two stages. The search stage resolves a page of
//! lightweight [`UserSummary`] records for a query built from
//! [`SearchParams`]. The optional detail stage then fetches each user's full
//! [`UserProfile`] concurrently and merges it into the corresponding hit.
//! Individual detail failures never fail the search; the hit is returned
//! unenriched instead.
//!
//! [`SearchClient`] is the entry point that ties the stages together.

mod api;

pub mod client;
pub use client::{create_octocrab, SearchClient};

pub mod config;
pub use config::ClientConfig;

pub mod enrich;
pub use enrich::DetailEnricher;

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{EnrichmentReport, SearchResult, UserProfile, UserRecord, UserSummary};

pub mod pagination;

pub mod profile;
pub use profile::{ProfileFetcher, ProfileLookup};

pub mod query;
pub use query::{QueryBuilder, SearchParams};

pub mod search;
pub use search::SearchExecutor;
