//! The public entry point combining query building, search and enrichment.

use std::sync::Arc;

use octocrab::Octocrab;
use secrecy::ExposeSecret;
use tracing::{debug, error, info, instrument};

use crate::{
    config::ClientConfig,
    enrich::DetailEnricher,
    errors::Error,
    models::{SearchResult, UserProfile},
    profile::{ProfileFetcher, ProfileLookup},
    query::{QueryBuilder, SearchParams},
    search::SearchExecutor,
};

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;

/// A client for searching the user directory.
///
/// Each call is independent: no state is shared between calls beyond the
/// underlying HTTP client and the configured credential, so concurrent calls
/// need no coordination and a cancelled call cannot affect another.
///
/// # Example
///
/// ```rust,no_run
/// use user_search::{ClientConfig, SearchClient, SearchParams};
///
/// #[tokio::main]
/// async fn main() -> Result<(), user_search::Error> {
///     let client = SearchClient::new(ClientConfig::from_env())?;
///
///     let params = SearchParams::new("torvalds")?.with_enrichment(true);
///     let result = client.search(&params).await?;
///
///     for user in &result.items {
///         println!("{} ({:?})", user.login, user.name);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SearchClient {
    query_builder: QueryBuilder,
    executor: SearchExecutor,
    profiles: Arc<dyn ProfileLookup>,
    enricher: DetailEnricher,
}

impl SearchClient {
    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let octocrab = create_octocrab(&config)?;
        Self::from_parts(octocrab, &config)
    }

    /// Creates a client around an existing `Octocrab` instance.
    ///
    /// The base URI and credential already configured on `octocrab` are
    /// used; only the paging and concurrency settings of `config` apply.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if `config` fails validation.
    pub fn from_parts(octocrab: Octocrab, config: &ClientConfig) -> Result<Self, Error> {
        config.validate()?;

        let profiles: Arc<dyn ProfileLookup> = Arc::new(ProfileFetcher::new(octocrab.clone()));
        Ok(Self {
            query_builder: QueryBuilder,
            executor: SearchExecutor::new(octocrab).with_page_size(config.page_size),
            enricher: DetailEnricher::new(profiles.clone())
                .with_concurrency(config.enrich_concurrency),
            profiles,
        })
    }

    /// Searches the directory and, if requested, enriches every hit.
    ///
    /// The query is validated before any request is sent. When enrichment
    /// is requested the returned items are always the enriched ones; hits
    /// whose lookup failed are returned as plain summaries and counted in
    /// `SearchResult::enrichment`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidQuery` if the parameters cannot form a query
    /// - `Error::RateLimited` if the search request was throttled
    /// - `Error::Transport` if the search request failed
    ///
    /// Enrichment failures never surface here.
    #[instrument(skip(self, params), fields(term = %params.primary_term(), page = params.page(), enrich = params.enrich()))]
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResult, Error> {
        let query = self.query_builder.build(params)?;
        debug!(query = %query, "Built search query");

        let mut result = self
            .executor
            .execute_page(&query, params.page())
            .await
            .map_err(|e| {
                error!(query = %query, error = %e, "Search request failed");
                e
            })?;

        if params.enrich() && !result.items.is_empty() {
            let items = std::mem::take(&mut result.items);
            let (items, report) = self.enricher.enrich(items).await;
            result.items = items;
            result.enrichment = Some(report);
        }

        info!(
            query = %query,
            item_count = result.items.len(),
            total_count = result.total_count,
            has_more = result.has_more,
            "Search request served"
        );
        Ok(result)
    }

    /// Looks up a single user's detail record by login.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if no such user exists.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidQuery` if `login` is blank
    /// - `Error::RateLimited` or `Error::Transport` if the request failed
    #[instrument(skip(self))]
    pub async fn lookup_user(&self, login: &str) -> Result<Option<UserProfile>, Error> {
        let login = login.trim();
        if login.is_empty() {
            return Err(Error::InvalidQuery("a login is required".to_string()));
        }
        self.profiles.fetch(login).await
    }
}

/// Builds the `Octocrab` instance used for all directory API calls.
///
/// The credential, when configured, is sent as a bearer token.
#[instrument(skip(config), fields(base_uri = %config.base_uri, authenticated = config.credential_token.is_some()))]
pub fn create_octocrab(config: &ClientConfig) -> Result<Octocrab, Error> {
    config.validate()?;

    let mut builder = Octocrab::builder()
        .base_uri(config.base_uri.as_str())
        .map_err(|e| {
            error!(base_uri = %config.base_uri, error = %e, "Invalid base URI");
            Error::Configuration(format!("invalid base URI '{}': {e}", config.base_uri))
        })?;

    if let Some(token) = &config.credential_token {
        builder = builder.personal_token(token.expose_secret().to_string());
    }

    builder.build().map_err(|e| {
        error!(error = %e, "Failed to build HTTP client");
        Error::Configuration(format!("failed to build HTTP client: {e}"))
    })
}
