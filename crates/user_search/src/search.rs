//! Search-stage requests.
//!
//! [`SearchExecutor`] issues `GET /search/users`, decodes the result envelope
//! and decides whether another page exists.

use http::StatusCode;
use octocrab::Octocrab;
use tracing::{info, instrument, warn};
use url::form_urlencoded;

use crate::{
    api::{self, classify_failure},
    config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    errors::Error,
    models::{SearchEnvelope, SearchResult, UserRecord},
    pagination,
};

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;

/// Runs paginated user searches against the directory API.
#[derive(Debug, Clone)]
pub struct SearchExecutor {
    client: Octocrab,
    page_size: u8,
}

impl SearchExecutor {
    /// Creates an executor requesting the default page size.
    pub fn new(client: Octocrab) -> Self {
        Self {
            client,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Overrides the number of results requested per page.
    ///
    /// The size is clamped to `1..=100`.
    pub fn with_page_size(mut self, page_size: u8) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn page_size(&self) -> u8 {
        self.page_size
    }

    /// Fetches one page of results for an already built query string.
    ///
    /// `page_size` is clamped to `1..=100`; the clamped value is both sent
    /// and used for the continuation check.
    ///
    /// Items are returned unenriched and in the order the API ranked them.
    /// A 404 from the search endpoint yields an empty result rather than an
    /// error.
    ///
    /// # Errors
    ///
    /// - `Error::RateLimited` when the API is throttling requests
    /// - `Error::Transport` for any other failure, including an undecodable
    ///   envelope
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        query: &str,
        page: u32,
        page_size: u8,
    ) -> Result<SearchResult, Error> {
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        let params = form_urlencoded::Serializer::new(String::new())
            .append_pair("q", query)
            .append_pair("per_page", &page_size.to_string())
            .append_pair("page", &page.to_string())
            .finish();
        let response = api::get(&self.client, format!("/search/users?{params}")).await?;

        if response.status == StatusCode::NOT_FOUND {
            info!(query = query, page, "Search endpoint reported no results");
            return Ok(SearchResult::empty(page));
        }
        if !response.status.is_success() {
            return Err(classify_failure(&response));
        }

        let envelope: SearchEnvelope = response.json()?;
        if envelope.incomplete_results {
            warn!(query = query, page, "Directory API returned incomplete results");
        }

        let has_more = pagination::has_more(
            response.link_header(),
            page,
            page_size,
            envelope.total_count,
        );

        info!(
            query = query,
            page,
            total_count = envelope.total_count,
            item_count = envelope.items.len(),
            has_more,
            "Search completed"
        );

        Ok(SearchResult {
            items: envelope.items.into_iter().map(UserRecord::from).collect(),
            total_count: envelope.total_count,
            current_page: page,
            has_more,
            enrichment: None,
        })
    }

    /// Fetches one page using the executor's configured page size.
    pub async fn execute_page(&self, query: &str, page: u32) -> Result<SearchResult, Error> {
        self.execute(query, page, self.page_size).await
    }
}
