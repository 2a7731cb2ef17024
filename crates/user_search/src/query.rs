//! Search parameters and query-language construction.
//!
//! The directory API accepts a single `q` parameter made of a free-text term
//! followed by `qualifier:value` clauses. [`QueryBuilder`] renders
//! [`SearchParams`] into that string by running an ordered list of clause
//! builders, so identical parameters always produce the identical string.

use crate::errors::Error;

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;

/// Structured parameters for a user search.
///
/// The primary term is validated on construction, so a `SearchParams` value
/// always holds a non-blank, trimmed term.
///
/// # Examples
///
/// ```rust
/// use user_search::SearchParams;
///
/// let params = SearchParams::new("linus")
///     .unwrap()
///     .with_location("Portland")
///     .with_min_repos(10)
///     .with_enrichment(true);
///
/// assert_eq!(params.primary_term(), "linus");
/// assert_eq!(params.page(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub(crate) primary_term: String,
    pub(crate) location: Option<String>,
    pub(crate) min_repos: Option<u32>,
    pub(crate) page: u32,
    pub(crate) enrich: bool,
}

impl SearchParams {
    /// Creates parameters for the first page of results, without enrichment.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidQuery` if `primary_term` is empty after trimming.
    pub fn new(primary_term: impl AsRef<str>) -> Result<Self, Error> {
        let primary_term = primary_term.as_ref().trim();
        if primary_term.is_empty() {
            return Err(Error::InvalidQuery(
                "a primary search term is required".to_string(),
            ));
        }

        Ok(Self {
            primary_term: primary_term.to_string(),
            location: None,
            min_repos: None,
            page: 1,
            enrich: false,
        })
    }

    /// Restricts results to users whose profile location matches `location`.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Restricts results to users with at least `count` public repositories.
    pub fn with_min_repos(mut self, count: u32) -> Self {
        self.min_repos = Some(count);
        self
    }

    /// Selects the 1-based result page.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidQuery` if `page` is zero.
    pub fn with_page(mut self, page: u32) -> Result<Self, Error> {
        if page == 0 {
            return Err(Error::InvalidQuery("page numbers start at 1".to_string()));
        }
        self.page = page;
        Ok(self)
    }

    /// Requests that each result be enriched with its detail record.
    pub fn with_enrichment(mut self, enrich: bool) -> Self {
        self.enrich = enrich;
        self
    }

    /// Returns the same parameters advanced by one page.
    pub fn next_page(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self.clone()
        }
    }

    pub fn primary_term(&self) -> &str {
        &self.primary_term
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn min_repos(&self) -> Option<u32> {
        self.min_repos
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn enrich(&self) -> bool {
        self.enrich
    }
}

/// A pure function producing one optional qualifier clause.
type ClauseBuilder = fn(&SearchParams) -> Option<String>;

/// Clause builders in the order their output is appended to the query.
const CLAUSES: &[ClauseBuilder] = &[location_clause, min_repos_clause];

/// Renders [`SearchParams`] into the directory API's query language.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryBuilder;

impl QueryBuilder {
    /// Builds the `q` string for `params`.
    ///
    /// The trimmed primary term comes first, followed by `location:"<value>"`
    /// and `repos:>=<n>` when those filters are set.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidQuery` if the primary term is blank. Values
    /// produced by [`SearchParams::new`] never are, but the check is kept so
    /// the builder alone upholds the invariant.
    pub fn build(&self, params: &SearchParams) -> Result<String, Error> {
        let term = params.primary_term.trim();
        if term.is_empty() {
            return Err(Error::InvalidQuery(
                "a primary search term is required".to_string(),
            ));
        }

        let query = CLAUSES
            .iter()
            .filter_map(|clause| clause(params))
            .fold(term.to_string(), |mut query, clause| {
                query.push(' ');
                query.push_str(&clause);
                query
            });

        Ok(query)
    }
}

/// `location:"<value>"` when a non-blank location filter is set.
///
/// The value is quoted verbatim and not otherwise escaped.
fn location_clause(params: &SearchParams) -> Option<String> {
    params
        .location
        .as_deref()
        .map(str::trim)
        .filter(|location| !location.is_empty())
        .map(|location| format!("location:\"{location}\""))
}

/// `repos:>=<n>` when a positive repository minimum is set.
fn min_repos_clause(params: &SearchParams) -> Option<String> {
    params
        .min_repos
        .filter(|count| *count > 0)
        .map(|count| format!("repos:>={count}"))
}
