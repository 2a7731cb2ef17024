//! Detail-stage enrichment of search hits.
//!
//! Every hit gets one concurrent profile lookup. All lookups are allowed to
//! settle, then the outcomes are folded back onto the hits in their original
//! order. A failed or empty lookup leaves its hit untouched.

use std::{num::NonZeroUsize, sync::Arc};

use futures::stream::{self, StreamExt};
use tracing::{debug, instrument, warn};

use crate::{
    errors::Error,
    models::{EnrichmentReport, UserProfile, UserRecord},
    profile::ProfileLookup,
};

#[cfg(test)]
#[path = "enrich_tests.rs"]
mod tests;

/// Merges detail records into search hits.
#[derive(Clone)]
pub struct DetailEnricher {
    lookup: Arc<dyn ProfileLookup>,
    concurrency: Option<NonZeroUsize>,
}

impl DetailEnricher {
    /// Creates an enricher with no cap on concurrent lookups.
    pub fn new(lookup: Arc<dyn ProfileLookup>) -> Self {
        Self {
            lookup,
            concurrency: None,
        }
    }

    /// Caps the number of lookups in flight at once.
    pub fn with_concurrency(mut self, limit: Option<NonZeroUsize>) -> Self {
        self.concurrency = limit;
        self
    }

    /// Enriches `items`, returning them in the same order with a report.
    ///
    /// Never fails: a lookup error is logged and its item passes through
    /// unchanged. Dropping the returned future abandons any lookups still in
    /// flight.
    #[instrument(skip(self, items), fields(item_count = items.len()))]
    pub async fn enrich(&self, items: Vec<UserRecord>) -> (Vec<UserRecord>, EnrichmentReport) {
        let limit = self
            .concurrency
            .map(NonZeroUsize::get)
            .unwrap_or(items.len())
            .max(1);

        // `buffered` yields in input order regardless of completion order.
        let outcomes: Vec<Result<Option<UserProfile>, Error>> = stream::iter(items.iter())
            .map(|item| self.lookup.fetch(&item.login))
            .buffered(limit)
            .collect()
            .await;

        let mut report = EnrichmentReport::default();
        let enriched = items
            .into_iter()
            .zip(outcomes)
            .map(|(item, outcome)| match outcome {
                Ok(Some(profile)) => {
                    report.enriched += 1;
                    item.merge(profile)
                }
                Ok(None) => {
                    debug!(login = %item.login, "No profile available, keeping summary");
                    report.not_found += 1;
                    item
                }
                Err(e) => {
                    warn!(login = %item.login, error = %e, "Profile lookup failed, keeping summary");
                    report.failed += 1;
                    item
                }
            })
            .collect();

        if report.is_total_failure() {
            warn!(
                failed = report.failed,
                "Every profile lookup failed, returning unenriched results"
            );
        } else {
            debug!(
                enriched = report.enriched,
                not_found = report.not_found,
                failed = report.failed,
                "Enrichment completed"
            );
        }

        (enriched, report)
    }
}
