//! Detail-stage lookups.
//!
//! [`ProfileFetcher`] retrieves one user's full record from
//! `GET /users/{login}`. A missing user is an expected outcome and is
//! reported as `Ok(None)`.

use async_trait::async_trait;
use http::StatusCode;
use octocrab::Octocrab;
use tracing::{debug, info, instrument};
use url::Url;

use crate::{
    api::{self, classify_failure},
    errors::Error,
    models::UserProfile,
};

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;

/// Source of detail records for single users.
///
/// Implemented by [`ProfileFetcher`]; enrichment depends only on this trait.
#[async_trait]
pub trait ProfileLookup: Send + Sync {
    /// Fetches the detail record for `login`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(profile))` when the user exists
    /// - `Ok(None)` when the directory API reports the user as absent
    ///
    /// # Errors
    ///
    /// - `Error::RateLimited` when the API is throttling requests
    /// - `Error::Transport` for any other failure
    async fn fetch(&self, login: &str) -> Result<Option<UserProfile>, Error>;
}

/// Fetches user detail records from the directory API.
#[derive(Debug, Clone)]
pub struct ProfileFetcher {
    client: Octocrab,
}

impl ProfileFetcher {
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileLookup for ProfileFetcher {
    #[instrument(skip(self), fields(login = %login))]
    async fn fetch(&self, login: &str) -> Result<Option<UserProfile>, Error> {
        let response = api::get(&self.client, profile_path(login)?).await?;

        if response.status == StatusCode::NOT_FOUND {
            info!(login = login, "User not found in directory");
            return Ok(None);
        }
        if !response.status.is_success() {
            return Err(classify_failure(&response));
        }

        let profile: UserProfile = response.json()?;
        debug!(login = login, "Retrieved user profile");
        Ok(Some(profile))
    }
}

/// Builds `/users/{login}` with `login` encoded as a single path segment.
fn profile_path(login: &str) -> Result<String, Error> {
    let mut url = Url::parse("http://localhost/users/")
        .map_err(|e| Error::transport(None, format!("failed to build profile path: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| Error::transport(None, "failed to build profile path"))?
        .pop_if_empty()
        .push(login);
    Ok(url.path().to_string())
}
