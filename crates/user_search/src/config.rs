//! Client configuration.
//!
//! Everything the client needs is passed in explicitly through
//! [`ClientConfig`]; nothing is read from process-wide state after
//! construction.

use std::{env, num::NonZeroUsize};

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

use crate::errors::Error;

/// Default base URI of the directory API.
pub const DEFAULT_BASE_URI: &str = "https://api.github.com";

/// Default number of results requested per page.
pub const DEFAULT_PAGE_SIZE: u8 = 10;

/// Largest page size the directory API accepts.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Environment variable holding the credential token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Environment variable overriding the base URI.
pub const BASE_URI_ENV_VAR: &str = "GITHUB_API_URL";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Configuration for a [`SearchClient`](crate::SearchClient).
///
/// # Example TOML Configuration
///
/// ```toml
/// base_uri = "https://api.github.com"
/// credential_token = "ghp_..."
/// page_size = 10
/// enrich_concurrency = 4
/// ```
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URI of the directory API
    pub base_uri: String,

    /// Token attached as bearer authorization when set
    #[serde(deserialize_with = "deserialize_token")]
    pub credential_token: Option<SecretString>,

    /// Results requested per search page
    pub page_size: u8,

    /// Maximum detail fetches in flight at once; unbounded when `None`
    pub enrich_concurrency: Option<NonZeroUsize>,
}

impl ClientConfig {
    /// Builds a configuration from defaults and the process environment.
    ///
    /// `GITHUB_TOKEN` supplies the credential when it is set and not blank,
    /// and `GITHUB_API_URL` overrides the base URI.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(token) = env::var(TOKEN_ENV_VAR) {
            config = config.with_token(token);
        }
        if let Ok(uri) = env::var(BASE_URI_ENV_VAR) {
            if !uri.trim().is_empty() {
                config.base_uri = uri;
            }
        }
        config
    }

    /// Sets the credential token. Blank tokens are ignored.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.credential_token = if token.trim().is_empty() {
            None
        } else {
            Some(SecretString::from(token))
        };
        self
    }

    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u8) -> Self {
        self.page_size = page_size;
        self
    }

    /// Caps the number of concurrent detail fetches. Zero means unbounded.
    pub fn with_enrich_concurrency(mut self, limit: usize) -> Self {
        self.enrich_concurrency = NonZeroUsize::new(limit);
        self
    }

    /// Checks that the configuration can be used to build a client.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the page size is outside
    /// `1..=100` or the base URI is blank.
    pub fn validate(&self) -> Result<(), Error> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(Error::Configuration(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        if self.base_uri.trim().is_empty() {
            return Err(Error::Configuration(
                "base URI must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_BASE_URI.to_string(),
            credential_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            enrich_concurrency: None,
        }
    }
}

fn deserialize_token<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let token: Option<String> = Option::deserialize(deserializer)?;
    Ok(token
        .filter(|t| !t.trim().is_empty())
        .map(SecretString::from))
}
