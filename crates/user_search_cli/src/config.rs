//! Configuration loading for the user search CLI.
//!
//! Settings are read from a TOML file. The `[client]` table maps directly
//! onto [`ClientConfig`]; a token found in the environment takes precedence
//! over one in the file.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, info};
use user_search::{config::TOKEN_ENV_VAR, ClientConfig};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "user-search.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Top-level CLI configuration.
///
/// # Example TOML Configuration
///
/// ```toml
/// [client]
/// page_size = 20
/// enrich_concurrency = 4
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Settings passed to the search client
    #[serde(default)]
    pub client: ClientConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read, or
    /// does not contain valid configuration.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Resolves the configuration used for a run.
    ///
    /// An explicit path must exist. Without one, the default file in the
    /// current directory is used if present, otherwise built-in defaults.
    /// The environment token is applied last.
    pub fn resolve(path: Option<&str>) -> Result<Self, Error> {
        let mut config = match path {
            Some(p) => Self::load(Path::new(p))?,
            None => {
                let default_path = get_config_path(None);
                if default_path.exists() {
                    Self::load(&default_path)?
                } else {
                    info!("No configuration file found, using defaults");
                    Self::default()
                }
            }
        };

        if let Some(token) = env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.trim().is_empty()) {
            config.client = config.client.with_token(token);
        }

        Ok(config)
    }
}

/// Returns the configuration file path to use.
pub fn get_config_path(path: Option<&str>) -> PathBuf {
    match path {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(DEFAULT_CONFIG_FILENAME),
    }
}
